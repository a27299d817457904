use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use loghue::cli::{Cli, ColorMode};
use loghue::config::Config;
use loghue::parser::{LineKind, parse_line};
use loghue::{Entry, Handler, LoghueError, StyleMode};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when loghue exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "loghue", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => return report_uncaught(&e, cli.color),
    };

    let mode = StyleMode::resolve(config.color_mode, |k| std::env::var_os(k));
    let handler = Handler::with_mode(io::stdout(), mode).layout(config.layout);

    match run(&handler, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => report_uncaught(&e, config.color_mode),
    }
}

fn run(handler: &Handler<io::Stdout>, config: &Config) -> Result<(), LoghueError> {
    let mut reader = io::stdin().lock();
    let mut buf = Vec::with_capacity(512);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = trim_line_ending(&buf);

        // Undecodable lines cannot be JSON; they go out byte for byte.
        let Ok(line) = std::str::from_utf8(raw) else {
            handler.passthrough_bytes(raw)?;
            continue;
        };

        match parse_line(line, config) {
            LineKind::Entry(entry) => handler.handle(&entry)?,
            LineKind::Raw => handler.passthrough(line)?,
        }
    }
    handler.flush()?;
    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Render the final fatal entry on stderr and pick the exit code.
fn report_uncaught(err: &LoghueError, color: ColorMode) -> ExitCode {
    let mode = StyleMode::resolve(color, |k| std::env::var_os(k));
    let handler = Handler::with_mode(io::stderr(), mode);
    // Nowhere left to report a failure to write to stderr.
    let _ = handler.handle(&Entry::uncaught(err));
    ExitCode::from(err.exit_code())
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `loghue`, this causes the *upstream* writer to
/// receive a `BrokenPipeError` when `loghue` exits. Restoring `SIG_DFL`
/// lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
