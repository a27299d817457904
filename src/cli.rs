//! Command-line argument definitions for `loghue`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Render JSON log lines from stdin as aligned, color-coded text.
///
/// Each JSON object becomes one `LEVEL message key=value ...` line on stdout,
/// with fields sorted by name. Non-JSON lines are passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "loghue", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` follows the platform, honoring `NO_COLOR`, `FORCE_COLOR` and `TERM=dumb`.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Override the JSON key used for the log message field.
    #[arg(short = 'm', long)]
    pub message_key: Option<String>,

    /// Override the JSON key used for the log level field.
    #[arg(long)]
    pub level_key: Option<String>,

    /// Minimum width of the level label column.
    #[arg(long)]
    pub label_width: Option<usize>,

    /// Minimum width of the message column.
    #[arg(short = 'w', long)]
    pub message_width: Option<usize>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Decide from the platform and environment.
    Auto,
    /// Always emit ANSI escapes.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

impl ColorMode {
    /// Parse the config-file spelling. Unknown values mean `auto`.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}
