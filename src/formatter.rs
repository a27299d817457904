//! Line rendering for log entries.
//!
//! One entry becomes one line:
//!
//! ```text
//! LABEL MESSAGE______________________ name=value name=value
//! ```
//!
//! - Label left-aligned to [`Layout::label_width`]
//! - Message left-aligned to [`Layout::message_width`]
//! - Fields sorted by name, each as ` name=value`
//! - In [`StyleMode::Styled`], the label and every field name carry the
//!   level's color; message and values stay uncolored

use std::ffi::OsString;
use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::cli::ColorMode;
use crate::entry::Entry;
use crate::fields;

/// Whether rendered lines carry ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    Styled,
    Plain,
}

impl StyleMode {
    /// Platform default: hosts whose default console lacks ANSI support
    /// (Windows) get [`Plain`](Self::Plain), everything else
    /// [`Styled`](Self::Styled).
    pub const fn detect() -> Self {
        if cfg!(windows) { Self::Plain } else { Self::Styled }
    }

    /// Resolve a [`ColorMode`] against the environment.
    ///
    /// `env` looks up a variable by name; pass `|k| std::env::var_os(k)` for
    /// the process environment.
    ///
    /// In `Auto` mode: a non-empty `NO_COLOR` or `TERM=dumb` disables styling,
    /// a non-empty `FORCE_COLOR` enables it, otherwise [`detect`](Self::detect)
    /// decides.
    pub fn resolve(mode: ColorMode, env: impl Fn(&str) -> Option<OsString>) -> Self {
        match mode {
            ColorMode::Always => Self::Styled,
            ColorMode::Never => Self::Plain,
            ColorMode::Auto => {
                if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                    return Self::Plain;
                }
                if env("TERM").is_some_and(|v| v == "dumb") {
                    return Self::Plain;
                }
                if env("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                    return Self::Styled;
                }
                Self::detect()
            }
        }
    }
}

/// Minimum column widths. Longer text is never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub label_width: usize,
    pub message_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            label_width: 5,
            message_width: 30,
        }
    }
}

/// Render `entry` as one newline-terminated line appended to `out`.
pub fn format_entry(entry: &Entry, mode: StyleMode, layout: Layout, out: &mut String) {
    let level = entry.level;
    let label = format!("{:<width$}", level.label(), width = layout.label_width);

    match mode {
        StyleMode::Styled => {
            let _ = write!(out, "{}", label.style(level.style()));
        }
        StyleMode::Plain => out.push_str(&label),
    }

    let _ = write!(
        out,
        " {:<width$}",
        entry.message,
        width = layout.message_width
    );

    for field in fields::sorted(&entry.fields) {
        match mode {
            StyleMode::Styled => {
                let _ = write!(
                    out,
                    " {}={}",
                    field.name.style(level.style()),
                    field.value
                );
            }
            StyleMode::Plain => {
                let _ = write!(out, " {}={}", field.name, field.value);
            }
        }
    }

    out.push('\n');
}
