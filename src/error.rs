//! Error types for the `loghue` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. The renderer itself
//! returns plain [`std::io::Result`] so write failures reach the caller
//! unchanged; this enum covers the CLI around it.

use thiserror::Error;

/// Errors that can occur in `loghue`.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum LoghueError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LoghueError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Io(_) => 2,
        }
    }

    /// Whether this is a broken pipe on the output side, which the CLI
    /// treats as a normal early exit.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
