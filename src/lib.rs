//! `loghue` — render structured log entries as aligned, color-coded lines.
//!
//! A [`Handler`] owns an output sink and turns each [`Entry`] (level,
//! message, fields) into exactly one line: a padded level label, a padded
//! message, then `name=value` pairs sorted by name. Writes are serialized,
//! so one handler can be shared by many threads.
//!
//! # Example
//!
//! ```
//! use loghue::{Entry, Handler, Level, StyleMode};
//!
//! let handler = Handler::with_mode(Vec::new(), StyleMode::Plain);
//! let entry = Entry::new(Level::Info, "starting")
//!     .field("port", 8080)
//!     .field("env", "prod");
//! handler.handle(&entry).unwrap();
//!
//! let out = String::from_utf8(handler.into_inner()).unwrap();
//! assert!(out.starts_with("INFO  starting"));
//! assert!(out.ends_with("env=prod port=8080\n"));
//! ```

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod parser;

// Re-export primary API types for convenience.
pub use config::Config;
pub use entry::{Entry, Value};
pub use error::LoghueError;
pub use formatter::{Layout, StyleMode, format_entry};
pub use handler::Handler;
pub use level::Level;
pub use parser::{LineKind, parse_line};
