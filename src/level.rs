//! Severity levels with their display label and terminal color.
//!
//! The label/color mapping is a total `match` over the closed [`Level`] enum,
//! so every value that reaches the renderer has a defined rendering. Untyped
//! input (strings and numbers from JSON) is mapped onto a level here, at the
//! parsing boundary, with unknown values clamped or rejected.

use std::collections::HashMap;
use std::fmt;

use owo_colors::Style;

/// Canonical severity enumeration.
///
/// Ordered by severity (ascending) via [`Ord`]:
/// `Debug < Info < Warn < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Every level, in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Display label. `Error` and `Fatal` share `"ERROR"`.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error | Self::Fatal => "ERROR",
        }
    }

    /// ANSI SGR foreground code used for this level's styled tokens.
    ///
    /// - Debug: 90 (gray)
    /// - Info: 34 (blue)
    /// - Warn: 33 (yellow)
    /// - Error, Fatal: 31 (red)
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn color_code(&self) -> u8 {
        match self {
            Self::Debug => 90,
            Self::Info => 34,
            Self::Warn => 33,
            Self::Error | Self::Fatal => 31,
        }
    }

    /// The [`Style`] applied to the label and field names in styled mode.
    ///
    /// Kept in step with [`color_code`](Self::color_code).
    #[allow(clippy::trivially_copy_pass_by_ref)] // &self required since OwoColorize has conflicting trait methods
    pub const fn style(&self) -> Style {
        match self {
            Self::Debug => Style::new().bright_black(),
            Self::Info => Style::new().blue(),
            Self::Warn => Style::new().yellow(),
            Self::Error | Self::Fatal => Style::new().red(),
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// `trace` folds into [`Debug`](Self::Debug) since there is no lower level.
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "trc" | "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" | "critical" | "crit" | "panic" | "emerg" | "emergency" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Map a numeric level onto the nearest defined level.
    ///
    /// Uses the bunyan/pino convention (20 = debug, 30 = info, 40 = warn,
    /// 50 = error, 60 = fatal). Anything below the debug band clamps to
    /// [`Debug`](Self::Debug), anything above the fatal band to
    /// [`Fatal`](Self::Fatal).
    pub const fn from_numeric(n: i64) -> Self {
        match n {
            ..=24 => Self::Debug,
            25..=34 => Self::Info,
            35..=44 => Self::Warn,
            45..=54 => Self::Error,
            55.. => Self::Fatal,
        }
    }

    /// Parse a level from a [`serde_json::Value`].
    ///
    /// Custom aliases (lowercased keys) are consulted before the built-in names.
    pub fn from_json_value(
        value: &serde_json::Value,
        custom_aliases: Option<&HashMap<String, Self>>,
    ) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => {
                if let Some(aliases) = custom_aliases
                    && let Some(level) = aliases.get(&s.to_lowercase())
                {
                    return Some(*level);
                }
                Self::from_str_loose(s)
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::from_numeric(i))
                } else if n.as_u64().is_some() {
                    // Only integers above i64::MAX land here.
                    Some(Self::Fatal)
                } else {
                    #[allow(clippy::cast_possible_truncation)]
                    n.as_f64().map(|f| Self::from_numeric(f as i64))
                }
            }
            _ => None,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
