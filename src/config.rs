//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`$XDG_CONFIG_HOME/loghue/config.toml` or `~/.config/loghue/config.toml`)
//! 3. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LoghueError;
use crate::formatter::Layout;
use crate::level::Level;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Custom JSON key for the message field (overrides alias table).
    pub message_key: Option<String>,
    /// Custom JSON key for the level field (overrides alias table).
    pub level_key: Option<String>,
    /// Column widths for rendered lines.
    pub layout: Layout,
    /// Custom level name aliases mapping lowercased string → [`Level`].
    pub level_aliases: Option<HashMap<String, Level>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            message_key: None,
            level_key: None,
            layout: Layout::default(),
            level_aliases: None,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// An explicit `--config` path must exist; the default path is optional.
    pub fn from_cli(cli: &Cli) -> Result<Self, LoghueError> {
        let mut config = Self::default();

        match cli.config {
            Some(ref path) => config.apply_file_config(FileConfig::load(path)?)?,
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    config.apply_file_config(FileConfig::load(&path)?)?;
                }
            }
        }

        // The flag always carries a value; `auto` is its default.
        if cli.color != ColorMode::Auto {
            config.color_mode = cli.color;
        }
        if cli.message_key.is_some() {
            config.message_key.clone_from(&cli.message_key);
        }
        if cli.level_key.is_some() {
            config.level_key.clone_from(&cli.level_key);
        }
        if let Some(width) = cli.label_width {
            config.layout.label_width = width;
        }
        if let Some(width) = cli.message_width {
            config.layout.message_width = width;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/loghue/config.toml` or `~/.config/loghue/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("loghue").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("loghue")
                .join("config.toml")
        } else {
            PathBuf::from(".config/loghue/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), LoghueError> {
        if let Some(color) = file.color {
            self.color_mode = ColorMode::from_str_loose(&color);
        }

        if let Some(keys) = file.keys {
            if let Some(msg) = keys.message {
                self.message_key = Some(msg);
            }
            if let Some(lvl) = keys.level {
                self.level_key = Some(lvl);
            }
        }

        if let Some(layout) = file.layout {
            if let Some(width) = layout.label_width {
                self.layout.label_width = width;
            }
            if let Some(width) = layout.message_width {
                self.layout.message_width = width;
            }
        }

        if let Some(levels) = file.levels {
            let mut aliases = HashMap::new();
            for (key, value) in levels {
                let level = Level::from_str_loose(&value).ok_or_else(|| {
                    LoghueError::Config(format!("unknown level {value:?} for alias {key:?}"))
                })?;
                aliases.insert(key.to_lowercase(), level);
            }
            if !aliases.is_empty() {
                self.level_aliases = Some(aliases);
            }
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    keys: Option<KeysConfig>,
    layout: Option<LayoutConfig>,
    levels: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeysConfig {
    message: Option<String>,
    level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutConfig {
    label_width: Option<usize>,
    message_width: Option<usize>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LoghueError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoghueError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
