//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File receiving logs in interactive mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Colour names for marks and highlights.
    #[serde(default)]
    theme: Theme,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: Theme::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::from_file(path)?;
            info!("Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Colour names as written in the config file.
///
/// Anything ratatui's [`Color`] parses is accepted: names like `"blue"` or
/// `"lightred"`, hex like `"#ff8800"`, or indexed colours like `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colour of X marks.
    x: String,
    /// Colour of O marks.
    o: String,
    /// Background of the winning cells.
    win: String,
    /// Background of the keyboard cursor.
    cursor: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            win: "green".to_string(),
            cursor: "white".to_string(),
        }
    }
}

impl Theme {
    /// Parses every colour name.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            win: parse_color("win", &self.win)?,
            cursor: parse_color("cursor", &self.cursor)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    match Color::from_str(value) {
        Ok(color) => Ok(color),
        Err(_) => Err(ConfigError::new(format!(
            "Invalid colour for theme.{}: {:?}",
            key, value
        ))),
    }
}

/// Resolved colours used when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of the winning cells.
    pub win: Color,
    /// Background of the keyboard cursor.
    pub cursor: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            win: Color::Green,
            cursor: Color::White,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses_to_default_palette() {
        let palette = Theme::default().palette().expect("default theme is valid");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TuiConfig::from_toml("log_filter = \"debug\"\n[theme]\nx = \"yellow\"\n")
            .expect("valid config");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(config.theme().x(), "yellow");
        assert_eq!(config.theme().o(), "red");
    }

    #[test]
    fn test_bad_colour_rejected() {
        let err = TuiConfig::from_toml("[theme]\nwin = \"not-a-colour\"\n")
            .expect_err("colour should not parse");
        assert!(err.message.contains("theme.win"));
    }
}
