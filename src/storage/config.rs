//! JSON appearance configuration.
//!
//! Stores settings in %APPDATA%/Framemark/config.json. Loaded once at
//! startup; a default file is written on first run so the settings are
//! discoverable and editable by hand. Any read or parse failure falls back
//! to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::constants::*;
use crate::{parse_hex_rgb, rgb_to_hex};

/// Serializable appearance settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Border color as `#RRGGBB`.
    pub border_color: String,
    /// Border stroke width in pixels.
    pub border_width: i32,
    /// Whole-window alpha percentage (100 = fully opaque).
    pub overlay_alpha_pct: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            overlay_alpha_pct: DEFAULT_ALPHA_PCT,
        }
    }
}

impl Config {
    /// Clamp all values to valid ranges and normalize the color string;
    /// an unparseable color reverts to the default.
    pub fn validate(&mut self) {
        self.border_width = self.border_width.clamp(MIN_BORDER, MAX_BORDER);
        self.overlay_alpha_pct = self.overlay_alpha_pct.min(100);
        match parse_hex_rgb(&self.border_color) {
            Some((r, g, b)) => self.border_color = rgb_to_hex(r, g, b),
            None => self.border_color = DEFAULT_BORDER_COLOR.to_string(),
        }
    }

    /// Border color as byte components. `validate` guarantees this parses.
    pub fn border_rgb(&self) -> (u8, u8, u8) {
        parse_hex_rgb(&self.border_color).unwrap_or((255, 0, 0))
    }
}

/// Path of the config file: `%APPDATA%/Framemark/config.json`.
pub fn default_path() -> PathBuf {
    super::data_dir().join(CONFIG_FILE)
}

/// Load the config, writing a default file on first run.
pub fn load() -> Config {
    load_from(&default_path())
}

/// Load the config from an explicit path.
pub fn load_from(path: &Path) -> Config {
    let mut config = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => {
            let config = Config::default();
            if let Err(e) = save_to(path, &config) {
                tracing::debug!(error = %e, "could not write default config");
            }
            config
        }
    };
    config.validate();
    config
}

/// Write the config as pretty-printed JSON, creating the parent directory
/// if needed.
pub fn save_to(path: &Path, config: &Config) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(config.border_width, DEFAULT_BORDER_WIDTH);
        assert_eq!(config.overlay_alpha_pct, DEFAULT_ALPHA_PCT);
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = Config {
            border_color: "#00FF7F".to_string(),
            border_width: 4,
            overlay_alpha_pct: 55,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn validate_clamps_border_width() {
        let mut config = Config {
            border_width: 99,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.border_width, MAX_BORDER);

        config.border_width = 0;
        config.validate();
        assert_eq!(config.border_width, MIN_BORDER);
    }

    #[test]
    fn validate_rejects_bad_color() {
        let mut config = Config {
            border_color: "not a color".to_string(),
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.border_color, DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn validate_normalizes_color_case() {
        let mut config = Config {
            border_color: "#ff8800".to_string(),
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.border_color, "#FF8800");
        assert_eq!(config.border_rgb(), (0xFF, 0x88, 0x00));
    }
}
