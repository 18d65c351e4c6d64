//! Configuration loading for the noel greeting card.
//!
//! Reads `config.toml` from the platform config directory. The card has no
//! required configuration; a missing or malformed file silently falls back
//! to the defaults. Geometry constants (particle counts, palette, spiral
//! turns, star radii) are compile-time and deliberately not configurable.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use noel_core::AnimationSpeed;

/// Card configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title rendered in big letters above the tree.
    pub title: String,
    /// Footer line below the tree. The current year is appended.
    pub footer: String,
    /// Playback speed for all animations.
    pub speed: AnimationSpeed,
    /// Whether the snowfall overlay is drawn.
    pub snow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Merry Christmas".to_string(),
            footer: "Happy Holidays".to_string(),
            speed: AnimationSpeed::default(),
            snow: true,
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling back to
    /// defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|raw| Self::from_toml(&raw))
            .unwrap_or_default()
    }

    /// Parse a TOML document; unparseable input yields the defaults.
    pub fn from_toml(raw: &str) -> Self {
        toml::from_str(raw).unwrap_or_default()
    }
}

/// Path of the config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "noel").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_card() {
        let config = Config::default();
        assert_eq!(config.title, "Merry Christmas");
        assert_eq!(config.speed, AnimationSpeed::Normal);
        assert!(config.snow);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = Config::from_toml("title = \"Joyeux Noel\"\nspeed = \"fast\"\n");
        assert_eq!(config.title, "Joyeux Noel");
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.footer, "Happy Holidays");
        assert!(config.snow);
    }

    #[test]
    fn garbage_toml_falls_back_to_defaults() {
        assert_eq!(Config::from_toml("not toml at all ["), Config::default());
    }

    #[test]
    fn full_round_trip() {
        let config = Config {
            title: "Feliz Navidad".to_string(),
            footer: "Prospero Ano".to_string(),
            speed: AnimationSpeed::Slow,
            snow: false,
        };
        let raw = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&raw), config);
    }
}
