//! Game configuration: variant selection, RNG seed and combat pacing.
//!
//! Loaded from `~/.voyage/config.json` when present. Command-line flags are
//! layered on top by the binary.

use super::constants::ENEMY_TURN_DELAY_MS;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";

/// Flavor of the game. Changes names, enemies and starting kit, never rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Spaceship flavor: fuel and parts.
    #[default]
    Space,
    /// Wasteland flavor: water and food.
    Survival,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Space => "space",
            Variant::Survival => "survival",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Space => " Voyage: Deep Space ",
            Variant::Survival => " Voyage: Wasteland ",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "space" => Ok(Variant::Space),
            "survival" => Ok(Variant::Survival),
            other => Err(format!("unknown variant '{}' (expected space or survival)", other)),
        }
    }
}

/// User-tunable settings.
///
/// New fields must carry `#[serde(default)]` so older config files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub variant: Variant,
    /// Fixed RNG seed; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Real-time pause before the enemy answers a player action.
    #[serde(default = "default_enemy_turn_delay_ms")]
    pub enemy_turn_delay_ms: u64,
}

fn default_enemy_turn_delay_ms() -> u64 {
    ENEMY_TURN_DELAY_MS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            enemy_turn_delay_ms: ENEMY_TURN_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Loads `~/.voyage/config.json`, falling back to defaults if missing or invalid.
    pub fn load() -> Self {
        match persistence::save_path(CONFIG_FILENAME) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Loads a config file at `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(_) => Self::default(),
        };
        tracing::debug!(?config, "configuration loaded");
        config
    }

    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(CONFIG_FILENAME, self)
    }

    /// Parses a config from JSON text, falling back to defaults on error.
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.variant, Variant::Space);
        assert_eq!(config.seed, None);
        assert_eq!(config.enemy_turn_delay_ms, ENEMY_TURN_DELAY_MS);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("space".parse::<Variant>(), Ok(Variant::Space));
        assert_eq!("Survival".parse::<Variant>(), Ok(Variant::Survival));
        assert!("ocean".parse::<Variant>().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = GameConfig::from_json_or_default(r#"{"variant":"survival"}"#);
        assert_eq!(config.variant, Variant::Survival);
        assert_eq!(config.seed, None);
        assert_eq!(config.enemy_turn_delay_ms, ENEMY_TURN_DELAY_MS);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = GameConfig::from_json_or_default("{not json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("voyage_{}_absent.json", std::process::id()));
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn test_load_from_garbage_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("voyage_{}_garbage.json", std::process::id()));
        fs::write(&path, "][").unwrap();

        assert_eq!(GameConfig::load_from(&path), GameConfig::default());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_fallback_is_logged() {
        let path = std::env::temp_dir().join(format!("voyage_{}_logged.json", std::process::id()));
        fs::write(&path, "{\"variant\":\"ocean\"}").unwrap();
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || GameConfig::load_from(&path));

        assert_eq!(config, GameConfig::default());
        let text = logs.text();
        assert!(text.contains("invalid config, using defaults"), "{}", text);
        assert!(text.contains("configuration loaded"), "{}", text);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_reads_saved_file() {
        let path = std::env::temp_dir().join(format!("voyage_{}_saved.json", std::process::id()));
        fs::write(&path, r#"{"variant":"survival","enemy_turn_delay_ms":18446744073709551615}"#)
            .unwrap();

        let config = GameConfig::load_from(&path);
        assert_eq!(config.variant, Variant::Survival);
        assert_eq!(config.enemy_turn_delay_ms, u64::MAX);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_json_shape() {
        let config = GameConfig {
            variant: Variant::Survival,
            seed: Some(7),
            enemy_turn_delay_ms: 250,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"variant\":\"survival\""));
        assert!(json.contains("\"seed\":7"));
    }
}
