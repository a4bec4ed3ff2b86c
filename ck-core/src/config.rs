//! Match configuration schema.
//!
//! Loaded from YAML by the CLI; every section and field has a default so
//! an empty file (or no file at all) yields a playable setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Match setup (roster, round limit).
    #[serde(default)]
    pub game: GameConfig,
    /// Match log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Match setup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Player names. Blank entries fall back to `Player N`.
    #[serde(default)]
    pub players: Vec<String>,
    /// Number of unnamed seats when `players` is empty.
    #[serde(default = "default_num_players")]
    pub num_players: u32,
    /// Round limit (the original offers 10/15/20/25/30).
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

fn default_num_players() -> u32 {
    3
}

fn default_rounds() -> u32 {
    20
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            num_players: default_num_players(),
            rounds: default_rounds(),
        }
    }
}

impl GameConfig {
    /// Resolve the roster: explicit names win, otherwise `num_players`
    /// blank seats (which the engine names `Player N`).
    pub fn roster(&self) -> Vec<String> {
        if !self.players.is_empty() {
            self.players.clone()
        } else {
            vec![String::new(); self.num_players.max(1) as usize]
        }
    }
}

/// Match log settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// NDJSON match log path; logging is off when unset.
    #[serde(default)]
    pub match_log: Option<PathBuf>,
    /// Flush the log every N events.
    #[serde(default = "default_flush_every")]
    pub flush_every: usize,
}

fn default_flush_every() -> usize {
    100
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            match_log: None,
            flush_every: default_flush_every(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.num_players, 3);
        assert_eq!(config.game.rounds, 20);
        assert!(config.game.players.is_empty());
        assert!(config.logging.match_log.is_none());
        assert_eq!(config.logging.flush_every, 100);
    }

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
game:
  players: ["Alice", "Bob"]
  rounds: 10

logging:
  match_log: "match.ndjson"
"#;
        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.game.players, vec!["Alice", "Bob"]);
        assert_eq!(config.game.rounds, 10);
        // Check defaults are applied
        assert_eq!(config.game.num_players, 3);
        assert_eq!(config.logging.flush_every, 100);
        assert_eq!(
            config.logging.match_log.as_deref(),
            Some(Path::new("match.ndjson"))
        );
    }

    #[test]
    fn test_roster_resolution() {
        let mut config = Config::default();
        config.game.num_players = 2;
        assert_eq!(config.game.roster(), vec!["", ""]);

        config.game.players = vec!["Alice".to_string()];
        assert_eq!(config.game.roster(), vec!["Alice"]);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(result.is_err());
    }
}
