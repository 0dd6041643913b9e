use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub connect_four: ConnectFourConfig,
    /// Offer the tutorial before starting a game.
    pub onboarding: bool,
}

/// Default player identities; CLI flags and the name prompt override these.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub name1: String,
    pub name2: String,
    /// One-character board tokens (connect-four chips).
    pub token1: char,
    pub token2: char,
}

/// Connect-four board shape and win condition.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectFourConfig {
    pub rows: usize,
    pub cols: usize,
    /// How many chips in a row win the game.
    pub connect: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: PlayersConfig::default(),
            connect_four: ConnectFourConfig::default(),
            onboarding: true,
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            name1: "Player 1".to_string(),
            name2: "Player 2".to_string(),
            token1: 'X',
            token2: 'O',
        }
    }
}

impl Default for ConnectFourConfig {
    fn default() -> Self {
        ConnectFourConfig {
            rows: 6,
            cols: 7,
            connect: 4,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_four.rows == 0 {
            return Err(ConfigError::Validation(
                "connect_four.rows must be > 0".into(),
            ));
        }
        if self.connect_four.cols == 0 {
            return Err(ConfigError::Validation(
                "connect_four.cols must be > 0".into(),
            ));
        }
        if self.connect_four.connect == 0 {
            return Err(ConfigError::Validation(
                "connect_four.connect must be > 0".into(),
            ));
        }
        if self.connect_four.connect > self.connect_four.rows.max(self.connect_four.cols) {
            return Err(ConfigError::Validation(
                "connect_four.connect must fit on the board".into(),
            ));
        }
        if self.players.name1.trim().is_empty() || self.players.name2.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.players.token1 == self.players.token2 {
            return Err(ConfigError::Validation(
                "players.token1 and players.token2 must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[connect_four]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connect_four.rows, 8);
        assert_eq!(config.connect_four.cols, 7);
        assert_eq!(config.connect_four.connect, 4);
        assert_eq!(config.players.name1, "Player 1");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.connect_four.rows, 6);
        assert!(config.onboarding);
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut config = AppConfig::default();
        config.connect_four.rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.connect_four.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_connect() {
        let mut config = AppConfig::default();
        config.connect_four.connect = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_tokens() {
        let mut config = AppConfig::default();
        config.players.token2 = 'X';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.connect_four.connect, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
onboarding = false

[players]
name1 = "Ada"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.onboarding);
        assert_eq!(config.players.name1, "Ada");
        assert_eq!(config.players.name2, "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[connect_four]\nconnect = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }
}
