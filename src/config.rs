use std::path::Path;

use rand::Rng;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::Player;

/// Deepest search the validator accepts; deeper horizons take minutes per move.
pub const MAX_DEPTH: u32 = 12;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies the AI looks ahead.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 5 }
    }
}

/// Who opens a game against the AI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Ai,
    Random,
}

impl FirstPlayer {
    /// Resolve to a colour, given that the human plays `human`.
    pub fn resolve<R: Rng + ?Sized>(self, human: Player, rng: &mut R) -> Player {
        match self {
            FirstPlayer::Human => human,
            FirstPlayer::Ai => human.other(),
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    human
                } else {
                    human.other()
                }
            }
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Pause before the AI drops its piece, in milliseconds.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: FirstPlayer::Random,
            ai_delay_ms: 500,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.game.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.game.first_player, FirstPlayer::Random);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.game.ai_delay_ms, 500);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.depth, AppConfig::default().search.depth);
    }

    #[test]
    fn test_first_player_names() {
        let config: AppConfig = toml::from_str("[game]\nfirst_player = \"ai\"\n").unwrap();
        assert_eq!(config.game.first_player, FirstPlayer::Ai);
        assert!(toml::from_str::<AppConfig>("[game]\nfirst_player = \"robot\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_depth() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.game.ai_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
first_player = "human"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.first_player, FirstPlayer::Human);
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_first_player_resolution() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(FirstPlayer::Human.resolve(Player::Red, &mut rng), Player::Red);
        assert_eq!(FirstPlayer::Ai.resolve(Player::Red, &mut rng), Player::Yellow);

        let starters: Vec<Player> = (0..64)
            .map(|_| FirstPlayer::Random.resolve(Player::Red, &mut rng))
            .collect();
        assert!(starters.contains(&Player::Red));
        assert!(starters.contains(&Player::Yellow));
    }
}
