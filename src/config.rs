use std::path::Path;

use crate::error::{ConfigError, GameError};
use crate::game::{
    GameState, Player, Seat, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION,
};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display identity of one player. The engine never reads these; they are
/// for whatever host renders the game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                name: "Player 1".into(),
                color: "red".into(),
            },
            two: PlayerConfig {
                name: "Player 2".into(),
                color: "yellow".into(),
            },
        }
    }
}

impl PlayersConfig {
    /// Display identity for the player in `seat`
    pub fn get(&self, seat: Seat) -> &PlayerConfig {
        match seat {
            Seat::First => &self.one,
            Seat::Second => &self.two,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Parse and validate a game config from TOML text. Missing sections
    /// and fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a game config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a game config, or play on the default board when the file is
    /// missing. Any other read failure is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                let config = Self::default();
                eprintln!(
                    "Warning: config file '{}' not found, playing on the default {}x{} board",
                    path.display(),
                    config.board.height,
                    config.board.width
                );
                Ok(config)
            }
            result => result,
        }
    }

    /// Check board bounds and player identities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("board.height", self.board.height),
            ("board.width", self.board.width),
        ] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be in {}..={}, got {}",
                    field, MIN_DIMENSION, MAX_DIMENSION, value
                )));
            }
        }

        if self.players.one.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "players.one.name must not be empty".into(),
            ));
        }
        if self.players.two.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "players.two.name must not be empty".into(),
            ));
        }
        if self.players.one.name == self.players.two.name {
            return Err(ConfigError::Invalid(
                "players.one.name and players.two.name must differ".into(),
            ));
        }

        Ok(())
    }

    /// Start a game on the configured board with the default player tokens.
    pub fn new_game(&self) -> Result<GameState<Player>, GameError> {
        GameState::new(self.board.height, self.board.width, Player::One, Player::Two)
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
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        // Other fields should be defaults
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_player_section_requires_both_fields() {
        let toml_str = r#"
[players.one]
name = "Ada"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_short_board() {
        let mut config = AppConfig::default();
        config.board.height = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_narrow_board() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.width = MAX_DIMENSION + 1;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid game config: board.width must be in 4..=1024, got 1025"
        );

        config.board.width = 7;
        config.board.height = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_str_validates() {
        let config = AppConfig::from_toml_str("[board]\nheight = 8\n").unwrap();
        assert_eq!(config.board.height, 8);
        assert!(matches!(
            AppConfig::from_toml_str("[board]\nheight = 2000\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[board\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.players.two.name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.players.two.name = config.players.one.name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_players_by_seat() {
        let players = PlayersConfig::default();
        assert_eq!(players.get(Seat::First).color, "red");
        assert_eq!(players.get(Seat::Second).color, "yellow");
    }

    #[test]
    fn test_new_game_uses_board_size() {
        let mut config = AppConfig::default();
        config.board.height = 8;
        config.board.width = 10;
        let game = config.new_game().unwrap();
        assert_eq!(game.height(), 8);
        assert_eq!(game.width(), 10);
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 5

[players.two]
name = "Grace"
color = "blue"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 5);
        assert_eq!(config.players.two.name, "Grace");
        // Others are defaults
        assert_eq!(config.board.width, 7);
        assert_eq!(config.players.one.name, "Player 1");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 2\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
