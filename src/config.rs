use std::path::Path;

use tracing::warn;

use crate::ai::{GreedyAgent, WindowHeuristic};
use crate::error::ConfigError;
use crate::game::{GameMode, MAX_SIZE, MIN_SIZE};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            columns: 7,
        }
    }
}

/// Match setup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub player_one: String,
    /// Empty means "Player 2" or the computer's name, depending on mode
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::SinglePlayer,
            player_one: "Player 1".to_string(),
            player_two: String::new(),
        }
    }
}

impl GameConfig {
    /// Name shown for seat two.
    pub fn player_two_name(&self) -> &str {
        if !self.player_two.trim().is_empty() {
            return &self.player_two;
        }
        match self.mode {
            GameMode::SinglePlayer => GreedyAgent::NAME,
            GameMode::Multiplayer => "Player 2",
        }
    }
}

/// Computer opponent tuning.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Score every 4-cell window from both of its ends
    pub count_windows_both_ways: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            count_windows_both_ways: true,
        }
    }
}

impl AiConfig {
    pub fn build_agent(&self) -> GreedyAgent {
        GreedyAgent::with_heuristic(Box::new(WindowHeuristic::new(
            self.count_windows_both_ways,
        )))
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub ai: AiConfig,
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
        let range = MIN_SIZE..=MAX_SIZE;
        if !range.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_SIZE}, {MAX_SIZE}]"
            )));
        }
        if !range.contains(&self.board.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in [{MIN_SIZE}, {MAX_SIZE}]"
            )));
        }
        if self.game.player_one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_one must not be blank".into(),
            ));
        }
        if self.game.player_one == self.game.player_two_name() {
            return Err(ConfigError::Validation(
                "game.player_one and game.player_two must differ".into(),
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
