use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    evaluation::{Heuristic, PieceCountWeights, Weights},
};

/// Deepest search a configuration may ask for
pub const MAX_DEPTH: u32 = 10;

/// Path the terminal front end reads its engine configuration from
pub const CONFIG_PATH: &str = "connect4.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Play a uniformly random legal column
    Random,
    /// Play the column chosen by minimax
    Search,
}

/// How the computer player picks its moves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    /// Plies searched below the current position
    pub depth: u32,
    pub alpha_beta: bool,
    /// Search root moves on the rayon thread pool
    pub parallel: bool,
    pub heuristic: Heuristic,
    /// Pick uniformly among root columns of equal value instead of the lowest one
    pub random_ties: bool,
    /// Fixed seed for the random number generator, for reproducible games
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Difficulty::Hard.config()
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == Strategy::Search && (self.depth == 0 || self.depth > MAX_DEPTH) {
            return Err(ConfigError::Validation(format!(
                "depth must be between 1 and {}, got {}",
                MAX_DEPTH, self.depth
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Preset engine strengths
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Random legal moves
    Beginner,
    /// Wins when it can, otherwise blocks an immediate loss
    Easy,
    /// Four plies over the piece count heuristic
    Medium,
    /// Five plies of alpha-beta over the threat heuristic
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn config(self) -> EngineConfig {
        let search = |depth, alpha_beta, heuristic| EngineConfig {
            strategy: Strategy::Search,
            depth,
            alpha_beta,
            parallel: false,
            heuristic,
            random_ties: false,
            seed: None,
        };
        match self {
            Difficulty::Beginner => EngineConfig {
                strategy: Strategy::Random,
                ..search(1, true, Heuristic::default())
            },
            // two plies see both our own win and the opponent's reply, anything
            // else is a coin toss among the columns that do not lose at once
            Difficulty::Easy => EngineConfig {
                random_ties: true,
                ..search(2, true, Heuristic::Threats(Weights::terminal_only()))
            },
            Difficulty::Medium => search(
                4,
                true,
                Heuristic::PieceCount(PieceCountWeights::default()),
            ),
            Difficulty::Hard => search(5, true, Heuristic::default()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
