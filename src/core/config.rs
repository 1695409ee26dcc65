//! Game configuration.
//!
//! `GameConfig` holds the rule constants and pacing the engine runs with.
//! The defaults are the standard nine-piece game; builder methods override
//! individual values and `validate` rejects combinations the phase rules
//! cannot express.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use super::player::Player;

/// Rule constants and pacing for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pieces each player starts with in reserve.
    pub pieces_per_player: u8,

    /// A player whose placement is complete flies while their on-board
    /// count is below this value.
    pub flying_threshold: u8,

    /// A player whose pieces in play (board plus reserve) drop to this
    /// count loses.
    pub losing_count: u8,

    /// Pause before an AI ply, in milliseconds. Purely presentational;
    /// the driver decides whether to honour it.
    pub ai_delay_ms: u64,

    /// Seed for the AI's random choices.
    pub seed: u64,

    /// The side controlled by the human. White always moves first.
    pub human: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pieces_per_player: 9,
            flying_threshold: 4,
            losing_count: 2,
            ai_delay_ms: 1000,
            seed: 42,
            human: Player::White,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the AI pause.
    #[must_use]
    pub fn with_ai_delay_ms(mut self, delay_ms: u64) -> Self {
        self.ai_delay_ms = delay_ms;
        self
    }

    /// Set the reserve size.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Set the on-board count below which a player flies.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u8) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Set which side the human plays.
    #[must_use]
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// The side played by the AI.
    #[must_use]
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// AI pause as a `Duration`.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Check that the constants describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=12).contains(&self.pieces_per_player) {
            return Err(ConfigError::PiecesPerPlayer(self.pieces_per_player));
        }
        if self.flying_threshold > self.pieces_per_player {
            return Err(ConfigError::FlyingThreshold {
                threshold: self.flying_threshold,
                pieces: self.pieces_per_player,
            });
        }
        if self.losing_count >= self.flying_threshold {
            return Err(ConfigError::LosingCount {
                losing: self.losing_count,
                threshold: self.flying_threshold,
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
