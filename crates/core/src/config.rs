use crate::{PlayerId, PLAYER_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SEED: u64 = 0xD0D1;
pub const DEFAULT_MAX_TURNS: u32 = 163;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_turns must be positive")]
    NoTurns,
    #[error("landlord seat {0} is out of range")]
    LandlordOutOfRange(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: u64,
    pub max_turns: u32,
    pub landlord: Option<PlayerId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_turns: DEFAULT_MAX_TURNS,
            landlord: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::NoTurns);
        }
        match self.landlord {
            Some(seat) if seat >= PLAYER_COUNT => Err(ConfigError::LandlordOutOfRange(seat)),
            _ => Ok(()),
        }
    }
}
