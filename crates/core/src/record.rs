use crate::{PlayerId, Turn, PLAYER_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub landlord: PlayerId,
    pub initial_hands: Vec<String>,
    pub kitty: String,
    pub trace: Vec<Turn>,
    #[serde(default)]
    pub winner: Option<PlayerId>,
    pub payoff: [i32; PLAYER_COUNT],
}
