use crate::{Action, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Dealt {
        seed: u64,
        hand_sizes: Vec<usize>,
    },
    LandlordChosen {
        player: PlayerId,
        strength: i32,
    },
    Played {
        player: PlayerId,
        action: Action,
        remaining: usize,
    },
    Passed {
        player: PlayerId,
    },
    ActionReplaced {
        player: PlayerId,
        attempted: Action,
        fallback: Action,
    },
    GameOver {
        winner: Option<PlayerId>,
        turns: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
