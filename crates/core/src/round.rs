use crate::{Action, Rank};
use serde::{Deserialize, Serialize};

pub type PlayerId = usize;

pub const PLAYER_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: PlayerId,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickPhase {
    AwaitingLead,
    InProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    seats: Vec<PlayerId>,
    history: Vec<Turn>,
    played: Vec<Rank>,
    last_non_pass: Option<PlayerId>,
    consecutive_passes: u32,
}

impl Default for Round {
    fn default() -> Self {
        Self::new((0..PLAYER_COUNT).collect())
    }
}

impl Round {
    pub fn new(seats: Vec<PlayerId>) -> Self {
        Self {
            seats,
            history: Vec::new(),
            played: Vec::new(),
            last_non_pass: None,
            consecutive_passes: 0,
        }
    }

    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        if action.is_pass() {
            self.consecutive_passes += 1;
        } else {
            self.played.extend_from_slice(action.ranks());
            self.consecutive_passes = 0;
            self.last_non_pass = Some(player);
        }
        self.history.push(Turn { player, action });
    }

    pub fn last_valid_play(&self) -> Option<&Turn> {
        let player = self.last_non_pass?;
        self.history
            .iter()
            .rev()
            .find(|turn| turn.player == player)
    }

    pub fn to_beat(&self, actor: PlayerId) -> Option<&Action> {
        self.last_valid_play()
            .filter(|turn| turn.player != actor)
            .map(|turn| &turn.action)
    }

    pub fn phase_for(&self, actor: PlayerId) -> TrickPhase {
        if self.to_beat(actor).is_some() {
            TrickPhase::InProgress
        } else {
            TrickPhase::AwaitingLead
        }
    }

    pub fn next_player(&self, current: PlayerId) -> PlayerId {
        let first = self.seats.first().copied().unwrap_or_default();
        match self.seats.iter().position(|seat| *seat == current) {
            Some(idx) => self.seats[(idx + 1) % self.seats.len()],
            None => first,
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn last_non_pass_player(&self) -> Option<PlayerId> {
        self.last_non_pass
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn played_ranks(&self) -> Vec<Rank> {
        let mut ranks = self.played.clone();
        ranks.sort();
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(text: &str) -> Action {
        text.parse().expect("action")
    }

    #[test]
    fn fresh_round_awaits_lead() {
        let round = Round::default();
        assert!(round.last_valid_play().is_none());
        assert_eq!(round.phase_for(0), TrickPhase::AwaitingLead);
        assert_eq!(round.to_beat(2), None);
    }

    #[test]
    fn standing_play_survives_passes() {
        let mut round = Round::default();
        round.record_action(0, act("33"));
        round.record_action(1, Action::pass());
        assert_eq!(round.consecutive_passes(), 1);
        assert_eq!(round.to_beat(2), Some(&act("33")));
        assert_eq!(round.phase_for(2), TrickPhase::InProgress);
        round.record_action(2, Action::pass());
        assert_eq!(round.consecutive_passes(), 2);
        assert_eq!(round.last_non_pass_player(), Some(0));
        assert_eq!(round.phase_for(0), TrickPhase::AwaitingLead);
    }

    #[test]
    fn new_play_resets_passes_and_takes_over() {
        let mut round = Round::default();
        round.record_action(0, act("5"));
        round.record_action(1, Action::pass());
        round.record_action(2, act("K"));
        assert_eq!(round.consecutive_passes(), 0);
        let last = round.last_valid_play().expect("standing play");
        assert_eq!(last.player, 2);
        assert_eq!(last.action, act("K"));
        assert_eq!(round.history().len(), 3);
        assert_eq!(round.played_ranks(), vec![Rank::Five, Rank::King]);
    }

    #[test]
    fn seats_rotate_and_unknown_restarts() {
        let round = Round::default();
        assert_eq!(round.next_player(0), 1);
        assert_eq!(round.next_player(2), 0);
        assert_eq!(round.next_player(9), 0);
    }
}
