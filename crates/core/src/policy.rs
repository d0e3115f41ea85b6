use crate::{Action, PlayerView, Policy, RngState};

/// Plays the longest legal action, keeping list order on ties, and passes
/// only when nothing else is allowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn select(&mut self, view: &PlayerView<'_>) -> Action {
        let mut best: Option<&Action> = None;
        for action in view.legal.iter().filter(|action| !action.is_pass()) {
            if best.map(|top| action.len() > top.len()).unwrap_or(true) {
                best = Some(action);
            }
        }
        best.cloned().unwrap_or_else(Action::pass)
    }
}

#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: RngState,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select(&mut self, view: &PlayerView<'_>) -> Action {
        self.rng.choose(view.legal).cloned().unwrap_or_else(Action::pass)
    }
}
