use crate::{Hand, PlayerId, PLAYER_COUNT};

pub fn is_game_over(hands: &[Hand]) -> bool {
    hands.iter().any(Hand::is_empty)
}

pub fn winner(hands: &[Hand]) -> Option<PlayerId> {
    hands.iter().position(Hand::is_empty)
}

pub fn payoff(winner: PlayerId, landlord: PlayerId) -> [i32; PLAYER_COUNT] {
    let mut payoff = [0; PLAYER_COUNT];
    if winner == landlord {
        payoff[landlord] = 1;
    } else {
        for (seat, score) in payoff.iter_mut().enumerate() {
            if seat != landlord {
                *score = 1;
            }
        }
    }
    payoff
}
