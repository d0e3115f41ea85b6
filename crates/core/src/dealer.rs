use crate::{Hand, PlayerId, Rank};

fn rank_weight(rank: Rank) -> i32 {
    match rank {
        Rank::RedJoker => 50,
        Rank::BlackJoker => 45,
        Rank::Two => 20,
        Rank::Ace => 12,
        Rank::King => 8,
        Rank::Queen => 6,
        Rank::Jack => 5,
        Rank::Ten => 4,
        _ => 1,
    }
}

fn group_bonus(count: u8) -> i32 {
    match count {
        2 => 10,
        3 => 25,
        4 => 40,
        _ => 0,
    }
}

pub fn hand_strength(hand: &Hand) -> i32 {
    hand.counts()
        .iter()
        .map(|(rank, count)| rank_weight(rank) * i32::from(count) + group_bonus(count))
        .sum()
}

pub fn choose_landlord(hands: &[Hand]) -> PlayerId {
    let mut best: Option<(PlayerId, i32)> = None;
    for (seat, hand) in hands.iter().enumerate() {
        let score = hand_strength(hand);
        if best.map(|(_, top)| score > top).unwrap_or(true) {
            best = Some((seat, score));
        }
    }
    best.map(|(seat, _)| seat).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_counts_weights_and_groups() {
        let hand = Hand::parse("33R").expect("hand");
        assert_eq!(hand_strength(&hand), 2 + 10 + 50);
        let bomb = Hand::parse("TTTT").expect("hand");
        assert_eq!(hand_strength(&bomb), 4 * 4 + 40);
    }

    #[test]
    fn strongest_seat_wins_and_ties_stay_low() {
        let hands = [
            Hand::parse("345").expect("hand"),
            Hand::parse("2BR").expect("hand"),
            Hand::parse("2BR").expect("hand"),
        ];
        assert_eq!(choose_landlord(&hands), 1);
        let even = [Hand::parse("3").expect("hand"), Hand::parse("4").expect("hand")];
        assert_eq!(choose_landlord(&even), 0);
    }
}
