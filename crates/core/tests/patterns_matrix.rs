use doudizhu_core::{classify, parse_ranks, Action, Pattern, PatternKind, Rank};

fn identify(text: &str) -> Pattern {
    let action: Action = text.parse().expect("encoding");
    action.pattern()
}

macro_rules! classify_case {
    ($name:ident, $encoding:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(identify($encoding), $expected);
        }
    };
}

classify_case!(pass_is_invalid, "pass", Pattern::Invalid);
classify_case!(empty_is_invalid, "", Pattern::Invalid);
classify_case!(rocket, "BR", Pattern::Rocket);
classify_case!(rocket_reversed, "RB", Pattern::Rocket);
classify_case!(bomb, "7777", Pattern::Bomb { rank: Rank::Seven });
classify_case!(joker_quad_is_not_a_bomb, "BBBB", Pattern::Invalid);
classify_case!(solo, "9", Pattern::Solo { rank: Rank::Nine });
classify_case!(solo_joker, "B", Pattern::Solo { rank: Rank::BlackJoker });
classify_case!(pair, "TT", Pattern::Pair { rank: Rank::Ten });
classify_case!(mixed_two_cards, "34", Pattern::Invalid);
classify_case!(trio, "KKK", Pattern::Trio { rank: Rank::King });
classify_case!(trio_single, "3334", Pattern::TrioSingle { rank: Rank::Three });
classify_case!(
    trio_single_kicker_first,
    "4333",
    Pattern::TrioSingle { rank: Rank::Three }
);
classify_case!(
    trio_single_joker_kicker,
    "333R",
    Pattern::TrioSingle { rank: Rank::Three }
);
classify_case!(trio_pair, "33344", Pattern::TrioPair { rank: Rank::Three });
classify_case!(trio_with_two_singles, "333BR", Pattern::Invalid);
classify_case!(
    four_two_single,
    "555534",
    Pattern::FourTwoSingle { rank: Rank::Five }
);
classify_case!(
    four_two_single_same_rank_kickers,
    "555566",
    Pattern::FourTwoSingle { rank: Rank::Five }
);
classify_case!(four_with_split_rocket, "5555BR", Pattern::Invalid);
classify_case!(
    four_two_pair,
    "55556677",
    Pattern::FourTwoPair { rank: Rank::Five }
);
classify_case!(two_fours, "55556666", Pattern::Invalid);
classify_case!(
    straight,
    "34567",
    Pattern::Straight {
        top: Rank::Seven,
        length: 5
    }
);
classify_case!(
    straight_to_ace,
    "TJQKA",
    Pattern::Straight {
        top: Rank::Ace,
        length: 5
    }
);
classify_case!(straight_through_two, "JQKA2", Pattern::Invalid);
classify_case!(straight_with_gap, "34568", Pattern::Invalid);
classify_case!(
    pair_chain,
    "334455",
    Pattern::PairChain {
        top: Rank::Five,
        pairs: 3
    }
);
classify_case!(two_pairs_are_not_a_chain, "3344", Pattern::Invalid);
classify_case!(
    airplane,
    "333444",
    Pattern::Airplane {
        top: Rank::Four,
        trios: 2
    }
);
classify_case!(airplane_with_two, "AAA222", Pattern::Invalid);
classify_case!(
    airplane_single,
    "33344456",
    Pattern::AirplaneSingle {
        top: Rank::Four,
        trios: 2
    }
);
classify_case!(
    airplane_single_three_trios,
    "333444555789",
    Pattern::AirplaneSingle {
        top: Rank::Five,
        trios: 3
    }
);
classify_case!(
    airplane_single_at_the_top,
    "KKKAAA2B",
    Pattern::AirplaneSingle {
        top: Rank::Ace,
        trios: 2
    }
);
classify_case!(
    airplane_pair,
    "3334445566",
    Pattern::AirplanePair {
        top: Rank::Four,
        trios: 2
    }
);
classify_case!(airplane_split_rocket, "333444BR", Pattern::Invalid);
classify_case!(airplane_repeated_single, "33344455", Pattern::Invalid);
classify_case!(airplane_kicker_makes_four, "33344434", Pattern::Invalid);

#[test]
fn main_values_follow_rank_order() {
    assert_eq!(identify("BR").main_value(), 999);
    assert_eq!(identify("3334").main_value(), 0);
    assert_eq!(identify("7777").main_value(), 4);
    assert_eq!(identify("2").main_value(), 12);
    assert_eq!(identify("pass").main_value(), -1);
    assert_eq!(identify("3456").main_value(), -1);
}

#[test]
fn size_attributes_per_kind() {
    assert_eq!(identify("3334").core_count(), Some(1));
    assert_eq!(identify("333444555").core_count(), Some(3));
    assert_eq!(identify("34567").core_count(), None);
    assert_eq!(identify("34567").kind().id(), "straight");
    assert_eq!(identify("3334445566").kind(), PatternKind::AirplanePair);
}

#[test]
fn classify_accepts_raw_rank_slices() {
    let ranks = parse_ranks("JJQQKK").expect("ranks");
    assert_eq!(
        classify(&ranks),
        Pattern::PairChain {
            top: Rank::King,
            pairs: 3
        }
    );
}

#[test]
fn oversized_plays_are_invalid() {
    assert_eq!(identify(&"3".repeat(256)), Pattern::Invalid);
    assert_eq!(identify(&"3".repeat(54)), Pattern::Invalid);
    let long: String = "3456789TJQKA".repeat(30);
    assert_eq!(identify(&long).main_value(), -1);
}
