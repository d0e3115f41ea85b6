use std::collections::HashSet;

use doudizhu_core::{
    all_patterns, classify, find_airplanes, find_airplanes_with_attachments, find_bombs,
    find_four_with_two, find_pair_chains, find_pairs, find_solos, find_straights,
    find_trio_with_pair, find_trio_with_single, find_trios, legal_actions, sort_unique, Action,
    Deck, Hand, Pattern, PatternKind, Rank, RankCounts, RngState, HAND_SIZE,
};
use proptest::prelude::*;

fn deck_ranks() -> Vec<Rank> {
    Deck::full().cards.iter().map(|card| card.rank).collect()
}

fn hand_from(ranks: &[Rank]) -> Hand {
    Hand::new(ranks.iter().copied().map(doudizhu_core::Card::from_rank).collect())
}

fn fits_in(action: &Action, counts: &RankCounts) -> bool {
    action
        .counts()
        .iter()
        .all(|(rank, count)| counts.get(rank) >= count)
}

/// The size attribute matches the play's length and the comparison rank is
/// the top core rank the finder put first (or last, for chains).
fn matches_build(action: &Action) -> bool {
    let ranks = action.ranks();
    let len = ranks.len();
    match action.pattern() {
        Pattern::Straight { top, length } => length == len && ranks.last() == Some(&top),
        Pattern::PairChain { top, pairs } => pairs * 2 == len && ranks.last() == Some(&top),
        Pattern::Airplane { top, trios } => trios * 3 == len && ranks.last() == Some(&top),
        Pattern::AirplaneSingle { top, trios } => {
            trios * 4 == len && ranks.get(3 * trios - 1) == Some(&top)
        }
        Pattern::AirplanePair { top, trios } => {
            trios * 5 == len && ranks.get(3 * trios - 1) == Some(&top)
        }
        Pattern::Solo { rank }
        | Pattern::Pair { rank }
        | Pattern::Trio { rank }
        | Pattern::Bomb { rank }
        | Pattern::TrioSingle { rank }
        | Pattern::TrioPair { rank }
        | Pattern::FourTwoSingle { rank }
        | Pattern::FourTwoPair { rank } => ranks.first() == Some(&rank),
        Pattern::Rocket | Pattern::Invalid => false,
    }
}

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(64)
}

proptest! {
    #![proptest_config(config())]

    /// Every rank multiset classifies, and only invalid plays report -1.
    #[test]
    fn classify_is_total(
        ranks in prop::collection::vec(prop::sample::select(Rank::ALL.to_vec()), 0..14),
    ) {
        let pattern = classify(&ranks);
        prop_assert_eq!(pattern.is_valid(), pattern.main_value() != -1);
        prop_assert_eq!(pattern.kind() == PatternKind::Invalid, !pattern.is_valid());
    }

    /// Each family finder only yields plays the classifier puts in that family.
    #[test]
    fn finders_agree_with_classifier(ranks in prop::sample::subsequence(deck_ranks(), 0..=20)) {
        let counts = RankCounts::from_ranks(ranks.iter().copied());
        let families: Vec<(Vec<Action>, Vec<PatternKind>)> = vec![
            (find_solos(&counts), vec![PatternKind::Solo]),
            (find_pairs(&counts), vec![PatternKind::Pair]),
            (find_trios(&counts), vec![PatternKind::Trio]),
            (find_trio_with_single(&counts), vec![PatternKind::TrioSingle]),
            (find_trio_with_pair(&counts), vec![PatternKind::TrioPair]),
            (find_straights(&counts), vec![PatternKind::Straight]),
            (find_pair_chains(&counts), vec![PatternKind::PairChain]),
            (find_airplanes(&counts), vec![PatternKind::Airplane]),
            (
                find_airplanes_with_attachments(&counts),
                vec![PatternKind::AirplaneSingle, PatternKind::AirplanePair],
            ),
            (
                find_four_with_two(&counts),
                vec![PatternKind::FourTwoSingle, PatternKind::FourTwoPair],
            ),
            (find_bombs(&counts), vec![PatternKind::Bomb]),
        ];
        for (actions, kinds) in families {
            for action in actions {
                let kind = action.pattern().kind();
                prop_assert!(kinds.contains(&kind), "{} classified as {:?}", action, kind);
                prop_assert!(fits_in(&action, &counts), "{} is not held", action);
                prop_assert!(
                    matches_build(&action),
                    "{} classified as {:?}",
                    action,
                    action.pattern()
                );
            }
        }
    }

    /// Leads are valid, held, unique, and already in presentation order.
    #[test]
    fn leads_are_unique_and_sorted(ranks in prop::sample::subsequence(deck_ranks(), 0..=20)) {
        let hand = hand_from(&ranks);
        let counts = hand.counts();
        let leads = legal_actions(&hand, None);
        let unique: HashSet<&Action> = leads.iter().collect();
        prop_assert_eq!(unique.len(), leads.len());
        prop_assert_eq!(sort_unique(leads.clone()), leads.clone());
        prop_assert_eq!(all_patterns(&counts), leads.clone());
        for action in &leads {
            prop_assert!(!action.is_pass());
            prop_assert!(action.pattern().is_valid(), "{} is invalid", action);
            prop_assert!(fits_in(action, &counts));
        }
        prop_assert_eq!(leads.is_empty(), hand.is_empty());
    }

    /// Every response other than pass beats the standing play.
    #[test]
    fn responses_beat_the_lead(seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut deck = Deck::full();
        deck.shuffle(&mut RngState::from_seed(seed));
        let deal = deck.deal();
        let leads = legal_actions(&deal.hands[0], None);
        prop_assert_eq!(deal.hands[0].len(), HAND_SIZE);
        let lead = pick.get(&leads);

        let responses = legal_actions(&deal.hands[1], Some(lead));
        prop_assert!(responses.first().is_some_and(Action::is_pass));
        let unique: HashSet<&Action> = responses.iter().collect();
        prop_assert_eq!(unique.len(), responses.len());
        let standing = lead.pattern();
        for response in responses.iter().skip(1) {
            prop_assert!(
                response.pattern().beats(&standing),
                "{} does not beat {}",
                response,
                lead
            );
            prop_assert!(fits_in(response, &deal.hands[1].counts()));
        }
    }
}
