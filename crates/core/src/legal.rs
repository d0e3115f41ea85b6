use crate::{
    all_patterns, filter_higher_bombs, find_airplanes, find_airplanes_with_attachments,
    find_bombs, find_four_with_two, find_pair_chains, find_pairs, find_solos, find_straights,
    find_trio_with_pair, find_trio_with_single, find_trios, has_rocket, sort_unique, Action, Hand,
    Pattern, PlayerId, RankCounts, Round,
};

/// Hand instances of the same shape and size as `last` with a strictly
/// higher main rank. Bombs and the rocket are not included here.
pub fn find_same_pattern_stronger(counts: &RankCounts, last: &Pattern) -> Vec<Action> {
    let candidates = match last {
        Pattern::Solo { .. } => find_solos(counts),
        Pattern::Pair { .. } => find_pairs(counts),
        Pattern::Trio { .. } => find_trios(counts),
        Pattern::TrioSingle { .. } => find_trio_with_single(counts),
        Pattern::TrioPair { .. } => find_trio_with_pair(counts),
        Pattern::Straight { .. } => find_straights(counts),
        Pattern::PairChain { .. } => find_pair_chains(counts),
        Pattern::Airplane { .. } => find_airplanes(counts),
        Pattern::AirplaneSingle { .. } | Pattern::AirplanePair { .. } => {
            find_airplanes_with_attachments(counts)
        }
        Pattern::FourTwoSingle { .. } | Pattern::FourTwoPair { .. } => find_four_with_two(counts),
        Pattern::Invalid | Pattern::Rocket | Pattern::Bomb { .. } => Vec::new(),
    };
    candidates
        .into_iter()
        .filter(|candidate| {
            let pattern = candidate.pattern();
            pattern.same_shape(last) && pattern.beats(last)
        })
        .collect()
}

/// Every legal action for `hand` when `to_beat` is the standing play.
///
/// With nothing to beat the player leads: every shape is offered and passing
/// is not. Otherwise `pass` is always offered.
pub fn legal_actions(hand: &Hand, to_beat: Option<&Action>) -> Vec<Action> {
    let counts = hand.counts();
    let Some(last) = to_beat.filter(|action| !action.is_pass()) else {
        return all_patterns(&counts);
    };
    let last = last.pattern();
    let mut actions = vec![Action::pass()];
    match last {
        Pattern::Invalid => {
            log::debug!("standing play is unclassifiable, offering every shape");
            actions.extend(all_patterns(&counts));
            return sort_unique(actions);
        }
        Pattern::Rocket => return actions,
        Pattern::Bomb { .. } => {
            actions.extend(filter_higher_bombs(&counts, last.main_value()));
        }
        _ => {
            actions.extend(find_same_pattern_stronger(&counts, &last));
            actions.extend(find_bombs(&counts));
        }
    }
    if has_rocket(&counts) {
        actions.push(Action::rocket());
    }
    sort_unique(actions)
}

pub fn legal_actions_for(hand: &Hand, round: &Round, actor: PlayerId) -> Vec<Action> {
    legal_actions(hand, round.to_beat(actor))
}
