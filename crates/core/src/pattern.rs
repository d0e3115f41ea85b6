use crate::{Rank, RankCounts, DECK_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    Invalid,
    Rocket,
    Bomb,
    Solo,
    Pair,
    Trio,
    TrioSingle,
    TrioPair,
    Straight,
    PairChain,
    Airplane,
    AirplaneSingle,
    AirplanePair,
    FourTwoSingle,
    FourTwoPair,
}

impl PatternKind {
    pub const ALL: [PatternKind; 15] = [
        PatternKind::Invalid,
        PatternKind::Rocket,
        PatternKind::Bomb,
        PatternKind::Solo,
        PatternKind::Pair,
        PatternKind::Trio,
        PatternKind::TrioSingle,
        PatternKind::TrioPair,
        PatternKind::Straight,
        PatternKind::PairChain,
        PatternKind::Airplane,
        PatternKind::AirplaneSingle,
        PatternKind::AirplanePair,
        PatternKind::FourTwoSingle,
        PatternKind::FourTwoPair,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PatternKind::Invalid => "invalid",
            PatternKind::Rocket => "rocket",
            PatternKind::Bomb => "bomb",
            PatternKind::Solo => "solo",
            PatternKind::Pair => "pair",
            PatternKind::Trio => "trio",
            PatternKind::TrioSingle => "trio_single",
            PatternKind::TrioPair => "trio_pair",
            PatternKind::Straight => "straight",
            PatternKind::PairChain => "pair_chain",
            PatternKind::Airplane => "airplane",
            PatternKind::AirplaneSingle => "airplane_single",
            PatternKind::AirplanePair => "airplane_pair",
            PatternKind::FourTwoSingle => "four_two_single",
            PatternKind::FourTwoPair => "four_two_pair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Invalid,
    Rocket,
    Bomb { rank: Rank },
    Solo { rank: Rank },
    Pair { rank: Rank },
    Trio { rank: Rank },
    TrioSingle { rank: Rank },
    TrioPair { rank: Rank },
    Straight { top: Rank, length: usize },
    PairChain { top: Rank, pairs: usize },
    Airplane { top: Rank, trios: usize },
    AirplaneSingle { top: Rank, trios: usize },
    AirplanePair { top: Rank, trios: usize },
    FourTwoSingle { rank: Rank },
    FourTwoPair { rank: Rank },
}

pub const ROCKET_VALUE: i32 = 999;
pub const INVALID_VALUE: i32 = -1;

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Invalid => PatternKind::Invalid,
            Pattern::Rocket => PatternKind::Rocket,
            Pattern::Bomb { .. } => PatternKind::Bomb,
            Pattern::Solo { .. } => PatternKind::Solo,
            Pattern::Pair { .. } => PatternKind::Pair,
            Pattern::Trio { .. } => PatternKind::Trio,
            Pattern::TrioSingle { .. } => PatternKind::TrioSingle,
            Pattern::TrioPair { .. } => PatternKind::TrioPair,
            Pattern::Straight { .. } => PatternKind::Straight,
            Pattern::PairChain { .. } => PatternKind::PairChain,
            Pattern::Airplane { .. } => PatternKind::Airplane,
            Pattern::AirplaneSingle { .. } => PatternKind::AirplaneSingle,
            Pattern::AirplanePair { .. } => PatternKind::AirplanePair,
            Pattern::FourTwoSingle { .. } => PatternKind::FourTwoSingle,
            Pattern::FourTwoPair { .. } => PatternKind::FourTwoPair,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Pattern::Invalid)
    }

    pub fn main_rank(&self) -> Option<Rank> {
        match *self {
            Pattern::Invalid | Pattern::Rocket => None,
            Pattern::Bomb { rank }
            | Pattern::Solo { rank }
            | Pattern::Pair { rank }
            | Pattern::Trio { rank }
            | Pattern::TrioSingle { rank }
            | Pattern::TrioPair { rank }
            | Pattern::FourTwoSingle { rank }
            | Pattern::FourTwoPair { rank } => Some(rank),
            Pattern::Straight { top, .. }
            | Pattern::PairChain { top, .. }
            | Pattern::Airplane { top, .. }
            | Pattern::AirplaneSingle { top, .. }
            | Pattern::AirplanePair { top, .. } => Some(top),
        }
    }

    pub fn main_value(&self) -> i32 {
        match self {
            Pattern::Invalid => INVALID_VALUE,
            Pattern::Rocket => ROCKET_VALUE,
            other => other
                .main_rank()
                .map(|rank| rank.value() as i32)
                .unwrap_or(INVALID_VALUE),
        }
    }

    pub fn core_count(&self) -> Option<usize> {
        match *self {
            Pattern::Trio { .. } | Pattern::TrioSingle { .. } | Pattern::TrioPair { .. } => Some(1),
            Pattern::Airplane { trios, .. }
            | Pattern::AirplaneSingle { trios, .. }
            | Pattern::AirplanePair { trios, .. } => Some(trios),
            _ => None,
        }
    }

    pub fn same_shape(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Invalid, _) | (_, Pattern::Invalid) => false,
            (Pattern::Straight { length: a, .. }, Pattern::Straight { length: b, .. }) => a == b,
            (Pattern::PairChain { pairs: a, .. }, Pattern::PairChain { pairs: b, .. }) => a == b,
            (Pattern::Airplane { trios: a, .. }, Pattern::Airplane { trios: b, .. })
            | (Pattern::AirplaneSingle { trios: a, .. }, Pattern::AirplaneSingle { trios: b, .. })
            | (Pattern::AirplanePair { trios: a, .. }, Pattern::AirplanePair { trios: b, .. }) => {
                a == b
            }
            _ => self.kind() == other.kind(),
        }
    }

    pub fn beats(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Invalid, _) | (_, Pattern::Invalid) => false,
            (_, Pattern::Rocket) => false,
            (Pattern::Rocket, _) => true,
            (Pattern::Bomb { rank: mine }, Pattern::Bomb { rank: theirs }) => mine > theirs,
            (Pattern::Bomb { .. }, _) => true,
            _ => self.same_shape(other) && self.main_value() > other.main_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kicker {
    Single,
    Pair,
}

/// Checks the kickers attached to an airplane core.
///
/// Rejects splitting the rocket as two single kickers, any rank whose total
/// use reaches four cards, and a kicker group on the rank directly below or
/// above the core that is large enough to have extended the core instead.
/// The last rule keeps a single physical play from being listed twice with a
/// different choice of core.
pub fn is_valid_airplane_attachment(core: &[Rank], kickers: &RankCounts, kind: Kicker) -> bool {
    let (Some(&low), Some(&high)) = (core.first(), core.last()) else {
        return false;
    };
    if kind == Kicker::Single
        && kickers.get(Rank::BlackJoker) == 1
        && kickers.get(Rank::RedJoker) == 1
    {
        return false;
    }
    let mut total = *kickers;
    for &rank in core {
        total.add(rank, 3);
    }
    if total.max_count() >= 4 {
        return false;
    }
    let extends_core = |edge: Option<Rank>| {
        edge.is_some_and(|rank| rank.in_straight_range() && total.get(rank) >= 3)
    };
    !(extends_core(low.before()) || extends_core(high.after()))
}

/// Every consecutive run inside the straight range whose ranks are each held
/// at least `min_count` times, with length at least `min_len`. Runs come out
/// block by block, shorter runs first, then by starting rank.
pub(crate) fn chain_windows(counts: &RankCounts, min_count: u8, min_len: usize) -> Vec<Vec<Rank>> {
    let eligible: Vec<Rank> = counts
        .ranks_with_at_least(min_count)
        .filter(|rank| rank.in_straight_range())
        .collect();
    let mut windows = Vec::new();
    for block in consecutive_blocks(&eligible) {
        for len in min_len..=block.len() {
            for run in block.windows(len) {
                windows.push(run.to_vec());
            }
        }
    }
    windows
}

fn consecutive_blocks(ranks: &[Rank]) -> Vec<&[Rank]> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for idx in 1..=ranks.len() {
        let breaks = idx == ranks.len() || ranks[idx].value() != ranks[idx - 1].value() + 1;
        if breaks {
            blocks.push(&ranks[start..idx]);
            start = idx;
        }
    }
    blocks
}

/// Classifies a play. Never fails: anything unrecognized is `Invalid`.
pub fn classify(ranks: &[Rank]) -> Pattern {
    if ranks.is_empty() || ranks.len() > DECK_SIZE {
        return Pattern::Invalid;
    }
    let counts = RankCounts::from_ranks(ranks.iter().copied());
    let len = ranks.len();
    let distinct = counts.distinct();

    if len == 2 && counts.get(Rank::BlackJoker) == 1 && counts.get(Rank::RedJoker) == 1 {
        return Pattern::Rocket;
    }
    if len == 4 {
        if let Some(rank) = counts.rank_with(4).filter(|rank| !rank.is_joker()) {
            return Pattern::Bomb { rank };
        }
    }
    if len == 1 {
        return Pattern::Solo { rank: ranks[0] };
    }
    if len == 2 && distinct == 1 && !ranks[0].is_joker() {
        return Pattern::Pair { rank: ranks[0] };
    }
    if len == 3 && distinct == 1 && !ranks[0].is_joker() {
        return Pattern::Trio { rank: ranks[0] };
    }
    if let Some(pattern) = classify_trio_with_kicker(&counts, len) {
        return pattern;
    }
    if let Some(pattern) = classify_four_with_two(&counts, len) {
        return pattern;
    }
    if let Some(pattern) = classify_chain(&counts, len) {
        return pattern;
    }
    classify_airplane_with_kickers(&counts, len).unwrap_or(Pattern::Invalid)
}

fn classify_trio_with_kicker(counts: &RankCounts, len: usize) -> Option<Pattern> {
    if counts.distinct() != 2 {
        return None;
    }
    let rank = counts.rank_with(3).filter(|rank| !rank.is_joker())?;
    match len {
        4 => counts
            .rank_with(1)
            .map(|_| Pattern::TrioSingle { rank }),
        5 => counts
            .rank_with(2)
            .filter(|pair| !pair.is_joker())
            .map(|_| Pattern::TrioPair { rank }),
        _ => None,
    }
}

fn classify_four_with_two(counts: &RankCounts, len: usize) -> Option<Pattern> {
    if len != 6 && len != 8 {
        return None;
    }
    let rank = counts.rank_with(4).filter(|rank| !rank.is_joker())?;
    let mut rest = *counts;
    rest.take(rank, 4);
    if len == 6 {
        let splits_rocket =
            rest.get(Rank::BlackJoker) == 1 && rest.get(Rank::RedJoker) == 1;
        return (!splits_rocket).then_some(Pattern::FourTwoSingle { rank });
    }
    let pairs_ok = rest.distinct() == 2
        && rest
            .iter()
            .all(|(kicker, held)| held == 2 && !kicker.is_joker());
    pairs_ok.then_some(Pattern::FourTwoPair { rank })
}

fn classify_chain(counts: &RankCounts, len: usize) -> Option<Pattern> {
    let width = match len {
        _ if len >= 5 && counts.all_exactly(1) => 1,
        _ if len >= 6 && len % 2 == 0 && counts.all_exactly(2) => 2,
        _ if len >= 6 && len % 3 == 0 && counts.all_exactly(3) => 3,
        _ => return None,
    };
    let ranks: Vec<Rank> = counts.iter().map(|(rank, _)| rank).collect();
    if !ranks.iter().all(|rank| rank.in_straight_range()) {
        return None;
    }
    if consecutive_blocks(&ranks).len() != 1 {
        return None;
    }
    let top = *ranks.last()?;
    let size = len / width;
    Some(match width {
        1 => Pattern::Straight { top, length: size },
        2 => Pattern::PairChain { top, pairs: size },
        _ => Pattern::Airplane { top, trios: size },
    })
}

fn classify_airplane_with_kickers(counts: &RankCounts, len: usize) -> Option<Pattern> {
    for core in chain_windows(counts, 3, 2) {
        let trios = core.len();
        let top = *core.last()?;
        let mut kickers = *counts;
        for &rank in &core {
            kickers.take(rank, 3);
        }
        if len == 4 * trios
            && kickers.total() == trios
            && kickers.max_count() <= 1
            && is_valid_airplane_attachment(&core, &kickers, Kicker::Single)
        {
            return Some(Pattern::AirplaneSingle { top, trios });
        }
        if len == 5 * trios
            && kickers.total() == 2 * trios
            && kickers.all_exactly(2)
            && !kickers.iter().any(|(rank, _)| rank.is_joker())
            && is_valid_airplane_attachment(&core, &kickers, Kicker::Pair)
        {
            return Some(Pattern::AirplanePair { top, trios });
        }
    }
    None
}
