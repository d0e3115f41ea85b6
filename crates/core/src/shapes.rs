use crate::pattern::chain_windows;
use crate::{is_valid_airplane_attachment, sort_unique, Action, Kicker, Rank, RankCounts};

/// Lazily yields every `k`-subset of `0..n` as ascending index tuples, in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.clone())
    }
}

fn play(groups: &[(Rank, usize)]) -> Action {
    let mut ranks = Vec::new();
    for &(rank, count) in groups {
        ranks.extend(std::iter::repeat(rank).take(count));
    }
    Action::new(ranks)
}

fn chain(run: &[Rank], width: usize) -> Action {
    let groups: Vec<(Rank, usize)> = run.iter().map(|&rank| (rank, width)).collect();
    play(&groups)
}

pub fn find_solos(counts: &RankCounts) -> Vec<Action> {
    sort_unique(counts.iter().map(|(rank, _)| Action::repeated(rank, 1)))
}

pub fn find_pairs(counts: &RankCounts) -> Vec<Action> {
    sort_unique(
        counts
            .ranks_with_at_least(2)
            .filter(|rank| !rank.is_joker())
            .map(|rank| Action::repeated(rank, 2)),
    )
}

pub fn find_trios(counts: &RankCounts) -> Vec<Action> {
    sort_unique(trio_ranks(counts).map(|rank| Action::repeated(rank, 3)))
}

fn trio_ranks(counts: &RankCounts) -> impl Iterator<Item = Rank> + '_ {
    counts
        .ranks_with_at_least(3)
        .filter(|rank| !rank.is_joker())
}

pub fn find_trio_with_single(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for trio in trio_ranks(counts) {
        for (single, _) in counts.iter().filter(|(rank, _)| *rank != trio) {
            out.push(play(&[(trio, 3), (single, 1)]));
        }
    }
    sort_unique(out)
}

pub fn find_trio_with_pair(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for trio in trio_ranks(counts) {
        for pair in counts
            .ranks_with_at_least(2)
            .filter(|rank| *rank != trio && !rank.is_joker())
        {
            out.push(play(&[(trio, 3), (pair, 2)]));
        }
    }
    sort_unique(out)
}

pub fn find_straights(counts: &RankCounts) -> Vec<Action> {
    sort_unique(
        chain_windows(counts, 1, 5)
            .iter()
            .map(|run| chain(run, 1)),
    )
}

pub fn find_pair_chains(counts: &RankCounts) -> Vec<Action> {
    sort_unique(
        chain_windows(counts, 2, 3)
            .iter()
            .map(|run| chain(run, 2)),
    )
}

pub fn find_airplanes(counts: &RankCounts) -> Vec<Action> {
    sort_unique(
        chain_windows(counts, 3, 2)
            .iter()
            .map(|run| chain(run, 3)),
    )
}

/// Airplanes with one single or one pair per trio. Single kickers are
/// distinct ranks; pair kickers are distinct non-joker ranks.
pub fn find_airplanes_with_attachments(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for core in chain_windows(counts, 3, 2) {
        let slots = core.len();
        let mut rest = *counts;
        for &rank in &core {
            rest.take(rank, 3);
        }
        let body = chain(&core, 3);

        let singles: Vec<Rank> = rest.iter().map(|(rank, _)| rank).collect();
        let pairs: Vec<Rank> = rest
            .ranks_with_at_least(2)
            .filter(|rank| !rank.is_joker())
            .collect();

        let families = [(&singles, Kicker::Single, 1u8), (&pairs, Kicker::Pair, 2u8)];
        for (candidates, kind, width) in families {
            for pick in Combinations::new(candidates.len(), slots) {
                let mut kickers = RankCounts::new();
                for idx in pick {
                    kickers.add(candidates[idx], width);
                }
                if !is_valid_airplane_attachment(&core, &kickers, kind) {
                    continue;
                }
                let mut ranks = body.ranks().to_vec();
                ranks.extend(kickers.to_ranks());
                out.push(Action::new(ranks));
            }
        }
    }
    sort_unique(out)
}

/// Four of a kind with two single kickers (never the split rocket) or two
/// distinct pairs.
pub fn find_four_with_two(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for four in counts
        .ranks_with_at_least(4)
        .filter(|rank| !rank.is_joker())
    {
        let mut rest = *counts;
        rest.take(four, 4);

        let singles = rest.to_ranks();
        for pick in Combinations::new(singles.len(), 2) {
            let (a, b) = (singles[pick[0]], singles[pick[1]]);
            if a.is_joker() && b.is_joker() && a != b {
                continue;
            }
            out.push(play(&[(four, 4), (a, 1), (b, 1)]));
        }

        let pairs: Vec<Rank> = rest
            .ranks_with_at_least(2)
            .filter(|rank| !rank.is_joker())
            .collect();
        for pick in Combinations::new(pairs.len(), 2) {
            out.push(play(&[(four, 4), (pairs[pick[0]], 2), (pairs[pick[1]], 2)]));
        }
    }
    sort_unique(out)
}

pub fn find_bombs(counts: &RankCounts) -> Vec<Action> {
    sort_unique(
        counts
            .ranks_with_at_least(4)
            .filter(|rank| !rank.is_joker())
            .map(|rank| Action::repeated(rank, 4)),
    )
}

pub fn filter_higher_bombs(counts: &RankCounts, value: i32) -> Vec<Action> {
    find_bombs(counts)
        .into_iter()
        .filter(|bomb| {
            bomb.ranks()
                .first()
                .is_some_and(|rank| i32::from(rank.value()) > value)
        })
        .collect()
}

pub fn has_rocket(counts: &RankCounts) -> bool {
    counts.get(Rank::BlackJoker) >= 1 && counts.get(Rank::RedJoker) >= 1
}

pub fn all_patterns(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    out.extend(find_solos(counts));
    out.extend(find_pairs(counts));
    out.extend(find_trios(counts));
    out.extend(find_trio_with_single(counts));
    out.extend(find_trio_with_pair(counts));
    out.extend(find_straights(counts));
    out.extend(find_pair_chains(counts));
    out.extend(find_airplanes(counts));
    out.extend(find_airplanes_with_attachments(counts));
    out.extend(find_four_with_two(counts));
    out.extend(find_bombs(counts));
    if has_rocket(counts) {
        out.push(Action::rocket());
    }
    sort_unique(out)
}
