use crate::{parse_ranks, Card, CardError, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RankCounts {
    counts: [u8; Rank::COUNT],
}

impl RankCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut counts = Self::new();
        for rank in ranks {
            counts.add(rank, 1);
        }
        counts
    }

    pub fn get(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    pub fn add(&mut self, rank: Rank, count: u8) {
        let slot = &mut self.counts[rank.index()];
        *slot = slot.saturating_add(count);
    }

    pub fn take(&mut self, rank: Rank, count: u8) {
        let slot = &mut self.counts[rank.index()];
        *slot = slot.saturating_sub(count);
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|count| *count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, self.get(rank)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn distinct(&self) -> usize {
        self.iter().count()
    }

    pub fn ranks_with_at_least(&self, min: u8) -> impl Iterator<Item = Rank> + '_ {
        self.iter()
            .filter(move |(_, count)| *count >= min)
            .map(|(rank, _)| rank)
    }

    pub fn rank_with(&self, count: u8) -> Option<Rank> {
        self.iter()
            .find(|(_, held)| *held == count)
            .map(|(rank, _)| rank)
    }

    pub fn all_exactly(&self, count: u8) -> bool {
        !self.is_empty() && self.iter().all(|(_, held)| held == count)
    }

    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn to_ranks(&self) -> Vec<Rank> {
        let mut ranks = Vec::with_capacity(self.total());
        for (rank, count) in self.iter() {
            ranks.extend(std::iter::repeat(rank).take(count as usize));
        }
        ranks
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn parse(text: &str) -> Result<Self, CardError> {
        let ranks = parse_ranks(text)?;
        Ok(Self::new(ranks.into_iter().map(Card::from_rank).collect()))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn counts(&self) -> RankCounts {
        RankCounts::from_ranks(self.cards.iter().map(|card| card.rank))
    }

    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.sort();
    }

    /// Removes one card per requested rank. Ranks that are not held are
    /// logged and skipped; the removed cards are returned.
    pub fn remove_cards(&mut self, ranks: &[Rank]) -> Vec<Card> {
        let mut removed = Vec::with_capacity(ranks.len());
        for &rank in ranks {
            match self.cards.iter().position(|card| card.rank == rank) {
                Some(idx) => removed.push(self.cards.remove(idx)),
                None => log::warn!("attempted to remove rank {} not held in hand", rank),
            }
        }
        removed
    }

    pub fn encoding(&self) -> String {
        self.cards.iter().map(|card| card.rank.symbol()).collect()
    }

    fn sort(&mut self) {
        self.cards.sort();
    }
}
