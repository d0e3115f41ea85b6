use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    pub const COUNT: usize = 15;

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    pub const SUITED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    const SYMBOLS: [char; Rank::COUNT] = [
        '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A', '2', 'B', 'R',
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Self::ALL.get(index).copied()
    }

    pub fn symbol(self) -> char {
        Self::SYMBOLS[self.index()]
    }

    pub fn from_symbol(symbol: char) -> Result<Rank, CardError> {
        let upper = symbol.to_ascii_uppercase();
        Self::SYMBOLS
            .iter()
            .position(|candidate| *candidate == upper)
            .and_then(Rank::from_index)
            .ok_or(CardError::UnknownRank(symbol))
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    pub fn in_straight_range(self) -> bool {
        self <= Rank::Ace
    }

    pub fn before(self) -> Option<Rank> {
        self.index().checked_sub(1).and_then(Rank::from_index)
    }

    pub fn after(self) -> Option<Rank> {
        Rank::from_index(self.index() + 1)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("unknown rank symbol '{0}'")]
    UnknownRank(char),
}

pub fn parse_ranks(text: &str) -> Result<Vec<Rank>, CardError> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Rank::from_symbol)
        .collect()
}

pub fn ranks_to_string(ranks: &[Rank]) -> String {
    ranks.iter().map(|rank| rank.symbol()).collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub rank: Rank,
    #[serde(default)]
    pub suit: Option<Suit>,
}

impl Card {
    pub fn suited(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub fn joker(rank: Rank) -> Self {
        Self { rank, suit: None }
    }

    pub fn from_rank(rank: Rank) -> Self {
        Self { rank, suit: None }
    }
}
