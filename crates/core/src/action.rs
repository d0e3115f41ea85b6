use crate::{classify, parse_ranks, ranks_to_string, CardError, Pattern, Rank, RankCounts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Action {
    ranks: Vec<Rank>,
}

impl Action {
    pub const PASS: &'static str = "pass";

    pub fn new(ranks: Vec<Rank>) -> Self {
        Self { ranks }
    }

    pub fn pass() -> Self {
        Self::default()
    }

    pub fn rocket() -> Self {
        Self::new(vec![Rank::BlackJoker, Rank::RedJoker])
    }

    pub fn repeated(rank: Rank, count: usize) -> Self {
        Self::new(vec![rank; count])
    }

    pub fn is_pass(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn counts(&self) -> RankCounts {
        RankCounts::from_ranks(self.ranks.iter().copied())
    }

    pub fn pattern(&self) -> Pattern {
        classify(&self.ranks)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            f.write_str(Self::PASS)
        } else {
            f.write_str(&ranks_to_string(&self.ranks))
        }
    }
}

impl FromStr for Action {
    type Err = CardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::PASS) {
            return Ok(Self::pass());
        }
        parse_ranks(trimmed).map(Self::new)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
