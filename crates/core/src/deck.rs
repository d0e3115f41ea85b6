use crate::{Card, Hand, Rank, RngState, Suit, PLAYER_COUNT};

pub const HAND_SIZE: usize = 17;
pub const KITTY_SIZE: usize = 3;
pub const DECK_SIZE: usize = HAND_SIZE * PLAYER_COUNT + KITTY_SIZE;

#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Hand; PLAYER_COUNT],
    pub kitty: Vec<Card>,
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::SUITED {
                cards.push(Card::suited(rank, suit));
            }
        }
        cards.push(Card::joker(Rank::BlackJoker));
        cards.push(Card::joker(Rank::RedJoker));
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Deals round-robin: card `i` goes to seat `i % 3`, the last three form
    /// the kitty.
    pub fn deal(self) -> Deal {
        let mut seats: [Vec<Card>; PLAYER_COUNT] = Default::default();
        let mut kitty = Vec::with_capacity(KITTY_SIZE);
        let dealt = HAND_SIZE * PLAYER_COUNT;
        for (idx, card) in self.cards.into_iter().enumerate() {
            if idx < dealt {
                seats[idx % PLAYER_COUNT].push(card);
            } else {
                kitty.push(card);
            }
        }
        Deal {
            hands: seats.map(Hand::new),
            kitty,
        }
    }
}
