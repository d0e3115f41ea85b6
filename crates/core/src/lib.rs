//! Dou Dizhu rules engine: play classification, legal move enumeration and
//! trick tracking. Keep this crate free of IO and platform concerns.

pub mod action;
pub mod cards;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod judge;
pub mod legal;
pub mod ordering;
pub mod pattern;
pub mod policy;
pub mod record;
pub mod rng;
pub mod round;
pub mod shapes;

pub use action::*;
pub use cards::*;
pub use config::*;
pub use dealer::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use judge::*;
pub use legal::*;
pub use ordering::*;
pub use pattern::*;
pub use policy::*;
pub use record::*;
pub use rng::*;
pub use round::*;
pub use shapes::*;
