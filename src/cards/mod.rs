//! Card keys and the card population.
//!
//! - [`Card`]: a single card as one 32-bit key (prime, rank, suit bit, rank bit)
//! - [`Hand`]: an unordered set of cards as a 52-bit mask
//! - [`Hole`] / [`Board`]: the player's private cards and the community cards
//! - [`Deck`]: the population that is shuffled and sampled from
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
