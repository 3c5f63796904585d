//! Exact hand strength.
//!
//! [`classify`] maps any five distinct cards to one of 7462 [`HandClass`]es
//! through precomputed perfect-hash tables. [`BestHand`] extends that to
//! six and seven cards by exhausting the 5-subsets. [`Strength`] is a
//! table-free bitwise evaluation used for labels and cross-checks.
pub mod best;
pub use best::*;

pub mod category;
pub use category::*;

pub mod class;
pub use class::*;

pub mod evaluator;
pub use evaluator::*;

pub mod kicks;
pub use kicks::*;

pub mod lookup;
pub use lookup::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

mod tables;
