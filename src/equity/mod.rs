//! Monte Carlo showdown equity.
pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;
