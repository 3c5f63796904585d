//! Hand strength and showdown equity for heads-up Hold-Em.
//!
//! Cards are 32-bit keys that a five-card classifier can combine with a
//! handful of bitwise operations and one perfect-hash lookup. On top of
//! that sit a best-of-seven selector and a Monte Carlo simulator that
//! estimates how often a hand wins against a random opponent.
pub mod cards;
pub mod equity;
pub mod evaluation;

mod error;
pub use error::Error;

pub use equity::estimate_equity;
pub use evaluation::classify;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Showdown equities and draw frequencies.
pub type Probability = f32;

// ============================================================================
// CARD CONSTANTS
// ============================================================================
/// Cards in a standard deck.
pub const N_CARDS: usize = 52;
/// Community cards by the river.
pub const N_BOARD: usize = 5;

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Trials per equity estimate unless overridden by EQUITY_TRIALS.
pub const DEFAULT_TRIALS: usize = 10_000;
/// Trials run by one rayon task in a parallel estimate.
pub const TRIALS_PER_TASK: usize = 1_024;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Trials per estimate, read from the EQUITY_TRIALS env var when it
/// holds a positive integer. [`equity::Simulator::estimate`] runs this many.
pub fn trials() -> usize {
    match std::env::var("EQUITY_TRIALS").map(|s| s.parse::<usize>()) {
        Ok(Ok(n)) if n > 0 => n,
        Ok(_) => {
            log::warn!("{:<32}{:<32}", "ignoring EQUITY_TRIALS", DEFAULT_TRIALS);
            DEFAULT_TRIALS
        }
        Err(_) => DEFAULT_TRIALS,
    }
}

/// Initialize terminal logging at INFO, or DEBUG to see every simulation.
#[cfg(feature = "logging")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match std::env::var("EQUITY_DEBUG") {
        Ok(_) => log::LevelFilter::Debug,
        Err(_) => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_constants() {
        assert_eq!(cards::Deck::new().size(), N_CARDS);
        assert!(trials() > 0);
        assert!(TRIALS_PER_TASK <= DEFAULT_TRIALS);
    }
}
