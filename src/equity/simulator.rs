use super::tally::Tally;
use crate::Error;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::evaluation::BestHand;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Monte Carlo showdown equity for one player's hole cards against a
/// random opponent, given whatever part of the board is already known.
///
/// Each trial deals the opponent's two cards and the rest of the board
/// uniformly without replacement from the cards nobody has seen, then
/// compares best hands. With a fixed opponent only the board is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    hole: Hole,
    board: Board,
    villain: Option<Hole>,
}

impl Simulator {
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> Board {
        self.board
    }

    /// Fix the opponent's hand instead of dealing it.
    pub fn against(self, villain: Hole) -> Result<Self, Error> {
        if self.known().overlaps(&Hand::from(villain)) {
            return Err(Error::invalid(format!(
                "opponent {} collides with {} {}",
                villain, self.hole, self.board
            )));
        }
        Ok(Self {
            villain: Some(villain),
            ..self
        })
    }

    /// every card whose location is already determined
    fn known(&self) -> Hand {
        let known = Hand::add(Hand::from(self.hole), Hand::from(self.board));
        match self.villain {
            Some(villain) => Hand::add(known, Hand::from(villain)),
            None => known,
        }
    }
    /// cards each trial has to draw
    fn n_dealt(&self) -> usize {
        match self.villain {
            Some(_) => self.board.n_unseen(),
            None => self.board.n_unseen() + 2,
        }
    }

    pub fn equity<R>(&self, trials: usize, rng: &mut R) -> Result<Probability, Error>
    where
        R: Rng + ?Sized,
    {
        self.tally(trials, rng).map(|tally| tally.equity())
    }

    /// Equity over the configured number of trials, see [`crate::trials`].
    pub fn estimate<R>(&self, rng: &mut R) -> Result<Probability, Error>
    where
        R: Rng + ?Sized,
    {
        self.equity(crate::trials(), rng)
    }

    /// Runs exactly `trials` showdowns on the caller's generator.
    pub fn tally<R>(&self, trials: usize, rng: &mut R) -> Result<Tally, Error>
    where
        R: Rng + ?Sized,
    {
        if trials == 0 {
            return Err(Error::invalid("equity needs at least one trial"));
        }
        let ref mut unseen = Deck::new().without(self.known());
        let mut tally = Tally::default();
        for _ in 0..trials {
            let dealt = unseen.deal(self.n_dealt(), rng)?;
            let (hero, villain) = self.showdown(dealt);
            tally.record(&hero, &villain);
        }
        log::debug!("{:<32}{:<32}{}", "simulated showdowns", self, tally);
        Ok(tally)
    }

    /// Splits `trials` into fixed-size tasks on the rayon pool. Each task
    /// seeds its own generator from `seed` and its index, so the result
    /// depends only on `seed` and never on scheduling.
    pub fn parallel(&self, trials: usize, seed: u64) -> Result<Tally, Error> {
        if trials == 0 {
            return Err(Error::invalid("equity needs at least one trial"));
        }
        let tasks = trials.div_ceil(crate::TRIALS_PER_TASK);
        log::debug!("{:<32}{:<32}{}", "splitting simulation", self, tasks);
        (0..tasks)
            .into_par_iter()
            .map(|task| {
                let size = crate::TRIALS_PER_TASK.min(trials - task * crate::TRIALS_PER_TASK);
                let ref mut rng = SmallRng::seed_from_u64(seed ^ (task as u64).rotate_left(32));
                self.tally(size, rng)
            })
            .try_reduce(Tally::default, |a, b| Ok(a + b))
    }

    /// best hands for both players, given the cards one trial dealt
    fn showdown(&self, dealt: &[Card]) -> (BestHand, BestHand) {
        let (villain, runout) = match self.villain {
            Some(villain) => (villain.cards(), dealt),
            None => ([dealt[0], dealt[1]], &dealt[2..]),
        };
        let [a, b] = self.hole.cards();
        let mut board = [a; 5];
        for (slot, card) in board.iter_mut().zip(self.board.cards().chain(runout.iter().copied())) {
            *slot = card;
        }
        let [c, d] = villain;
        let [e, f, g, h, i] = board;
        let hero = BestHand::search(&[a, b, e, f, g, h, i]);
        let villain = BestHand::search(&[c, d, e, f, g, h, i]);
        (hero, villain)
    }
}

impl TryFrom<(Hole, Board)> for Simulator {
    type Error = Error;
    fn try_from((hole, board): (Hole, Board)) -> Result<Self, Self::Error> {
        if Hand::from(hole).overlaps(&Hand::from(board)) {
            return Err(Error::invalid(format!("hole {} collides with board {}", hole, board)));
        }
        Ok(Self {
            hole,
            board,
            villain: None,
        })
    }
}

impl std::fmt::Display for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let street = self.board.street().map(|s| s.to_string()).unwrap_or_default();
        match self.villain {
            Some(villain) => write!(f, "{} v {} {} {}", self.hole, villain, street, self.board),
            None => write!(f, "{} {} {}", self.hole, street, self.board),
        }
    }
}

/// Probability that `hole` beats a random opponent hand once `board` is
/// completed at random, ties counted half, estimated over `trials` deals.
pub fn estimate_equity<R>(
    hole: &[Card],
    board: &[Card],
    trials: usize,
    rng: &mut R,
) -> Result<Probability, Error>
where
    R: Rng + ?Sized,
{
    let hole = Hole::try_from(hole)?;
    let board = Board::try_from(board)?;
    Simulator::try_from((hole, board))?.equity(trials, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(hole: &str, board: &str) -> Simulator {
        let hole = Hole::try_from(hole).unwrap();
        let board = Board::try_from(board).unwrap();
        Simulator::try_from((hole, board)).unwrap()
    }

    #[test]
    fn pocket_aces_dominate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let equity = simulator("As Ah", "").equity(20_000, rng).unwrap();
        assert!(equity > 0.80, "{}", equity);
        assert!(equity < 0.90, "{}", equity);
    }

    #[test]
    fn mirrored_holdings_split() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let villain = Hole::try_from("Ah Kc").unwrap();
        let equity = simulator("As Kd", "")
            .against(villain)
            .unwrap()
            .equity(10_000, rng)
            .unwrap();
        assert!((equity - 0.5).abs() < 0.05, "{}", equity);
    }

    #[test]
    fn board_plays_for_both() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let tally = simulator("2c 3d", "As Ks Qs Js Ts").tally(1_000, rng).unwrap();
        assert_eq!(tally.ties, 1_000);
        assert_eq!(tally.equity(), 0.5);
    }

    #[test]
    fn river_is_deterministic_against_a_fixed_hand() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let villain = Hole::try_from("Qd Qc").unwrap();
        let tally = simulator("Ah Kh", "2h 7h 9h Jc 3s")
            .against(villain)
            .unwrap()
            .tally(100, rng)
            .unwrap();
        assert_eq!(tally.wins, 100);
        assert_eq!(tally.draws, 100);
    }

    #[test]
    fn made_nuts_on_the_river() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let equity = simulator("Ah Kh", "Qh Jh Th 2c 3d").equity(2_000, rng).unwrap();
        assert_eq!(equity, 1.0);
    }

    #[test]
    fn estimate_uses_configured_trials() {
        let sim = simulator("Js Jh", "Jd 4c 9s");
        let a = sim.estimate(&mut SmallRng::seed_from_u64(8)).unwrap();
        let b = sim
            .equity(crate::trials(), &mut SmallRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a, b);
        assert!(a > 0.85, "{}", a);
    }

    #[test]
    fn parallel_is_reproducible() {
        let sim = simulator("Td 9d", "8d 2s Jc");
        let a = sim.parallel(5_000, 11).unwrap();
        let b = sim.parallel(5_000, 11).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.trials(), 5_000);
        assert!(a.draw_rate() > 0.);
    }

    #[test]
    fn rejects_bad_inputs() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let hole = Card::parse("As Ah").unwrap();
        let board = Card::parse("As 2c 3d").unwrap();
        let trips = Card::parse("As Ah Ad").unwrap();
        let river = Card::parse("2c 3d 4h 5s 6c 7d").unwrap();
        assert!(matches!(estimate_equity(&hole, &board, 100, rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(estimate_equity(&trips, &[], 100, rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(estimate_equity(&hole, &river, 100, rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(estimate_equity(&hole, &[], 0, rng), Err(Error::InvalidArgument(_))));
        assert!(simulator("As Ah", "").parallel(0, 0).is_err());
        let villain = Hole::try_from("As Kd").unwrap();
        assert!(simulator("As Ah", "").against(villain).is_err());
    }

    #[test]
    fn free_function_matches_simulator() {
        let hole = Card::parse("7c 7d").unwrap();
        let board = Card::parse("Kh 7s 2d").unwrap();
        let a = estimate_equity(&hole, &board, 3_000, &mut SmallRng::seed_from_u64(6)).unwrap();
        let b = simulator("7c 7d", "Kh 7s 2d")
            .equity(3_000, &mut SmallRng::seed_from_u64(6))
            .unwrap();
        assert_eq!(a, b);
        assert!(a > 0.85, "{}", a);
    }
}
