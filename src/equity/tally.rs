use crate::Probability;
use crate::evaluation::BestHand;

/// Showdown outcomes accumulated over a batch of simulated trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    /// trials where the player made a straight or flush and the opponent did not
    pub draws: usize,
}

impl Tally {
    pub fn trials(&self) -> usize {
        self.wins + self.ties + self.losses
    }

    /// Wins plus half the ties, over all trials. An empty tally has no
    /// information and reports zero.
    pub fn equity(&self) -> Probability {
        match self.trials() {
            0 => 0.,
            n => (2 * self.wins + self.ties) as Probability / (2 * n) as Probability,
        }
    }
    pub fn draw_rate(&self) -> Probability {
        match self.trials() {
            0 => 0.,
            n => self.draws as Probability / n as Probability,
        }
    }

    pub fn record(&mut self, hero: &BestHand, villain: &BestHand) {
        match hero.class().cmp(&villain.class()) {
            std::cmp::Ordering::Less => self.wins += 1,
            std::cmp::Ordering::Equal => self.ties += 1,
            std::cmp::Ordering::Greater => self.losses += 1,
        }
        if hero.category().completes_draw() && !villain.category().completes_draw() {
            self.draws += 1;
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
            draws: self.draws + rhs.draws,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "W {:<8} T {:<8} L {:<8} equity {:.3} draws {:.3}",
            self.wins,
            self.ties,
            self.losses,
            self.equity(),
            self.draw_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(s: &str) -> BestHand {
        BestHand::try_from(s).unwrap()
    }

    #[test]
    fn ties_count_half() {
        let tally = Tally {
            wins: 3,
            ties: 2,
            losses: 5,
            draws: 0,
        };
        assert_eq!(tally.trials(), 10);
        assert!((tally.equity() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn record_outcomes() {
        let mut tally = Tally::default();
        let flush = best("Ah 9h 7h 4h 2h Kd Qc");
        let pair = best("As Ad 9c 7s 4d Kd Qc");
        tally.record(&flush, &pair);
        tally.record(&pair, &flush);
        tally.record(&pair, &pair);
        assert_eq!((tally.wins, tally.ties, tally.losses), (1, 1, 1));
        assert_eq!(tally.draws, 1);
        assert!((tally.equity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn merge() {
        let a = Tally {
            wins: 1,
            ties: 0,
            losses: 2,
            draws: 1,
        };
        let sum = [a, a, Tally::default()].into_iter().sum::<Tally>();
        assert_eq!(sum, a + a);
        assert_eq!(sum.trials(), 6);
        assert_eq!(Tally::default().equity(), 0.);
    }
}
