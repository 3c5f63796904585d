use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::Hand;

/// A hand's strength at the rank level.
///
/// Built straight from a Hand of any size by the bitwise [`Evaluator`],
/// with no lookup tables. Ordered by ranking, then kickers. Independent
/// of [`HandClass`](super::HandClass), which makes it a useful oracle and
/// a readable label for logs.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value.to_string(), self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn flush_kickers_decide() {
        assert!(strength("Ah Qh 9h 5h 3h") > strength("Ad Qd 9d 5d 2d"));
        assert!(strength("Ah Kh 3h 4h 5h 9c 9d") > strength("Ac Qc Jc Tc 8c Kd Kh"));
    }

    #[test]
    fn label() {
        assert_eq!(strength("As Ah Kd Qc Js").to_string(), "OnePair       A   KQJ");
    }
}
