use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn paired(&self) -> bool {
        self.0.rank() == self.1.rank()
    }

    /// Starting-hand label over the 169 strategically distinct holdings.
    ///
    /// Higher rank first, then `s` for suited and `o` otherwise. Pairs can
    /// never be suited, so they always carry `o`.
    ///
    /// AhKh -> AKs
    /// 9c9d -> 99o
    pub fn notation(&self) -> String {
        let (hi, lo) = match self.0.rank() >= self.1.rank() {
            true => (self.0.rank(), self.1.rank()),
            false => (self.1.rank(), self.0.rank()),
        };
        let kind = if self.suited() { 's' } else { 'o' };
        format!("{}{}{}", hi, lo, kind)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.cards().as_slice())
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(Error::invalid(format!("hole repeats {}", a))),
            false => Ok(Self(a, b)),
        }
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            &[a, b] => Self::try_from((a, b)),
            _ => Err(Error::invalid(format!("hole needs 2 cards, got {}", cards.len()))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation() {
        assert_eq!(Hole::try_from("AhKh").unwrap().notation(), "AKs");
        assert_eq!(Hole::try_from("Kh Ad").unwrap().notation(), "AKo");
        assert_eq!(Hole::try_from("9c9d").unwrap().notation(), "99o");
        assert_eq!(Hole::try_from("2s7s").unwrap().notation(), "72s");
    }

    #[test]
    fn cardinality() {
        assert!(matches!(Hole::try_from("As"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Hole::try_from("AsKsQs"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Hole::try_from("AsAs"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn hand_has_both() {
        let hole = Hole::try_from("Td9d").unwrap();
        assert_eq!(Hand::from(hole).size(), 2);
        assert!(hole.suited());
        assert!(!hole.paired());
    }
}
