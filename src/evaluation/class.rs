use super::category::HandCategory;
use super::lookup::classify;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hand;

/// Exact strength of a five-card hand, one of 7462 equivalence classes.
///
/// 1 is a royal flush and 7462 is 7-5-4-3-2 offsuit. Smaller is stronger,
/// equal classes are exactly equal in strength, and no other comparison
/// between two hands is meaningful. `Ord` is the plain numeric order, so
/// `min` picks the winner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandClass(u16);

impl HandClass {
    pub const BEST: Self = Self(1);
    pub const WORST: Self = Self(7462);

    pub fn category(&self) -> HandCategory {
        HandCategory::from(*self)
    }
    pub fn beats(&self, other: &Self) -> bool {
        self < other
    }
    pub(super) fn from_table(n: u16) -> Self {
        debug_assert!(n >= Self::BEST.0 && n <= Self::WORST.0, "class {} out of table", n);
        Self(n)
    }
}

/// u16 isomorphism over 1..=7462
impl From<HandClass> for u16 {
    fn from(class: HandClass) -> Self {
        class.0
    }
}
impl TryFrom<u16> for HandClass {
    type Error = Error;
    fn try_from(n: u16) -> Result<Self, Self::Error> {
        match n {
            1..=7462 => Ok(Self(n)),
            _ => Err(Error::invalid(format!("hand class {} outside 1..=7462", n))),
        }
    }
}

impl From<[Card; 5]> for HandClass {
    fn from(cards: [Card; 5]) -> Self {
        classify(cards)
    }
}

/// the checked entry point: five distinct cards in every build profile
impl TryFrom<&[Card]> for HandClass {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let five = <[Card; 5]>::try_from(cards)
            .map_err(|_| Error::invalid(format!("classify needs 5 cards, got {}", cards.len())))?;
        Hand::distinct(cards)?;
        Ok(classify(five))
    }
}

impl std::fmt::Display for HandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>4} {}", self.0, self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(s: &str) -> HandClass {
        HandClass::try_from(Card::parse(s).unwrap().as_slice()).unwrap()
    }

    #[test]
    fn high_card() {
        assert_eq!(class("2c 7d 9h Js Kc").category(), HandCategory::HighCard);
    }

    #[test]
    fn quads_beat_every_flush() {
        let quads = class("5c 5d 5h 5s 2c");
        assert_eq!(quads.category(), HandCategory::FourOfAKind);
        assert!(quads.beats(&class("As Ks Qs Js 9s")));
        assert!(quads.beats(&HandClass::try_from(323).unwrap()));
    }

    #[test]
    fn full_house_beats_flush() {
        let worst_boat = class("2c 2d 2h 3s 3c");
        let best_flush = class("Ah Kh Qh Jh 9h");
        assert_eq!(worst_boat.category(), HandCategory::FullHouse);
        assert_eq!(best_flush.category(), HandCategory::Flush);
        assert!(worst_boat.beats(&best_flush));
        assert_eq!(u16::from(worst_boat), 322);
        assert_eq!(u16::from(best_flush), 323);
    }

    #[test]
    fn kickers_break_ties() {
        assert!(class("Ah Ad Kc 9s 4d").beats(&class("As Ac Kd 9h 3c")));
        assert_eq!(class("Ah Ad Kc 9s 4d"), class("As Ac Kd 9h 4c"));
        assert!(class("Ts 9d 8h 7c 6s").beats(&class("As 2d 3h 4c 5s")));
    }

    #[test]
    fn checked_entry_point() {
        let wrong = Card::parse("As Ks Qs Js").unwrap();
        assert!(matches!(HandClass::try_from(wrong.as_slice()), Err(Error::InvalidArgument(_))));
        let twice = Card::parse("As Ks Qs Js As").unwrap();
        assert!(matches!(HandClass::try_from(twice.as_slice()), Err(Error::InvalidArgument(_))));
        assert!(HandClass::try_from(0).is_err());
        assert!(HandClass::try_from(7463).is_err());
    }
}
