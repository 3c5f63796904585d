use super::class::HandClass;
use super::ranking::Ranking;

/// The nine coarse hand types, strongest first.
///
/// Derived only from a [`HandClass`] by fixed class thresholds, so the
/// derived order agrees with class order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    StraightFlush = 0,
    FourOfAKind = 1,
    FullHouse = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    TwoPair = 6,
    OnePair = 7,
    HighCard = 8,
}

impl HandCategory {
    pub const fn all() -> [Self; 9] {
        [
            Self::StraightFlush,
            Self::FourOfAKind,
            Self::FullHouse,
            Self::Flush,
            Self::Straight,
            Self::ThreeOfAKind,
            Self::TwoPair,
            Self::OnePair,
            Self::HighCard,
        ]
    }
    /// the weakest class in this category
    pub const fn threshold(&self) -> u16 {
        match self {
            Self::StraightFlush => 10,
            Self::FourOfAKind => 166,
            Self::FullHouse => 322,
            Self::Flush => 1599,
            Self::Straight => 1609,
            Self::ThreeOfAKind => 2467,
            Self::TwoPair => 3325,
            Self::OnePair => 6185,
            Self::HighCard => 7462,
        }
    }
    pub const fn n_classes(&self) -> usize {
        match self {
            Self::StraightFlush => 10,
            Self::FourOfAKind => 156,
            Self::FullHouse => 156,
            Self::Flush => 1277,
            Self::Straight => 10,
            Self::ThreeOfAKind => 858,
            Self::TwoPair => 858,
            Self::OnePair => 2860,
            Self::HighCard => 1277,
        }
    }
    /// straights and flushes, the hands a drawing player is hoping to make
    pub const fn completes_draw(&self) -> bool {
        matches!(self, Self::StraightFlush | Self::Flush | Self::Straight)
    }
}

impl From<HandClass> for HandCategory {
    fn from(class: HandClass) -> Self {
        let n = u16::from(class);
        Self::all()
            .into_iter()
            .find(|c| n <= c.threshold())
            .unwrap_or(Self::HighCard)
    }
}

impl From<Ranking> for HandCategory {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::StraightFlush(_) => Self::StraightFlush,
            Ranking::FourOAK(_) => Self::FourOfAKind,
            Ranking::FullHouse(..) => Self::FullHouse,
            Ranking::Flush(_) => Self::Flush,
            Ranking::Straight(_) => Self::Straight,
            Ranking::ThreeOAK(_) => Self::ThreeOfAKind,
            Ranking::TwoPair(..) => Self::TwoPair,
            Ranking::OnePair(_) => Self::OnePair,
            Ranking::HighCard(_) => Self::HighCard,
        }
    }
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::StraightFlush => write!(f, "Straight Flush"),
            Self::FourOfAKind => write!(f, "Four of a Kind"),
            Self::FullHouse => write!(f, "Full House"),
            Self::Flush => write!(f, "Flush"),
            Self::Straight => write!(f, "Straight"),
            Self::ThreeOfAKind => write!(f, "Three of a Kind"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::OnePair => write!(f, "One Pair"),
            Self::HighCard => write!(f, "High Card"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(n: u16) -> HandCategory {
        HandCategory::from(HandClass::try_from(n).unwrap())
    }

    #[test]
    fn thresholds() {
        assert_eq!(category(1), HandCategory::StraightFlush);
        assert_eq!(category(10), HandCategory::StraightFlush);
        assert_eq!(category(11), HandCategory::FourOfAKind);
        assert_eq!(category(322), HandCategory::FullHouse);
        assert_eq!(category(323), HandCategory::Flush);
        assert_eq!(category(1600), HandCategory::Straight);
        assert_eq!(category(1610), HandCategory::ThreeOfAKind);
        assert_eq!(category(3325), HandCategory::TwoPair);
        assert_eq!(category(6185), HandCategory::OnePair);
        assert_eq!(category(6186), HandCategory::HighCard);
        assert_eq!(category(7462), HandCategory::HighCard);
    }

    #[test]
    fn class_counts_tile_the_range() {
        let mut lo = 0;
        for category in HandCategory::all() {
            assert_eq!(category.threshold() as usize - lo, category.n_classes());
            lo = category.threshold() as usize;
        }
        assert_eq!(lo, 7462);
    }

    #[test]
    fn monotone() {
        let mut prev = HandCategory::StraightFlush;
        for n in 1..=7462 {
            let next = category(n);
            assert!(next >= prev);
            prev = next;
        }
    }
}
