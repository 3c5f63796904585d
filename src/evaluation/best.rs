use super::category::HandCategory;
use super::class::HandClass;
use super::strength::Strength;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hand;

/// Every 5-subset of 7 positions, one row per dropped pair (i, j).
/// The rows whose last index is below n are exactly the 5-subsets
/// of n positions, so one table serves 5, 6 and 7 cards.
const CHOOSE_5_OF_7: [[usize; 5]; 21] = {
    let mut rows = [[0; 5]; 21];
    let mut r = 0;
    let mut i = 0;
    while i < 7 {
        let mut j = i + 1;
        while j < 7 {
            let mut k = 0;
            let mut c = 0;
            while c < 7 {
                if c != i && c != j {
                    rows[r][k] = c;
                    k += 1;
                }
                c += 1;
            }
            r += 1;
            j += 1;
        }
        i += 1;
    }
    rows
};

/// The strongest five-card hand inside five to seven known cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestHand {
    class: HandClass,
    cards: [Card; 5],
}

impl BestHand {
    pub fn class(&self) -> HandClass {
        self.class
    }
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }
    pub fn category(&self) -> HandCategory {
        self.class.category()
    }
    /// rank-level description of the chosen five, for logs
    pub fn ranking(&self) -> Strength {
        Strength::from(Hand::from(self.cards.as_slice()))
    }

    /// Unchecked search over 5..=7 distinct cards. The simulator's
    /// inner loop calls this after validating its inputs once.
    pub(crate) fn search(cards: &[Card]) -> Self {
        debug_assert!((5..=7).contains(&cards.len()));
        debug_assert!(Hand::from(cards).size() == cards.len());
        CHOOSE_5_OF_7
            .iter()
            .filter(|row| row[4] < cards.len())
            .map(|row| row.map(|i| cards[i]))
            .map(|five| Self {
                class: HandClass::from(five),
                cards: five,
            })
            .min_by_key(|best| best.class)
            .expect("at least one 5-subset")
    }
}

impl TryFrom<&[Card]> for BestHand {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if !(5..=7).contains(&cards.len()) {
            return Err(Error::invalid(format!(
                "best hand needs 5 to 7 cards, got {}",
                cards.len()
            )));
        }
        Hand::distinct(cards)?;
        Ok(Self::search(cards))
    }
}

impl TryFrom<&str> for BestHand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for BestHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards {
            write!(f, "{}", card)?;
        }
        write!(f, " {}", self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    #[test]
    fn subset_table() {
        let mut rows = CHOOSE_5_OF_7.to_vec();
        rows.sort();
        rows.dedup();
        assert_eq!(rows.len(), 21);
        assert!(rows.iter().all(|r| r.windows(2).all(|w| w[0] < w[1])));
        assert_eq!(CHOOSE_5_OF_7.iter().filter(|r| r[4] < 6).count(), 6);
        assert_eq!(CHOOSE_5_OF_7.iter().filter(|r| r[4] < 5).count(), 1);
    }

    #[test]
    fn straight_flush_over_flush() {
        let best = BestHand::try_from("9h Th Jh Qh Kh 2h Ac").unwrap();
        assert_eq!(best.category(), HandCategory::StraightFlush);
        assert_eq!(Hand::from(best.cards().as_slice()), Hand::try_from("9hThJhQhKh").unwrap());
    }

    #[test]
    fn six_cards() {
        let best = BestHand::try_from("2c 2d 7h 7s 7c Kd").unwrap();
        assert_eq!(best.category(), HandCategory::FullHouse);
        assert!(!Hand::from(best.cards().as_slice()).contains(&Card::try_from("Kd").unwrap()));
    }

    #[test]
    fn five_cards_is_classify() {
        let cards = Card::parse("2c 7d 9h Js Kc").unwrap();
        let best = BestHand::try_from(cards.as_slice()).unwrap();
        assert_eq!(best.class(), HandClass::try_from(cards.as_slice()).unwrap());
        assert_eq!(best.category(), HandCategory::HighCard);
    }

    #[test]
    fn order_invariant() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut cards = Card::parse("Ah Kd 9h 4h 9c 2h Qh").unwrap();
        let class = BestHand::try_from(cards.as_slice()).unwrap().class();
        for _ in 0..500 {
            cards.shuffle(rng);
            assert_eq!(BestHand::try_from(cards.as_slice()).unwrap().class(), class);
        }
    }

    #[test]
    fn cardinality_and_duplicates() {
        assert!(matches!(BestHand::try_from("As Ks Qs Js"), Err(Error::InvalidArgument(_))));
        assert!(matches!(BestHand::try_from("As Ks Qs Js Ts 9s 8s 7s"), Err(Error::InvalidArgument(_))));
        assert!(matches!(BestHand::try_from("As Ks Qs Js Ts As"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn ranking_label() {
        let best = BestHand::try_from("Kc Kd Qs Qh Kh 3c 2d").unwrap();
        assert_eq!(best.ranking().to_string(), "FullHouse     KQ  ");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_json_roundtrip() {
        let best = BestHand::try_from("Kc Kd Qs Qh Kh 3c 2d").unwrap();
        let json = serde_json::to_string(&best).unwrap();
        assert_eq!(serde_json::from_str::<BestHand>(&json).unwrap(), best);
        let json = serde_json::to_string(&best.ranking()).unwrap();
        assert_eq!(serde_json::from_str::<Strength>(&json).unwrap(), best.ranking());
    }

    /// the table lookup and the bitwise evaluator share no machinery,
    /// so agreeing on thousands of random showdowns is strong evidence
    #[test]
    fn agrees_with_bitwise_evaluator() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let deck = Deck::new();
        for n in [5, 7] {
            for _ in 0..20_000 {
                let cards = deck.sample(Hand::empty(), 2 * n, rng).unwrap();
                let (hero, villain) = cards.split_at(n);
                let by_class = BestHand::try_from(villain)
                    .unwrap()
                    .class()
                    .cmp(&BestHand::try_from(hero).unwrap().class());
                let by_strength = Strength::from(Hand::from(hero))
                    .cmp(&Strength::from(Hand::from(villain)));
                assert_eq!(by_class, by_strength, "{} vs {}", Hand::from(hero), Hand::from(villain));
                assert_eq!(
                    BestHand::try_from(hero).unwrap().category(),
                    HandCategory::from(Strength::from(Hand::from(hero)).ranking()),
                );
            }
        }
    }
}
