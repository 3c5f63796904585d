use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// The card population: an ordered collection of distinct card keys.
///
/// A fresh deck holds all 52 cards. Shuffling and dealing only reorder
/// keys in place; nothing is ever created or dropped after construction,
/// except by [`Deck::without`] which builds the unseen sub-population.
/// Randomness is always borrowed from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self((0..crate::N_CARDS as u8).map(Card::from).collect())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Fisher-Yates over the whole deck.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }

    /// The sub-population of cards not in `excluded`, in deck order.
    pub fn without(&self, excluded: Hand) -> Self {
        Self(self.0.iter().copied().filter(|c| !excluded.contains(c)).collect())
    }

    /// Shuffles a uniform random `count`-subset into place and returns it.
    /// Partial Fisher-Yates: draws without replacement, so the slice never
    /// repeats a card.
    pub fn deal<R>(&mut self, count: usize, rng: &mut R) -> Result<&[Card], Error>
    where
        R: Rng + ?Sized,
    {
        if count > self.size() {
            return Err(Error::InsufficientPopulation {
                requested: count,
                available: self.size(),
            });
        }
        let (dealt, _) = self.0.partial_shuffle(rng, count);
        Ok(&*dealt)
    }

    /// `count` distinct cards drawn uniformly from the deck minus `excluded`.
    pub fn sample<R>(&self, excluded: Hand, count: usize, rng: &mut R) -> Result<Vec<Card>, Error>
    where
        R: Rng + ?Sized,
    {
        self.without(excluded)
            .deal(count, rng)
            .map(|dealt| dealt.to_vec())
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Self::from(deck.cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fifty_two_distinct() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert_eq!(Hand::from(deck).size(), 52);
    }

    #[test]
    fn shuffle_permutes() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        deck.shuffle(rng);
        assert_ne!(deck, Deck::new());
        assert_eq!(Hand::from(deck.clone()), Hand::from(Deck::new()));
    }

    #[test]
    fn sample_avoids_excluded() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let excluded = Hand::try_from("As Ah Kd 7c 2s").unwrap();
        for _ in 0..1000 {
            let sample = Deck::new().sample(excluded, 9, rng).unwrap();
            let hand = Hand::distinct(&sample).unwrap();
            assert_eq!(hand.size(), 9);
            assert!(!hand.overlaps(&excluded));
        }
    }

    #[test]
    fn sample_exhausts_population() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let excluded = Hand::try_from("As Ah").unwrap();
        let sample = Deck::new().sample(excluded, 50, rng).unwrap();
        assert_eq!(Hand::from(sample.as_slice()), excluded.complement());
    }

    #[test]
    fn sample_insufficient() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let excluded = Hand::try_from("As Ah Ad").unwrap();
        assert_eq!(
            Deck::new().sample(excluded, 50, rng),
            Err(Error::InsufficientPopulation {
                requested: 50,
                available: 49
            })
        );
    }

    #[test]
    fn sample_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let excluded = Hand::try_from("2c 2d 2h 2s").unwrap();
        let mut counts = [0usize; 52];
        let draws = 48_000;
        for _ in 0..draws {
            for card in Deck::new().sample(excluded, 1, rng).unwrap() {
                counts[u8::from(card) as usize] += 1;
            }
        }
        assert!(counts[..4].iter().all(|&n| n == 0));
        assert!(counts[4..].iter().all(|&n| n > 850 && n < 1150));
    }
}
