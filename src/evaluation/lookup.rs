use super::class::HandClass;
use super::tables::FLUSHES;
use super::tables::HASH_ADJUST;
use super::tables::HASH_VALUES;
use super::tables::UNIQUE5;
use crate::cards::Card;
use crate::cards::Hand;

/// Classifies exactly five distinct cards in constant time.
///
/// Flushes and five-distinct-rank hands are indexed directly by their
/// rank pattern. Everything with a repeated rank is identified by the
/// product of its primes, which is unique per rank multiset, and found
/// through a perfect hash of that product.
///
/// Distinctness is the caller's job. Repeated cards are caught by a
/// debug assertion and classify to garbage in release builds.
pub fn classify(cards: [Card; 5]) -> HandClass {
    debug_assert!(
        Hand::from(cards.as_slice()).size() == 5,
        "classify repeated cards {:?}",
        cards
    );
    let keys = cards.map(u32::from);
    let union = keys.iter().fold(0u32, |a, k| a | k);
    let inter = keys.iter().fold(!0u32, |a, k| a & k);
    let pattern = (union >> 16) as usize;
    let class = if inter & 0xF000 != 0 {
        FLUSHES[pattern]
    } else {
        match UNIQUE5[pattern] {
            0 => HASH_VALUES[hash(keys.iter().map(|k| k & 0xFF).product())],
            n => n,
        }
    };
    HandClass::from_table(class)
}

/// scrambles a prime product into a bucket, then displaces it by the
/// bucket's adjustment so that every paired product lands alone
fn hash(product: u32) -> usize {
    let mut u = product;
    u = u.wrapping_add(0xe91aaa35);
    u ^= u >> 16;
    u = u.wrapping_add(u << 8);
    u ^= u >> 4;
    let b = (u >> 8) & 0x1ff;
    let a = u.wrapping_add(u << 2) >> 19;
    (a ^ HASH_ADJUST[b as usize] as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::cards::HandIterator;
    use crate::cards::Suit;
    use crate::evaluation::HandCategory;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    fn five(s: &str) -> [Card; 5] {
        Card::parse(s)
            .unwrap()
            .try_into()
            .expect("five card labels")
    }

    #[test]
    fn extremes() {
        assert_eq!(u16::from(classify(five("As Ks Qs Js Ts"))), 1);
        assert_eq!(u16::from(classify(five("5s 4s 3s 2s As"))), 10);
        assert_eq!(u16::from(classify(five("7c 5d 4h 3s 2c"))), 7462);
        assert_eq!(u16::from(classify(five("Ac Ad Ah As Kc"))), 11);
        assert_eq!(u16::from(classify(five("Ac Kd Qh Js Tc"))), 1600);
    }

    #[test]
    fn order_invariant() {
        let cards = five("Kd 9h Kc 2s 9d");
        let class = classify(cards);
        let mut cards = cards;
        for _ in 0..5 {
            cards.rotate_left(1);
            cards.swap(0, 3);
            assert_eq!(classify(cards), class);
        }
    }

    /// flush, distinct-rank and paired hands each take a different table
    #[test]
    fn order_invariant_on_every_path() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let deck = Deck::new();
        let mut paths = [0usize; 3];
        for suit in Suit::all().into_iter().cycle().take(4_000) {
            let offsuit = Hand::from(u64::from(suit)).complement();
            for excluded in [Hand::empty(), offsuit] {
                let mut cards: [Card; 5] = deck
                    .sample(excluded, 5, rng)
                    .unwrap()
                    .try_into()
                    .unwrap();
                let hand = Hand::from(cards.as_slice());
                let path = match (
                    Suit::all().iter().any(|s| hand.of(s).size() == 5),
                    u16::from(hand).count_ones() == 5,
                ) {
                    (true, _) => 0,
                    (false, true) => 1,
                    (false, false) => 2,
                };
                paths[path] += 1;
                let class = classify(cards);
                for _ in 0..8 {
                    cards.shuffle(rng);
                    assert_eq!(classify(cards), class, "{}", hand);
                }
            }
        }
        assert!(paths.iter().all(|&n| n > 100), "{:?}", paths);
    }

    #[test]
    fn four_flush_straight_is_a_straight() {
        let class = classify(five("9h Th Jh Qh Ks"));
        assert_eq!(class.category(), HandCategory::Straight);
        let class = classify(five("Ah 2h 3h 4h 5d"));
        assert_eq!(class.category(), HandCategory::Straight);
    }

    /// every five-card hand in the deck, against the textbook frequencies
    #[test]
    fn exhaustive_category_counts() {
        let mut counts = [0usize; 9];
        let mut seen = vec![false; 7463];
        for hand in HandIterator::from((5, Hand::empty())) {
            let cards: [Card; 5] = Vec::<Card>::from(hand)
                .try_into()
                .expect("five cards per hand");
            let class = classify(cards);
            seen[u16::from(class) as usize] = true;
            counts[class.category() as usize] += 1;
        }
        assert_eq!(
            counts,
            [40, 624, 3_744, 5_108, 10_200, 54_912, 123_552, 1_098_240, 1_302_540]
        );
        assert!(seen[1..].iter().all(|&hit| hit));
    }
}
