use super::card::Card;
use super::suit::Suit;
use crate::Error;

/// Hand represents an unordered set of Cards. nice to use a single word for the full Hand independent of size, stored as a u64 but only needing the LSB bitstring of 52 bits. Each bit represents a unique card in the (unordered) set. this is what we use to track which cards are known, to exclude them from sampling, and to catch duplicates in O(1).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// union of two disjoint sets
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// the set of these cards, provided none repeats
    pub fn distinct(cards: &[Card]) -> Result<Self, Error> {
        let hand = Self::from(cards);
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(Error::invalid(format!(
                "duplicate cards in {}",
                cards.iter().map(|c| c.to_string()).collect::<String>()
            ))),
        }
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// [Card] injection (up to slice permutation, duplicates collapse)
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|&c| u64::from(c)).fold(0u64, |a, b| a | b))
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// this follows from [Card] injection, but rejects repeats
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::distinct(&Card::parse(s)?)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("Jc Ts 2c Js 9h").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001); // (2c, 6c, Tc, Ac)
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010); // (3d, 7d, Jd)
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100); // (4h, 8h, Qh)
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000); // (5s, 9s, Ks)
    }

    #[test]
    fn duplicates_rejected() {
        assert!(matches!(Hand::try_from("As Kd As"), Err(Error::InvalidArgument(_))));
        let cards = Card::parse("AsKdQh").unwrap();
        assert_eq!(Hand::distinct(&cards).map(|h| h.size()), Ok(3));
    }

    #[test]
    fn complement_partitions_deck() {
        let hand = Hand::try_from("AsKd").unwrap();
        assert_eq!(hand.complement().size(), 50);
        assert!(!hand.overlaps(&hand.complement()));
        assert!(hand.contains(&Card::try_from("Kd").unwrap()));
        assert!(!hand.complement().contains(&Card::try_from("Kd").unwrap()));
    }
}
