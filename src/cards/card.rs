use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single 32-bit key.
///
/// The key carries everything the classifier needs without decoding:
///
/// ```text
/// xxxbbbbb bbbbbbbb cdhsrrrr xxpppppp
/// ```
///
/// - `b`: one bit per rank (`1 << (16 + rank)`), OR-ed across a hand to get its rank pattern
/// - `cdhs`: the exclusive suit bit, AND-ed across a hand to detect a flush
/// - `r`: the rank index 0..=12 (deuce through ace)
/// - `p`: the rank's prime, multiplied across a hand to identify its rank multiset
///
/// Ks
/// 00001000 00000000 00011011 00100101
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u32);

impl Card {
    /// Encodes a card from raw rank (0..=12) and suit (0..=3) indices.
    pub fn new(rank: u8, suit: u8) -> Result<Self, Error> {
        let rank = Rank::try_from(rank)?;
        let suit = Suit::try_from(suit)?;
        Ok(Self::from((rank, suit)))
    }
    pub fn rank(&self) -> Rank {
        Rank::all()[((self.0 >> 8) & 0xF) as usize]
    }
    /// Clubs, diamonds, hearts, then spades. A key without any suit bit
    /// cannot be constructed, but would read as a spade.
    pub fn suit(&self) -> Suit {
        Suit::all()
            .into_iter()
            .find(|s| self.0 & s.bit() != 0)
            .unwrap_or(Suit::MAX)
    }
    pub fn prime(&self) -> u32 {
        self.0 & 0xFF
    }
    /// the single rank-presence bit, shifted down to a 13-bit pattern
    pub fn pattern(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Parses a string of concatenated card labels into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        let prime = r.prime();
        let index = (u8::from(r) as u32) << 8;
        let suit = s.bit();
        let bit = 1 << (16 + u8::from(r) as u32);
        Self(prime | index | suit | bit)
    }
}

/// u32 isomorphism
/// only keys whose four fields agree decode
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        c.0
    }
}
impl TryFrom<u32> for Card {
    type Error = Error;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(((n >> 8) & 0xF) as u8)?;
        let suit = match (n & 0xF000).count_ones() {
            1 => Suit::try_from(((n >> 12) & 0xF).leading_zeros() as u8 - 28)?,
            _ => return Err(Error::invalid(format!("key {:#010x} needs one suit bit", n))),
        };
        let card = Self::from((rank, suit));
        match card.0 == n {
            true => Ok(card),
            false => Err(Error::invalid(format!("key {:#010x} is inconsistent", n))),
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank()) * 4 + u8::from(c.suit())
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52, "card index {} outside deck", n);
        let rank = Rank::all()[(n / 4) as usize];
        let suit = Suit::all()[(n % 4) as usize];
        Self::from((rank, suit))
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(Error::invalid(format!("card label {:?} is not 2 characters", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> impl Iterator<Item = Card> {
        (0..52u8).map(Card::from)
    }

    #[test]
    fn bijective_rank_suit() {
        for card in deck() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in deck() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn bijective_u32() {
        for card in deck() {
            assert_eq!(Ok(card), Card::try_from(u32::from(card)));
        }
    }

    #[test]
    fn injective_keys() {
        let mut keys = deck().map(u32::from).collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 52);
    }

    #[test]
    fn king_of_spades_layout() {
        let card = Card::try_from("Ks").unwrap();
        assert_eq!(u32::from(card), 0b00001000_00000000_00011011_00100101);
        assert_eq!(card.prime(), 37);
        assert_eq!(card.rank(), Rank::King);
        assert_eq!(card.suit(), Suit::Spade);
    }

    #[test]
    fn encode_bounds() {
        assert!(Card::new(12, 3).is_ok());
        assert!(matches!(Card::new(13, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(Card::new(0, 4), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn malformed_keys() {
        let ace = u32::from(Card::try_from("Ac").unwrap());
        assert!(Card::try_from(ace | 0x1000).is_err()); // two suits
        assert!(Card::try_from(ace & !0xF000).is_err()); // no suit
        assert!(Card::try_from(ace ^ 0xFF).is_err()); // wrong prime
        assert!(Card::try_from(0x0000_0F00u32).is_err()); // rank nibble 15
    }

    #[test]
    fn suitless_key_reads_as_spade() {
        let card = Card(u32::from(Card::try_from("Ah").unwrap()) & !0xF000);
        assert_eq!(card.suit(), Suit::Spade);
    }

    #[test]
    fn labels() {
        assert_eq!(Card::try_from("Tc").unwrap().to_string(), "Tc");
        assert!(Card::try_from("10c").is_err());
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Tx").is_err());
        let cards = Card::parse("As Kh\tQd").unwrap();
        assert_eq!(cards.iter().map(|c| c.to_string()).collect::<String>(), "AsKhQd");
    }
}
