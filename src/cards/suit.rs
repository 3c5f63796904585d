use crate::Error;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const MAX: Self = Suit::Spade;

    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// the exclusive suit bit a card key carries
    /// cdhs
    /// 1000 <- clubs
    /// 0001 <- spades
    pub const fn bit(&self) -> u32 {
        0x8000 >> (*self as u32)
    }
}

impl TryFrom<u8> for Suit {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| Error::invalid(format!("suit {} outside 0..=3", n)))
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every card of this suit in a Hand
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1111111111111 << u8::from(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' => Ok(Suit::Club),
            'd' => Ok(Suit::Diamond),
            'h' => Ok(Suit::Heart),
            's' => Ok(Suit::Spade),
            _ => Err(Error::invalid(format!("suit label {:?}", c))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_bits() {
        let bits = Suit::all().map(|s| s.bit());
        assert_eq!(bits, [0x8000, 0x4000, 0x2000, 0x1000]);
        assert_eq!(bits.iter().fold(0, |a, b| a | b), 0xF000);
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(Suit::try_from(4u8), Err(Error::InvalidArgument(_))));
        assert!(matches!(Suit::try_from('S'), Err(Error::InvalidArgument(_))));
    }
}
