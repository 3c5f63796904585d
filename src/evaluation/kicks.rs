use crate::cards::Rank;

/// A hand's kicker ranks as a 13-bit mask.
///
/// Two hands of equal [`Ranking`](super::Ranking) always carry the same
/// number of kickers, so the numeric order of the masks is the order of
/// their highest differing kicker.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & 0b1111111111111)
    }
}

/// Vec<Rank> isomorphism, highest first
///
/// [Ks, Ts, 2c]
/// xxx0100100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::King, Rank::Ten, Rank::Two];
        assert_eq!(Vec::<Rank>::from(Kickers::from(ranks.clone())), ranks);
        assert_eq!(u16::from(Kickers::from(ranks)), 0b0100100000001);
    }

    #[test]
    fn highest_kicker_decides() {
        let ak = Kickers::from(vec![Rank::Ace, Rank::Two]);
        let kq = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(ak > kq);
    }
}
