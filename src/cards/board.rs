use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// The community cards revealed so far, zero to five of them, in deal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cards: [Option<Card>; 5],
    size: usize,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().flatten().copied()
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// None between streets, e.g. while a flop is half-parsed
    pub fn street(&self) -> Option<Street> {
        Street::try_from(self.size).ok()
    }
    /// cards still to come before the river
    pub fn n_unseen(&self) -> usize {
        crate::N_BOARD - self.size
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.cards().map(Hand::from).fold(Hand::empty(), Hand::add)
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if cards.len() > crate::N_BOARD {
            return Err(Error::invalid(format!(
                "board holds at most 5 cards, got {}",
                cards.len()
            )));
        }
        Hand::distinct(cards)?;
        let mut board = Self::empty();
        for (slot, card) in board.cards.iter_mut().zip(cards) {
            *slot = Some(*card);
        }
        board.size = cards.len();
        Ok(board)
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets() {
        assert_eq!(Board::empty().street(), Some(Street::Pref));
        assert_eq!(Board::try_from("2c 7d 9h").unwrap().street(), Some(Street::Flop));
        assert_eq!(Board::try_from("2c 7d").unwrap().street(), None);
        assert_eq!(Board::try_from("2c7d9hJsKc").unwrap().n_unseen(), 0);
    }

    #[test]
    fn preserves_deal_order() {
        let board = Board::try_from("Kc 2c 9h").unwrap();
        assert_eq!(board.to_string(), "Kc2c9h");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_json_roundtrip() {
        use crate::cards::Hole;
        let board = Board::try_from("Kc 2c 9h").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        let hole = Hole::try_from("AhKh").unwrap();
        let json = serde_json::to_string(&hole).unwrap();
        assert_eq!(serde_json::from_str::<Hole>(&json).unwrap(), hole);
        let hand = Hand::from(board);
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand);
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(Board::try_from("2c7d9hJsKcAs"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Board::try_from("2c7d2c"), Err(Error::InvalidArgument(_))));
    }
}
