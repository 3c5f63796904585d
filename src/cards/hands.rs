use super::hand::Hand;

/// Every k-card Hand that avoids a set of blocked cards, in increasing
/// bit order. The state is a single u64 advanced by Gosper's hack,
/// so exhausting all 2,598,960 five-card hands allocates nothing.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// C(n, k) over the unblocked cards
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next.leading_zeros() < (64 - 52)
    }

    /// smallest integer above `next` with the same popcount
    fn successor(&self) -> u64 {
        let x = self.next;
        let lowest = x & x.wrapping_neg();
        let ripple = x + lowest;
        let ones = ((x ^ ripple) >> 2) / lowest;
        ripple | ones
    }

    fn advance(&mut self) {
        loop {
            self.next = self.successor();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((k, mask): (usize, Hand)) -> Self {
        debug_assert!(k > 0 && k <= 52);
        let mut this = Self {
            next: (1 << k) - 1,
            mask: u64::from(mask),
        };
        if this.next & this.mask != 0 {
            this.advance();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
    }

    #[test]
    fn counts_match_combinations() {
        let iter = HandIterator::from((2, Hand::from(0b1111)));
        assert_eq!(iter.combinations(), 48 * 47 / 2);
        assert_eq!(iter.count(), 48 * 47 / 2);
        let iter = HandIterator::from((3, Hand::empty()));
        assert_eq!(iter.combinations(), 22_100);
        assert_eq!(iter.count(), 22_100);
    }
}
