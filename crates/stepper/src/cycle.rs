use crate::StepperError;

/// One-based position over a fixed, non-zero cycle length.
///
/// Both directions wrap: stepping past `len` lands on 1, stepping below 1
/// lands on `len`. The branches are explicit rather than modular so the two
/// boundary cases stay visible at the call site that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleIndex {
    current: usize,
    len: usize,
}

impl CycleIndex {
    /// Create an index at position 1 over `len` positions.
    pub fn new(len: usize) -> Result<Self, StepperError> {
        if len == 0 {
            return Err(StepperError::EmptyCycle);
        }
        Ok(Self { current: 1, len })
    }

    /// Current position, always in `[1, len]`.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A cycle is never empty; kept for clippy's `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step forward, wrapping `len + 1 -> 1`.
    pub fn advance(&mut self) -> usize {
        if self.current < self.len {
            self.current += 1;
        } else {
            self.current = 1;
        }
        self.current
    }

    /// Step backward, wrapping `0 -> len`.
    pub fn retreat(&mut self) -> usize {
        if self.current > 1 {
            self.current -= 1;
        } else {
            self.current = self.len;
        }
        self.current
    }

    pub fn is_at(&self, position: usize) -> bool {
        self.current == position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let index = CycleIndex::new(5).unwrap();
        assert_eq!(index.current(), 1);
        assert!(index.is_at(1));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=8 {
            let mut index = CycleIndex::new(len).unwrap();
            for _ in 0..len {
                index.advance();
            }
            assert_eq!(index.current(), 1, "len {len}");
        }
    }

    #[test]
    fn advance_wraps_at_end() {
        let mut index = CycleIndex::new(3).unwrap();
        index.advance();
        index.advance();
        assert_eq!(index.current(), 3);
        assert_eq!(index.advance(), 1);
    }

    #[test]
    fn retreat_wraps_at_start() {
        let mut index = CycleIndex::new(4).unwrap();
        assert_eq!(index.retreat(), 4);
        assert_eq!(index.retreat(), 3);
    }

    #[test]
    fn retreat_then_advance_is_identity() {
        for len in [1, 2, 3, 7] {
            let mut index = CycleIndex::new(len).unwrap();
            for _ in 0..len {
                let before = index.current();
                index.retreat();
                index.advance();
                assert_eq!(index.current(), before, "len {len}");
                index.advance();
            }
        }
    }

    #[test]
    fn single_slide_cycle_is_stationary() {
        let mut index = CycleIndex::new(1).unwrap();
        assert_eq!(index.advance(), 1);
        assert_eq!(index.retreat(), 1);
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(CycleIndex::new(0), Err(StepperError::EmptyCycle));
    }
}
