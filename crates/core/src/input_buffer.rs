//! Bounded FIFO of pending heading changes.
//!
//! At most [`INPUT_BUFFER_CAPACITY`] intents wait for the next ticks; extra
//! submissions are dropped. Reversal filtering is not done here: the engine
//! checks each entry against the heading committed at the tick that consumes it.

use arrayvec::ArrayVec;

use crate::types::{Direction, INPUT_BUFFER_CAPACITY};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    pending: ArrayVec<Direction, INPUT_BUFFER_CAPACITY>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. Returns `false` (and drops it) when full.
    pub fn push(&mut self, dir: Direction) -> bool {
        self.pending.try_push(dir).is_ok()
    }

    /// Take the oldest pending intent.
    pub fn pop_front(&mut self) -> Option<Direction> {
        self.pending.pop_at(0)
    }

    pub fn peek(&self) -> Option<Direction> {
        self.pending.first().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pending.is_full()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut buf = InputBuffer::new();
        assert!(buf.push(Direction::Up));
        assert!(buf.push(Direction::Left));

        assert_eq!(buf.pop_front(), Some(Direction::Up));
        assert_eq!(buf.pop_front(), Some(Direction::Left));
        assert_eq!(buf.pop_front(), None);
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut buf = InputBuffer::new();
        assert!(buf.push(Direction::Up));
        assert!(buf.push(Direction::Left));
        assert!(!buf.push(Direction::Down));

        assert_eq!(buf.len(), INPUT_BUFFER_CAPACITY);
        assert_eq!(buf.as_slice(), &[Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_accepts_reversals_at_enqueue() {
        // Reversals are judged at consumption time, so they are still queued.
        let mut buf = InputBuffer::new();
        assert!(buf.push(Direction::Left));
        assert!(buf.push(Direction::Right));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_room_frees_up_after_pop() {
        let mut buf = InputBuffer::new();
        buf.push(Direction::Up);
        buf.push(Direction::Left);
        assert!(buf.is_full());

        buf.pop_front();
        assert!(buf.push(Direction::Down));
        assert_eq!(buf.peek(), Some(Direction::Left));
    }

    #[test]
    fn test_clear() {
        let mut buf = InputBuffer::new();
        buf.push(Direction::Up);
        buf.clear();
        assert!(buf.is_empty());
    }
}
