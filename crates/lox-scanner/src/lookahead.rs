//! Buffered lookahead over a forward-only iterator.
//!
//! [`Lookahead`] wraps any iterator and adds [`peek`](Lookahead::peek) at an
//! arbitrary distance. Items are pulled from the source lazily and parked in
//! a queue until consumed, so peeking never advances past what it actually
//! inspects.

use std::collections::VecDeque;

/// Iterator adapter that buffers items for multi-item peeking.
pub struct Lookahead<I: Iterator> {
    /// Underlying forward-only source.
    source: I,
    /// Items fetched from the source but not yet consumed, in source order.
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> Lookahead<I> {
    /// Wrap an iterator.
    pub fn new(source: I) -> Self {
        Self {
            source,
            buffer: VecDeque::with_capacity(4),
        }
    }

    /// Peek at the item `distance` positions ahead without consuming it.
    ///
    /// `peek(0)` is the item the next call to `next` will return. Returns
    /// `None` when the source runs out before that position; items fetched
    /// along the way stay buffered for later calls.
    pub fn peek(&mut self, distance: usize) -> Option<&I::Item> {
        while self.buffer.len() <= distance {
            let item = self.source.next()?;
            self.buffer.push_back(item);
        }
        self.buffer.get(distance)
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.buffer.pop_front() {
            return Some(item);
        }
        self.source.next()
    }
}
