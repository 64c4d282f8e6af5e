use crate::{
    capability::{Capability, Direction},
    cursor::{Cursor, state::State},
    error::CursorResult,
};
use std::{collections::VecDeque, fmt};

/// An in-memory cursor over a materialized sequence.
///
/// This is the base source for anything already collected: the front and
/// back cursors are the two ends of a [`VecDeque`], and they meet exactly
/// when the deque empties. The initial capability is chosen at construction
/// and fixed from then on.
pub struct SeqCursor<T> {
    buf: VecDeque<T>,
    capability: Capability,
    state: State,
}

impl<T> SeqCursor<T> {
    /// Creates a double-ended cursor over `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_capability(items, Capability::DoubleEnded)
    }

    /// Creates a cursor over `items` that only exposes the front end.
    pub fn forward_only(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_capability(items, Capability::ForwardOnly)
    }

    /// Creates a cursor over `items` that only exposes the back end.
    pub fn backward_only(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_capability(items, Capability::BackwardOnly)
    }

    /// Creates a cursor over `items` with the given initial capability.
    pub fn with_capability(items: impl IntoIterator<Item = T>, capability: Capability) -> Self {
        Self {
            buf: items.into_iter().collect(),
            capability,
            state: State::opening(capability),
        }
    }

    /// Number of elements not yet consumed from either end.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }
}

impl<T> Cursor for SeqCursor<T> {
    type Item = T;

    fn capability(&self) -> Capability {
        self.capability
    }

    fn consume_front(&mut self) -> CursorResult<Option<T>> {
        self.capability.require(Direction::Front)?;
        if !self.state.front_live() {
            return Ok(None);
        }
        match self.buf.pop_front() {
            Some(item) => Ok(Some(item)),
            None => {
                self.state.exhaust_front();
                Ok(None)
            }
        }
    }

    fn consume_back(&mut self) -> CursorResult<Option<T>> {
        self.capability.require(Direction::Back)?;
        if !self.state.back_live() {
            return Ok(None);
        }
        match self.buf.pop_back() {
            Some(item) => Ok(Some(item)),
            None => {
                self.state.exhaust_back();
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        if !self.state.is_done() {
            tracing::trace!(target: "bicursor", discarded = self.buf.len(), "seq cursor closed");
        }
        self.state.finish();
        self.buf.clear();
    }
}

impl<T> fmt::Debug for SeqCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqCursor")
            .field("capability", &self.capability)
            .field("remaining", &self.buf.len())
            .finish_non_exhaustive()
    }
}
