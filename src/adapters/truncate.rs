use crate::{
    capability::{Capability, Direction},
    cursor::Cursor,
    error::{CursorError, CursorResult},
};
use std::fmt;

/// Capability assigned to truncating views.
///
/// Keeping `take`/`take_last` double-ended would require buffering to locate
/// the cut point from the far end, so the current policy narrows to the end
/// the truncation is counted from. This is the one place to change if that
/// policy ever flips.
pub(crate) const fn truncated_capability(counted_from: Direction) -> Capability {
    match counted_from {
        Direction::Front => Capability::ForwardOnly,
        Direction::Back => Capability::BackwardOnly,
    }
}

/// Cursor truncated to the first `count` elements of whatever remains.
///
/// Created by [`Cursor::take`]. Front-only under the current truncation
/// policy; construction fails for backward-only inputs.
pub struct Take<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Take<C> {
    pub(crate) fn new(upstream: C, count: usize) -> CursorResult<Self> {
        upstream.capability().require(Direction::Front)?;
        Ok(Self { upstream, remaining: count })
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn capability(&self) -> Capability {
        truncated_capability(Direction::Front)
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        match self.upstream.consume_front()? {
            Some(item) => {
                self.remaining -= 1;
                Ok(Some(item))
            }
            None => {
                self.remaining = 0;
                Ok(None)
            }
        }
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        Err(CursorError::UnsupportedDirection {
            requested: Direction::Back,
            capability: self.capability(),
        })
    }

    fn close(&mut self) {
        self.remaining = 0;
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for Take<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Take")
            .field("upstream", &self.upstream)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Cursor truncated to the last `count` elements; back mirror of [`Take`].
///
/// Created by [`Cursor::take_last`]. Back-only under the current truncation
/// policy; construction fails for forward-only inputs.
pub struct TakeLast<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> TakeLast<C> {
    pub(crate) fn new(upstream: C, count: usize) -> CursorResult<Self> {
        upstream.capability().require(Direction::Back)?;
        Ok(Self { upstream, remaining: count })
    }
}

impl<C: Cursor> Cursor for TakeLast<C> {
    type Item = C::Item;

    fn capability(&self) -> Capability {
        truncated_capability(Direction::Back)
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        Err(CursorError::UnsupportedDirection {
            requested: Direction::Front,
            capability: self.capability(),
        })
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        match self.upstream.consume_back()? {
            Some(item) => {
                self.remaining -= 1;
                Ok(Some(item))
            }
            None => {
                self.remaining = 0;
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        self.remaining = 0;
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for TakeLast<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeLast")
            .field("upstream", &self.upstream)
            .field("remaining", &self.remaining)
            .finish()
    }
}
