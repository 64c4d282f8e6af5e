use crate::{
    capability::{Capability, Direction},
    cursor::Cursor,
    error::CursorResult,
};
use std::fmt;

/// Cursor with its first `count` elements discarded.
///
/// Created by [`Cursor::skip`]. Keeps the input capability: once the prefix
/// is gone, what remains is an ordinary view of the upstream and both ends
/// delegate directly. The prefix is consumed from the upstream front lazily,
/// on the first consumption call from either end, so construction requires
/// front access (backward-only inputs fail).
pub struct Skip<C> {
    upstream: C,
    pending: usize,
}

impl<C: Cursor> Skip<C> {
    pub(crate) fn new(upstream: C, count: usize) -> CursorResult<Self> {
        upstream.capability().require(Direction::Front)?;
        Ok(Self { upstream, pending: count })
    }

    fn discard_prefix(&mut self) -> CursorResult<()> {
        while self.pending > 0 {
            match self.upstream.consume_front()? {
                Some(_) => self.pending -= 1,
                // Shorter than the skip count; nothing will remain.
                None => self.pending = 0,
            }
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn capability(&self) -> Capability {
        self.upstream.capability()
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        self.discard_prefix()?;
        self.upstream.consume_front()
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        // Gate before touching the upstream: a forward-only view must refuse
        // without consuming anything.
        self.capability().require(Direction::Back)?;
        self.discard_prefix()?;
        self.upstream.consume_back()
    }

    fn close(&mut self) {
        self.pending = 0;
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for Skip<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skip")
            .field("upstream", &self.upstream)
            .field("pending", &self.pending)
            .finish()
    }
}

/// Cursor with its last `count` elements discarded; back mirror of [`Skip`].
///
/// Created by [`Cursor::skip_last`]. Keeps the input capability; the suffix
/// is consumed from the upstream back lazily, on the first consumption call
/// from either end, so construction requires back access (forward-only
/// inputs fail).
pub struct SkipLast<C> {
    upstream: C,
    pending: usize,
}

impl<C: Cursor> SkipLast<C> {
    pub(crate) fn new(upstream: C, count: usize) -> CursorResult<Self> {
        upstream.capability().require(Direction::Back)?;
        Ok(Self { upstream, pending: count })
    }

    fn discard_suffix(&mut self) -> CursorResult<()> {
        while self.pending > 0 {
            match self.upstream.consume_back()? {
                Some(_) => self.pending -= 1,
                None => self.pending = 0,
            }
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for SkipLast<C> {
    type Item = C::Item;

    fn capability(&self) -> Capability {
        self.upstream.capability()
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        self.capability().require(Direction::Front)?;
        self.discard_suffix()?;
        self.upstream.consume_front()
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        self.discard_suffix()?;
        self.upstream.consume_back()
    }

    fn close(&mut self) {
        self.pending = 0;
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for SkipLast<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipLast")
            .field("upstream", &self.upstream)
            .field("pending", &self.pending)
            .finish()
    }
}
