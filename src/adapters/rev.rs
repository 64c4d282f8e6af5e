use crate::{
    capability::{Capability, Direction},
    cursor::Cursor,
    error::CursorResult,
};
use std::fmt;

/// Reversed view of a cursor: front and back roles swap.
///
/// Created by [`Cursor::reverse`]. A pure O(1) relabeling over the same
/// shared cursor state; defined for every input capability, mapping it per
/// [`Capability::reversed`]. Reversing twice restores the original behavior
/// for every subsequent consumption call.
pub struct Rev<C> {
    upstream: C,
}

impl<C> Rev<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self { upstream }
    }
}

impl<C: Cursor> Cursor for Rev<C> {
    type Item = C::Item;

    fn capability(&self) -> Capability {
        self.upstream.capability().reversed()
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        // Gate on the reversed capability so the error names this view's
        // direction, not the upstream's.
        self.capability().require(Direction::Front)?;
        self.upstream.consume_back()
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        self.capability().require(Direction::Back)?;
        self.upstream.consume_front()
    }

    fn close(&mut self) {
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for Rev<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rev").field("upstream", &self.upstream).finish()
    }
}
