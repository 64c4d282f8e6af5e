use crate::{
    capability::{Capability, Direction},
    cursor::Cursor,
    error::{CursorError, CursorResult},
};
use std::fmt;

/// Cursor pairing every element with its index counted from the front.
///
/// Created by [`Cursor::indexed`]. The result is front-only even over a
/// double-ended input: an index counted from the front is meaningless for
/// back consumption without knowing the sequence length. Construction fails
/// for backward-only inputs, which have no front to count from.
pub struct Indexed<C> {
    upstream: C,
    next_index: usize,
}

impl<C: Cursor> Indexed<C> {
    pub(crate) fn new(upstream: C) -> CursorResult<Self> {
        upstream.capability().require(Direction::Front)?;
        Ok(Self { upstream, next_index: 0 })
    }
}

impl<C: Cursor> Cursor for Indexed<C> {
    type Item = (usize, C::Item);

    fn capability(&self) -> Capability {
        Capability::ForwardOnly
    }

    fn consume_front(&mut self) -> CursorResult<Option<(usize, C::Item)>> {
        let Some(item) = self.upstream.consume_front()? else {
            return Ok(None);
        };
        let index = self.next_index;
        self.next_index += 1;
        Ok(Some((index, item)))
    }

    fn consume_back(&mut self) -> CursorResult<Option<(usize, C::Item)>> {
        Err(CursorError::UnsupportedDirection {
            requested: Direction::Back,
            capability: Capability::ForwardOnly,
        })
    }

    fn close(&mut self) {
        self.upstream.close();
    }
}

impl<C: fmt::Debug> fmt::Debug for Indexed<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexed")
            .field("upstream", &self.upstream)
            .field("next_index", &self.next_index)
            .finish()
    }
}
