use crate::{capability::Capability, cursor::Cursor, error::CursorResult};
use std::fmt;

/// Cursor that transforms every element with a closure.
///
/// Created by [`Cursor::map`]. Capability-preserving: the transform touches
/// values, never the sequence boundary, so both ends stay independently
/// drivable when the upstream supports both.
pub struct Map<C, F> {
    upstream: C,
    transform: F,
}

impl<C, F> Map<C, F> {
    pub(crate) const fn new(upstream: C, transform: F) -> Self {
        Self { upstream, transform }
    }
}

impl<C, B, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn capability(&self) -> Capability {
        self.upstream.capability()
    }

    fn consume_front(&mut self) -> CursorResult<Option<B>> {
        Ok(self.upstream.consume_front()?.map(&mut self.transform))
    }

    fn consume_back(&mut self) -> CursorResult<Option<B>> {
        Ok(self.upstream.consume_back()?.map(&mut self.transform))
    }

    fn close(&mut self) {
        self.upstream.close();
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
