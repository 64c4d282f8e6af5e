use crate::{capability::Capability, cursor::Cursor, error::CursorResult};
use std::fmt;

/// Cursor that surfaces only elements matching a predicate.
///
/// Created by [`Cursor::filter`]. Capability-preserving: a rejected element
/// is consumed from the same end the caller drove, so the two ends still
/// partition the underlying sequence.
pub struct Filter<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn capability(&self) -> Capability {
        self.upstream.capability()
    }

    fn consume_front(&mut self) -> CursorResult<Option<C::Item>> {
        while let Some(item) = self.upstream.consume_front()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn consume_back(&mut self) -> CursorResult<Option<C::Item>> {
        while let Some(item) = self.upstream.consume_back()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn close(&mut self) {
        self.upstream.close();
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
