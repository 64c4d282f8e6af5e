use crate::{
    capability::{Capability, Direction},
    cursor::Cursor,
    error::CursorResult,
};
use std::fmt;

/// Cursor that expands every element into a cursor and flattens the results.
///
/// Created by [`Cursor::flat_map`]. Capability-preserving. Each live end
/// keeps its own inner cursor: the front end expands upstream front elements
/// and drains each inner from the front; the back end expands upstream back
/// elements and drains each inner from the back. Once the upstream is spent,
/// the leftover inner of the opposite end is drained from this end, so the
/// two ends cover the flattened sequence exactly once between them.
///
/// The inner cursors must admit whichever end the consumer actually drives;
/// an inner lacking it surfaces `UnsupportedDirection` at the point of use.
pub struct FlatMap<C, J, F> {
    upstream: C,
    transform: F,
    front_inner: Option<J>,
    back_inner: Option<J>,
}

impl<C, J, F> FlatMap<C, J, F> {
    pub(crate) const fn new(upstream: C, transform: F) -> Self {
        Self { upstream, transform, front_inner: None, back_inner: None }
    }
}

impl<C, J, F> Cursor for FlatMap<C, J, F>
where
    C: Cursor,
    J: Cursor,
    F: FnMut(C::Item) -> J,
{
    type Item = J::Item;

    fn capability(&self) -> Capability {
        self.upstream.capability()
    }

    fn consume_front(&mut self) -> CursorResult<Option<J::Item>> {
        self.capability().require(Direction::Front)?;
        loop {
            if let Some(inner) = self.front_inner.as_mut() {
                if let Some(item) = inner.consume_front()? {
                    return Ok(Some(item));
                }
                self.front_inner = None;
            }
            match self.upstream.consume_front()? {
                Some(item) => self.front_inner = Some((self.transform)(item)),
                None => {
                    // Upstream is spent; whatever the back end expanded but
                    // did not finish is the front of what remains.
                    let Some(inner) = self.back_inner.as_mut() else {
                        return Ok(None);
                    };
                    let next = inner.consume_front()?;
                    if next.is_none() {
                        self.back_inner = None;
                    }
                    return Ok(next);
                }
            }
        }
    }

    fn consume_back(&mut self) -> CursorResult<Option<J::Item>> {
        self.capability().require(Direction::Back)?;
        loop {
            if let Some(inner) = self.back_inner.as_mut() {
                if let Some(item) = inner.consume_back()? {
                    return Ok(Some(item));
                }
                self.back_inner = None;
            }
            match self.upstream.consume_back()? {
                Some(item) => self.back_inner = Some((self.transform)(item)),
                None => {
                    let Some(inner) = self.front_inner.as_mut() else {
                        return Ok(None);
                    };
                    let next = inner.consume_back()?;
                    if next.is_none() {
                        self.front_inner = None;
                    }
                    return Ok(next);
                }
            }
        }
    }

    fn close(&mut self) {
        self.upstream.close();
        if let Some(mut inner) = self.front_inner.take() {
            inner.close();
        }
        if let Some(mut inner) = self.back_inner.take() {
            inner.close();
        }
    }
}

impl<C: fmt::Debug, J, F> fmt::Debug for FlatMap<C, J, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("upstream", &self.upstream)
            .field("front_inner", &self.front_inner.is_some())
            .field("back_inner", &self.back_inner.is_some())
            .finish_non_exhaustive()
    }
}
