use crate::{
    adapters::{Filter, FlatMap, Indexed, Map, Rev, Skip, SkipLast, Take, TakeLast},
    capability::{Capability, Direction},
    error::CursorResult,
};

/// A single-pass cursor over an ordered sequence, consumable from either end
/// its [`Capability`] admits.
///
/// One consumption step returns `Ok(Some(item))` for an element and
/// `Ok(None)` once the consumed end is exhausted; after that, the same end
/// keeps returning `Ok(None)`. The two ends partition the sequence: no
/// element is delivered twice, whatever the interleaving of calls.
///
/// Calling an end the capability does not admit fails with
/// [`UnsupportedDirection`](crate::CursorError::UnsupportedDirection). This
/// is a property of the capability alone, so `capability()` lets callers
/// avoid the error deterministically.
pub trait Cursor {
    /// The element type yielded by consumption calls.
    type Item;

    /// The directions this cursor admits. Pure; fixed for this value.
    fn capability(&self) -> Capability;

    /// Consumes the element at the front of the remaining sequence.
    fn consume_front(&mut self) -> CursorResult<Option<Self::Item>>;

    /// Consumes the element at the back of the remaining sequence.
    fn consume_back(&mut self) -> CursorResult<Option<Self::Item>>;

    /// Releases any held upstream resource and forces both ends to report
    /// done. Idempotent; safe to call at any point.
    fn close(&mut self);

    /// Transforms every element with `transform`. Capability-preserving.
    fn map<B, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, transform)
    }

    /// Keeps only elements matching `predicate`. Capability-preserving:
    /// filtering narrows which elements surface, not which end they come
    /// from.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Expands every element into a cursor and flattens the results.
    /// Capability-preserving; the inner cursors must admit whichever end the
    /// consumer actually drives.
    fn flat_map<J, F>(self, transform: F) -> FlatMap<Self, J, F>
    where
        Self: Sized,
        J: Cursor,
        F: FnMut(Self::Item) -> J,
    {
        FlatMap::new(self, transform)
    }

    /// Swaps the front and back roles. O(1) relabeling; never consumes.
    ///
    /// Taking `self` by value keeps the reversed view the single live handle
    /// over the shared cursor state. Capability maps per
    /// [`Capability::reversed`].
    fn reverse(self) -> Rev<Self>
    where
        Self: Sized,
    {
        Rev::new(self)
    }

    /// Pairs every element with its index counted from the front.
    ///
    /// The result is front-only even over a double-ended input, since the
    /// index is only meaningful from the front. Fails for backward-only
    /// inputs.
    fn indexed(self) -> CursorResult<Indexed<Self>>
    where
        Self: Sized,
    {
        Indexed::new(self)
    }

    /// Truncates to the first `count` elements of whatever remains.
    ///
    /// The result is front-only: "first `count`" is a front-relative
    /// contract, and locating the back of the truncated view would require
    /// buffering. Fails for backward-only inputs.
    fn take(self, count: usize) -> CursorResult<Take<Self>>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Truncates to the last `count` elements; back-only mirror of
    /// [`take`](Self::take). Fails for forward-only inputs.
    fn take_last(self, count: usize) -> CursorResult<TakeLast<Self>>
    where
        Self: Sized,
    {
        TakeLast::new(self, count)
    }

    /// Discards the first `count` elements, keeping the input capability.
    ///
    /// The discarded prefix is consumed from the upstream front lazily, on
    /// the first consumption call from either end. Fails for backward-only
    /// inputs, which cannot count from the front.
    fn skip(self, count: usize) -> CursorResult<Skip<Self>>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Discards the last `count` elements; back mirror of
    /// [`skip`](Self::skip). Fails for forward-only inputs.
    fn skip_last(self, count: usize) -> CursorResult<SkipLast<Self>>
    where
        Self: Sized,
    {
        SkipLast::new(self, count)
    }

    /// Front scan for the first element matching `predicate`.
    ///
    /// Defined whenever front access exists; fails with
    /// `UnsupportedDirection` for backward-only cursors before consuming
    /// anything.
    fn find<P>(&mut self, mut predicate: P) -> CursorResult<Option<Self::Item>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.capability().require(Direction::Front)?;
        while let Some(item) = self.consume_front()? {
            if predicate(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Back scan for the first element (from the back) matching `predicate`.
    fn find_back<P>(&mut self, mut predicate: P) -> CursorResult<Option<Self::Item>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.capability().require(Direction::Back)?;
        while let Some(item) = self.consume_back()? {
            if predicate(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Front fold seeded with the first element. `Ok(None)` on an empty
    /// cursor. Defined whenever front access exists.
    fn reduce<F>(mut self, mut combine: F) -> CursorResult<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.capability().require(Direction::Front)?;
        let Some(mut acc) = self.consume_front()? else {
            return Ok(None);
        };
        while let Some(item) = self.consume_front()? {
            acc = combine(acc, item);
        }
        Ok(Some(acc))
    }

    /// Back fold seeded with the last element; mirror of
    /// [`reduce`](Self::reduce). Defined whenever back access exists.
    fn reduce_back<F>(mut self, mut combine: F) -> CursorResult<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.capability().require(Direction::Back)?;
        let Some(mut acc) = self.consume_back()? else {
            return Ok(None);
        };
        while let Some(item) = self.consume_back()? {
            acc = combine(acc, item);
        }
        Ok(Some(acc))
    }

    /// Visits every element in front-to-back order of the visible sequence,
    /// whatever the capability.
    ///
    /// Front-capable cursors are drained from the front. Back-only cursors
    /// are drained from the back into a buffer and replayed reversed, which
    /// is the only way to present front-to-back order from back access.
    fn for_each<F>(mut self, mut visit: F) -> CursorResult<()>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        if self.capability().supports(Direction::Front) {
            while let Some(item) = self.consume_front()? {
                visit(item);
            }
        } else {
            let mut buffered = Vec::new();
            while let Some(item) = self.consume_back()? {
                buffered.push(item);
            }
            for item in buffered.into_iter().rev() {
                visit(item);
            }
        }
        Ok(())
    }
}
