use crate::{
    capability::{Capability, Direction},
    cursor::{Cursor, state::State},
    error::{BoxError, CursorError, CursorResult},
};
use std::fmt;

/// A resumable, forward-only element producer.
///
/// This is the explicit state-machine rendering of a suspend/resume
/// generator: one [`resume`](Self::resume) call yields exactly one element
/// or signals completion with `Ok(None)`, independent of how suspension is
/// implemented. A producer may fail; the error is opaque to this crate and
/// passes through consumption calls unchanged.
pub trait Producer {
    /// The element type produced per resume.
    type Item;

    /// Runs the producer for exactly one step.
    fn resume(&mut self) -> Result<Option<Self::Item>, BoxError>;
}

/// Closure-backed [`Producer`], built by [`from_fn`].
pub struct FnProducer<F> {
    produce: F,
}

impl<T, F> Producer for FnProducer<F>
where
    F: FnMut() -> Result<Option<T>, BoxError>,
{
    type Item = T;

    fn resume(&mut self) -> Result<Option<T>, BoxError> {
        (self.produce)()
    }
}

impl<F> fmt::Debug for FnProducer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProducer").finish_non_exhaustive()
    }
}

/// Builds a producer from a closure called once per resume.
pub fn from_fn<T, F>(produce: F) -> FnProducer<F>
where
    F: FnMut() -> Result<Option<T>, BoxError>,
{
    FnProducer { produce }
}

/// [`Producer`] adapter over any infallible [`Iterator`].
#[derive(Debug)]
pub struct IterProducer<I> {
    iter: I,
}

impl<I: Iterator> IterProducer<I> {
    /// Wraps `iter` as a producer.
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;

    fn resume(&mut self) -> Result<Option<I::Item>, BoxError> {
        Ok(self.iter.next())
    }
}

/// A forward-only cursor driving a [`Producer`].
///
/// Each `consume_front` call corresponds to exactly one resume of the
/// producer. The producer is dropped (releasing whatever it holds) exactly
/// once: at completion, on the first failure, or at [`close`](Cursor::close),
/// whichever comes first. After a failure has been surfaced once, the cursor
/// behaves as exhausted.
pub struct ProducerCursor<P> {
    producer: Option<P>,
    state: State,
}

impl<P: Producer> ProducerCursor<P> {
    /// Wraps `producer` as a forward-only cursor.
    pub const fn new(producer: P) -> Self {
        Self {
            producer: Some(producer),
            state: State::opening(Capability::ForwardOnly),
        }
    }

    fn release(&mut self) {
        self.state.finish();
        if self.producer.take().is_some() {
            tracing::trace!(target: "bicursor", "producer released");
        }
    }
}

impl<I: Iterator> ProducerCursor<IterProducer<I>> {
    /// Wraps any infallible iterator as a forward-only cursor.
    #[expect(clippy::should_implement_trait)]
    pub fn from_iter(items: impl IntoIterator<IntoIter = I>) -> Self {
        Self::new(IterProducer::new(items.into_iter()))
    }
}

impl<P: Producer> Cursor for ProducerCursor<P> {
    type Item = P::Item;

    fn capability(&self) -> Capability {
        Capability::ForwardOnly
    }

    fn consume_front(&mut self) -> CursorResult<Option<P::Item>> {
        if !self.state.front_live() {
            return Ok(None);
        }
        let Some(producer) = self.producer.as_mut() else {
            return Ok(None);
        };
        match producer.resume() {
            Ok(Some(item)) => Ok(Some(item)),
            Ok(None) => {
                self.release();
                Ok(None)
            }
            Err(source) => {
                tracing::warn!(target: "bicursor", error = %source, "producer failed");
                self.release();
                Err(CursorError::Producer(source))
            }
        }
    }

    fn consume_back(&mut self) -> CursorResult<Option<P::Item>> {
        Err(CursorError::UnsupportedDirection {
            requested: Direction::Back,
            capability: Capability::ForwardOnly,
        })
    }

    fn close(&mut self) {
        self.release();
    }
}

impl<P> fmt::Debug for ProducerCursor<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerCursor")
            .field("released", &self.producer.is_none())
            .finish_non_exhaustive()
    }
}
