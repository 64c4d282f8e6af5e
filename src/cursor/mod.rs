//! The [`Cursor`] trait and base sources.
//!
//! [`SeqCursor`] is the in-memory base over a materialized sequence;
//! [`ProducerCursor`] drives a resumable [`Producer`] one element per
//! consumption call. Everything else in the crate is an adapter over these.

mod core;
mod producer;
mod seq;
pub(crate) mod state;

pub use self::{
    core::Cursor,
    producer::{FnProducer, IterProducer, Producer, ProducerCursor, from_fn},
    seq::SeqCursor,
};
