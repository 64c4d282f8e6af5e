//! Double-ended cursors with explicit direction capabilities.
//!
//! # Overview
//!
//! A [`Cursor`] is a single-pass view over an ordered sequence that can be
//! consumed from the front, the back, or both, depending on its
//! [`Capability`] tag. The two ends share one sequence: front consumption
//! advances left-to-right, back consumption right-to-left, and the cursor is
//! exhausted when they meet. No element is ever delivered to both ends,
//! whatever the interleaving.
//!
//! This crate provides:
//! - Base sources: [`SeqCursor`] over in-memory sequences, and
//!   [`ProducerCursor`] over resumable [`Producer`]s (one resume per
//!   element).
//! - Combinators ([`map`](Cursor::map), [`filter`](Cursor::filter),
//!   [`flat_map`](Cursor::flat_map), [`reverse`](Cursor::reverse),
//!   [`take`](Cursor::take), [`skip`](Cursor::skip),
//!   [`indexed`](Cursor::indexed) and their back-biased mirrors) that
//!   propagate or narrow directionality by a fixed table.
//! - Terminal scans ([`find`](Cursor::find), [`reduce`](Cursor::reduce),
//!   [`for_each`](Cursor::for_each) and back mirrors).
//!
//! # Quick Start
//!
//! ```
//! use bicursor::{Capability, Cursor, CursorResult, SeqCursor};
//!
//! fn main() -> CursorResult<()> {
//!     let mut cursor = SeqCursor::new([1, 2, 3, 4, 5, 6]);
//!     assert_eq!(cursor.capability(), Capability::DoubleEnded);
//!
//!     // Either end, in any interleaving.
//!     assert_eq!(cursor.consume_front()?, Some(1));
//!     assert_eq!(cursor.consume_back()?, Some(6));
//!
//!     // Combinators track how directionality propagates.
//!     let doubled = cursor.map(|n| n * 2);
//!     assert_eq!(doubled.capability(), Capability::DoubleEnded);
//!
//!     let mut first_two = doubled.take(2)?;
//!     assert_eq!(first_two.capability(), Capability::ForwardOnly);
//!     assert_eq!(first_two.consume_front()?, Some(4));
//!     assert!(first_two.consume_back().is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Key Concepts
//!
//! - [`Capability`] - which ends a cursor value admits: `DoubleEnded`,
//!   `ForwardOnly`, or `BackwardOnly`. Fixed per value; a combinator may
//!   hand back a different capability, but never mutates one in place.
//! - [`Cursor`] - the consumption contract: `consume_front`, `consume_back`,
//!   `capability`, `close`, plus the combinator and terminal methods.
//! - [`Producer`] - a resumable generator-style source; one
//!   [`resume`](Producer::resume) call yields exactly one element or signals
//!   completion.
//!
//! # Capability propagation
//!
//! | combinator | double-ended in | forward-only in | backward-only in |
//! |---|---|---|---|
//! | `map` / `filter` / `flat_map` | double-ended | forward-only | backward-only |
//! | `reverse` | double-ended | backward-only | forward-only |
//! | `indexed` | forward-only | forward-only | fails |
//! | `take` | forward-only | forward-only | fails |
//! | `take_last` | backward-only | fails | backward-only |
//! | `skip` | double-ended | forward-only | fails |
//! | `skip_last` | double-ended | fails | backward-only |
//! | `find` / `reduce` | ok | ok | fails |
//! | `find_back` / `reduce_back` | ok | fails | ok |
//! | `for_each` | ok | ok | ok |
//!
//! "fails" means [`CursorError::UnsupportedDirection`], raised at
//! construction; consuming the wrong end of a built cursor raises the same
//! error at the call site. Either way it is a static property of the
//! capability alone - check [`capability()`](Cursor::capability) to avoid it
//! deterministically.
//!
//! # Errors
//!
//! [`CursorError::UnsupportedDirection`] is the only failure this crate
//! defines. A failing [`Producer`] surfaces once as
//! [`CursorError::Producer`] with the opaque source attached; afterwards the
//! cursor behaves as exhausted.
//!
//! # Concurrency
//!
//! Synchronous, pull-based, single-holder. A cursor is intended to be driven
//! by exactly one logical holder; share across threads only behind external
//! serialization. [`close`](Cursor::close) is the one cancellation
//! primitive: idempotent, safe at any point, and both live ends report done
//! afterwards.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]

pub mod adapters;
pub use adapters::{Filter, FlatMap, Indexed, Map, Rev, Skip, SkipLast, Take, TakeLast};

mod capability;
pub use capability::{Capability, Direction, Directions};

pub mod cursor;
pub use cursor::{Cursor, FnProducer, IterProducer, Producer, ProducerCursor, SeqCursor, from_fn};

mod error;
pub use error::{BoxError, CursorError, CursorResult};
