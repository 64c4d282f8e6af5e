//! Combinator adapters over [`Cursor`](crate::Cursor)s.
//!
//! Every adapter computes its capability from its input's capability per a
//! fixed table; none of them probes the data to decide. Value transforms
//! ([`Map`], [`Filter`], [`FlatMap`]) preserve the input capability.
//! [`Rev`] swaps it. [`Indexed`], [`Take`] and [`TakeLast`] narrow to one
//! end; [`Skip`] and [`SkipLast`] keep the input capability but require the
//! end they count from. Constructors for the narrowing adapters fail with
//! [`UnsupportedDirection`](crate::CursorError::UnsupportedDirection) when
//! the input lacks the required end.

mod filter;
mod flat_map;
mod indexed;
mod map;
mod rev;
mod skip;
mod truncate;

pub use self::{
    filter::Filter,
    flat_map::FlatMap,
    indexed::Indexed,
    map::Map,
    rev::Rev,
    skip::{Skip, SkipLast},
    truncate::{Take, TakeLast},
};
