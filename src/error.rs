use crate::capability::{Capability, Direction};

/// Opaque error surfaced by an upstream [`Producer`](crate::Producer).
///
/// Producer failures are not interpreted by this crate; they pass through
/// consumption calls unchanged, boxed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors surfaced by cursor operations.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    /// A consumption call (or a combinator that relies on one end) targeted a
    /// direction the cursor's capability does not include.
    ///
    /// This is determined by the capability alone, never by the data, so
    /// callers can avoid it deterministically by checking
    /// [`capability()`](crate::Cursor::capability) first.
    #[error("{requested} consumption is unsupported by a {capability} cursor")]
    UnsupportedDirection {
        /// The direction the caller asked for.
        requested: Direction,
        /// The capability of the cursor that refused it.
        capability: Capability,
    },

    /// The wrapped producer failed while resuming for the next element.
    ///
    /// The cursor behaves as exhausted on every call after this is returned.
    #[error("producer failed while yielding an element")]
    Producer(#[source] BoxError),
}

impl CursorError {
    /// Returns `true` for the capability-gating error.
    pub const fn is_unsupported_direction(&self) -> bool {
        matches!(self, Self::UnsupportedDirection { .. })
    }
}
