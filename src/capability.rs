use crate::error::{CursorError, CursorResult};
use bitflags::bitflags;
use std::fmt;

/// One consumption direction of a cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Consume the element closest to the front of the visible sequence.
    Front,
    /// Consume the element closest to the back of the visible sequence.
    Back,
}

impl Direction {
    /// Returns the other direction.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Returns this direction as a one-element [`Directions`] set.
    pub const fn as_set(self) -> Directions {
        match self {
            Self::Front => Directions::FRONT,
            Self::Back => Directions::BACK,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Front => "front",
            Self::Back => "back",
        })
    }
}

bitflags! {
    /// Set of consumption directions a cursor exposes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// Front consumption is available.
        const FRONT = 0b01;
        /// Back consumption is available.
        const BACK = 0b10;
    }
}

/// Which ends of a cursor are live.
///
/// A capability is fixed for the lifetime of one cursor value. Combinators
/// may hand back a cursor with a different capability than their input, but
/// never change an existing cursor's capability in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Both ends may be consumed, independently and in any interleaving.
    DoubleEnded,
    /// Only [`consume_front`](crate::Cursor::consume_front) is available.
    ForwardOnly,
    /// Only [`consume_back`](crate::Cursor::consume_back) is available.
    BackwardOnly,
}

impl Capability {
    /// The set of directions this capability admits.
    pub const fn directions(self) -> Directions {
        match self {
            Self::DoubleEnded => Directions::all(),
            Self::ForwardOnly => Directions::FRONT,
            Self::BackwardOnly => Directions::BACK,
        }
    }

    /// Whether the given direction is admitted.
    pub const fn supports(self, direction: Direction) -> bool {
        self.directions().contains(direction.as_set())
    }

    /// The capability of a reversed view: front and back roles swap.
    pub const fn reversed(self) -> Self {
        match self {
            Self::DoubleEnded => Self::DoubleEnded,
            Self::ForwardOnly => Self::BackwardOnly,
            Self::BackwardOnly => Self::ForwardOnly,
        }
    }

    /// Validates that this capability admits `requested`.
    ///
    /// Returns [`CursorError::UnsupportedDirection`] otherwise.
    pub fn require(self, requested: Direction) -> CursorResult<()> {
        self.supports(requested)
            .then_some(())
            .ok_or(CursorError::UnsupportedDirection { requested, capability: self })
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DoubleEnded => "double-ended",
            Self::ForwardOnly => "forward-only",
            Self::BackwardOnly => "backward-only",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reversed_is_an_involution() {
        for cap in [Capability::DoubleEnded, Capability::ForwardOnly, Capability::BackwardOnly] {
            assert_eq!(cap.reversed().reversed(), cap);
        }
    }

    #[test]
    fn directions_match_tags() {
        assert_eq!(Capability::DoubleEnded.directions(), Directions::FRONT | Directions::BACK);
        assert_eq!(Capability::ForwardOnly.directions(), Directions::FRONT);
        assert_eq!(Capability::BackwardOnly.directions(), Directions::BACK);
    }

    #[test]
    fn require_reports_the_requested_direction() {
        let err = Capability::ForwardOnly.require(Direction::Back).unwrap_err();
        assert!(err.is_unsupported_direction());
        assert_eq!(
            err.to_string(),
            "back consumption is unsupported by a forward-only cursor"
        );
    }
}
