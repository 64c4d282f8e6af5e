use crate::capability::Capability;

/// Consumption state of a base cursor.
///
/// Each end terminates monotonically: once an end has reported done it keeps
/// reporting done. `Done` is terminal for the whole cursor and is also the
/// state forced by [`close`](crate::Cursor::close).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Both supported ends are live.
    Active,
    /// The front end has reported done; only the back is live.
    FrontExhausted,
    /// The back end has reported done; only the front is live.
    BackExhausted,
    /// Both ends report done on every further call.
    Done,
}

impl State {
    /// Opening state for a cursor of the given capability.
    ///
    /// An end the capability never exposes starts out exhausted, so that
    /// exhausting the only live end lands directly in `Done`.
    pub(crate) const fn opening(capability: Capability) -> Self {
        match capability {
            Capability::DoubleEnded => Self::Active,
            Capability::ForwardOnly => Self::BackExhausted,
            Capability::BackwardOnly => Self::FrontExhausted,
        }
    }

    pub(crate) const fn front_live(self) -> bool {
        matches!(self, Self::Active | Self::BackExhausted)
    }

    pub(crate) const fn back_live(self) -> bool {
        matches!(self, Self::Active | Self::FrontExhausted)
    }

    pub(crate) const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Records a done signal from the front end.
    pub(crate) const fn exhaust_front(&mut self) {
        *self = match *self {
            Self::Active => Self::FrontExhausted,
            Self::FrontExhausted => Self::FrontExhausted,
            Self::BackExhausted | Self::Done => Self::Done,
        };
    }

    /// Records a done signal from the back end.
    pub(crate) const fn exhaust_back(&mut self) {
        *self = match *self {
            Self::Active => Self::BackExhausted,
            Self::BackExhausted => Self::BackExhausted,
            Self::FrontExhausted | Self::Done => Self::Done,
        };
    }

    /// Forces the terminal state.
    pub(crate) const fn finish(&mut self) {
        *self = Self::Done;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exhausting_both_ends_is_terminal() {
        let mut state = State::opening(Capability::DoubleEnded);
        assert!(state.front_live() && state.back_live());

        state.exhaust_front();
        assert_eq!(state, State::FrontExhausted);
        assert!(!state.front_live() && state.back_live());

        state.exhaust_back();
        assert!(state.is_done());

        // Terminal: further signals change nothing.
        state.exhaust_front();
        state.exhaust_back();
        assert!(state.is_done());
    }

    #[test]
    fn single_ended_cursors_finish_in_one_step() {
        let mut forward = State::opening(Capability::ForwardOnly);
        forward.exhaust_front();
        assert!(forward.is_done());

        let mut backward = State::opening(Capability::BackwardOnly);
        backward.exhaust_back();
        assert!(backward.is_done());
    }
}
