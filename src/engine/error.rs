//! Errors returned when an event cannot fire.

use thiserror::Error;

/// Why a trigger was rejected.
///
/// Checks run in a fixed order, so an undeclared event is always reported as
/// [`InvalidEvent`](TriggerError::InvalidEvent) and a declared event that
/// cannot fire from the current state is always reported as
/// [`InvalidState`](TriggerError::InvalidState), before the same-state policy
/// is consulted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TriggerError<S, E> {
    /// The event was not declared by any definition.
    #[error("invalid event: {event:?}")]
    InvalidEvent { event: E },

    /// The event is declared but cannot fire from the current state.
    #[error("invalid state: {state:?}")]
    InvalidState { state: S },

    /// The event would leave the state unchanged and same-state transitions
    /// are disabled.
    #[error("same state transition not allowed: {event:?}")]
    SameStateTransition { event: E },
}

impl<S, E> TriggerError<S, E> {
    /// Returns a stable code suitable for API responses or metrics labels.
    pub fn error_code(&self) -> &'static str {
        match self {
            TriggerError::InvalidEvent { .. } => "INVALID_EVENT",
            TriggerError::InvalidState { .. } => "INVALID_STATE",
            TriggerError::SameStateTransition { .. } => "SAME_STATE_TRANSITION",
        }
    }

    /// Returns whether the rejection is an expected business outcome.
    ///
    /// An undeclared event usually means the caller has a bug; the other two
    /// kinds depend only on where the machine currently is.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TriggerError::InvalidEvent { .. })
    }
}
