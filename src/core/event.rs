//! Event definitions and realized transitions.

use serde::{Deserialize, Serialize};

/// Declares that `event` moves the machine from any of `sources` to
/// `destination`.
///
/// Sources are kept in the order given. Duplicates are harmless, and an
/// empty source list produces an event that can never fire.
///
/// # Example
///
/// ```rust
/// use simplestate::core::EventDefinition;
///
/// let close = EventDefinition::new("close", ["open", "ajar"], "closed");
///
/// assert_eq!(close.event, "close");
/// assert_eq!(close.sources, vec!["open", "ajar"]);
/// assert_eq!(close.destination, "closed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition<S, E> {
    /// Event that triggers the transition
    pub event: E,
    /// States the event may fire from
    pub sources: Vec<S>,
    /// State the machine lands in
    pub destination: S,
}

impl<S, E> EventDefinition<S, E> {
    /// Create a definition from any collection of source states.
    pub fn new<I>(event: E, sources: I, destination: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            event,
            sources: sources.into_iter().collect(),
            destination,
        }
    }
}

/// A transition that has been validated and committed.
///
/// Produced by a successful trigger and handed to the observer. The machine
/// never stores it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The event that fired
    pub event: E,
    /// State the machine was in when the event fired
    pub source: S,
    /// State the machine moved to
    pub destination: S,
}

impl<S: PartialEq, E> Transition<S, E> {
    /// True when the transition leaves the machine where it started.
    pub fn is_same_state(&self) -> bool {
        self.source == self.destination
    }
}
