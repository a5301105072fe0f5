//! Thread-safe state machine with a transition observer.

use crate::core::{EventDefinition, Identifier, Settings, Transition, TransitionTable};
use crate::engine::error::TriggerError;
use parking_lot::RwLock;
use std::fmt;

/// Callback invoked after every committed transition.
pub type Observer<S, E> = Box<dyn Fn(Transition<S, E>) + Send + Sync>;

/// Mutable part of the machine, guarded by a single lock.
struct Inner<S> {
    current: S,
    settings: Settings,
}

/// A finite state machine over caller-chosen state and event identifiers.
///
/// The transition table is fixed at construction. The current state and the
/// settings live behind one readers-writer lock, so a machine can be shared
/// between threads through an `Arc`.
///
/// # Lock discipline
///
/// [`trigger`](Machine::trigger) holds the write lock only while validating
/// and committing. The lock is released before the observer runs, which lets
/// the observer call back into the machine, including `trigger` itself.
/// Holding the lock across the callback would deadlock such chains. The
/// trade-off is a window between commit and notification in which another
/// thread may move the machine again; the observer always receives the
/// transition that was committed, not a fresh read of the state.
///
/// # Example
///
/// ```rust
/// use simplestate::{EventDefinition, Machine, Settings};
///
/// let machine = Machine::new(
///     "idle",
///     vec![
///         EventDefinition::new("start", ["idle"], "running"),
///         EventDefinition::new("stop", ["running"], "idle"),
///     ],
///     Settings::default(),
///     |transition| println!("{:?} -> {:?}", transition.source, transition.destination),
/// );
///
/// assert!(machine.can(&"start"));
/// machine.trigger(&"start").unwrap();
/// assert!(machine.is(&"running"));
/// ```
pub struct Machine<S: Identifier, E: Identifier> {
    table: TransitionTable<S, E>,
    inner: RwLock<Inner<S>>,
    on_transition: Observer<S, E>,
}

impl<S: Identifier, E: Identifier> Machine<S, E> {
    /// Create a machine in `start`.
    ///
    /// Never fails. Later definitions overwrite earlier ones that share an
    /// `(event, source)` pair, and `start` is not checked against the table.
    /// The observer is stored and not called here.
    pub fn new<I, F>(start: S, definitions: I, settings: Settings, on_transition: F) -> Self
    where
        I: IntoIterator<Item = EventDefinition<S, E>>,
        F: Fn(Transition<S, E>) + Send + Sync + 'static,
    {
        Self::from_parts(
            start,
            TransitionTable::from_definitions(definitions),
            settings,
            Box::new(on_transition),
        )
    }

    pub(crate) fn from_parts(
        start: S,
        table: TransitionTable<S, E>,
        settings: Settings,
        on_transition: Observer<S, E>,
    ) -> Self {
        Self {
            table,
            inner: RwLock::new(Inner {
                current: start,
                settings,
            }),
            on_transition,
        }
    }

    /// Current state.
    pub fn get(&self) -> S {
        self.inner.read().current.clone()
    }

    /// Whether the machine is currently in `state`.
    pub fn is(&self, state: &S) -> bool {
        self.inner.read().current == *state
    }

    /// Overwrite the current state.
    ///
    /// This is an escape hatch for initialization and for restoring a state
    /// saved elsewhere. It skips the transition table entirely, accepts
    /// states the table has never heard of, and does not notify the
    /// observer. Use [`trigger`](Machine::trigger) for business transitions.
    pub fn set(&self, state: S) {
        let mut inner = self.inner.write();
        tracing::debug!(from = ?inner.current, to = ?state, "state overwritten");
        inner.current = state;
    }

    /// Whether `event` could fire right now.
    ///
    /// Collapses every rejection reason into `false`.
    pub fn can(&self, event: &E) -> bool {
        self.can_trigger(event).is_ok()
    }

    /// Validate `event` against the current state without changing anything.
    ///
    /// Returns the transition that [`trigger`](Machine::trigger) would
    /// commit, or the reason it would be rejected.
    pub fn can_trigger(&self, event: &E) -> Result<Transition<S, E>, TriggerError<S, E>> {
        let inner = self.inner.read();
        validate(&self.table, &inner, event)
    }

    /// Fire `event`.
    ///
    /// On success the new state is committed, the lock is released, and then
    /// the observer is called on this thread with the committed transition.
    /// On failure nothing changes and the observer is not called. A panic in
    /// the observer propagates to the caller after the state is committed.
    pub fn trigger(&self, event: &E) -> Result<(), TriggerError<S, E>> {
        let transition = {
            let mut inner = self.inner.write();
            let transition = match validate(&self.table, &inner, event) {
                Ok(transition) => transition,
                Err(err) => {
                    tracing::trace!(event = ?event, code = err.error_code(), "trigger rejected");
                    return Err(err);
                }
            };
            inner.current = transition.destination.clone();
            transition
        };

        // Lock released: the observer may re-enter the machine.
        tracing::debug!(
            event = ?transition.event,
            source = ?transition.source,
            destination = ?transition.destination,
            "transition committed"
        );
        (self.on_transition)(transition);
        Ok(())
    }

    /// Events that could fire from the current state, in no particular order.
    pub fn available_events(&self) -> Vec<E> {
        let inner = self.inner.read();
        self.table
            .events()
            .filter(|event| validate(&self.table, &inner, event).is_ok())
            .cloned()
            .collect()
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.inner.read().settings
    }

    /// The transition table built at construction.
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }
}

impl<S: Identifier, E: Identifier> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Machine")
            .field("current", &inner.current)
            .field("settings", &inner.settings)
            .field("events", &self.table.len())
            .finish_non_exhaustive()
    }
}

/// Decide whether `event` may fire from the current state.
///
/// Order matters: unknown event, then unknown source, then same-state policy.
fn validate<S: Identifier, E: Identifier>(
    table: &TransitionTable<S, E>,
    inner: &Inner<S>,
    event: &E,
) -> Result<Transition<S, E>, TriggerError<S, E>> {
    let routes = table
        .routes(event)
        .ok_or_else(|| TriggerError::InvalidEvent {
            event: event.clone(),
        })?;

    let destination = routes
        .get(&inner.current)
        .ok_or_else(|| TriggerError::InvalidState {
            state: inner.current.clone(),
        })?;

    if !inner.settings.allow_same_state_transition && *destination == inner.current {
        return Err(TriggerError::SameStateTransition {
            event: event.clone(),
        });
    }

    Ok(Transition {
        event: event.clone(),
        source: inner.current.clone(),
        destination: destination.clone(),
    })
}
