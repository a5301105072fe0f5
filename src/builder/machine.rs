//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{EventDefinition, Identifier, Settings, Transition, TransitionTable};
use crate::engine::{Machine, Observer};

/// Builder for constructing machines with a fluent API.
///
/// Only the initial state is required. Without an observer, transitions are
/// committed silently.
///
/// # Example
///
/// ```rust
/// use simplestate::builder::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .initial("locked")
///     .event("coin", ["locked"], "unlocked")
///     .event("push", ["unlocked"], "locked")
///     .build()
///     .unwrap();
///
/// machine.trigger(&"coin").unwrap();
/// assert!(machine.is(&"unlocked"));
/// ```
pub struct MachineBuilder<S: Identifier, E: Identifier> {
    initial: Option<S>,
    definitions: Vec<EventDefinition<S, E>>,
    settings: Settings,
    observer: Option<Observer<S, E>>,
}

impl<S: Identifier, E: Identifier> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            definitions: Vec::new(),
            settings: Settings::default(),
            observer: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare an event from its parts.
    pub fn event<I>(self, event: E, sources: I, destination: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.definition(EventDefinition::new(event, sources, destination))
    }

    /// Add a prepared definition.
    pub fn definition(mut self, definition: EventDefinition<S, E>) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Add multiple definitions at once, keeping their order.
    pub fn definitions<I>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = EventDefinition<S, E>>,
    {
        self.definitions.extend(definitions);
        self
    }

    /// Replace the settings.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Toggle same-state transitions.
    pub fn allow_same_state_transition(mut self, allow: bool) -> Self {
        self.settings.allow_same_state_transition = allow;
        self
    }

    /// Set the observer. A later call replaces an earlier one.
    pub fn on_transition<F>(mut self, observer: F) -> Self
    where
        F: Fn(Transition<S, E>) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let observer = self.observer.unwrap_or_else(|| Box::new(|_: Transition<S, E>| {}));

        Ok(Machine::from_parts(
            initial,
            TransitionTable::from_definitions(self.definitions),
            self.settings,
            observer,
        ))
    }
}

impl<S: Identifier, E: Identifier> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
