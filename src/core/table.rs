//! Immutable lookup table derived from event definitions.

use super::event::EventDefinition;
use super::identifier::Identifier;
use std::collections::HashMap;

/// Maps each event to its `source -> destination` pairs.
///
/// Built once from a list of [`EventDefinition`]s and never mutated
/// afterwards. When two definitions share an `(event, source)` pair the one
/// that comes later wins; sources not shared by the later definition keep
/// their earlier destination.
///
/// # Example
///
/// ```rust
/// use simplestate::core::{EventDefinition, TransitionTable};
///
/// let table = TransitionTable::from_definitions(vec![
///     EventDefinition::new("e1", ["A", "B"], "C"),
///     EventDefinition::new("e1", ["A"], "D"),
/// ]);
///
/// assert_eq!(table.destination(&"e1", &"A"), Some(&"D"));
/// assert_eq!(table.destination(&"e1", &"B"), Some(&"C"));
/// assert_eq!(table.destination(&"e2", &"A"), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: Identifier, E: Identifier> {
    events: HashMap<E, HashMap<S, S>>,
}

impl<S: Identifier, E: Identifier> TransitionTable<S, E> {
    /// Build the table. Never fails: an event with no sources is recorded
    /// but can never fire.
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = EventDefinition<S, E>>,
    {
        let mut events: HashMap<E, HashMap<S, S>> = HashMap::new();
        for definition in definitions {
            let routes = events.entry(definition.event).or_default();
            for source in definition.sources {
                routes.insert(source, definition.destination.clone());
            }
        }
        Self { events }
    }

    /// Whether any definition declared this event.
    pub fn contains_event(&self, event: &E) -> bool {
        self.events.contains_key(event)
    }

    /// Source-to-destination routes of an event, if declared.
    pub fn routes(&self, event: &E) -> Option<&HashMap<S, S>> {
        self.events.get(event)
    }

    /// Destination reached by firing `event` from `source`.
    pub fn destination(&self, event: &E, source: &S) -> Option<&S> {
        self.events.get(event).and_then(|routes| routes.get(source))
    }

    /// All declared events, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.events.keys()
    }

    /// Number of declared events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
