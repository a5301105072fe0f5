//! Simplestate: a small, thread-safe finite state machine
//!
//! A machine is built from a start state and a list of event definitions,
//! each mapping one or more source states to a single destination. It tracks
//! the current state, answers whether an event may fire, and on a successful
//! trigger commits the new state and notifies an observer.
//!
//! # Core Concepts
//!
//! - **Identifiers**: states and events are any `Clone + Eq + Hash + Debug` type
//! - **Transition table**: fixed at construction, last definition wins
//! - **Machine**: lock-guarded current state plus a re-entrant observer
//! - **Errors**: one `TriggerError` enum covering every rejection
//!
//! # Example
//!
//! ```rust
//! use simplestate::{EventDefinition, Machine, Settings, TriggerError};
//!
//! let machine = Machine::new(
//!     "A",
//!     vec![
//!         EventDefinition::new("e1", ["A", "B"], "C"),
//!         EventDefinition::new("e2", ["C"], "D"),
//!         EventDefinition::new("e3", ["A", "D"], "A"),
//!     ],
//!     Settings::default(),
//!     |_| {},
//! );
//!
//! assert!(machine.can(&"e1"));
//! assert_eq!(
//!     machine.trigger(&"e3"),
//!     Err(TriggerError::SameStateTransition { event: "e3" })
//! );
//!
//! machine.trigger(&"e1").unwrap();
//! machine.trigger(&"e2").unwrap();
//! assert_eq!(machine.get(), "D");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use core::{EventDefinition, Identifier, Settings, Transition, TransitionTable};
pub use engine::{Machine, Observer, TriggerError};
