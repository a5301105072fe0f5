//! Core state machine types.
//!
//! This module contains the plain data the machine is built from:
//! - The `Identifier` bound for states and events
//! - Event definitions and realized transitions
//! - Settings
//! - The immutable transition table
//!
//! Nothing in this module locks or performs side effects.

mod event;
mod identifier;
mod settings;
mod table;

pub use event::{EventDefinition, Transition};
pub use identifier::Identifier;
pub use settings::Settings;
pub use table::TransitionTable;
