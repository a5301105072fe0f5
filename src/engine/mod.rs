//! The running machine.
//!
//! Wraps the immutable table from [`crate::core`] with a lock-guarded current
//! state and an observer that is notified after every committed transition.

mod error;
mod machine;

pub use error::TriggerError;
pub use machine::{Machine, Observer};
