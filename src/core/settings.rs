//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Policy switches for a machine.
///
/// Deserializes with defaults for missing fields, so it can be embedded in a
/// host application's configuration file.
///
/// # Example
///
/// ```rust
/// use simplestate::core::Settings;
///
/// let settings = Settings::default();
/// assert!(!settings.allow_same_state_transition);
///
/// let permissive = Settings::new().allow_same_state_transition(true);
/// assert!(permissive.allow_same_state_transition);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Permit transitions whose destination equals the current state.
    pub allow_same_state_transition: bool,
}

impl Settings {
    /// Default settings: same-state transitions are rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle same-state transitions.
    pub fn allow_same_state_transition(mut self, allow: bool) -> Self {
        self.allow_same_state_transition = allow;
        self
    }
}
