//! Identifier bound shared by state and event values.
//!
//! The machine treats states and events as opaque keys. Anything that can be
//! hashed, compared, cloned and debug-printed qualifies.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// Blanket-implemented for every type meeting the bounds, so callers never
/// implement it by hand. No ordering is required.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into transitions and errors
/// - `Eq` + `Hash`: identifiers key the transition table
/// - `Debug`: identifiers appear in error messages and log fields
///
/// # Example
///
/// ```rust
/// use simplestate::core::Identifier;
///
/// fn assert_identifier<T: Identifier>() {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// assert_identifier::<Door>();
/// assert_identifier::<&'static str>();
/// assert_identifier::<String>();
/// ```
pub trait Identifier: Clone + Eq + Hash + Debug {}

impl<T> Identifier for T where T: Clone + Eq + Hash + Debug {}
