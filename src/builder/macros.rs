//! Macros for ergonomic identifier declarations.

/// Declare a fieldless enum usable as a state or event identifier.
///
/// The generated enum derives everything the machine and serde need, and
/// gets a `name()` method plus a `Display` impl that prints the variant
/// name.
///
/// # Example
///
/// ```
/// use simplestate::identifier_enum;
///
/// identifier_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert_eq!(DoorState::Open.to_string(), "Open");
/// ```
#[macro_export]
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, for display and logging.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
