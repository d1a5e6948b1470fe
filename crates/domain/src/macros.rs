//! Macro for implementing Display and FromStr for identifier enums
//!
//! View kinds and break kinds travel through the action layer as plain
//! identifiers. This macro provides both conversions from a single mapping,
//! with case-insensitive parsing and optional aliases that are accepted on
//! input but never produced on output.
//!
//! # Example
//!
//! ```rust
//! use calprint_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Paper {
//!     A4,
//!     Letter,
//! }
//!
//! impl_domain_enum_conversions!(Paper {
//!     A4 => "a4",
//!     Letter => "letter" | "us-letter",
//! });
//!
//! assert_eq!(Paper::Letter.to_string(), "letter");
//! assert_eq!("US-Letter".parse::<Paper>(), Ok(Paper::Letter));
//! ```

/// Implements Display and FromStr traits for identifier enums
///
/// This macro generates:
/// - Display trait: writes the canonical identifier of each variant
/// - FromStr trait: parses the canonical identifier or any alias,
///   ignoring case and surrounding whitespace
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str | $alias...` - Canonical identifier followed by
///   optional aliases
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
