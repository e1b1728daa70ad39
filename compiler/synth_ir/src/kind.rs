//! Raw (erased) kinds used to match member signatures.

use crate::TypeId;

/// The erased classifier of a parameter or return value.
///
/// Raw signature matching compares only these: generic arguments and
/// nullability are already erased by the time a member reaches synthesis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// No value.
    Unit,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// String.
    Str,
    /// The universal root type.
    Any,
    /// A user-declared type.
    Named(TypeId),
}
