//! Typed indices into the semantic model.
//!
//! Each id is a `u32` index assigned by the model builder in declaration
//! order, so comparing ids also compares declaration order.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Get raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Index into the owning table.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// A declared type (class/record declaration) under compilation.
    TypeId,
    "type"
);

define_id!(
    /// A primary-constructor parameter.
    ParamId,
    "param"
);

define_id!(
    /// A member function present on some type, declared or fabricated.
    MemberId,
    "member"
);
