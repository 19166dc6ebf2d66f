use core::fmt;

// -----------------------------------------------------------------------------
// Handles

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            /// Creates a handle from its raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw index of this handle.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

define_handle! {
    /// A handle to a type symbol (class, struct, interface, enum or attribute class).
    ///
    /// Two handles are the same symbol iff they are equal; constructed generic
    /// types have their own handle and point to their definition through
    /// [`TypeSymbol::original_definition`](crate::model::TypeSymbol::original_definition).
    TypeRef
}

define_handle! {
    /// A handle to a field or property declaration.
    MemberRef
}

define_handle! {
    /// A handle to a namespace.
    NamespaceRef
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{MemberRef, TypeRef};
    use alloc::format;

    #[test]
    fn handle_formatting() {
        assert_eq!(format!("{}", TypeRef::new(3)), "TypeRef(3)");
        assert_eq!(format!("{:?}", MemberRef::new(0)), "MemberRef(0)");
        assert_eq!(TypeRef::new(7).index(), 7);
    }
}
