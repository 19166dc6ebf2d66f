use alloc::string::String;
use alloc::vec::Vec;

use crate::model::TypeRef;

// -----------------------------------------------------------------------------
// AttributeArg

/// A constant argument of an attribute application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeArg {
    Int(i64),
    Str(String),
    Bool(bool),
    /// An enum constant; `ty` is the enum type, `value` its underlying value.
    Enum {
        ty: TypeRef,
        value: i64,
    },
    /// A `typeof(..)` argument.
    Type(TypeRef),
}

impl AttributeArg {
    /// Creates a string argument.
    #[inline]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Returns the integer payload of `Int` and `Enum` arguments.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) | Self::Enum { value: v, .. } => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// AttributeData

/// One attribute application on a type or member.
///
/// `class` is the attribute class as written, which may be a user-defined
/// subclass or a constructed generic of a well-known attribute.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{AttributeArg, AttributeData, TypeRef};
///
/// let attr = AttributeData::new(TypeRef::new(4))
///     .with_arg(AttributeArg::Int(2))
///     .with_named("Name", AttributeArg::str("Hp"));
///
/// assert_eq!(attr.args().len(), 1);
/// assert_eq!(attr.named("Name").and_then(AttributeArg::as_str), Some("Hp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeData {
    class: TypeRef,
    args: Vec<AttributeArg>,
    named: Vec<(String, AttributeArg)>,
}

impl AttributeData {
    /// Creates an application of `class` without arguments.
    #[inline]
    pub const fn new(class: TypeRef) -> Self {
        Self {
            class,
            args: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Appends a positional constructor argument.
    #[inline]
    pub fn with_arg(mut self, arg: AttributeArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends a named argument.
    #[inline]
    pub fn with_named(mut self, name: impl Into<String>, arg: AttributeArg) -> Self {
        self.named.push((name.into(), arg));
        self
    }

    /// Returns the attribute class as written.
    #[inline]
    pub const fn class(&self) -> TypeRef {
        self.class
    }

    /// Positional arguments in source order.
    #[inline]
    pub fn args(&self) -> &[AttributeArg] {
        &self.args
    }

    /// Named arguments in source order.
    #[inline]
    pub fn named_args(&self) -> &[(String, AttributeArg)] {
        &self.named
    }

    /// Returns the last named argument called `name`.
    pub fn named(&self, name: &str) -> Option<&AttributeArg> {
        self.named
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, arg)| arg)
    }
}

// -----------------------------------------------------------------------------
// HasAttributes

/// A declaration that carries attribute applications.
pub trait HasAttributes {
    /// Attribute applications in declaration order.
    fn attributes(&self) -> &[AttributeData];
}

impl HasAttributes for [AttributeData] {
    #[inline]
    fn attributes(&self) -> &[AttributeData] {
        self
    }
}
