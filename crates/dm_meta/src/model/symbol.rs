use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::model::{AttributeData, HasAttributes, MemberRef, NamespaceRef, TypeRef};

// -----------------------------------------------------------------------------
// Accessibility

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Accessibility {
    Public,
    #[default]
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    /// Returns the keyword spelling, e.g. `"protected internal"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }

    /// Returns `true` if code in the same assembly can reach the declaration.
    ///
    /// Generated accessors live in the same assembly as the analyzed type.
    #[inline]
    pub const fn is_assembly_visible(self) -> bool {
        matches!(self, Self::Public | Self::Internal | Self::ProtectedInternal)
    }
}

impl fmt::Display for Accessibility {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// MemberKind

/// Kind of a candidate member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemberKind {
    Field,
    Property,
}

// -----------------------------------------------------------------------------
// NamespaceSymbol

/// A namespace; the global namespace has an empty name and no parent.
#[derive(Debug, Clone)]
pub struct NamespaceSymbol {
    name: String,
    parent: Option<NamespaceRef>,
}

impl NamespaceSymbol {
    #[inline]
    pub fn new(name: impl Into<String>, parent: Option<NamespaceRef>) -> Self {
        Self {
            name: name.into(),
            parent,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn parent(&self) -> Option<NamespaceRef> {
        self.parent
    }

    /// Returns `true` for the unnamed global namespace.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }
}

// -----------------------------------------------------------------------------
// TypeSymbol

/// A type declaration as exposed by the host frontend.
///
/// A partial type is represented by one `TypeSymbol` per declaration, each
/// with the members written in that declaration.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{Accessibility, TypeSymbol};
///
/// let pair = TypeSymbol::new("Pair")
///     .with_arity(2)
///     .with_accessibility(Accessibility::Public);
///
/// assert_eq!(pair.arity(), 2);
/// assert!(pair.original_definition().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TypeSymbol {
    name: String,
    namespace: Option<NamespaceRef>,
    base: Option<TypeRef>,
    is_abstract: bool,
    interfaces: Vec<TypeRef>,
    arity: usize,
    original_definition: Option<TypeRef>,
    accessibility: Accessibility,
    attributes: Vec<AttributeData>,
    members: Vec<MemberRef>,
}

impl TypeSymbol {
    /// Creates a non-generic, non-abstract `internal` type in no namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            base: None,
            is_abstract: false,
            interfaces: Vec::new(),
            arity: 0,
            original_definition: None,
            accessibility: Accessibility::Internal,
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn with_namespace(mut self, namespace: NamespaceRef) -> Self {
        self.namespace = Some(namespace);
        self
    }

    #[inline]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    #[inline]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Appends a directly implemented interface.
    #[inline]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Sets the number of generic type parameters.
    #[inline]
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Marks this symbol as a constructed form of `definition`.
    #[inline]
    pub fn with_original_definition(mut self, definition: TypeRef) -> Self {
        self.original_definition = Some(definition);
        self
    }

    #[inline]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[inline]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Replaces the base type.
    #[inline]
    pub fn set_base(&mut self, base: Option<TypeRef>) {
        self.base = base;
    }

    #[inline]
    pub(crate) fn push_member(&mut self, member: MemberRef) {
        self.members.push(member);
    }

    /// Simple name, without namespace or generic arity.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn namespace(&self) -> Option<NamespaceRef> {
        self.namespace
    }

    #[inline]
    pub const fn base(&self) -> Option<TypeRef> {
        self.base
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Directly implemented interfaces in declaration order.
    #[inline]
    pub fn interfaces(&self) -> &[TypeRef] {
        &self.interfaces
    }

    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The unconstructed definition, `None` if this symbol is a definition.
    #[inline]
    pub const fn original_definition(&self) -> Option<TypeRef> {
        self.original_definition
    }

    #[inline]
    pub const fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Members in declaration order.
    #[inline]
    pub fn members(&self) -> &[MemberRef] {
        &self.members
    }
}

impl HasAttributes for TypeSymbol {
    #[inline]
    fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}

// -----------------------------------------------------------------------------
// MemberSymbol

/// A field or property declaration.
#[derive(Debug, Clone)]
pub struct MemberSymbol {
    name: String,
    kind: MemberKind,
    accessibility: Accessibility,
    is_static: bool,
    has_getter: bool,
    ty: Option<TypeRef>,
    attributes: Vec<AttributeData>,
}

impl MemberSymbol {
    /// Creates a public instance field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            accessibility: Accessibility::Public,
            is_static: false,
            has_getter: true,
            ty: None,
            attributes: Vec::new(),
        }
    }

    /// Creates a public instance property with a getter.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Property,
            ..Self::field(name)
        }
    }

    #[inline]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[inline]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Only meaningful for properties; fields are always readable.
    #[inline]
    pub fn with_getter(mut self, has_getter: bool) -> Self {
        self.has_getter = has_getter;
        self
    }

    /// Sets the declared type of the member.
    #[inline]
    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    #[inline]
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub const fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Returns `false` for write-only properties.
    #[inline]
    pub const fn is_readable(&self) -> bool {
        match self.kind {
            MemberKind::Field => true,
            MemberKind::Property => self.has_getter,
        }
    }

    #[inline]
    pub const fn ty(&self) -> Option<TypeRef> {
        self.ty
    }
}

impl HasAttributes for MemberSymbol {
    #[inline]
    fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}
