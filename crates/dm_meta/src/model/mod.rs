//! The semantic model the engine reads.
//!
//! ## Menu
//!
//! - [`TypeRef`], [`MemberRef`], [`NamespaceRef`]: opaque `Copy` handles.
//!   Descriptors store handles, never references into the model, so they
//!   can outlive the compilation snapshot they were built from.
//! - [`TypeSymbol`], [`MemberSymbol`], [`NamespaceSymbol`]: plain records
//!   describing declarations.
//! - [`AttributeData`], [`AttributeArg`]: attribute applications.
//! - [`SemanticModel`]: read-only lookups, implemented by the host or by
//!   the in-memory [`Compilation`].
//! - [`namespace_path`], [`base_chain`], [`transitive_interfaces`]:
//!   cycle-guarded walks shared by the builders.

// -----------------------------------------------------------------------------
// Modules

mod attribute;
mod compilation;
mod ids;
mod symbol;
mod walk;

// -----------------------------------------------------------------------------
// Exports

pub use attribute::{AttributeArg, AttributeData, HasAttributes};
pub use compilation::Compilation;
pub use ids::{MemberRef, NamespaceRef, TypeRef};
pub use symbol::{Accessibility, MemberKind};
pub use symbol::{MemberSymbol, NamespaceSymbol, TypeSymbol};
pub use walk::{base_chain, implements_definition, namespace_path, transitive_interfaces};

// -----------------------------------------------------------------------------
// SemanticModel

/// Read-only access to one compilation snapshot.
///
/// The engine never mutates the model and only keeps handles, so an
/// implementation may hand out borrows of frontend-owned data for the
/// duration of one analysis pass.
///
/// Unknown handles must return `None`; the engine reports them as
/// [`AnalysisError`](crate::AnalysisError)s.
pub trait SemanticModel {
    /// Looks up a type definition by metadata name,
    /// e.g. ``System.Collections.Generic.IDictionary`2``.
    fn type_by_metadata_name(&self, name: &str) -> Option<TypeRef>;

    fn type_symbol(&self, ty: TypeRef) -> Option<&TypeSymbol>;

    fn namespace_symbol(&self, ns: NamespaceRef) -> Option<&NamespaceSymbol>;

    fn member_symbol(&self, member: MemberRef) -> Option<&MemberSymbol>;

    /// Reduces a constructed generic type to its definition.
    ///
    /// Definitions and unknown handles are returned unchanged.
    fn original_definition(&self, ty: TypeRef) -> TypeRef {
        self.type_symbol(ty)
            .and_then(TypeSymbol::original_definition)
            .unwrap_or(ty)
    }
}
