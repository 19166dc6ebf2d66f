use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dm_utils::hash::HashMap;

use crate::error::AnalysisError;
use crate::model::{MemberRef, MemberSymbol, NamespaceRef, NamespaceSymbol};
use crate::model::{SemanticModel, TypeRef, TypeSymbol, namespace_path};

// -----------------------------------------------------------------------------
// Compilation

/// An in-memory semantic model.
///
/// Hosts that already materialize their frontend's symbols can copy them
/// into a `Compilation` and hand it to an
/// [`AnalysisPass`](crate::AnalysisPass); everything else can implement
/// [`SemanticModel`] directly.
///
/// Type definitions are registered under their metadata name, the dot-joined
/// namespace path and simple name plus a `` `N `` suffix for generic arity.
/// For partial declarations only the first one is registered by name.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{Compilation, SemanticModel, TypeSymbol};
///
/// let mut compilation = Compilation::new();
/// let ns = compilation.namespace("System.Collections.Generic");
/// let dict = compilation
///     .add_type(TypeSymbol::new("IDictionary").with_namespace(ns).with_arity(2))
///     .unwrap();
///
/// assert_eq!(
///     compilation.type_by_metadata_name("System.Collections.Generic.IDictionary`2"),
///     Some(dict),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Compilation {
    namespaces: Vec<NamespaceSymbol>,
    types: Vec<TypeSymbol>,
    members: Vec<MemberSymbol>,
    children: HashMap<(NamespaceRef, String), NamespaceRef>,
    by_metadata_name: HashMap<String, TypeRef>,
}

impl Default for Compilation {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Compilation {
    const GLOBAL: NamespaceRef = NamespaceRef::new(0);

    /// Creates a compilation containing only the global namespace.
    pub fn new() -> Self {
        Self {
            namespaces: alloc::vec![NamespaceSymbol::new("", None)],
            types: Vec::new(),
            members: Vec::new(),
            children: HashMap::default(),
            by_metadata_name: HashMap::default(),
        }
    }

    /// The unnamed global namespace.
    #[inline]
    pub const fn global_namespace(&self) -> NamespaceRef {
        Self::GLOBAL
    }

    /// Returns the child namespace `name` of `parent`, creating it if needed.
    ///
    /// # Panics
    ///
    /// Panics if the compilation already holds `u32::MAX` namespaces.
    pub fn add_namespace(&mut self, parent: NamespaceRef, name: &str) -> NamespaceRef {
        let key = (parent, name.to_string());
        if let Some(&existing) = self.children.get(&key) {
            return existing;
        }

        let index = self.namespaces.len();
        assert!(index < u32::MAX as usize, "too many namespaces");
        let id = NamespaceRef::new(index as u32);
        self.namespaces
            .push(NamespaceSymbol::new(name, Some(parent)));
        self.children.insert(key, id);
        id
    }

    /// Returns the namespace for a dotted path such as `"App.Models"`,
    /// creating every missing segment. Empty segments are skipped.
    pub fn namespace(&mut self, path: &str) -> NamespaceRef {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(Self::GLOBAL, |parent, segment| {
                self.add_namespace(parent, segment)
            })
    }

    /// Adds a type declaration.
    ///
    /// Fails if the symbol refers to a namespace of another model, or if the
    /// compilation already holds `u32::MAX` types.
    pub fn add_type(&mut self, symbol: TypeSymbol) -> Result<TypeRef, AnalysisError> {
        let id = TypeRef::new(next_index(self.types.len(), "type")?);

        if symbol.original_definition().is_none() {
            let mut name = namespace_path(&*self, symbol.namespace(), '.')?;
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(symbol.name());
            if symbol.arity() > 0 {
                name.push('`');
                name.push_str(&symbol.arity().to_string());
            }
            self.by_metadata_name.entry(name).or_insert(id);
        }

        self.types.push(symbol);
        Ok(id)
    }

    /// Adds a member to the end of `owner`'s member list.
    ///
    /// Fails if `owner` is unknown or the compilation already holds
    /// `u32::MAX` members.
    pub fn add_member(
        &mut self,
        owner: TypeRef,
        member: MemberSymbol,
    ) -> Result<MemberRef, AnalysisError> {
        let id = MemberRef::new(next_index(self.members.len(), "member")?);
        self.types
            .get_mut(owner.index())
            .ok_or(AnalysisError::UnknownType(owner))?
            .push_member(id);
        self.members.push(member);
        Ok(id)
    }

    /// Mutable access for patching a declaration after it was added.
    #[inline]
    pub fn type_symbol_mut(&mut self, ty: TypeRef) -> Option<&mut TypeSymbol> {
        self.types.get_mut(ty.index())
    }

    /// Number of type symbols, including constructed generics.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// All type handles in insertion order.
    pub fn types(&self) -> impl ExactSizeIterator<Item = TypeRef> + '_ {
        (0..self.types.len() as u32).map(TypeRef::new)
    }
}

/// Converts an arena length into the index of the next handle.
#[inline]
fn next_index(len: usize, what: &'static str) -> Result<u32, AnalysisError> {
    u32::try_from(len)
        .ok()
        .filter(|&index| index < u32::MAX)
        .ok_or(AnalysisError::TooManySymbols { what })
}

impl SemanticModel for Compilation {
    #[inline]
    fn type_by_metadata_name(&self, name: &str) -> Option<TypeRef> {
        self.by_metadata_name.get(name).copied()
    }

    #[inline]
    fn type_symbol(&self, ty: TypeRef) -> Option<&TypeSymbol> {
        self.types.get(ty.index())
    }

    #[inline]
    fn namespace_symbol(&self, ns: NamespaceRef) -> Option<&NamespaceSymbol> {
        self.namespaces.get(ns.index())
    }

    #[inline]
    fn member_symbol(&self, member: MemberRef) -> Option<&MemberSymbol> {
        self.members.get(member.index())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Compilation, next_index};
    use crate::error::AnalysisError;
    use crate::model::{MemberSymbol, SemanticModel, TypeRef, TypeSymbol};

    #[test]
    fn namespaces_are_interned() {
        let mut c = Compilation::new();
        let a = c.namespace("App.Models");
        let b = c.namespace("App.Models");
        let app = c.namespace("App");

        assert_eq!(a, b);
        assert_eq!(c.namespace_symbol(a).unwrap().parent(), Some(app));
        assert_eq!(c.namespace(""), c.global_namespace());
    }

    #[test]
    fn first_partial_owns_metadata_name() {
        let mut c = Compilation::new();
        let ns = c.namespace("App");
        let first = c.add_type(TypeSymbol::new("Foo").with_namespace(ns)).unwrap();
        let second = c.add_type(TypeSymbol::new("Foo").with_namespace(ns)).unwrap();

        assert_ne!(first, second);
        assert_eq!(c.type_by_metadata_name("App.Foo"), Some(first));
        assert_eq!(c.type_by_metadata_name("Foo"), None);
    }

    #[test]
    fn constructed_generics_are_not_named() {
        let mut c = Compilation::new();
        let list = c.add_type(TypeSymbol::new("List").with_arity(1)).unwrap();
        let _ = c
            .add_type(
                TypeSymbol::new("List")
                    .with_arity(1)
                    .with_original_definition(list),
            )
            .unwrap();

        assert_eq!(c.type_by_metadata_name("List`1"), Some(list));
        assert_eq!(c.type_count(), 2);
    }

    #[test]
    fn handle_limit() {
        assert_eq!(next_index(7, "type"), Ok(7));
        assert_eq!(
            next_index(u32::MAX as usize, "member"),
            Err(AnalysisError::TooManySymbols { what: "member" }),
        );
    }

    #[test]
    fn member_on_unknown_owner() {
        let mut c = Compilation::new();
        let err = c
            .add_member(TypeRef::new(9), MemberSymbol::field("X"))
            .unwrap_err();

        assert_eq!(err, AnalysisError::UnknownType(TypeRef::new(9)));
    }
}
