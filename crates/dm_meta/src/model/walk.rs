use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dm_utils::collections::OrderedSet;
use dm_utils::hash::HashSet;

use crate::error::AnalysisError;
use crate::model::{NamespaceRef, SemanticModel, TypeRef, TypeSymbol};

#[inline]
fn lookup<M: SemanticModel + ?Sized>(model: &M, ty: TypeRef) -> Result<&TypeSymbol, AnalysisError> {
    model.type_symbol(ty).ok_or(AnalysisError::UnknownType(ty))
}

// -----------------------------------------------------------------------------
// Namespaces

/// Joins the names of `namespace` and its parents, outermost first.
///
/// The walk stops at the global namespace, so the result never starts or
/// ends with `separator`. `None` yields an empty path.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{Compilation, namespace_path};
///
/// let mut compilation = Compilation::new();
/// let ns = compilation.namespace("App.Models");
///
/// assert_eq!(namespace_path(&compilation, Some(ns), '.').unwrap(), "App.Models");
/// assert_eq!(namespace_path(&compilation, Some(ns), '_').unwrap(), "App_Models");
/// ```
pub fn namespace_path<M: SemanticModel + ?Sized>(
    model: &M,
    namespace: Option<NamespaceRef>,
    separator: char,
) -> Result<String, AnalysisError> {
    let mut segments: Vec<&str> = Vec::new();
    let mut visited: HashSet<NamespaceRef> = HashSet::default();
    let mut current = namespace;

    while let Some(ns) = current {
        let symbol = model
            .namespace_symbol(ns)
            .ok_or(AnalysisError::UnknownNamespace(ns))?;
        if symbol.is_global() {
            break;
        }
        if !visited.insert(ns) {
            return Err(AnalysisError::CyclicNamespace {
                name: symbol.name().to_string(),
            });
        }
        segments.push(symbol.name());
        current = symbol.parent();
    }

    let mut path = String::new();
    for (index, segment) in segments.iter().rev().enumerate() {
        if index > 0 {
            path.push(separator);
        }
        path.push_str(segment);
    }
    Ok(path)
}

// -----------------------------------------------------------------------------
// Inheritance

/// Returns the base types of `ty`, immediate parent first.
///
/// `ty` itself is not included. Fails with
/// [`AnalysisError::CyclicInheritance`] if the chain loops.
pub fn base_chain<M: SemanticModel + ?Sized>(
    model: &M,
    ty: TypeRef,
) -> Result<Vec<TypeRef>, AnalysisError> {
    let symbol = lookup(model, ty)?;
    let mut visited: HashSet<TypeRef> = HashSet::default();
    visited.insert(ty);

    let mut chain = Vec::new();
    let mut current = symbol.base();
    while let Some(base) = current {
        if !visited.insert(base) {
            return Err(AnalysisError::CyclicInheritance {
                name: symbol.name().to_string(),
            });
        }
        current = lookup(model, base)?.base();
        chain.push(base);
    }
    Ok(chain)
}

/// Collects every interface `ty` implements, including those inherited from
/// base types and from other interfaces.
///
/// Order: the interfaces declared on `ty` depth-first, then those of each
/// base type in chain order. Each interface handle appears once.
pub fn transitive_interfaces<M: SemanticModel + ?Sized>(
    model: &M,
    ty: TypeRef,
) -> Result<OrderedSet<TypeRef>, AnalysisError> {
    let mut found = OrderedSet::new();
    let mut stack: Vec<TypeRef> = Vec::new();

    let owners = core::iter::once(ty).chain(base_chain(model, ty)?);
    for owner in owners {
        stack.extend(lookup(model, owner)?.interfaces().iter().rev());

        while let Some(interface) = stack.pop() {
            if !found.insert(interface) {
                continue;
            }
            stack.extend(lookup(model, interface)?.interfaces().iter().rev());
        }
    }
    Ok(found)
}

/// Returns `true` if `ty` is, or implements, a construction of `definition`.
pub fn implements_definition<M: SemanticModel + ?Sized>(
    model: &M,
    ty: TypeRef,
    definition: TypeRef,
) -> Result<bool, AnalysisError> {
    if model.original_definition(ty) == definition {
        return Ok(true);
    }
    Ok(transitive_interfaces(model, ty)?
        .iter()
        .any(|&interface| model.original_definition(interface) == definition))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{base_chain, implements_definition, namespace_path, transitive_interfaces};
    use crate::error::AnalysisError;
    use crate::model::{Compilation, TypeSymbol};

    #[test]
    fn global_namespace_is_empty() {
        let c = Compilation::new();

        assert_eq!(namespace_path(&c, None, '.').unwrap(), "");
        assert_eq!(namespace_path(&c, Some(c.global_namespace()), '.').unwrap(), "");
    }

    #[test]
    fn base_chain_nearest_first() {
        let mut c = Compilation::new();
        let root = c.add_type(TypeSymbol::new("Root")).unwrap();
        let mid = c.add_type(TypeSymbol::new("Mid").with_base(root)).unwrap();
        let leaf = c.add_type(TypeSymbol::new("Leaf").with_base(mid)).unwrap();

        assert_eq!(base_chain(&c, leaf).unwrap(), vec![mid, root]);
        assert!(base_chain(&c, root).unwrap().is_empty());
    }

    #[test]
    fn base_chain_cycle() {
        let mut c = Compilation::new();
        let a = c.add_type(TypeSymbol::new("A")).unwrap();
        let b = c.add_type(TypeSymbol::new("B").with_base(a)).unwrap();
        c.type_symbol_mut(a).unwrap().set_base(Some(b));

        assert!(matches!(
            base_chain(&c, b),
            Err(AnalysisError::CyclicInheritance { .. })
        ));
    }

    #[test]
    fn interfaces_include_inherited() {
        let mut c = Compilation::new();
        let i_base = c.add_type(TypeSymbol::new("IBase")).unwrap();
        let i_derived = c
            .add_type(TypeSymbol::new("IDerived").with_interface(i_base))
            .unwrap();
        let i_other = c.add_type(TypeSymbol::new("IOther")).unwrap();
        let parent = c
            .add_type(TypeSymbol::new("Parent").with_interface(i_other))
            .unwrap();
        let child = c
            .add_type(
                TypeSymbol::new("Child")
                    .with_base(parent)
                    .with_interface(i_derived)
                    .with_interface(i_base),
            )
            .unwrap();

        let found = transitive_interfaces(&c, child).unwrap();
        assert_eq!(found.as_slice(), &[i_derived, i_base, i_other]);
    }

    #[test]
    fn constructed_interface_matches_definition() {
        let mut c = Compilation::new();
        let dict = c.add_type(TypeSymbol::new("IDictionary").with_arity(2)).unwrap();
        let dict_si = c
            .add_type(
                TypeSymbol::new("IDictionary")
                    .with_arity(2)
                    .with_original_definition(dict),
            )
            .unwrap();
        let map = c
            .add_type(TypeSymbol::new("Map").with_interface(dict_si))
            .unwrap();
        let list = c.add_type(TypeSymbol::new("List")).unwrap();

        assert!(implements_definition(&c, dict_si, dict).unwrap());
        assert!(implements_definition(&c, map, dict).unwrap());
        assert!(!implements_definition(&c, list, dict).unwrap());
    }
}
