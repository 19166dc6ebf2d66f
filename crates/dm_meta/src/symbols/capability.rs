use alloc::vec::Vec;

use dm_utils::hash::HashSet;

use crate::error::AnalysisError;
use crate::model::{AttributeData, HasAttributes, SemanticModel, TypeRef};

// -----------------------------------------------------------------------------
// Capability matching

/// Returns `true` if `class` is `identity` or derives from it.
///
/// Every type on the way is first reduced to its original definition, so a
/// constructed generic attribute matches its unconstructed form. The base
/// chain walk stops on cycles.
///
/// # Errors
///
/// Returns [`UnknownType`](AnalysisError::UnknownType) if `class` or one of
/// its bases is not part of the model.
pub fn derives_from<M: SemanticModel + ?Sized>(
    model: &M,
    class: TypeRef,
    identity: TypeRef,
) -> Result<bool, AnalysisError> {
    let mut visited: HashSet<TypeRef> = HashSet::default();
    let mut current = Some(class);

    while let Some(ty) = current {
        let definition = model.original_definition(ty);
        if definition == identity {
            return Ok(true);
        }
        if !visited.insert(definition) {
            return Ok(false);
        }
        current = model
            .type_symbol(definition)
            .ok_or(AnalysisError::UnknownType(definition))?
            .base();
    }
    Ok(false)
}

/// Returns the attributes on `annotated` that provide the capability
/// `identity`, in declaration order.
///
/// # Errors
///
/// Fails on the first attribute whose class the model does not know.
pub fn find_capabilities<'a, M, A>(
    model: &M,
    annotated: &'a A,
    identity: TypeRef,
) -> Result<Vec<&'a AttributeData>, AnalysisError>
where
    M: SemanticModel + ?Sized,
    A: HasAttributes + ?Sized,
{
    let mut found = Vec::new();
    for attribute in annotated.attributes() {
        if derives_from(model, attribute.class(), identity)? {
            found.push(attribute);
        }
    }
    Ok(found)
}

/// Returns `true` if any attribute on `annotated` provides `identity`.
///
/// A user-defined subclass of a well-known attribute provides the same
/// capability as the attribute itself.
///
/// # Errors
///
/// Fails on the first attribute whose class the model does not know.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{AttributeData, Compilation, MemberSymbol, TypeSymbol};
/// use dm_meta::symbols::has_capability;
///
/// let mut compilation = Compilation::new();
/// let ignore = compilation.add_type(TypeSymbol::new("IgnoreAttribute")).unwrap();
/// let no_sync = compilation
///     .add_type(TypeSymbol::new("NoNetworkSyncAttribute").with_base(ignore))
///     .unwrap();
///
/// let member = MemberSymbol::field("Health").with_attribute(AttributeData::new(no_sync));
///
/// assert_eq!(has_capability(&compilation, &member, ignore), Ok(true));
/// assert_eq!(has_capability(&compilation, &member, no_sync), Ok(true));
/// ```
#[inline]
pub fn has_capability<M, A>(
    model: &M,
    annotated: &A,
    identity: TypeRef,
) -> Result<bool, AnalysisError>
where
    M: SemanticModel + ?Sized,
    A: HasAttributes + ?Sized,
{
    Ok(!find_capabilities(model, annotated, identity)?.is_empty())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{derives_from, find_capabilities, has_capability};
    use crate::error::AnalysisError;
    use crate::model::{
        AttributeArg, AttributeData, Compilation, MemberSymbol, TypeRef, TypeSymbol,
    };

    #[test]
    fn exact_and_derived() {
        let mut c = Compilation::new();
        let attribute = c.add_type(TypeSymbol::new("Attribute")).unwrap();
        let ignore = c
            .add_type(TypeSymbol::new("IgnoreAttribute").with_base(attribute))
            .unwrap();
        let custom = c
            .add_type(TypeSymbol::new("CustomIgnoreAttribute").with_base(ignore))
            .unwrap();
        let unrelated = c
            .add_type(TypeSymbol::new("OtherAttribute").with_base(attribute))
            .unwrap();

        assert_eq!(derives_from(&c, ignore, ignore), Ok(true));
        assert_eq!(derives_from(&c, custom, ignore), Ok(true));
        assert_eq!(derives_from(&c, unrelated, ignore), Ok(false));
        assert_eq!(derives_from(&c, ignore, custom), Ok(false));
    }

    #[test]
    fn constructed_generic_attribute() {
        let mut c = Compilation::new();
        let generic = c
            .add_type(TypeSymbol::new("TagAttribute").with_arity(1))
            .unwrap();
        let constructed = c
            .add_type(
                TypeSymbol::new("TagAttribute")
                    .with_arity(1)
                    .with_original_definition(generic),
            )
            .unwrap();

        let member = MemberSymbol::field("X").with_attribute(AttributeData::new(constructed));
        assert_eq!(has_capability(&c, &member, generic), Ok(true));
        assert_eq!(has_capability(&c, &member, constructed), Ok(false));
    }

    #[test]
    fn cyclic_attribute_hierarchy_terminates() {
        let mut c = Compilation::new();
        let a = c.add_type(TypeSymbol::new("A")).unwrap();
        let b = c.add_type(TypeSymbol::new("B").with_base(a)).unwrap();
        let target = c.add_type(TypeSymbol::new("Target")).unwrap();
        c.type_symbol_mut(a).unwrap().set_base(Some(b));

        assert_eq!(derives_from(&c, b, target), Ok(false));
    }

    #[test]
    fn unknown_attribute_class() {
        let mut c = Compilation::new();
        let ignore = c.add_type(TypeSymbol::new("IgnoreAttribute")).unwrap();
        let dangling = TypeRef::new(999);

        let member = MemberSymbol::field("Health")
            .with_attribute(AttributeData::new(ignore))
            .with_attribute(AttributeData::new(dangling));

        assert_eq!(
            find_capabilities(&c, &member, ignore),
            Err(AnalysisError::UnknownType(dangling)),
        );
        assert_eq!(
            has_capability(&c, &member, ignore),
            Err(AnalysisError::UnknownType(dangling)),
        );
    }

    #[test]
    fn matches_in_declaration_order() {
        let mut c = Compilation::new();
        let data_member = c.add_type(TypeSymbol::new("DataMemberAttribute")).unwrap();
        let other = c.add_type(TypeSymbol::new("OtherAttribute")).unwrap();

        let member = MemberSymbol::property("Name")
            .with_attribute(AttributeData::new(data_member).with_arg(AttributeArg::Int(1)))
            .with_attribute(AttributeData::new(other))
            .with_attribute(AttributeData::new(data_member).with_arg(AttributeArg::Int(2)));

        let orders: Vec<_> = find_capabilities(&c, &member, data_member)
            .unwrap()
            .into_iter()
            .map(|attribute| attribute.args()[0].as_int())
            .collect();
        assert_eq!(orders, [Some(1), Some(2)]);
    }
}
