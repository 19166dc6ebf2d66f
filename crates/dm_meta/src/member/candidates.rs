use alloc::vec::Vec;

use crate::error::AnalysisError;
use crate::model::{MemberRef, SemanticModel, TypeRef};
use crate::symbols::{WellKnownSymbol, WellKnownSymbols, has_capability};

/// Returns the members of `ty` that take part in generation, in declaration
/// order.
///
/// A candidate is a readable instance field or property that is visible to
/// the whole assembly or explicitly carries the data-member capability.
/// Ignored members stay in the list; their contexts record the directive.
///
/// # Errors
///
/// Returns [`UnknownType`](AnalysisError::UnknownType) or
/// [`UnknownMember`](AnalysisError::UnknownMember) for dangling handles,
/// including attribute classes.
pub fn collect_candidates<M: SemanticModel + ?Sized>(
    symbols: &WellKnownSymbols<'_, M>,
    ty: TypeRef,
) -> Result<Vec<MemberRef>, AnalysisError> {
    let model = symbols.model();
    let symbol = model.type_symbol(ty).ok_or(AnalysisError::UnknownType(ty))?;
    let data_member = symbols.resolve(WellKnownSymbol::DataMember);

    let mut candidates = Vec::with_capacity(symbol.members().len());
    for &member in symbol.members() {
        let info = model
            .member_symbol(member)
            .ok_or(AnalysisError::UnknownMember(member))?;

        if info.is_static() || !info.is_readable() {
            continue;
        }

        let explicit = match data_member {
            Some(identity) => has_capability(model, info, identity)?,
            None => false,
        };
        if explicit || info.accessibility().is_assembly_visible() {
            candidates.push(member);
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::collect_candidates;
    use crate::model::{Accessibility, AttributeData, Compilation, MemberSymbol, TypeSymbol};
    use crate::symbols::WellKnownSymbols;
    use crate::testing::Framework;

    #[test]
    fn filters_members() {
        let mut c = Compilation::new();
        let fw = Framework::install(&mut c);
        let ty = c.add_type(TypeSymbol::new("Player")).unwrap();

        let name = c.add_member(ty, MemberSymbol::property("Name")).unwrap();
        let _ = c
            .add_member(ty, MemberSymbol::field("count").with_accessibility(Accessibility::Private))
            .unwrap();
        let secret = c
            .add_member(
                ty,
                MemberSymbol::field("secret")
                    .with_accessibility(Accessibility::Private)
                    .with_attribute(AttributeData::new(fw.data_member)),
            )
            .unwrap();
        let _ = c
            .add_member(ty, MemberSymbol::property("Instance").with_static(true))
            .unwrap();
        let _ = c
            .add_member(ty, MemberSymbol::property("Sink").with_getter(false))
            .unwrap();
        let ignored = c
            .add_member(
                ty,
                MemberSymbol::field("Cache").with_attribute(AttributeData::new(fw.ignore)),
            )
            .unwrap();
        let internal = c
            .add_member(
                ty,
                MemberSymbol::field("Id").with_accessibility(Accessibility::Internal),
            )
            .unwrap();

        let symbols = WellKnownSymbols::new(&c);
        let candidates = collect_candidates(&symbols, ty).unwrap();

        assert_eq!(candidates, [name, secret, ignored, internal]);
    }
}
