use alloc::string::{String, ToString};

use crate::error::AnalysisError;
use crate::member::{DataMemberMode, MemberContext};
use crate::model::{
    AttributeArg, AttributeData, MemberRef, SemanticModel, TypeRef, implements_definition,
};
use crate::symbols::{WellKnownSymbol, WellKnownSymbols, find_capabilities, has_capability};

// -----------------------------------------------------------------------------
// build_context

/// Builds the [`MemberContext`] of `member`.
///
/// Data-member attributes are applied in declaration order, positional
/// arguments before named ones, so the last value written for order, name or
/// mode wins. The ignore directive is recorded independently of everything
/// else and makes the member unserialized whatever the other directives say.
///
/// Directives whose well-known symbol is absent from the compilation are
/// left unset.
///
/// # Errors
///
/// - [`UnknownMember`](AnalysisError::UnknownMember) if the model does not
///   know `member`.
/// - [`UnknownType`](AnalysisError::UnknownType) for an attribute class or
///   member type the model does not know.
/// - [`InvalidMode`](AnalysisError::InvalidMode) for a mode value outside
///   the mode enum.
/// - [`InvalidOrder`](AnalysisError::InvalidOrder) for an order that does
///   not fit in `i32`.
pub fn build_context<M: SemanticModel + ?Sized>(
    symbols: &WellKnownSymbols<'_, M>,
    member: MemberRef,
) -> Result<MemberContext, AnalysisError> {
    let model = symbols.model();
    let symbol = model
        .member_symbol(member)
        .ok_or(AnalysisError::UnknownMember(member))?;

    let mut context = MemberContext::new(member, symbol.name(), symbol.kind());

    if let Some(ignore) = symbols.resolve(WellKnownSymbol::DataMemberIgnore) {
        context.ignored = has_capability(model, symbol, ignore)?;
    }

    if let Some(updatable) = symbols.resolve(WellKnownSymbol::DataMemberUpdatable) {
        context.updatable = has_capability(model, symbol, updatable)?;
    }

    if let Some(data_member) = symbols.resolve(WellKnownSymbol::DataMember) {
        let mode_enum = symbols.resolve(WellKnownSymbol::DataMemberMode);
        let mut applier = Applier {
            model,
            mode_enum,
            context: &mut context,
        };
        for attribute in find_capabilities(model, symbol, data_member)? {
            applier.apply(attribute)?;
        }
    }

    if let (Some(dictionary), Some(ty)) = (
        symbols.resolve(WellKnownSymbol::GenericDictionary),
        symbol.ty(),
    ) {
        context.is_dictionary = implements_definition(model, ty, dictionary)?;
    }

    if context.ignored && context.has_overrides() {
        log::debug!(
            "member `{}` is ignored; its data member overrides have no effect",
            context.name,
        );
    }

    Ok(context)
}

// -----------------------------------------------------------------------------
// Applier

struct Applier<'a, M: ?Sized> {
    model: &'a M,
    mode_enum: Option<TypeRef>,
    context: &'a mut MemberContext,
}

impl<M: SemanticModel + ?Sized> Applier<'_, M> {
    fn apply(&mut self, attribute: &AttributeData) -> Result<(), AnalysisError> {
        for arg in attribute.args() {
            match arg {
                AttributeArg::Int(order) => self.set_order(*order)?,
                AttributeArg::Str(name) => self.set_name(name),
                AttributeArg::Enum { ty, value } if self.is_mode(*ty) => self.set_mode(*value)?,
                other => self.skip("positional", other),
            }
        }

        for (key, arg) in attribute.named_args() {
            match (key.as_str(), arg) {
                ("Order", AttributeArg::Int(order)) => self.set_order(*order)?,
                ("Name", AttributeArg::Str(name)) => self.set_name(name),
                ("Mode", AttributeArg::Enum { ty, value }) if self.is_mode(*ty) => {
                    self.set_mode(*value)?;
                }
                ("Mode", AttributeArg::Int(value)) => self.set_mode(*value)?,
                (_, other) => self.skip(key, other),
            }
        }

        Ok(())
    }

    fn is_mode(&self, ty: TypeRef) -> bool {
        self.mode_enum
            .is_some_and(|mode| self.model.original_definition(ty) == mode)
    }

    fn set_order(&mut self, value: i64) -> Result<(), AnalysisError> {
        let order = i32::try_from(value).map_err(|_| AnalysisError::InvalidOrder {
            member: self.context.name.clone(),
            value,
        })?;
        if let Some(previous) = self.context.order_override.replace(order) {
            self.overwritten("order", &previous.to_string());
        }
        Ok(())
    }

    fn set_name(&mut self, name: &str) {
        if let Some(previous) = self.context.name_override.replace(String::from(name)) {
            self.overwritten("name", &previous);
        }
    }

    fn set_mode(&mut self, value: i64) -> Result<(), AnalysisError> {
        let mode = DataMemberMode::try_from(value).map_err(|value| AnalysisError::InvalidMode {
            member: self.context.name.clone(),
            value,
        })?;
        if let Some(previous) = self.context.mode.replace(mode) {
            self.overwritten("mode", previous.as_str());
        }
        Ok(())
    }

    fn overwritten(&self, what: &str, previous: &str) {
        log::debug!(
            "member `{}`: later data member {what} replaces `{previous}`",
            self.context.name,
        );
    }

    fn skip(&self, what: &str, arg: &AttributeArg) {
        log::debug!(
            "member `{}`: skipping unrecognized {what} argument {arg:?}",
            self.context.name,
        );
    }
}

// -----------------------------------------------------------------------------
// Tests
