use alloc::vec::Vec;

use crate::descriptor::{ClassDescriptor, build_descriptor};
use crate::diagnostic::Diagnostic;
use crate::error::AnalysisError;
use crate::member::{MemberContext, build_context, collect_candidates};
use crate::merge::merge_with_diagnostics;
use crate::model::{MemberRef, SemanticModel, TypeRef};
use crate::symbols::{WellKnownSymbol, WellKnownSymbols};

// -----------------------------------------------------------------------------
// PassOutput

/// Everything one analysis pass hands to the accessor emitter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PassOutput {
    /// One descriptor per logical type, in first-seen order.
    pub descriptors: Vec<ClassDescriptor>,
    /// Conflicts found while merging partial declarations.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether generated code can register itself through the
    /// module-initializer attribute.
    pub module_initializer: bool,
}

// -----------------------------------------------------------------------------
// AnalysisPass

/// One analysis pass over one compilation snapshot.
///
/// The pass owns the well-known symbol cache, so every lookup is resolved
/// at most once per pass. Concurrent passes each create their own.
///
/// # Examples
///
/// ```
/// use dm_meta::AnalysisPass;
/// use dm_meta::model::{Compilation, MemberSymbol, TypeSymbol};
///
/// let mut compilation = Compilation::new();
/// let ns = compilation.namespace("App.Models");
/// let foo = compilation
///     .add_type(TypeSymbol::new("Foo").with_namespace(ns))
///     .unwrap();
/// compilation.add_member(foo, MemberSymbol::property("Id")).unwrap();
///
/// let pass = AnalysisPass::new(&compilation);
/// let output = pass.run([foo]).unwrap();
///
/// let foo = &output.descriptors[0];
/// assert_eq!(foo.generated_identifier(), "SourceGenerated_App_Models_Foo");
/// assert!(foo.members()[0].is_default());
/// assert!(output.diagnostics.is_empty());
/// assert!(!output.module_initializer);
/// ```
pub struct AnalysisPass<'m, M: ?Sized> {
    symbols: WellKnownSymbols<'m, M>,
}

impl<'m, M: SemanticModel + ?Sized> AnalysisPass<'m, M> {
    #[inline]
    pub const fn new(model: &'m M) -> Self {
        Self {
            symbols: WellKnownSymbols::new(model),
        }
    }

    #[inline]
    pub const fn model(&self) -> &'m M {
        self.symbols.model()
    }

    #[inline]
    pub const fn symbols(&self) -> &WellKnownSymbols<'m, M> {
        &self.symbols
    }

    /// See [`build_context`](crate::member::build_context).
    #[inline]
    pub fn build_context(&self, member: MemberRef) -> Result<MemberContext, AnalysisError> {
        build_context(&self.symbols, member)
    }

    /// Builds the contexts of every candidate member of `ty`, in declaration
    /// order.
    pub fn build_members(&self, ty: TypeRef) -> Result<Vec<MemberContext>, AnalysisError> {
        collect_candidates(&self.symbols, ty)?
            .into_iter()
            .map(|member| build_context(&self.symbols, member))
            .collect()
    }

    /// Describes one declaration, members included.
    pub fn describe(&self, ty: TypeRef) -> Result<ClassDescriptor, AnalysisError> {
        let members = self.build_members(ty)?;
        build_descriptor(&self.symbols, ty, members)
    }

    /// Describes every declaration in `types` and merges the results.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed declaration. Merge conflicts are not
    /// errors; they come back as [`PassOutput::diagnostics`].
    pub fn run(
        &self,
        types: impl IntoIterator<Item = TypeRef>,
    ) -> Result<PassOutput, AnalysisError> {
        let descriptors = types
            .into_iter()
            .map(|ty| self.describe(ty))
            .collect::<Result<Vec<_>, _>>()?;

        let described = descriptors.len();
        let merged = merge_with_diagnostics(descriptors);
        log::debug!(
            "described {described} declaration(s) as {} type(s)",
            merged.descriptors.len(),
        );

        Ok(PassOutput {
            descriptors: merged.descriptors,
            diagnostics: merged.diagnostics,
            module_initializer: self.symbols.is_available(WellKnownSymbol::ModuleInitializer),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::AnalysisPass;
    use crate::member::{DataMemberMode, MemberContext};
    use crate::model::{
        Accessibility, AttributeArg, AttributeData, Compilation, MemberSymbol, TypeRef, TypeSymbol,
    };
    use crate::testing::Framework;

    #[test]
    fn default_members() {
        let mut c = Compilation::new();
        let _ = Framework::install(&mut c);
        let ty = c.add_type(TypeSymbol::new("Settings")).unwrap();
        for name in ["Width", "Height", "Title"] {
            c.add_member(ty, MemberSymbol::property(name)).unwrap();
        }

        let pass = AnalysisPass::new(&c);
        let members = pass.build_members(ty).unwrap();

        assert_eq!(members.len(), 3);
        assert!(members.iter().all(MemberContext::is_default));
    }

    #[test]
    fn end_to_end() {
        let mut c = Compilation::new();
        let fw = Framework::install(&mut c);
        let ns = c.namespace("Game.Units");
        let no_sync = c
            .add_type(TypeSymbol::new("NoNetworkSyncAttribute").with_base(fw.ignore))
            .unwrap();
        let base = c
            .add_type(
                TypeSymbol::new("UnitBase")
                    .with_namespace(ns)
                    .with_abstract(true)
                    .with_attribute(
                        AttributeData::new(fw.contract)
                            .with_named("Inherited", AttributeArg::Bool(true)),
                    ),
            )
            .unwrap();

        let partial = |c: &mut Compilation| -> TypeRef {
            c.add_type(
                TypeSymbol::new("Soldier")
                    .with_namespace(ns)
                    .with_base(base)
                    .with_accessibility(Accessibility::Public),
            )
            .unwrap()
        };
        let first = partial(&mut c);
        let second = partial(&mut c);

        let health = c
            .add_member(
                first,
                MemberSymbol::field("Health")
                    .with_attribute(AttributeData::new(no_sync))
                    .with_attribute(
                        AttributeData::new(fw.data_member).with_arg(AttributeArg::str("Health")),
                    ),
            )
            .unwrap();
        let _ = c
            .add_member(
                first,
                MemberSymbol::field("target").with_accessibility(Accessibility::Private),
            )
            .unwrap();
        let armor = c
            .add_member(
                second,
                MemberSymbol::property("Armor").with_attribute(
                    AttributeData::new(fw.data_member)
                        .with_arg(AttributeArg::Int(4))
                        .with_named("Mode", AttributeArg::Enum { ty: fw.mode, value: 3 }),
                ),
            )
            .unwrap();

        let pass = AnalysisPass::new(&c);
        let output = pass.run([first, second]).unwrap();

        assert!(output.module_initializer);
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.descriptors.len(), 1);

        let soldier = &output.descriptors[0];
        assert_eq!(soldier.generated_identifier(), "SourceGenerated_Game_Units_Soldier");
        assert_eq!(soldier.abstract_base_chain(), ["UnitBase"]);
        assert_eq!(soldier.contract().unwrap().declared_on, "UnitBase");

        let members: Vec<_> = soldier.members().iter().map(MemberContext::member).collect();
        assert_eq!(members, [health, armor]);

        let health = soldier.member(health).unwrap();
        assert!(health.ignored());
        assert_eq!(health.name_override(), Some("Health"));
        assert!(!health.is_serialized());

        let armor = soldier.member(armor).unwrap();
        assert_eq!(armor.order_override(), Some(4));
        assert_eq!(armor.mode(), Some(DataMemberMode::Binary));
        assert!(armor.is_serialized());
    }

    #[test]
    fn fails_loudly() {
        let c = Compilation::new();
        let pass = AnalysisPass::new(&c);

        assert_eq!(
            pass.run([TypeRef::new(42)]).unwrap_err(),
            crate::AnalysisError::UnknownType(TypeRef::new(42)),
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn emitter_handoff() {
        let mut c = Compilation::new();
        let fw = Framework::install(&mut c);
        let ns = c.namespace("App");
        let ty = c
            .add_type(
                TypeSymbol::new("Pair")
                    .with_namespace(ns)
                    .with_arity(2)
                    .with_accessibility(Accessibility::ProtectedInternal),
            )
            .unwrap();
        c.add_member(
            ty,
            MemberSymbol::property("Left").with_attribute(
                AttributeData::new(fw.data_member).with_named("Name", AttributeArg::str("l")),
            ),
        )
        .unwrap();

        let output = AnalysisPass::new(&c).run([ty]).unwrap();
        let json = serde_json::to_value(&output.descriptors[0]).unwrap();

        assert_eq!(json["simple_name"], "Pair");
        assert_eq!(json["generic_signature"], "Pair<,>");
        assert_eq!(json["accessibility"], "protected-internal");
        assert_eq!(json["interface_names"], serde_json::json!([]));
        assert_eq!(json["members"][0]["name_override"], "l");
        assert_eq!(json["members"][0]["kind"], "property");
        assert!(json.get("declaration").is_none());
    }
}
