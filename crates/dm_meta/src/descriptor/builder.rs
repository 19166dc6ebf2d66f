use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dm_utils::collections::OrderedSet;

use crate::descriptor::class::InterfaceEntry;
use crate::descriptor::{ClassDescriptor, ContractInfo, generated_identifier, generic_signature};
use crate::error::AnalysisError;
use crate::member::MemberContext;
use crate::model::{
    AttributeArg, AttributeData, SemanticModel, TypeRef, TypeSymbol, base_chain, namespace_path,
    transitive_interfaces,
};
use crate::symbols::{WellKnownSymbol, WellKnownSymbols, find_capabilities};

// -----------------------------------------------------------------------------
// build_descriptor

/// Builds the descriptor of `ty` and attaches `members` unchanged.
///
/// The result depends only on the declaration and the compilation snapshot,
/// so building twice yields field-for-field equal descriptors.
///
/// # Errors
///
/// Fails on handles the model does not know and on cyclic namespace or base
/// type chains.
///
/// # Examples
///
/// ```
/// use dm_meta::descriptor::build_descriptor;
/// use dm_meta::model::{Compilation, TypeSymbol};
/// use dm_meta::symbols::WellKnownSymbols;
///
/// let mut compilation = Compilation::new();
/// let ns = compilation.namespace("Game");
/// let pair = compilation
///     .add_type(TypeSymbol::new("Pair").with_namespace(ns).with_arity(2))
///     .unwrap();
///
/// let symbols = WellKnownSymbols::new(&compilation);
/// let descriptor = build_descriptor(&symbols, pair, Vec::new()).unwrap();
///
/// assert!(descriptor.is_generic());
/// assert_eq!(descriptor.generic_signature(), "Pair<,>");
/// assert_eq!(descriptor.generated_identifier(), "SourceGenerated_Game_Pair");
/// ```
pub fn build_descriptor<M: SemanticModel + ?Sized>(
    symbols: &WellKnownSymbols<'_, M>,
    ty: TypeRef,
    members: Vec<MemberContext>,
) -> Result<ClassDescriptor, AnalysisError> {
    let model = symbols.model();
    let symbol = model.type_symbol(ty).ok_or(AnalysisError::UnknownType(ty))?;

    let simple_name = symbol.name().to_string();
    let namespace_path = namespace_path(model, symbol.namespace(), '.')?;
    let generated_identifier = generated_identifier(&namespace_path, &simple_name);

    let signature = generic_signature(&simple_name, symbol.arity());
    let is_generic = signature.is_some();

    let chain = base_chain(model, ty)?;
    let mut abstract_base_chain = Vec::new();
    for &base in &chain {
        let base = lookup(model, base)?;
        if base.is_abstract() {
            abstract_base_chain.push(base.name().to_string());
        }
    }

    let mut descriptor = ClassDescriptor {
        interface_names: OrderedSet::new(),
        interfaces: interfaces(model, ty)?,
        base: symbol.base(),
        contract: contract(symbols, symbol, &chain)?,
        accessibility: symbol.accessibility(),
        generic_signature: signature.unwrap_or_default(),
        declaration: ty,
        simple_name,
        namespace_path,
        is_generic,
        generated_identifier,
        abstract_base_chain,
        members,
    };
    descriptor.name_interfaces();

    #[cfg(feature = "debug")]
    log::trace!(
        "described `{}` as `{}` with {} member(s)",
        descriptor.simple_name,
        descriptor.generated_identifier,
        descriptor.members.len(),
    );

    Ok(descriptor)
}

#[inline]
fn lookup<M: SemanticModel + ?Sized>(model: &M, ty: TypeRef) -> Result<&TypeSymbol, AnalysisError> {
    model.type_symbol(ty).ok_or(AnalysisError::UnknownType(ty))
}

// -----------------------------------------------------------------------------
// Interfaces

/// Every interface definition `ty` implements, with its name parts.
fn interfaces<M: SemanticModel + ?Sized>(
    model: &M,
    ty: TypeRef,
) -> Result<OrderedSet<InterfaceEntry>, AnalysisError> {
    let interfaces = transitive_interfaces(model, ty)?;

    let mut entries = OrderedSet::with_capacity(interfaces.len());
    for &interface in interfaces.iter() {
        let definition = model.original_definition(interface);
        let symbol = lookup(model, definition)?;
        entries.insert(InterfaceEntry {
            definition,
            name: symbol.name().to_string(),
            namespace_path: namespace_path(model, symbol.namespace(), '.')?,
        });
    }
    Ok(entries)
}

// -----------------------------------------------------------------------------
// Contract

/// The contract of `symbol`: its own contract attribute, or the nearest
/// ancestor's contract attribute that is marked `Inherited`.
fn contract<M: SemanticModel + ?Sized>(
    symbols: &WellKnownSymbols<'_, M>,
    symbol: &TypeSymbol,
    chain: &[TypeRef],
) -> Result<Option<ContractInfo>, AnalysisError> {
    let Some(identity) = symbols.resolve(WellKnownSymbol::DataContract) else {
        return Ok(None);
    };
    let model = symbols.model();

    if let Some(attribute) = find_capabilities(model, symbol, identity)?.last() {
        let alias = attribute
            .args()
            .iter()
            .find_map(AttributeArg::as_str)
            .or_else(|| attribute.named("Alias").and_then(AttributeArg::as_str));
        return Ok(Some(ContractInfo {
            alias: alias.map(String::from),
            inherited: is_inherited(attribute),
            declared_on: symbol.name().to_string(),
        }));
    }

    for &base in chain {
        let base = lookup(model, base)?;
        let inherited = find_capabilities(model, base, identity)?
            .last()
            .is_some_and(|attribute| is_inherited(attribute));
        if inherited {
            return Ok(Some(ContractInfo {
                alias: None,
                inherited: true,
                declared_on: base.name().to_string(),
            }));
        }
    }
    Ok(None)
}

#[inline]
fn is_inherited(attribute: &AttributeData) -> bool {
    attribute
        .named("Inherited")
        .and_then(AttributeArg::as_bool)
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// Tests
