use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use dm_utils::collections::OrderedSet;
use dm_utils::hash::{HashMap, HashSet};

use crate::member::MemberContext;
use crate::model::{Accessibility, MemberRef, TypeRef};

// -----------------------------------------------------------------------------
// ContractInfo

/// The serializable-contract marker that applies to a type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContractInfo {
    /// Alias the type is serialized under, from the type's own contract.
    pub alias: Option<String>,
    /// Whether derived types are contracts too.
    pub inherited: bool,
    /// Simple name of the type that carries the contract attribute.
    pub declared_on: String,
}

// -----------------------------------------------------------------------------
// DescriptorKey

/// The identity of a logical type across partial declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorKey {
    pub simple_name: String,
    pub namespace_path: String,
    pub generated_identifier: String,
}

// -----------------------------------------------------------------------------
// InterfaceEntry

/// An implemented interface definition and the parts of its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct InterfaceEntry {
    pub definition: TypeRef,
    pub name: String,
    pub namespace_path: String,
}

// -----------------------------------------------------------------------------
// ClassDescriptor

/// The generation-ready summary of one type's serializable shape.
///
/// Equality and hashing only look at the [`DescriptorKey`]: two partial
/// declarations of one type compare equal even when their members differ.
/// Run [`merge`](crate::merge()) before relying on equality for emission.
///
/// Use [`build_descriptor`](super::build_descriptor) to create one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassDescriptor {
    pub(super) simple_name: String,
    pub(super) namespace_path: String,
    pub(super) is_generic: bool,
    pub(super) generic_signature: String,
    pub(super) generated_identifier: String,
    pub(super) interface_names: OrderedSet<String>,
    pub(super) abstract_base_chain: Vec<String>,
    pub(super) accessibility: Accessibility,
    pub(super) contract: Option<ContractInfo>,
    pub(super) members: Vec<MemberContext>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(super) interfaces: OrderedSet<InterfaceEntry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(super) base: Option<TypeRef>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(super) declaration: TypeRef,
}

impl ClassDescriptor {
    #[inline]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Dot-joined namespace path; empty for the global namespace.
    #[inline]
    pub fn namespace_path(&self) -> &str {
        &self.namespace_path
    }

    #[inline]
    pub const fn is_generic(&self) -> bool {
        self.is_generic
    }

    /// Placeholder signature such as `Pair<,>`; empty for non-generic types.
    #[inline]
    pub fn generic_signature(&self) -> &str {
        &self.generic_signature
    }

    /// Name of the code unit the emitter produces for this type.
    #[inline]
    pub fn generated_identifier(&self) -> &str {
        &self.generated_identifier
    }

    /// Every implemented interface, inherited ones included.
    #[inline]
    pub fn interface_names(&self) -> &[String] {
        &self.interface_names
    }

    /// Abstract ancestors, nearest first.
    #[inline]
    pub fn abstract_base_chain(&self) -> &[String] {
        &self.abstract_base_chain
    }

    #[inline]
    pub const fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    #[inline]
    pub fn contract(&self) -> Option<&ContractInfo> {
        self.contract.as_ref()
    }

    /// Member contexts in declaration order.
    #[inline]
    pub fn members(&self) -> &[MemberContext] {
        &self.members
    }

    /// Finds the context of `member`.
    pub fn member(&self, member: MemberRef) -> Option<&MemberContext> {
        self.members.iter().find(|context| context.member() == member)
    }

    /// The direct base type, from whichever declaration names one.
    #[inline]
    pub const fn base(&self) -> Option<TypeRef> {
        self.base
    }

    /// The declaration this descriptor was first built from.
    #[inline]
    pub const fn declaration(&self) -> TypeRef {
        self.declaration
    }

    /// Returns the deduplication key.
    pub fn key(&self) -> DescriptorKey {
        DescriptorKey {
            simple_name: self.simple_name.clone(),
            namespace_path: self.namespace_path.clone(),
            generated_identifier: self.generated_identifier.clone(),
        }
    }

    #[inline]
    fn key_parts(&self) -> (&str, &str, &str) {
        (
            &self.simple_name,
            &self.namespace_path,
            &self.generated_identifier,
        )
    }

    /// Folds another declaration of the same type into `self`.
    ///
    /// Members already present, by declaration, are skipped. Interfaces
    /// are unioned and renamed. The base type and everything derived from
    /// it are taken from `other` when `self` names no base. A missing
    /// contract is taken from `other`.
    pub(crate) fn absorb(&mut self, other: Self) {
        let mut seen: HashSet<MemberRef> =
            self.members.iter().map(MemberContext::member).collect();
        for context in other.members {
            if seen.insert(context.member()) {
                self.members.push(context);
            }
        }

        if self.base.is_none() && other.base.is_some() {
            self.base = other.base;
            self.abstract_base_chain = other.abstract_base_chain;
        }

        if self.contract.is_none() {
            self.contract = other.contract;
        }

        self.interfaces.extend(other.interfaces);
        self.name_interfaces();
    }

    /// Recomputes [`interface_names`](Self::interface_names).
    ///
    /// Constructions of one generic interface share a name. When two
    /// distinct interface definitions share a simple name, both are written
    /// with their namespace path.
    pub(super) fn name_interfaces(&mut self) {
        // name -> first definition seen, or `None` once a second one shows up
        let mut owners: HashMap<&str, Option<TypeRef>> = HashMap::default();
        for entry in self.interfaces.iter() {
            owners
                .entry(entry.name.as_str())
                .and_modify(|owner| {
                    if *owner != Some(entry.definition) {
                        *owner = None;
                    }
                })
                .or_insert(Some(entry.definition));
        }

        let mut names = OrderedSet::with_capacity(self.interfaces.len());
        for entry in self.interfaces.iter() {
            let ambiguous = owners.get(entry.name.as_str()).is_some_and(Option::is_none);
            if ambiguous && !entry.namespace_path.is_empty() {
                log::debug!(
                    "interface name `{}` is shared by several interfaces; qualifying it as `{}.{}`",
                    entry.name,
                    entry.namespace_path,
                    entry.name,
                );
                names.insert(format!("{}.{}", entry.namespace_path, entry.name));
            } else {
                names.insert(entry.name.clone());
            }
        }
        self.interface_names = names;
    }
}

impl PartialEq for ClassDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key_parts() == other.key_parts()
    }
}

impl Eq for ClassDescriptor {}

impl Hash for ClassDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_parts().hash(state);
    }
}
