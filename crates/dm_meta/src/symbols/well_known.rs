use core::cell::OnceCell;
use core::fmt;

use crate::model::{SemanticModel, TypeRef};

// -----------------------------------------------------------------------------
// WellKnownSymbol

/// A framework type the engine recognizes by metadata name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSymbol {
    /// Marks a member as serialized and carries order, name and mode overrides.
    DataMember,
    /// Excludes a member from serialization and update generation.
    DataMemberIgnore,
    /// The enum of serialization modes passed to [`DataMember`](Self::DataMember).
    DataMemberMode,
    /// Marks a member as live-updatable.
    DataMemberUpdatable,
    /// Marks a type as a serializable contract.
    DataContract,
    /// Lets generated code register itself when the module loads.
    ModuleInitializer,
    /// The generic dictionary interface definition.
    GenericDictionary,
}

impl WellKnownSymbol {
    /// Number of well-known symbols.
    pub const COUNT: usize = 7;

    /// Every well-known symbol, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::DataMember,
        Self::DataMemberIgnore,
        Self::DataMemberMode,
        Self::DataMemberUpdatable,
        Self::DataContract,
        Self::ModuleInitializer,
        Self::GenericDictionary,
    ];

    /// The metadata name looked up in each compilation.
    ///
    /// The framework attributes live under the neutral `Data.Core` and
    /// `Data.Updater` namespaces rather than those of any shipped assembly;
    /// a host whose framework uses other names maps them when it fills in
    /// its [`SemanticModel`].
    pub const fn metadata_name(self) -> &'static str {
        match self {
            Self::DataMember => "Data.Core.DataMemberAttribute",
            Self::DataMemberIgnore => "Data.Core.DataMemberIgnoreAttribute",
            Self::DataMemberMode => "Data.Core.DataMemberMode",
            Self::DataMemberUpdatable => "Data.Updater.DataMemberUpdatableAttribute",
            Self::DataContract => "Data.Core.DataContractAttribute",
            Self::ModuleInitializer => "Data.Core.ModuleInitializerAttribute",
            Self::GenericDictionary => "System.Collections.Generic.IDictionary`2",
        }
    }

    /// Finds the symbol with the given metadata name.
    pub fn from_metadata_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.metadata_name() == name)
    }

    #[inline(always)]
    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WellKnownSymbol {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.metadata_name())
    }
}

// -----------------------------------------------------------------------------
// WellKnownSymbols

/// Resolves [`WellKnownSymbol`]s against one compilation, caching each
/// result on first use.
///
/// An absent symbol is a normal outcome: the compilation simply does not
/// reference the assembly that defines it, and every feature depending on
/// it is disabled for this pass.
///
/// The cache is `!Sync`. Each analysis pass owns its own instance; passes
/// over different compilations may run concurrently.
///
/// # Examples
///
/// ```
/// use dm_meta::model::{Compilation, TypeSymbol};
/// use dm_meta::symbols::{WellKnownSymbol, WellKnownSymbols};
///
/// let mut compilation = Compilation::new();
/// let ns = compilation.namespace("Data.Core");
/// let ignore = compilation
///     .add_type(TypeSymbol::new("DataMemberIgnoreAttribute").with_namespace(ns))
///     .unwrap();
///
/// let symbols = WellKnownSymbols::new(&compilation);
/// assert_eq!(symbols.resolve(WellKnownSymbol::DataMemberIgnore), Some(ignore));
/// assert_eq!(symbols.resolve(WellKnownSymbol::DataMemberUpdatable), None);
/// ```
pub struct WellKnownSymbols<'m, M: ?Sized> {
    model: &'m M,
    slots: [OnceCell<Option<TypeRef>>; WellKnownSymbol::COUNT],
}

impl<'m, M: SemanticModel + ?Sized> WellKnownSymbols<'m, M> {
    /// Creates an empty cache over `model`.
    #[inline]
    pub const fn new(model: &'m M) -> Self {
        Self {
            model,
            slots: [const { OnceCell::new() }; WellKnownSymbol::COUNT],
        }
    }

    /// The model this cache resolves against.
    #[inline]
    pub const fn model(&self) -> &'m M {
        self.model
    }

    /// Resolves `symbol`, looking it up in the model at most once.
    pub fn resolve(&self, symbol: WellKnownSymbol) -> Option<TypeRef> {
        *self.slots[symbol.slot()].get_or_init(|| {
            let resolved = self.model.type_by_metadata_name(symbol.metadata_name());
            if resolved.is_none() {
                log::debug!("`{symbol}` is not referenced by this compilation");
            }
            resolved
        })
    }

    /// Resolves a metadata name.
    ///
    /// Names of well-known symbols go through the cache;
    /// other names are looked up directly.
    pub fn resolve_name(&self, name: &str) -> Option<TypeRef> {
        match WellKnownSymbol::from_metadata_name(name) {
            Some(symbol) => self.resolve(symbol),
            None => self.model.type_by_metadata_name(name),
        }
    }

    /// Returns `true` if `symbol` exists in this compilation.
    #[inline]
    pub fn is_available(&self, symbol: WellKnownSymbol) -> bool {
        self.resolve(symbol).is_some()
    }
}

impl<M: ?Sized> fmt::Debug for WellKnownSymbols<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for symbol in WellKnownSymbol::ALL {
            match self.slots[symbol.slot()].get() {
                Some(resolved) => map.entry(&symbol, resolved),
                None => map.entry(&symbol, &"<unresolved>"),
            };
        }
        map.finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{WellKnownSymbol, WellKnownSymbols};
    use crate::model::{Compilation, MemberRef, MemberSymbol, NamespaceRef};
    use crate::model::{NamespaceSymbol, SemanticModel, TypeRef, TypeSymbol};

    struct Counting {
        inner: Compilation,
        lookups: Cell<usize>,
    }

    impl SemanticModel for Counting {
        fn type_by_metadata_name(&self, name: &str) -> Option<TypeRef> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.type_by_metadata_name(name)
        }

        fn type_symbol(&self, ty: TypeRef) -> Option<&TypeSymbol> {
            self.inner.type_symbol(ty)
        }

        fn namespace_symbol(&self, ns: NamespaceRef) -> Option<&NamespaceSymbol> {
            self.inner.namespace_symbol(ns)
        }

        fn member_symbol(&self, member: MemberRef) -> Option<&MemberSymbol> {
            self.inner.member_symbol(member)
        }
    }

    fn counting() -> (Counting, TypeRef) {
        let mut inner = Compilation::new();
        let ns = inner.namespace("Data.Core");
        let data_member = inner
            .add_type(TypeSymbol::new("DataMemberAttribute").with_namespace(ns))
            .unwrap();
        let model = Counting {
            inner,
            lookups: Cell::new(0),
        };
        (model, data_member)
    }

    #[test]
    fn names_round_trip() {
        for symbol in WellKnownSymbol::ALL {
            assert_eq!(
                WellKnownSymbol::from_metadata_name(symbol.metadata_name()),
                Some(symbol)
            );
        }
        assert_eq!(WellKnownSymbol::from_metadata_name("Data.Core.Nope"), None);
    }

    #[test]
    fn resolution_is_cached() {
        let (model, data_member) = counting();
        let symbols = WellKnownSymbols::new(&model);

        for _ in 0..3 {
            assert_eq!(symbols.resolve(WellKnownSymbol::DataMember), Some(data_member));
            assert_eq!(symbols.resolve(WellKnownSymbol::DataContract), None);
        }
        assert_eq!(model.lookups.get(), 2);

        assert_eq!(
            symbols.resolve_name("Data.Core.DataMemberAttribute"),
            Some(data_member)
        );
        assert_eq!(model.lookups.get(), 2);
    }

    #[test]
    fn separate_passes_do_not_share() {
        let (model, _) = counting();

        let first = WellKnownSymbols::new(&model);
        let _ = first.resolve(WellKnownSymbol::DataMember);
        let second = WellKnownSymbols::new(&model);
        let _ = second.resolve(WellKnownSymbol::DataMember);

        assert_eq!(model.lookups.get(), 2);
    }

    #[test]
    fn unknown_names_bypass_cache() {
        let (model, _) = counting();
        let symbols = WellKnownSymbols::new(&model);

        assert_eq!(symbols.resolve_name("App.Foo"), None);
        assert_eq!(symbols.resolve_name("App.Foo"), None);
        assert_eq!(model.lookups.get(), 2);
    }
}
