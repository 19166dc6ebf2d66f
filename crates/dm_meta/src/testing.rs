//! Shared fixtures for unit tests.

use crate::model::{Compilation, TypeRef, TypeSymbol};

/// The framework types the engine looks for, registered in a compilation.
pub(crate) struct Framework {
    pub data_member: TypeRef,
    pub ignore: TypeRef,
    pub mode: TypeRef,
    pub updatable: TypeRef,
    pub contract: TypeRef,
    pub dictionary: TypeRef,
}

impl Framework {
    pub fn install(c: &mut Compilation) -> Self {
        let system = c.namespace("System");
        let core = c.namespace("Data.Core");
        let updater = c.namespace("Data.Updater");
        let generic = c.namespace("System.Collections.Generic");

        let attribute = c
            .add_type(TypeSymbol::new("Attribute").with_namespace(system))
            .unwrap();
        let attr = |c: &mut Compilation, ns, name: &str| {
            c.add_type(
                TypeSymbol::new(name)
                    .with_namespace(ns)
                    .with_base(attribute),
            )
            .unwrap()
        };

        let data_member = attr(c, core, "DataMemberAttribute");
        let ignore = attr(c, core, "DataMemberIgnoreAttribute");
        let updatable = attr(c, updater, "DataMemberUpdatableAttribute");
        let contract = attr(c, core, "DataContractAttribute");
        let _ = attr(c, core, "ModuleInitializerAttribute");
        let mode = c
            .add_type(TypeSymbol::new("DataMemberMode").with_namespace(core))
            .unwrap();
        let dictionary = c
            .add_type(
                TypeSymbol::new("IDictionary")
                    .with_namespace(generic)
                    .with_arity(2),
            )
            .unwrap();

        Self {
            data_member,
            ignore,
            mode,
            updatable,
            contract,
            dictionary,
        }
    }
}
