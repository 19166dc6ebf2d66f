//! Canonical per-type descriptors handed to the accessor emitter.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod class;
mod naming;

// -----------------------------------------------------------------------------
// Exports

pub use builder::build_descriptor;
pub use class::{ClassDescriptor, ContractInfo, DescriptorKey};
pub use naming::{GENERATED_PREFIX, generated_identifier, generic_signature};
