#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod merge;
mod pass;

#[cfg(test)]
mod testing;

pub mod descriptor;
pub mod diagnostic;
pub mod member;
pub mod model;
pub mod symbols;

// -----------------------------------------------------------------------------
// Top-level exports

pub use descriptor::{ClassDescriptor, build_descriptor};
pub use error::AnalysisError;
pub use member::{MemberContext, build_context};
pub use merge::{MergeOutcome, merge, merge_with_diagnostics};
pub use pass::{AnalysisPass, PassOutput};
