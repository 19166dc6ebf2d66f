//! Per-member directive contexts.
//!
//! - [`collect_candidates`]: picks the fields and properties of a type that
//!   take part in generation.
//! - [`build_context`]: folds the directive attributes of one member into a
//!   [`MemberContext`].

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod candidates;
mod context;
mod mode;

// -----------------------------------------------------------------------------
// Exports

pub use builder::build_context;
pub use candidates::collect_candidates;
pub use context::MemberContext;
pub use mode::DataMemberMode;
