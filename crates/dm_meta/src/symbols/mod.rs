//! Well-known framework symbols and attribute capability matching.
//!
//! - [`WellKnownSymbol`]: the fixed set of framework types the engine
//!   understands, with their metadata names.
//! - [`WellKnownSymbols`]: a per-pass, lazily filled resolution cache.
//! - [`has_capability`], [`find_capabilities`]: subtype-inclusive attribute
//!   matching against a resolved symbol.

// -----------------------------------------------------------------------------
// Modules

mod capability;
mod well_known;

// -----------------------------------------------------------------------------
// Exports

pub use capability::{derives_from, find_capabilities, has_capability};
pub use well_known::{WellKnownSymbol, WellKnownSymbols};
