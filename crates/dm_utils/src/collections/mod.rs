// -----------------------------------------------------------------------------
// Modules

mod ordered_set;

// -----------------------------------------------------------------------------
// Exports

pub use ordered_set::OrderedSet;
