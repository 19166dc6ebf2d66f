//! Re-export [`HashTable`] from [hashbrown] crate.
//!
//! Used where the stored value is an index into separate storage,
//! see [`OrderedSet`](crate::collections::OrderedSet).

use hashbrown::hash_table as hb;

pub use hb::HashTable;

pub use hb::{Entry, Iter};
