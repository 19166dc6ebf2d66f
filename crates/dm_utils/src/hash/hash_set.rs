//! Re-export [`HashSet`] from [hashbrown] crate, defaulting to [`FixedHashState`].

use hashbrown::hash_set as hb;

use crate::hash::FixedHashState;

pub use hb::{Entry, IntoIter, Iter};

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use dm_utils::hash::HashSet;
///
/// let mut set: HashSet<u32> = HashSet::default();
///
/// assert!(set.insert(7));
/// assert!(!set.insert(7));
/// ```
pub type HashSet<T, S = FixedHashState> = hb::HashSet<T, S>;
