//! Re-export [`HashMap`] from [hashbrown] crate, defaulting to [`FixedHashState`].

use hashbrown::hash_map as hb;

use crate::hash::FixedHashState;

pub use hb::{Entry, OccupiedEntry, VacantEntry};
pub use hb::{IntoIter, Iter, IterMut, Keys, Values};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use dm_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, u32> = HashMap::default();
/// map.insert("Foo", 1);
///
/// assert_eq!(map.get("Foo"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;
