use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::{BuildHasher, Hash};
use core::ops::Deref;

use crate::hash::{FixedHashState, HashTable};

// -----------------------------------------------------------------------------
// OrderedSet

/// A set that remembers insertion order.
///
/// Values are stored once in a `Vec`; a [`HashTable`] of indices provides
/// O(1) membership checks. Re-inserting an existing value keeps its
/// original position.
///
/// # Examples
///
/// ```
/// use dm_utils::collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert("IComparable"));
/// assert!(set.insert("ISerializable"));
/// assert!(!set.insert("IComparable"));
///
/// assert_eq!(set.as_slice(), &["IComparable", "ISerializable"]);
/// ```
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashTable<usize>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashTable::new(),
        }
    }

    /// Creates an empty set with space for at least `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    /// Returns the values in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the set, returning the values in insertion order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Hash + Eq> OrderedSet<T> {
    /// Inserts `value` at the end if it is not present yet.
    ///
    /// Returns `false` and drops `value` if an equal value already exists.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = FixedHashState.hash_one(&value);
        let items = &self.items;
        if self.index.find(hash, |&i| items[i] == value).is_some() {
            return false;
        }

        let position = self.items.len();
        self.items.push(value);

        let items = &self.items;
        self.index
            .insert_unique(hash, position, |&i| FixedHashState.hash_one(&items[i]));
        true
    }

    /// Returns the insertion index of `value`, if present.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let hash = FixedHashState.hash_one(value);
        self.index
            .find(hash, |&i| self.items[i] == *value)
            .copied()
    }

    /// Returns `true` if an equal value is present.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for OrderedSet<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            index: self.index.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    /// Two sets are equal if they hold equal values in the same order.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Debug> Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Hash + Eq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde_core::Serialize> serde_core::Serialize for OrderedSet<T> {
    fn serialize<S: serde_core::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::OrderedSet;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn keeps_first_position() {
        let mut set = OrderedSet::new();
        set.extend([3, 1, 3, 2, 1]);

        assert_eq!(set.as_slice(), &[3, 1, 2]);
        assert_eq!(set.index_of(&2), Some(2));
        assert!(!set.contains(&4));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: OrderedSet<i32> = vec![1, 2].into_iter().collect();
        let b: OrderedSet<i32> = vec![2, 1].into_iter().collect();
        let c = a.clone();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn survives_growth() {
        let set: OrderedSet<u32> = (0..500).chain(0..500).collect();

        assert_eq!(set.len(), 500);
        assert!((0..500).all(|v| set.index_of(&v) == Some(v as usize)));
        assert_eq!(set.into_vec(), (0..500).collect::<Vec<_>>());
    }
}
