//! # Fixed-Shape Option Collections
//!
//! - [`OptionMap`]: a fixed key set, one slot per key, iterated in key-set
//!   order. Keys can be neither added nor removed after construction.
//! - [`OptionList`]: a fixed-length list of slots.
//!
//! Both start with every slot null and write through `copy_from`, so a stored
//! value never aliases the caller's.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;
use tracing::debug;

use crate::error::CollectionError;
use crate::option::ValueOption;

#[derive(Debug, Clone)]
pub struct OptionMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> OptionMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: ValueOption,
{
    /// Creates a map over `keys`. Repeated keys collapse onto their first
    /// occurrence.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut index = HashMap::new();
        let mut entries = Vec::new();
        for key in keys {
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key.clone(), entries.len());
            entries.push((key, V::default()));
        }
        Self { index, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// The slot of `key`, or `None` when `key` is outside the key set.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;
        Some(&mut self.entries[idx].1)
    }

    /// Copies `value` into the slot of `key`.
    pub fn set<Q>(&mut self, key: &Q, value: &V) -> Result<(), CollectionError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.get_mut(key) {
            Some(slot) => {
                slot.copy_from(Some(value));
                Ok(())
            }
            None => {
                debug!(key = ?key, "set on key outside the fixed key set");
                Err(CollectionError::UnknownKey {
                    key: format!("{:?}", key),
                })
            }
        }
    }

    /// Sets every slot to null. The key set is unchanged.
    pub fn reset_all(&mut self) {
        self.entries.iter_mut().for_each(|(_, v)| v.set_null());
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in key-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> + '_ {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionList<V> {
    slots: Vec<V>,
}

impl<V: ValueOption> OptionList<V> {
    /// A list of `len` null slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![V::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots.get_mut(index)
    }

    /// Copies `value` into slot `index`.
    pub fn set(&mut self, index: usize, value: &V) -> Result<(), CollectionError> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.copy_from(Some(value));
                Ok(())
            }
            None => {
                debug!(index, len, "set past the end of a fixed-length list");
                Err(CollectionError::IndexOutOfRange { index, len })
            }
        }
    }

    pub fn reset_all(&mut self) {
        self.slots.iter_mut().for_each(ValueOption::set_null);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, V> {
        self.slots.iter_mut()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.slots
    }
}

impl<'a, V: ValueOption> IntoIterator for &'a OptionList<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
