use std::{fmt, num::NonZeroUsize, str::FromStr};

use tracing::Level;

use crate::{
    bucket::{Bucket, Entry},
    error::TableError,
    hasher,
    key::TableKey,
};

/// What `add` does when the key is already present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OnDuplicate {
    #[default]
    Fail,
    Replace,
}

impl fmt::Display for OnDuplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OnDuplicate::Fail => "Fail",
                OnDuplicate::Replace => "Replace",
            }
        )
    }
}

impl FromStr for OnDuplicate {
    type Err = String;

    fn from_str(s: &str) -> Result<OnDuplicate, String> {
        match s {
            "Fail" => Ok(OnDuplicate::Fail),
            "Replace" => Ok(OnDuplicate::Replace),
            _ => Err(format!("Invalid duplicate policy: {s}")),
        }
    }
}

/// A fixed-capacity hash table resolving collisions by chaining.
///
/// Slots hold `None` until their first insert and go back to `None` once
/// their last entry is removed, so an occupied slot never holds an empty
/// bucket. The table never grows: rebuild through
/// [`from_sequence`](crate::convert) with a larger capacity instead.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    slots: Box<[Option<Bucket<V>>]>,
    capacity: NonZeroUsize,
    len: usize,
}

impl<V> HashTable<V> {
    pub fn new(capacity: usize) -> Result<HashTable<V>, TableError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity)?;
        Ok(HashTable {
            slots: (0..capacity.get()).map(|_| None).collect(),
            capacity,
            len: 0,
        })
    }

    fn slot(&self, key: &str) -> usize {
        let idx = hasher::slot_for(key, self.capacity);
        debug_assert!(idx < self.slots.len());
        idx
    }

    pub fn add(
        &mut self,
        key: impl TableKey,
        value: V,
        on_duplicate: OnDuplicate,
    ) -> Result<(), TableError> {
        let key = key.key_str();
        let idx = self.slot(&key);
        let Some(bucket) = self.slots[idx].as_mut() else {
            tracing::event!(Level::DEBUG, name = "Bucket created", "slot" = idx);
            self.slots[idx] = Some(Bucket::with_entry(key.into_owned(), value));
            self.len += 1;
            return Ok(());
        };
        if let Some(existing) = bucket.get_mut(&key) {
            return match on_duplicate {
                OnDuplicate::Fail => {
                    tracing::event!(Level::DEBUG, name = "Duplicate rejected", "key" = %key);
                    Err(TableError::DuplicateKey {
                        key: key.into_owned(),
                    })
                }
                OnDuplicate::Replace => {
                    tracing::event!(Level::DEBUG, name = "Duplicate replaced", "key" = %key);
                    *existing = value;
                    Ok(())
                }
            };
        }
        bucket.push_front(key.into_owned(), value);
        self.len += 1;
        Ok(())
    }

    pub fn find(&self, key: impl TableKey) -> Option<&V> {
        let key = key.key_str();
        self.slots[self.slot(&key)].as_ref()?.get(&key)
    }

    /// The first value met scanning slots in index order, each chain front to back.
    pub fn find_any(&self) -> Option<&V> {
        self.buckets().find_map(Bucket::first).map(|e| &e.value)
    }

    pub fn find_mut(&mut self, key: impl TableKey) -> Option<&mut V> {
        let key = key.key_str();
        let idx = self.slot(&key);
        self.slots[idx].as_mut()?.get_mut(&key)
    }

    pub fn contains_key(&self, key: impl TableKey) -> bool {
        self.find(key).is_some()
    }

    pub fn remove(&mut self, key: impl TableKey) -> Option<V> {
        let key = key.key_str();
        let idx = self.slot(&key);
        let bucket = self.slots[idx].as_mut()?;
        let entry = bucket.remove(&key)?;
        self.len -= 1;
        if bucket.is_empty() {
            self.release(idx);
        }
        Some(entry.value)
    }

    /// Removes the entry `find_any` would return.
    pub fn remove_any(&mut self) -> Option<V> {
        let idx = self.slots.iter().position(Option::is_some)?;
        let bucket = self.slots[idx].as_mut()?;
        let entry = bucket.pop_any()?;
        self.len -= 1;
        if bucket.is_empty() {
            self.release(idx);
        }
        Some(entry.value)
    }

    fn release(&mut self, idx: usize) {
        tracing::event!(Level::DEBUG, name = "Bucket released", "slot" = idx);
        self.slots[idx] = None;
    }

    /// Overwrites the value stored under `key` and returns it.
    pub fn modify(&mut self, key: impl TableKey, value: V) -> Option<&V> {
        let stored = self.find_mut(key)?;
        *stored = value;
        Some(&*stored)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn occupied_buckets(&self) -> usize {
        self.buckets().count()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity.get() as f64
    }

    fn buckets(&self) -> impl Iterator<Item = &Bucket<V>> + '_ {
        self.slots.iter().flatten()
    }

    /// Key/value pairs in slot order, each chain front to back.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets()
            .flat_map(Bucket::iter)
            .map(|e| (e.key.as_str(), &e.value))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn into_entries(self) -> impl Iterator<Item = Entry<V>> {
        self.slots
            .into_vec()
            .into_iter()
            .flatten()
            .flat_map(Bucket::into_entries)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.len,
            capacity: self.capacity.get(),
            occupied_buckets: self.occupied_buckets(),
            longest_chain: self.buckets().map(Bucket::len).max().unwrap_or(0),
            load_factor: self.load_factor(),
        }
    }
}

// One line per slot: `index: [ { key, value }, ... ] count`, or `index: []`.
impl<V: fmt::Display> fmt::Display for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            write!(f, "{i}: ")?;
            match slot {
                Some(bucket) => {
                    write!(f, "[ ")?;
                    for (j, entry) in bucket.iter().enumerate() {
                        if j != 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{{ {}, {} }}", entry.key, entry.value)?;
                    }
                    write!(f, " ] {}", bucket.len())?;
                }
                None => write!(f, "[]")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub entries: usize,
    pub capacity: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entries: {}", self.entries)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Occupied Buckets: {}", self.occupied_buckets)?;
        writeln!(f, "Longest Chain: {}", self.longest_chain)?;
        write!(f, "Load Factor: {:.3}", self.load_factor)
    }
}
