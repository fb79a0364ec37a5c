//! Fixed-key record groups.

use crate::bucket::BucketKey;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

/// Records bucketed under a closed set of keys.
///
/// Every key exists from construction, so a bucket that never received a
/// record is an empty slice rather than a missing entry. Records keep the
/// order in which they were pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K: BucketKey, R> {
    buckets: Vec<Vec<R>>,
    _keys: PhantomData<K>,
}

impl<K: BucketKey, R> Group<K, R> {
    /// Create a group with every bucket empty
    pub fn new() -> Self {
        Self {
            buckets: K::ALL.iter().map(|_| Vec::new()).collect(),
            _keys: PhantomData,
        }
    }

    /// Append a record to the end of `key`'s bucket
    pub fn push(&mut self, key: K, record: R) {
        self.buckets[key.index()].push(record);
    }

    /// Records in `key`'s bucket, in first-seen order
    pub fn get(&self, key: K) -> &[R] {
        &self.buckets[key.index()]
    }

    /// Iterate buckets in canonical key order
    pub fn iter(&self) -> impl Iterator<Item = (K, &[R])> {
        K::ALL
            .iter()
            .copied()
            .map(move |key| (key, self.get(key)))
    }

    /// Total number of records across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: BucketKey, R> Default for Group<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BucketKey, R: Serialize> Serialize for Group<K, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(K::ALL.len()))?;
        for (key, records) in self.iter() {
            map.serialize_entry(key.label(), records)?;
        }
        map.end()
    }
}
