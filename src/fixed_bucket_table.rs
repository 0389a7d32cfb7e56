//! FixedBucketHashTable: ten chains, modulo hashing, replace-on-insert.

use crate::bucket::{Bucket, Entry};
use crate::config::TableConfig;
use crate::outcome::{Outcome, TableError};
use core::fmt;

/// Number of buckets in every table. Never changes after construction.
pub const BUCKET_COUNT: usize = 10;

#[derive(Clone, Debug)]
pub struct FixedBucketHashTable {
    buckets: [Bucket; BUCKET_COUNT],
    len: usize, // always the sum of chain lengths
    config: TableConfig,
}

impl FixedBucketHashTable {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            buckets: core::array::from_fn(|_| Bucket::new()),
            len: 0,
            config,
        }
    }

    /// Bucket index for `key`: `key mod 10`, normalized into `0..10`.
    ///
    /// Negative keys use the Euclidean remainder, so `hash(-3) == 7`. A
    /// truncating remainder would yield `-3`, which is not a bucket.
    ///
    /// ```
    /// use fixed_bucket_table::FixedBucketHashTable;
    /// assert_eq!(FixedBucketHashTable::hash(123456789), 9);
    /// assert_eq!(FixedBucketHashTable::hash(-3), 7);
    /// assert_eq!(FixedBucketHashTable::hash(i32::MIN), 2);
    /// ```
    pub const fn hash(key: i32) -> usize {
        key.rem_euclid(BUCKET_COUNT as i32) as usize
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// O(1): reads the count, never scans buckets.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_for(&self, key: i32) -> &Bucket {
        &self.buckets[Self::hash(key)]
    }

    fn diag(&self, args: fmt::Arguments<'_>) {
        if let Some(level) = self.config.diagnostics {
            log::log!(level, "{}", args);
        }
    }

    /// Insert `key -> value`. An existing key has its value replaced in
    /// place and keeps its chain position; a new key goes to the chain tail.
    pub fn insert(&mut self, key: i32, value: impl Into<String>) -> Outcome {
        let value = value.into();
        let bucket = &mut self.buckets[Self::hash(key)];
        let outcome = match bucket.get_mut(key) {
            Some(entry) => {
                entry.set_value(value);
                Outcome::Replaced
            }
            None => {
                bucket.push(Entry::new(key, value));
                self.len += 1;
                Outcome::Inserted
            }
        };
        self.diag(format_args!("Key: {} {}.", key, outcome));
        outcome
    }

    /// Remove `key` if present. Chains hold each key at most once, so the
    /// first match is the only match.
    pub fn remove(&mut self, key: i32) -> Outcome {
        match self.take(key) {
            Ok(_) => Outcome::Removed,
            Err(TableError::KeyNotFound(_)) => Outcome::NotFound,
        }
    }

    /// Remove `key` and hand back its value.
    pub fn take(&mut self, key: i32) -> Result<String, TableError> {
        let bucket = &mut self.buckets[Self::hash(key)];
        let Some(pos) = bucket.position(key) else {
            self.diag(format_args!("Failed to remove {} does not exist!", key));
            return Err(TableError::KeyNotFound(key));
        };
        let entry = bucket.remove_at(pos);
        debug_assert!(self.len > 0, "count out of sync with chains");
        self.len -= 1;
        self.diag(format_args!("Key: {} {}.", key, Outcome::Removed));
        Ok(entry.into_value())
    }

    /// Borrowed lookup; `None` when the key is absent.
    pub fn get(&self, key: i32) -> Option<&str> {
        self.bucket_for(key).get(key).map(Entry::value)
    }

    /// Lookup returning an owned copy of the value.
    pub fn get_item(&self, key: i32) -> Result<String, TableError> {
        match self.get(key) {
            Some(v) => Ok(v.to_owned()),
            None => {
                self.diag(format_args!("{} does not exist!", key));
                Err(TableError::KeyNotFound(key))
            }
        }
    }

    /// Lookup that reports a missing key as the empty string.
    ///
    /// A stored empty value and a missing key look the same here; use
    /// [`get_item`](Self::get_item) when the difference matters.
    pub fn get_item_or_empty(&self, key: i32) -> String {
        self.get_item(key).unwrap_or_default()
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Chain at `index`, or `None` past the last bucket.
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// All buckets with their indices, in index order, empty ones included.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Bucket)> + '_ {
        self.buckets.iter().enumerate()
    }

    /// Entries in bucket order, then chain order within a bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.buckets.iter().flatten(),
        }
    }

    /// Drop every entry; the ten buckets remain.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Text dump, one `Bucket <i>: [<k>: <v>] ...` line per bucket.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl Default for FixedBucketHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FixedBucketHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets() {
            write!(f, "Bucket {}: ", i)?;
            for entry in bucket {
                write!(f, "{} ", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over `(key, value)` pairs of a `FixedBucketHashTable`.
pub struct Iter<'a> {
    it: core::iter::Flatten<core::slice::Iter<'a, Bucket>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, &'a str);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (e.key(), e.value()))
    }
}

impl<'a> IntoIterator for &'a FixedBucketHashTable {
    type Item = (i32, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
