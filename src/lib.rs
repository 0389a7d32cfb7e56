//! fixed-bucket-table: a single-threaded hash table with exactly ten
//! buckets, integer keys and string values, resolving collisions by
//! separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the table small enough that every invariant can be checked
//!   by reading one file.
//! - Layers:
//!   - Bucket: an ordered chain of `(i32, String)` entries with linear-scan
//!     primitives. Knows nothing about hashing or counts.
//!   - FixedBucketHashTable: owns `[Bucket; 10]` plus the element count and
//!     routes every operation through `hash(key) = key mod 10`.
//!
//! Constraints
//! - Bucket count is fixed at 10; no resize ever happens regardless of how
//!   long chains grow.
//! - Keys are unique within a bucket: insert replaces on match, remove
//!   deletes the single match.
//! - `len()` equals the sum of chain lengths after every operation.
//! - Not synchronized. The table is `Send`, so callers needing shared
//!   access wrap the whole table in one lock.
//!
//! Negative keys
//! - `hash` uses Euclidean remainder, so `-3` lands in bucket 7 rather than
//!   the `-3` a truncating `%` would produce. Non-negative keys hash exactly
//!   as `key % 10`.
//!
//! Reporting
//! - Mutations return an [`Outcome`]; lookups return `Option`/`Result` with
//!   [`TableError::KeyNotFound`]. `get_item_or_empty` keeps the empty-string
//!   sentinel for callers that want it.
//! - `get`, `bucket`, `buckets` and `iter` hand out shared borrows: read-only
//!   views tied to the table. `get_item` is the lookup that returns an owned
//!   copy of the value.
//! - Human-readable diagnostics go through the `log` facade at the level set
//!   in [`TableConfig`]; they never change what an operation returns.

mod bucket;
mod config;
mod fixed_bucket_table;
#[cfg(test)]
mod fixed_bucket_table_proptest;
mod outcome;

// Public surface
pub use bucket::{Bucket, Entry};
pub use config::TableConfig;
pub use fixed_bucket_table::{FixedBucketHashTable, Iter, BUCKET_COUNT};
pub use outcome::{Outcome, TableError};
