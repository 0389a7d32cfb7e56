//! Status values returned by table operations.

use core::fmt;
use thiserror::Error;

/// What a mutation did. Mirrors the status lines a caller might print.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// New key appended to its chain; count went up by one.
    Inserted,
    /// Existing key had its value overwritten in place; count unchanged.
    Replaced,
    /// Key found and its entry deleted; count went down by one.
    Removed,
    /// Key absent; nothing changed.
    NotFound,
}

impl Outcome {
    /// True for every outcome except `NotFound`.
    pub fn is_found(self) -> bool {
        !matches!(self, Outcome::NotFound)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Inserted => "inserted",
            Outcome::Replaced => "replaced",
            Outcome::Removed => "removed",
            Outcome::NotFound => "does not exist",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum TableError {
    #[error("key {0} does not exist")]
    KeyNotFound(i32),
}
