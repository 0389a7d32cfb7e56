//! Construction-time settings for `FixedBucketHashTable`.

use log::Level;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    /// Level for per-operation diagnostics; `None` keeps the table silent.
    pub diagnostics: Option<Level>,
}

impl TableConfig {
    pub const fn new() -> Self {
        Self {
            diagnostics: Some(Level::Debug),
        }
    }

    pub const fn with_diagnostics(self, level: Option<Level>) -> Self {
        Self {
            diagnostics: level,
        }
    }

    pub const fn silent() -> Self {
        Self::new().with_diagnostics(None)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
