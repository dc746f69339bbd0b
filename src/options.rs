//! Conversion options.

use tracing::warn;

/// Timezone selector for temporal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    /// Interpret temporal values in the server's local timezone.
    #[default]
    Local,
    /// Interpret temporal values as UTC.
    Utc,
}

/// Options accepted when building a record batch from a result set.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Parse source values into native typed columns. When false every
    /// column passes through as text (the schema maps all fields to Utf8).
    pub cast: bool,
    /// Map TINYINT(1) and BIT(1) columns to Boolean.
    pub cast_booleans: bool,
    /// Timezone the server stores temporal values in. Accepted but not yet
    /// applied: temporal decoding is deferred.
    pub database_timezone: Timezone,
    /// Timezone temporal values should be presented in. Accepted but not
    /// yet applied; `None` leaves values in the database timezone.
    pub application_timezone: Option<Timezone>,
    /// Accepted for parity with the row-oriented client API. Row caching is
    /// meaningless for a columnar batch; setting this only emits a warning.
    pub cache_rows: bool,
    /// Accepted for parity with the row-oriented client API. Batch columns
    /// are addressed by position; setting this only emits a warning.
    pub symbolize_keys: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            cast: true,
            cast_booleans: false,
            database_timezone: Timezone::default(),
            application_timezone: None,
            cache_rows: false,
            symbolize_keys: false,
        }
    }
}

impl BatchOptions {
    /// Warn about options that are accepted but have no effect here.
    pub(crate) fn warn_ignored(&self) {
        if self.cache_rows {
            warn!("cache_rows is ignored when building a record batch");
        }
        if self.symbolize_keys {
            warn!("symbolize_keys has no effect on a record batch");
        }
    }
}
