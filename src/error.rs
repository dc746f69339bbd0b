//! Error types for result-set conversion.

use arrow_schema::{ArrowError, DataType};
use thiserror::Error;

use crate::field::FieldType;

/// Errors that can occur while converting between result sets and record
/// batches.
#[derive(Debug, Error)]
pub enum Error {
    /// A source column's type has no record-batch mapping (SET, ENUM, and
    /// GEOMETRY columns, and the deferred temporal decode).
    #[error("unsupported field type {field_type:?} for column '{name}'")]
    UnsupportedField {
        /// Name of the offending column.
        name: String,
        /// The source type tag that has no mapping.
        field_type: FieldType,
    },

    /// A record-batch column's Arrow type has no row-major expansion.
    #[error("unsupported data type: {data_type}")]
    UnsupportedColumn {
        /// The Arrow logical type that cannot be expanded.
        data_type: DataType,
    },

    /// The source result set has a shape this crate cannot convert.
    #[error("{0} are not supported")]
    NotImplemented(&'static str),

    /// A streaming result set was drained by an earlier conversion.
    #[error(
        "all rows of this streaming result set have already been fetched \
         (to convert again you must re-issue the query)"
    )]
    AlreadyConsumed,

    /// The source connection reported an error.
    #[error("source error: {0}")]
    Source(String),

    /// The columnar library failed to construct a buffer or batch.
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
