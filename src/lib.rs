#![deny(missing_docs)]
//! Convert MySQL text-protocol result sets into Arrow record batches and
//! back.
//!
//! The crate has two independent halves:
//!
//! - [`to_record_batch`] drives a row-at-a-time [`RowSource`] (buffered or
//!   streaming) through schema derivation, per-cell typed decoding, and
//!   per-column builders into one immutable [`arrow_array::RecordBatch`].
//! - [`to_rows`] walks a finished batch column by column and materializes
//!   it as row-major [`Cell`] values.
//!
//! Typed decoding ("cast mode", the default) parses each textual cell into
//! the native column type: integer widths and signedness follow the source
//! metadata, decimals become fixed-point values without a float round-trip,
//! and TINYINT(1)/BIT(1) can optionally decode as booleans. With
//! [`BatchOptions::cast`] disabled every column passes through as text.

mod batch;
mod cell;
mod decode;
mod encoding;
mod error;
mod expand;
mod field;
mod options;
mod schema;
mod sink;
mod source;

pub use batch::to_record_batch;
pub use cell::Cell;
pub use decode::decode_row;
pub use encoding::charset_name;
pub use error::Error;
pub use expand::{Row, to_rows};
pub use field::{ColumnMeta, FieldFlags, FieldType};
pub use options::{BatchOptions, Timezone};
pub use schema::{arrow_data_type, build_schema};
pub use sink::ColumnSink;
pub use source::{RowSource, SourceRow};
