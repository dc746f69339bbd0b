//! Driving a result set into a finished record batch.

use std::sync::Arc;

use arrow_array::{RecordBatch, RecordBatchOptions};
use arrow_schema::SchemaRef;

use crate::{
    decode::decode_row,
    error::Error,
    field::ColumnMeta,
    options::BatchOptions,
    schema::build_schema,
    sink::ColumnSink,
    source::RowSource,
};

/// Convert a result set into a record batch.
///
/// Buffered sources are drained for exactly the row count they report
/// (fewer rows are tolerated; the realized count wins). Streaming sources
/// are drained to end-of-data, released, and marked consumed; draining them
/// a second time fails rather than returning an empty batch, because the
/// data is gone until the query is re-issued.
///
/// # Errors
/// [`Error::NotImplemented`] for prepared-statement result sets,
/// [`Error::AlreadyConsumed`] for re-drained streaming sources,
/// [`Error::Source`] when the connection reports an error after a streaming
/// drain, and the schema/decode errors of the per-column machinery.
pub fn to_record_batch<S: RowSource>(
    source: &mut S,
    options: &BatchOptions,
) -> Result<RecordBatch, Error> {
    // TODO: support prepared statement result sets (binary protocol rows).
    if source.is_prepared() {
        return Err(Error::NotImplemented("prepared statement result sets"));
    }
    options.warn_ignored();

    Assembler {
        source,
        options,
        schema: None,
    }
    .assemble()
}

// Holds the derived schema so it is built at most once per result set and
// shared between the sinks and the finished batch.
struct Assembler<'a, S: RowSource> {
    source: &'a mut S,
    options: &'a BatchOptions,
    schema: Option<SchemaRef>,
}

impl<S: RowSource> Assembler<'_, S> {
    fn schema(&mut self) -> Result<SchemaRef, Error> {
        if let Some(schema) = &self.schema {
            return Ok(Arc::clone(schema));
        }
        let schema = Arc::new(build_schema(self.source.fields(), self.options)?);
        self.schema = Some(Arc::clone(&schema));
        Ok(schema)
    }

    fn assemble(mut self) -> Result<RecordBatch, Error> {
        let schema = self.schema()?;

        // Snapshot of the field metadata; fetched rows borrow the source
        // mutably, so the metadata cannot be re-read mid-loop.
        let fields: Vec<ColumnMeta> = self.source.fields().to_vec();

        let reported = self.source.num_rows();
        let capacity = if self.source.is_streaming() {
            0
        } else {
            usize::try_from(reported).unwrap_or(usize::MAX)
        };
        let mut sinks = schema
            .fields()
            .iter()
            .map(|f| ColumnSink::for_data_type(f.data_type(), capacity))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = 0usize;
        if self.source.is_streaming() {
            if self.source.streaming_done() {
                return Err(Error::AlreadyConsumed);
            }
            while let Some(row) = self.source.fetch_row()? {
                decode_row(&row, &fields, &mut sinks, self.options)?;
                rows += 1;
            }
            self.source.release();
            self.source.set_streaming_done();
            // The connection might have gone out from under us mid-drain.
            if let Some(message) = self.source.last_error() {
                return Err(Error::Source(message));
            }
        } else {
            for _ in 0..reported {
                // The reported count can disagree with reality; stop early
                // rather than fail.
                let Some(row) = self.source.fetch_row()? else {
                    break;
                };
                decode_row(&row, &fields, &mut sinks, self.options)?;
                rows += 1;
            }
        }

        let arrays = sinks.iter_mut().map(ColumnSink::finish).collect();
        let batch_options = RecordBatchOptions::new().with_row_count(Some(rows));
        Ok(RecordBatch::try_new_with_options(
            schema,
            arrays,
            &batch_options,
        )?)
    }
}
