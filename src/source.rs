//! The boundary to the database-client collaborator.

use crate::{error::Error, field::ColumnMeta};

/// One fetched row: a cell span per column, `None` for SQL NULL.
///
/// Cell spans borrow the source's row buffer and are only valid until the
/// next fetch; the lifetime ties them to the `&mut` borrow taken by
/// [`RowSource::fetch_row`], so a row cannot be retained across fetches.
pub struct SourceRow<'a> {
    cells: Vec<Option<&'a [u8]>>,
}

impl<'a> SourceRow<'a> {
    /// Wrap one row's cell spans.
    pub fn new(cells: Vec<Option<&'a [u8]>>) -> Self {
        Self { cells }
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `i`, or `None` for SQL NULL (and out-of-range indexes).
    pub fn cell(&self, i: usize) -> Option<&'a [u8]> {
        self.cells.get(i).copied().flatten()
    }
}

/// A row-at-a-time result set, as produced by a database client.
///
/// Text-protocol semantics: every non-null cell is a byte span, textual for
/// all types (numbers included) except where the column is marked binary.
/// The implementation owns the row buffers and the row cursor; at most one
/// conversion may drive a source at a time.
pub trait RowSource {
    /// Number of columns in the result set.
    fn num_fields(&self) -> usize {
        self.fields().len()
    }

    /// Column metadata, in result-set order. Must not change while a
    /// conversion is in flight.
    fn fields(&self) -> &[ColumnMeta];

    /// Total number of rows reported by the source. Only meaningful for
    /// buffered (non-streaming) result sets.
    fn num_rows(&self) -> u64;

    /// Whether rows are fetched on demand rather than materialized up
    /// front. Streaming sources are exhausted by a single full drain.
    fn is_streaming(&self) -> bool;

    /// Whether this result set came from a prepared statement.
    fn is_prepared(&self) -> bool;

    /// Whether a streaming drain has already completed.
    fn streaming_done(&self) -> bool;

    /// Record that a streaming drain has completed.
    fn set_streaming_done(&mut self);

    /// Fetch the next row, or `None` at end-of-data.
    ///
    /// Fetching blocks on the network; implementations should release any
    /// interpreter-wide lock for the duration of the call.
    ///
    /// # Errors
    /// Implementations report fetch failures as [`Error::Source`].
    fn fetch_row(&mut self) -> Result<Option<SourceRow<'_>>, Error>;

    /// Release the underlying result buffers. Called after a streaming
    /// drain; the source must tolerate repeated calls.
    fn release(&mut self);

    /// The connection's pending error message, if any. Checked after a
    /// streaming drain completes, since the connection can drop mid-drain.
    fn last_error(&self) -> Option<String>;
}
