#![allow(dead_code)]

use mysql_arrow::{ColumnMeta, Error, FieldFlags, FieldType, RowSource, SourceRow};

/// In-memory stand-in for a database client's result set.
pub struct FakeResult {
    fields: Vec<ColumnMeta>,
    rows: Vec<Vec<Option<Vec<u8>>>>,
    cursor: usize,
    streaming: bool,
    prepared: bool,
    done: bool,
    reported_rows: Option<u64>,
    error_after_drain: Option<String>,
    pub released: bool,
}

impl FakeResult {
    pub fn new(fields: Vec<ColumnMeta>, rows: Vec<Vec<Option<Vec<u8>>>>) -> Self {
        Self {
            fields,
            rows,
            cursor: 0,
            streaming: false,
            prepared: false,
            done: false,
            reported_rows: None,
            error_after_drain: None,
            released: false,
        }
    }

    pub fn streaming(mut self) -> Self {
        self.streaming = true;
        self
    }

    pub fn prepared(mut self) -> Self {
        self.prepared = true;
        self
    }

    /// Override the row count the source claims to hold.
    pub fn reporting(mut self, rows: u64) -> Self {
        self.reported_rows = Some(rows);
        self
    }

    /// Pretend the connection failed some time during the drain.
    pub fn failing_with(mut self, message: &str) -> Self {
        self.error_after_drain = Some(message.to_owned());
        self
    }
}

impl RowSource for FakeResult {
    fn fields(&self) -> &[ColumnMeta] {
        &self.fields
    }

    fn num_rows(&self) -> u64 {
        self.reported_rows.unwrap_or(self.rows.len() as u64)
    }

    fn is_streaming(&self) -> bool {
        self.streaming
    }

    fn is_prepared(&self) -> bool {
        self.prepared
    }

    fn streaming_done(&self) -> bool {
        self.done
    }

    fn set_streaming_done(&mut self) {
        self.done = true;
    }

    fn fetch_row(&mut self) -> Result<Option<SourceRow<'_>>, Error> {
        if self.cursor >= self.rows.len() {
            return Ok(None);
        }
        let index = self.cursor;
        self.cursor += 1;
        let cells = self.rows[index].iter().map(|c| c.as_deref()).collect();
        Ok(Some(SourceRow::new(cells)))
    }

    fn release(&mut self) {
        self.released = true;
    }

    fn last_error(&self) -> Option<String> {
        self.error_after_drain.clone()
    }
}

/// A row of textual cells; `None` is SQL NULL.
pub fn text_row(cells: &[Option<&str>]) -> Vec<Option<Vec<u8>>> {
    cells
        .iter()
        .map(|c| c.map(|s| s.as_bytes().to_vec()))
        .collect()
}

/// A row of raw byte cells; `None` is SQL NULL.
pub fn byte_row(cells: &[Option<&[u8]>]) -> Vec<Option<Vec<u8>>> {
    cells.iter().map(|c| c.map(<[u8]>::to_vec)).collect()
}

pub fn meta(name: &str, field_type: FieldType) -> ColumnMeta {
    ColumnMeta::new(name, field_type)
}

pub fn not_null(mut meta: ColumnMeta) -> ColumnMeta {
    meta.flags |= FieldFlags::NOT_NULL;
    meta
}

pub fn unsigned(mut meta: ColumnMeta) -> ColumnMeta {
    meta.flags |= FieldFlags::UNSIGNED;
    meta
}

pub fn with_length(mut meta: ColumnMeta, length: u32) -> ColumnMeta {
    meta.length = length;
    meta
}

pub fn decimal(name: &str, precision: u32, scale: u8) -> ColumnMeta {
    let mut meta = ColumnMeta::new(name, FieldType::NewDecimal);
    meta.length = precision;
    meta.decimals = scale;
    meta
}
