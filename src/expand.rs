//! Expanding a finished record batch back into row-major data.

use arrow_array::{
    Array, ArrayRef, BinaryArray, BooleanArray, Float32Array, Float64Array, Int8Array, Int16Array,
    Int32Array, Int64Array, RecordBatch, StringArray, UInt8Array, UInt16Array, UInt32Array,
    UInt64Array,
};
use arrow_schema::DataType;

use crate::{cell::Cell, error::Error};

/// One expanded row: a [`Cell`] per batch column, in column order.
pub type Row = Vec<Cell>;

// Column 0 allocates each row's cells the first time an index is reached;
// later columns write into slots that must already exist.
fn slot<'r>(rows: &'r mut Vec<Row>, col: usize, width: usize, index: usize) -> &'r mut Cell {
    if col == 0 && rows.len() <= index {
        rows.push(vec![Cell::Null; width]);
    }
    &mut rows[index][col]
}

macro_rules! expand_values {
    ($rows:expr, $col:expr, $width:expr, $array:expr, $ArrayTy:ty, $cell:expr) => {{
        let a = $array
            .as_any()
            .downcast_ref::<$ArrayTy>()
            .expect("array/DataType mismatch");
        let cell = $cell;
        if a.null_count() > 0 {
            for i in 0..a.len() {
                *slot($rows, $col, $width, i) = if a.is_null(i) { Cell::Null } else { cell(a, i) };
            }
        } else {
            // No nulls in this column: skip the per-value validity checks.
            for i in 0..a.len() {
                *slot($rows, $col, $width, i) = cell(a, i);
            }
        }
    }};
}

/// Expand a record batch into row-major data.
///
/// Rows are materialized lazily by the first column's walk; every other
/// column writes into the already-allocated slots. Null positions expand to
/// [`Cell::Null`].
///
/// # Errors
/// Returns [`Error::UnsupportedColumn`] naming the first column type that
/// has no row-major expansion (Decimal128, temporal, and nested types),
/// before any row of that batch is allocated.
pub fn to_rows(batch: &RecordBatch) -> Result<Vec<Row>, Error> {
    let width = batch.num_columns();
    let mut rows: Vec<Row> = Vec::new();
    for (col, array) in batch.columns().iter().enumerate() {
        expand_column(&mut rows, array, col, width)?;
    }
    Ok(rows)
}

fn expand_column(
    rows: &mut Vec<Row>,
    array: &ArrayRef,
    col: usize,
    width: usize,
) -> Result<(), Error> {
    match array.data_type() {
        DataType::Boolean => {
            expand_values!(rows, col, width, array, BooleanArray, |a: &BooleanArray, i| {
                Cell::Bool(a.value(i))
            });
        }
        DataType::Int8 => {
            expand_values!(rows, col, width, array, Int8Array, |a: &Int8Array, i| {
                Cell::I8(a.value(i))
            });
        }
        DataType::Int16 => {
            expand_values!(rows, col, width, array, Int16Array, |a: &Int16Array, i| {
                Cell::I16(a.value(i))
            });
        }
        DataType::Int32 => {
            expand_values!(rows, col, width, array, Int32Array, |a: &Int32Array, i| {
                Cell::I32(a.value(i))
            });
        }
        DataType::Int64 => {
            expand_values!(rows, col, width, array, Int64Array, |a: &Int64Array, i| {
                Cell::I64(a.value(i))
            });
        }
        DataType::UInt8 => {
            expand_values!(rows, col, width, array, UInt8Array, |a: &UInt8Array, i| {
                Cell::U8(a.value(i))
            });
        }
        DataType::UInt16 => {
            expand_values!(rows, col, width, array, UInt16Array, |a: &UInt16Array, i| {
                Cell::U16(a.value(i))
            });
        }
        DataType::UInt32 => {
            expand_values!(rows, col, width, array, UInt32Array, |a: &UInt32Array, i| {
                Cell::U32(a.value(i))
            });
        }
        DataType::UInt64 => {
            expand_values!(rows, col, width, array, UInt64Array, |a: &UInt64Array, i| {
                Cell::U64(a.value(i))
            });
        }
        DataType::Float32 => {
            expand_values!(rows, col, width, array, Float32Array, |a: &Float32Array, i| {
                Cell::F32(a.value(i))
            });
        }
        DataType::Float64 => {
            expand_values!(rows, col, width, array, Float64Array, |a: &Float64Array, i| {
                Cell::F64(a.value(i))
            });
        }
        DataType::Utf8 => {
            expand_values!(rows, col, width, array, StringArray, |a: &StringArray, i| {
                Cell::Str(a.value(i).to_owned())
            });
        }
        DataType::Binary => {
            expand_values!(rows, col, width, array, BinaryArray, |a: &BinaryArray, i| {
                Cell::Bin(a.value(i).to_vec())
            });
        }
        // TODO: Decimal128 needs a scaled fixed-point cell representation
        // before it can expand.
        other => {
            return Err(Error::UnsupportedColumn {
                data_type: other.clone(),
            });
        }
    }
    Ok(())
}
