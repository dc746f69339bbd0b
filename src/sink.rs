//! Per-column builders used while assembling a record batch.

use std::sync::Arc;

use arrow_array::{ArrayRef, builder as b, types as t};
use arrow_schema::{DataType, TimeUnit};

use crate::error::Error;

// Concrete builder variants, one per type the schema mapping can produce.
// The variant is selected once per column; every cell append dispatches on
// it instead of re-deriving the target type.
pub(crate) enum Inner {
    Null(b::NullBuilder),
    Bool(b::BooleanBuilder),
    I8(b::PrimitiveBuilder<t::Int8Type>),
    I16(b::PrimitiveBuilder<t::Int16Type>),
    I32(b::PrimitiveBuilder<t::Int32Type>),
    I64(b::PrimitiveBuilder<t::Int64Type>),
    U8(b::PrimitiveBuilder<t::UInt8Type>),
    U16(b::PrimitiveBuilder<t::UInt16Type>),
    U32(b::PrimitiveBuilder<t::UInt32Type>),
    U64(b::PrimitiveBuilder<t::UInt64Type>),
    F32(b::PrimitiveBuilder<t::Float32Type>),
    F64(b::PrimitiveBuilder<t::Float64Type>),
    Decimal128(b::Decimal128Builder),
    Utf8(b::StringBuilder),
    Binary(b::BinaryBuilder),
    Date32(b::PrimitiveBuilder<t::Date32Type>),
    Time64Micro(b::PrimitiveBuilder<t::Time64MicrosecondType>),
    TimestampMicro(b::PrimitiveBuilder<t::TimestampMicrosecondType>),
}

/// Append-only accumulator for one record-batch column.
///
/// Created per column before the fetch loop starts and finished exactly
/// once afterwards; finished sinks must not be appended to again.
pub struct ColumnSink {
    pub(crate) data_type: DataType,
    pub(crate) inner: Inner,
}

impl ColumnSink {
    /// Create a sink for a mapped column type, reserving `capacity` rows
    /// where the underlying builder supports it.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedColumn`] for types outside the family
    /// the schema mapping produces.
    pub fn for_data_type(data_type: &DataType, capacity: usize) -> Result<Self, Error> {
        let inner = match data_type {
            DataType::Null => Inner::Null(b::NullBuilder::new()),
            DataType::Boolean => Inner::Bool(b::BooleanBuilder::with_capacity(capacity)),
            DataType::Int8 => Inner::I8(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Int16 => Inner::I16(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Int32 => Inner::I32(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Int64 => Inner::I64(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::UInt8 => Inner::U8(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::UInt16 => Inner::U16(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::UInt32 => Inner::U32(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::UInt64 => Inner::U64(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Float32 => Inner::F32(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Float64 => Inner::F64(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Decimal128(_, _) => Inner::Decimal128(
                b::Decimal128Builder::with_capacity(capacity).with_data_type(data_type.clone()),
            ),
            DataType::Utf8 => Inner::Utf8(b::StringBuilder::new()),
            DataType::Binary => Inner::Binary(b::BinaryBuilder::new()),
            DataType::Date32 => Inner::Date32(b::PrimitiveBuilder::with_capacity(capacity)),
            DataType::Time64(TimeUnit::Microsecond) => {
                Inner::Time64Micro(b::PrimitiveBuilder::with_capacity(capacity))
            }
            DataType::Timestamp(TimeUnit::Microsecond, None) => {
                Inner::TimestampMicro(b::PrimitiveBuilder::with_capacity(capacity))
            }
            other => {
                return Err(Error::UnsupportedColumn {
                    data_type: other.clone(),
                });
            }
        };
        Ok(Self {
            data_type: data_type.clone(),
            inner,
        })
    }

    /// The record-batch type this sink produces.
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Append a null value.
    pub fn append_null(&mut self) {
        match &mut self.inner {
            Inner::Null(b) => b.append_null(),
            Inner::Bool(b) => b.append_null(),
            Inner::I8(b) => b.append_null(),
            Inner::I16(b) => b.append_null(),
            Inner::I32(b) => b.append_null(),
            Inner::I64(b) => b.append_null(),
            Inner::U8(b) => b.append_null(),
            Inner::U16(b) => b.append_null(),
            Inner::U32(b) => b.append_null(),
            Inner::U64(b) => b.append_null(),
            Inner::F32(b) => b.append_null(),
            Inner::F64(b) => b.append_null(),
            Inner::Decimal128(b) => b.append_null(),
            Inner::Utf8(b) => b.append_null(),
            Inner::Binary(b) => b.append_null(),
            Inner::Date32(b) => b.append_null(),
            Inner::Time64Micro(b) => b.append_null(),
            Inner::TimestampMicro(b) => b.append_null(),
        }
    }

    /// Finish the sink into an immutable column buffer.
    pub fn finish(&mut self) -> ArrayRef {
        match &mut self.inner {
            Inner::Null(b) => Arc::new(b.finish()),
            Inner::Bool(b) => Arc::new(b.finish()),
            Inner::I8(b) => Arc::new(b.finish()),
            Inner::I16(b) => Arc::new(b.finish()),
            Inner::I32(b) => Arc::new(b.finish()),
            Inner::I64(b) => Arc::new(b.finish()),
            Inner::U8(b) => Arc::new(b.finish()),
            Inner::U16(b) => Arc::new(b.finish()),
            Inner::U32(b) => Arc::new(b.finish()),
            Inner::U64(b) => Arc::new(b.finish()),
            Inner::F32(b) => Arc::new(b.finish()),
            Inner::F64(b) => Arc::new(b.finish()),
            Inner::Decimal128(b) => Arc::new(b.finish()),
            Inner::Utf8(b) => Arc::new(b.finish()),
            Inner::Binary(b) => Arc::new(b.finish()),
            Inner::Date32(b) => Arc::new(b.finish()),
            Inner::Time64Micro(b) => Arc::new(b.finish()),
            Inner::TimestampMicro(b) => Arc::new(b.finish()),
        }
    }
}
