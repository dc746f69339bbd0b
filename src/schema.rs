//! Mapping from source column metadata to a record-batch schema.

use arrow_schema::{DataType, Field, Schema, TimeUnit};

use crate::{
    error::Error,
    field::{ColumnMeta, FieldType},
    options::BatchOptions,
};

/// Map one column's metadata to its record-batch type.
///
/// Returns `None` for SET, ENUM, and GEOMETRY columns, which have no
/// mapping; [`build_schema`] turns that into an error. Pure: identical
/// metadata and options always produce the same type.
pub fn arrow_data_type(meta: &ColumnMeta, cast: bool, cast_booleans: bool) -> Option<DataType> {
    if !cast {
        // No-cast mode: everything passes through as text.
        return Some(match meta.field_type {
            FieldType::Null => DataType::Null,
            _ => DataType::Utf8,
        });
    }

    let unsigned = meta.is_unsigned();
    Some(match meta.field_type {
        FieldType::Tiny => {
            if cast_booleans && meta.length == 1 {
                DataType::Boolean
            } else if unsigned {
                DataType::UInt8
            } else {
                DataType::Int8
            }
        }
        FieldType::Short | FieldType::Year => {
            if unsigned {
                DataType::UInt16
            } else {
                DataType::Int16
            }
        }
        FieldType::Int24 | FieldType::Long => {
            if unsigned {
                DataType::UInt32
            } else {
                DataType::Int32
            }
        }
        FieldType::LongLong => {
            if unsigned {
                DataType::UInt64
            } else {
                DataType::Int64
            }
        }
        FieldType::Decimal | FieldType::NewDecimal => {
            // The declared length carries the precision, `decimals` the scale.
            DataType::Decimal128(meta.length as u8, meta.decimals as i8)
        }
        FieldType::Float => DataType::Float32,
        FieldType::Double => DataType::Float64,
        FieldType::Bit => {
            if cast_booleans && meta.length == 1 {
                DataType::Boolean
            } else {
                DataType::Binary
            }
        }
        FieldType::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, None),
        FieldType::Date | FieldType::NewDate => DataType::Date32,
        // TODO: reconsider the mapping for TIME and DATETIME fields; Time64
        // cannot carry a date part.
        FieldType::Time | FieldType::DateTime => DataType::Time64(TimeUnit::Microsecond),
        FieldType::Varchar
        | FieldType::VarString
        | FieldType::String
        | FieldType::TinyBlob
        | FieldType::MediumBlob
        | FieldType::LongBlob
        | FieldType::Blob => DataType::Utf8,
        FieldType::Set | FieldType::Enum | FieldType::Geometry => return None,
        FieldType::Null => DataType::Null,
    })
}

/// Derive the record-batch schema for a result set's columns.
///
/// Fields keep source order; a column is nullable unless its NOT_NULL flag
/// is set. Duplicate column names are allowed.
///
/// # Errors
/// Returns [`Error::UnsupportedField`] if any column has no type mapping.
pub fn build_schema(fields: &[ColumnMeta], options: &BatchOptions) -> Result<Schema, Error> {
    let mut out = Vec::with_capacity(fields.len());
    for meta in fields {
        let data_type = arrow_data_type(meta, options.cast, options.cast_booleans).ok_or_else(
            || Error::UnsupportedField {
                name: meta.name.clone(),
                field_type: meta.field_type,
            },
        )?;
        out.push(Field::new(&meta.name, data_type, meta.is_nullable()));
    }
    Ok(Schema::new(out))
}
