//! Row decoding: appending fetched rows into per-column sinks.

use arrow_array::types::Decimal128Type;
use arrow_cast::parse::parse_decimal;

use crate::{
    encoding,
    error::Error,
    field::{ColumnMeta, FieldType},
    options::BatchOptions,
    sink::{ColumnSink, Inner},
    source::SourceRow,
};

/// Append one fetched row into the sinks, one value (or null) per column,
/// in column order.
///
/// The sinks must have been created from the schema derived for `fields`
/// with the same options. Nothing from `row` is retained after the call
/// returns; the source may invalidate the row buffer immediately.
///
/// # Errors
/// Returns [`Error::UnsupportedField`] for cells whose decode is not
/// implemented (temporal columns in cast mode) and [`Error::Arrow`] for
/// decimal text the columnar library rejects.
pub fn decode_row(
    row: &SourceRow<'_>,
    fields: &[ColumnMeta],
    sinks: &mut [ColumnSink],
    options: &BatchOptions,
) -> Result<(), Error> {
    debug_assert_eq!(fields.len(), sinks.len());
    for (i, (meta, sink)) in fields.iter().zip(sinks.iter_mut()).enumerate() {
        match row.cell(i) {
            // A source-reported NULL wins over all type handling.
            None => sink.append_null(),
            Some(bytes) => append_cell(meta, sink, bytes, options)?,
        }
    }
    Ok(())
}

fn append_cell(
    meta: &ColumnMeta,
    sink: &mut ColumnSink,
    bytes: &[u8],
    options: &BatchOptions,
) -> Result<(), Error> {
    match &mut sink.inner {
        // NULL-typed columns only ever hold nulls, cast mode or not.
        Inner::Null(b) => b.append_null(),
        Inner::Bool(b) => b.append_value(is_truthy(meta, bytes)),
        Inner::I8(b) => b.append_value(parse_int(bytes) as i8),
        Inner::I16(b) => b.append_value(parse_int(bytes) as i16),
        Inner::I32(b) => b.append_value(parse_int(bytes) as i32),
        Inner::I64(b) => b.append_value(parse_int(bytes) as i64),
        Inner::U8(b) => b.append_value(parse_int(bytes) as u8),
        Inner::U16(b) => b.append_value(parse_int(bytes) as u16),
        Inner::U32(b) => b.append_value(parse_int(bytes) as u32),
        Inner::U64(b) => b.append_value(parse_int(bytes)),
        Inner::F32(b) => b.append_value(parse_float(bytes) as f32),
        Inner::F64(b) => b.append_value(parse_float(bytes)),
        Inner::Decimal128(b) => {
            // Fixed-point straight from the text; no float round-trip. The
            // precision and scale are the ones the schema was built from.
            let text = String::from_utf8_lossy(bytes);
            let value =
                parse_decimal::<Decimal128Type>(&text, meta.length as u8, meta.decimals as i8)?;
            b.append_value(value);
        }
        Inner::Utf8(b) => {
            if options.cast {
                // TODO: respect the field charset here the way the no-cast
                // path does.
                b.append_value(String::from_utf8_lossy(bytes));
            } else {
                b.append_value(encoding::decode_text(meta, bytes));
            }
        }
        Inner::Binary(b) => b.append_value(bytes),
        Inner::Date32(_) | Inner::Time64Micro(_) | Inner::TimestampMicro(_) => {
            // TODO: decode temporal text into days/microseconds honoring the
            // timezone options. Until then the gap is surfaced explicitly.
            return Err(Error::UnsupportedField {
                name: meta.name.clone(),
                field_type: meta.field_type,
            });
        }
    }
    Ok(())
}

// TINY cells are protocol text; BIT cells carry the raw bit value.
fn is_truthy(meta: &ColumnMeta, bytes: &[u8]) -> bool {
    match meta.field_type {
        FieldType::Bit => bytes.first() == Some(&1),
        _ => bytes.first() == Some(&b'1'),
    }
}

/// Parse a base-10 integer prefix the way `strtol` does: optional leading
/// whitespace and sign, then digits up to the first non-digit byte.
/// Malformed text yields 0; out-of-range values wrap at the target width.
///
/// Returns the two's-complement bit pattern so callers can narrow to any
/// width or signedness with an `as` cast.
pub(crate) fn parse_int(bytes: &[u8]) -> u64 {
    let mut s = bytes;
    while let Some((b, rest)) = s.split_first() {
        if b.is_ascii_whitespace() {
            s = rest;
        } else {
            break;
        }
    }
    let negative = match s.split_first() {
        Some((b'-', rest)) => {
            s = rest;
            true
        }
        Some((b'+', rest)) => {
            s = rest;
            false
        }
        _ => false,
    };
    let mut value: u64 = 0;
    for &b in s {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
    }
    if negative { value.wrapping_neg() } else { value }
}

/// Parse a floating-point prefix the way `strtod` does: the longest leading
/// run that forms a decimal literal, optionally with an exponent. Malformed
/// text yields 0.0.
pub(crate) fn parse_float(bytes: &[u8]) -> f64 {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let s = &bytes[start..];

    let mut end = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mantissa_start = end;
    while s.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let int_digits = end - mantissa_start;
    let mut frac_digits = 0;
    if s.get(end) == Some(&b'.') {
        let mut j = end + 1;
        while s.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }
    if matches!(s.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while s.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    std::str::from_utf8(&s[..end])
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(0.0)
}
