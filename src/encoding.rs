//! Character-set association for text-protocol cells.
//!
//! The source reports a character set (collation) identifier per column.
//! Record-batch string columns store UTF-8, so association here means
//! choosing how a cell's bytes become UTF-8: validated as-is for UTF-8
//! compatible charsets, transcoded for latin1, passed through a lossy
//! conversion otherwise. The identifier table is immutable and process-wide.

use std::borrow::Cow;

use crate::field::ColumnMeta;

/// The charset identifier MySQL reports for binary data.
pub(crate) const BINARY_CHARSET: u16 = 63;

/// The default collation identifier for utf8mb4.
pub(crate) const UTF8MB4_CHARSET: u16 = 45;

/// Canonical character-set name for a collation identifier, if known.
///
/// Covers the collations commonly seen in result-set metadata; unknown
/// identifiers return `None` and fall back to the connection default.
pub fn charset_name(id: u16) -> Option<&'static str> {
    Some(match id {
        1 | 84 => "big5",
        2 | 9 | 21 | 27 | 77 => "latin2",
        5 | 8 | 15 | 31 | 47 | 48 | 49 | 94 => "latin1",
        7 => "koi8r",
        11 | 65 => "ascii",
        12 | 91 => "ujis",
        13 | 88 => "sjis",
        14 | 23 | 50 | 51 | 52 => "cp1251",
        19 | 85 => "euckr",
        22 => "koi8u",
        24 | 86 => "gb2312",
        28 | 87 => "gbk",
        33 | 83 | 192..=211 => "utf8",
        35 | 90 | 128..=151 => "ucs2",
        45 | 46 | 224..=247 | 255..=309 => "utf8mb4",
        54 | 55 | 101..=124 => "utf16",
        60 | 61 | 160..=183 => "utf32",
        63 => "binary",
        95 | 96 => "cp932",
        97 | 98 => "eucjpms",
        _ => return None,
    })
}

/// Decode one no-cast text cell according to the column's character set.
pub(crate) fn decode_text<'a>(meta: &ColumnMeta, bytes: &'a [u8]) -> Cow<'a, str> {
    // Binary-flagged fields and fields without a charset (old servers) get
    // their bytes through untouched.
    if (meta.is_binary() && meta.charset == BINARY_CHARSET) || meta.charset == 0 {
        return String::from_utf8_lossy(bytes);
    }
    match charset_name(meta.charset) {
        Some("utf8mb4" | "utf8" | "ascii" | "binary") => String::from_utf8_lossy(bytes),
        Some("latin1") => latin1_to_utf8(bytes),
        // Unknown charset: fall back to the connection default (UTF-8 here).
        _ => String::from_utf8_lossy(bytes),
    }
}

/// Latin-1 bytes map one-to-one onto the first 256 Unicode code points.
fn latin1_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        // The ASCII subset needs no transcoding.
        Ok(s) if bytes.is_ascii() => Cow::Borrowed(s),
        _ => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}
