//! Source column metadata: wire type tags, flags, and the per-column
//! snapshot taken at schema-build time.

/// Column base type tags as they appear on the MySQL wire.
///
/// The tag set is closed; the type map matches it exhaustively so a new
/// variant cannot be added without deciding its mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// DECIMAL or NUMERIC.
    Decimal,
    /// TINYINT: 1 byte.
    Tiny,
    /// SMALLINT: 2 bytes.
    Short,
    /// INTEGER: 4 bytes.
    Long,
    /// FLOAT: 4 bytes.
    Float,
    /// DOUBLE or REAL: 8 bytes.
    Double,
    /// A column of SQL NULLs.
    Null,
    /// TIMESTAMP.
    Timestamp,
    /// BIGINT: 8 bytes.
    LongLong,
    /// MEDIUMINT: 3 bytes.
    Int24,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// DATETIME.
    DateTime,
    /// YEAR.
    Year,
    /// Pre-4.1 DATE.
    NewDate,
    /// VARCHAR.
    Varchar,
    /// BIT: 1 to 64 bits.
    Bit,
    /// High-precision DECIMAL or NUMERIC.
    NewDecimal,
    /// ENUM.
    Enum,
    /// SET.
    Set,
    /// TINYBLOB or TINYTEXT.
    TinyBlob,
    /// MEDIUMBLOB or MEDIUMTEXT.
    MediumBlob,
    /// LONGBLOB or LONGTEXT.
    LongBlob,
    /// BLOB or TEXT.
    Blob,
    /// VARCHAR or VARBINARY.
    VarString,
    /// CHAR or BINARY.
    String,
    /// GEOMETRY.
    Geometry,
}

bitflags::bitflags! {
    /// Column flags as reported on the MySQL wire.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u32 {
        /// Column is declared NOT NULL.
        const NOT_NULL = 1;
        /// Column holds an unsigned numeric type.
        const UNSIGNED = 1 << 5;
        /// Column carries binary rather than text data.
        const BINARY = 1 << 7;
    }
}

/// Per-column metadata snapshot.
///
/// Taken once from the source result set at schema-build time; the source
/// must not mutate field metadata while a conversion is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name as reported by the source. Duplicates are allowed;
    /// position is authoritative.
    pub name: String,
    /// Base type tag.
    pub field_type: FieldType,
    /// Wire flags.
    pub flags: FieldFlags,
    /// Declared display length. Carries the precision for decimal columns
    /// and distinguishes TINYINT(1)/BIT(1) for the boolean cast.
    pub length: u32,
    /// Declared count of fractional digits (decimal scale).
    pub decimals: u8,
    /// Character set (collation) identifier, 63 for binary.
    pub charset: u16,
}

impl ColumnMeta {
    /// Metadata with empty flags, zero length/scale, and the utf8mb4
    /// character set.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            flags: FieldFlags::empty(),
            length: 0,
            decimals: 0,
            charset: crate::encoding::UTF8MB4_CHARSET,
        }
    }

    /// Whether the mapped record-batch field accepts nulls.
    pub fn is_nullable(&self) -> bool {
        !self.flags.contains(FieldFlags::NOT_NULL)
    }

    /// Whether the column's numeric type is unsigned.
    pub fn is_unsigned(&self) -> bool {
        self.flags.contains(FieldFlags::UNSIGNED)
    }

    /// Whether the column carries binary rather than text data.
    pub fn is_binary(&self) -> bool {
        self.flags.contains(FieldFlags::BINARY)
    }
}
