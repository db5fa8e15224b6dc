use serde::{Deserialize, Serialize};

/// Declared type of one result column. The binder allocates an output buffer
/// shaped for the variant and decodes fetched bytes back into a [`Value`]
/// of the matching kind.
///
/// [`Value`]: crate::core::Value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldType {
    // Fixed-width numeric types
    TinyInt,    // i8
    TinyUint,   // u8
    SmallInt,   // i16
    SmallUint,  // u16
    Int,        // i32
    Uint,       // u32
    BigInt,     // i64
    BigUint,    // u64
    Float,      // f32
    Double,     // f64
    // Variable-width types
    Text,
    Bytea,
    // Textual kinds: fetched as text and parsed back on decode
    Boolean,
    Date,
    Timestamp,
    Uuid,
    Numeric,
    Json,
    /// A column that tolerates NULL. The only declaration through which a
    /// NULL column is observable as `Value::Null`.
    Nullable(Box<FieldType>),
    /// A borrowed view into the statement's fetch buffer. Never accepted:
    /// fetched values must own their data. Declare `Text` or `Bytea` instead.
    Ref,
}

impl FieldType {
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// The wrapped type for `Nullable` fields, the type itself otherwise.
    #[must_use]
    pub fn base(&self) -> &Self {
        match self {
            Self::Nullable(inner) => inner,
            other => other,
        }
    }
}
