use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;
use rust_decimal::Decimal;

/// One decoded column value. `Null` is produced only for columns declared
/// `FieldType::Nullable`; a NULL in any other column is an error, never a
/// default value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Null,
    // Numeric types
    TinyInt(i8),
    TinyUint(u8),
    SmallInt(i16),
    SmallUint(u16),
    Int(i32),
    Uint(u32),
    BigInt(i64),
    BigUint(u64),
    Float(f32),
    Double(f64),
    // String types
    Text(String),
    // Binary data
    Bytea(Vec<u8>),
    // Boolean
    Boolean(bool),
    // Date/Time types
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    // Special types
    Uuid(Uuid),
    Numeric(Decimal),
    Json(String),
}

impl Value {
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::BigInt(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::TinyInt(i) => write!(f, "{i}"),
            Self::TinyUint(i) => write!(f, "{i}"),
            Self::SmallInt(i) => write!(f, "{i}"),
            Self::SmallUint(i) => write!(f, "{i}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(i) => write!(f, "{i}"),
            Self::BigInt(i) => write!(f, "{i}"),
            Self::BigUint(i) => write!(f, "{i}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Double(r) => write!(f, "{r}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bytea(b) => write!(f, "\\x{}", hex::encode(b)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Numeric(d) => write!(f, "{d}"),
            Self::Json(j) => write!(f, "{j}"),
        }
    }
}
