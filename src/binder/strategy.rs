use bytes::Buf;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::io::Cursor;
use uuid::Uuid;

use crate::binder::descriptor::ColumnBuffer;
use crate::core::{BindError, FieldType, Value};

/// Initial capacity for variable-width columns. The truncation loop grows
/// past this to the exact reported length when a value does not fit.
pub const DEFAULT_VARIABLE_CAPACITY: usize = 20;

/// Client-protocol tag describing how a column buffer's bytes are to be
/// interpreted. Fixed-width values travel in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Tiny,     // 1 byte
    Short,    // 2 bytes
    Long,     // 4 bytes
    LongLong, // 8 bytes
    Float,    // IEEE 754 single
    Double,   // IEEE 754 double
    Text,     // UTF-8 bytes, variable
    Blob,     // raw bytes, variable
}

/// Per-column output buffer descriptor handed to `Statement::bind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSpec {
    pub wire: WireType,
    pub unsigned: bool,
    pub capacity: usize,
    /// Variable-width columns may truncate and are eligible for
    /// grow-and-refetch recovery; fixed-width columns never truncate.
    pub variable: bool,
}

impl BufferSpec {
    const fn fixed(wire: WireType, unsigned: bool, capacity: usize) -> Self {
        Self { wire, unsigned, capacity, variable: false }
    }

    const fn variable(wire: WireType) -> Self {
        Self { wire, unsigned: false, capacity: DEFAULT_VARIABLE_CAPACITY, variable: true }
    }
}

/// Buffer shape for one declared field type: wire tag, signedness and
/// initial byte size. `Nullable` delegates to the wrapped type.
pub fn describe_buffer(field: &FieldType) -> Result<BufferSpec, BindError> {
    let spec = match field {
        FieldType::TinyInt => BufferSpec::fixed(WireType::Tiny, false, 1),
        FieldType::TinyUint => BufferSpec::fixed(WireType::Tiny, true, 1),
        FieldType::SmallInt => BufferSpec::fixed(WireType::Short, false, 2),
        FieldType::SmallUint => BufferSpec::fixed(WireType::Short, true, 2),
        FieldType::Int => BufferSpec::fixed(WireType::Long, false, 4),
        FieldType::Uint => BufferSpec::fixed(WireType::Long, true, 4),
        FieldType::BigInt => BufferSpec::fixed(WireType::LongLong, false, 8),
        FieldType::BigUint => BufferSpec::fixed(WireType::LongLong, true, 8),
        FieldType::Float => BufferSpec::fixed(WireType::Float, false, 4),
        FieldType::Double => BufferSpec::fixed(WireType::Double, false, 8),
        FieldType::Bytea => BufferSpec::variable(WireType::Blob),
        // Textual kinds fetch as text and parse on decode
        FieldType::Text
        | FieldType::Boolean
        | FieldType::Date
        | FieldType::Timestamp
        | FieldType::Uuid
        | FieldType::Numeric
        | FieldType::Json => BufferSpec::variable(WireType::Text),
        FieldType::Nullable(inner) => return describe_buffer(inner),
        FieldType::Ref => {
            return Err(BindError::UnsupportedType(
                "Ref: fetched values must own their data; declare Text or Bytea instead"
                    .to_string(),
            ));
        }
    };
    Ok(spec)
}

/// Decodes one fetched column into a typed value.
///
/// The nullable decorator is applied first: a NULL column declared
/// `Nullable` yields `Value::Null` without touching the buffer (its
/// contents are undefined on NULL); a NULL column declared anything else
/// is `BindError::NullValue`. Non-NULL columns decode via the base rule
/// for the declared type.
pub fn decode_value(
    field: &FieldType,
    column: &ColumnBuffer,
    index: usize,
) -> Result<Value, BindError> {
    if let FieldType::Nullable(inner) = field {
        if column.is_null() {
            return Ok(Value::Null);
        }
        return decode_base(inner, column, index);
    }
    if column.is_null() {
        return Err(BindError::NullValue(index));
    }
    decode_base(field, column, index)
}

fn decode_base(field: &FieldType, column: &ColumnBuffer, index: usize) -> Result<Value, BindError> {
    let data = column.payload();
    match field {
        FieldType::TinyInt => {
            expect_len(data, 1, "TinyInt", index)?;
            Ok(Value::TinyInt(Cursor::new(data).get_i8()))
        }
        FieldType::TinyUint => {
            expect_len(data, 1, "TinyUint", index)?;
            Ok(Value::TinyUint(Cursor::new(data).get_u8()))
        }
        FieldType::SmallInt => {
            expect_len(data, 2, "SmallInt", index)?;
            Ok(Value::SmallInt(Cursor::new(data).get_i16()))
        }
        FieldType::SmallUint => {
            expect_len(data, 2, "SmallUint", index)?;
            Ok(Value::SmallUint(Cursor::new(data).get_u16()))
        }
        FieldType::Int => {
            expect_len(data, 4, "Int", index)?;
            Ok(Value::Int(Cursor::new(data).get_i32()))
        }
        FieldType::Uint => {
            expect_len(data, 4, "Uint", index)?;
            Ok(Value::Uint(Cursor::new(data).get_u32()))
        }
        FieldType::BigInt => {
            expect_len(data, 8, "BigInt", index)?;
            Ok(Value::BigInt(Cursor::new(data).get_i64()))
        }
        FieldType::BigUint => {
            expect_len(data, 8, "BigUint", index)?;
            Ok(Value::BigUint(Cursor::new(data).get_u64()))
        }
        FieldType::Float => {
            expect_len(data, 4, "Float", index)?;
            Ok(Value::Float(Cursor::new(data).get_f32()))
        }
        FieldType::Double => {
            expect_len(data, 8, "Double", index)?;
            Ok(Value::Double(Cursor::new(data).get_f64()))
        }
        FieldType::Text => Ok(Value::Text(text_payload(data, index)?)),
        FieldType::Bytea => Ok(Value::Bytea(data.to_vec())),
        FieldType::Boolean => {
            let s = text_payload(data, index)?;
            match s.to_ascii_lowercase().as_str() {
                "t" | "true" | "1" => Ok(Value::Boolean(true)),
                "f" | "false" | "0" => Ok(Value::Boolean(false)),
                other => Err(conversion(index, format!("invalid boolean '{other}'"))),
            }
        }
        FieldType::Date => {
            let s = text_payload(data, index)?;
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|e| conversion(index, format!("invalid date '{s}': {e}")))
        }
        FieldType::Timestamp => {
            let s = text_payload(data, index)?;
            NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f")
                .map(Value::Timestamp)
                .map_err(|e| conversion(index, format!("invalid timestamp '{s}': {e}")))
        }
        FieldType::Uuid => {
            let s = text_payload(data, index)?;
            Uuid::parse_str(&s)
                .map(Value::Uuid)
                .map_err(|e| conversion(index, format!("invalid UUID '{s}': {e}")))
        }
        FieldType::Numeric => {
            let s = text_payload(data, index)?;
            s.parse::<Decimal>()
                .map(Value::Numeric)
                .map_err(|e| conversion(index, format!("invalid numeric '{s}': {e}")))
        }
        FieldType::Json => {
            let s = text_payload(data, index)?;
            serde_json::from_str::<serde_json::Value>(&s)
                .map_err(|e| conversion(index, format!("invalid JSON: {e}")))?;
            Ok(Value::Json(s))
        }
        // Unreachable through a validated RowShape
        FieldType::Nullable(_) | FieldType::Ref => {
            Err(BindError::UnsupportedType(format!("{field:?}")))
        }
    }
}

fn expect_len(data: &[u8], expected: usize, kind: &str, index: usize) -> Result<(), BindError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(conversion(
            index,
            format!("invalid {kind} length: {} (expected {expected})", data.len()),
        ))
    }
}

fn text_payload(data: &[u8], index: usize) -> Result<String, BindError> {
    String::from_utf8(data.to_vec()).map_err(|e| conversion(index, format!("invalid UTF-8: {e}")))
}

fn conversion(index: usize, message: String) -> BindError {
    BindError::Conversion { column: index, message }
}
