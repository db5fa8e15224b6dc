// rowbind - typed result-set marshaling for prepared statements
// Binds per-column output buffers, drives the fetch cursor, recovers from
// variable-length truncation, and decodes raw column bytes into typed rows

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::wildcard_enum_match_arm)]

// Data model (values, field types, rows, errors)
pub mod core;

// Output binding engine (strategies, descriptors, fetch loop, typed facade)
pub mod binder;

// The opaque prepared-statement seam the engine drives
pub mod statement;

// Re-export commonly used types for convenience
pub use crate::binder::{
    BufferSpec, ColumnBuffer, ColumnOut, FromRow, WireType, fetch_all, fetch_typed,
};
pub use crate::core::{BindError, FieldType, Row, RowShape, Value};
pub use crate::statement::{FetchStatus, Statement};
