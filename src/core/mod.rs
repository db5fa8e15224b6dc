// Module declarations
pub mod error;
pub mod field_type;
pub mod row;
pub mod value;

// Re-exports for convenience
pub use error::BindError;
pub use field_type::FieldType;
pub use row::{Row, RowShape};
pub use value::Value;
