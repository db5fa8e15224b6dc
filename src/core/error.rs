use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("Row shape declares {expected} columns but statement produced {actual}")]
    ArgumentCount { expected: usize, actual: usize },
    #[error("Null value in non-nullable column {0}")]
    NullValue(usize),
    #[error("Cannot convert column {column}: {message}")]
    Conversion { column: usize, message: String },
    #[error("Unsupported field type: {0}")]
    UnsupportedType(String),
    #[error("Fetch failed: {0}")]
    Fetch(String),
}
