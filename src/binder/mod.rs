// Output binding engine: per-type buffer strategies, descriptor
// construction, the fetch/truncation-recovery loop, and the typed facade

pub mod descriptor;
pub mod fetch;
pub mod strategy;
pub mod typed;

pub use descriptor::{ColumnBuffer, build_descriptors};
pub use fetch::fetch_all;
pub use strategy::{BufferSpec, DEFAULT_VARIABLE_CAPACITY, WireType, decode_value, describe_buffer};
pub use typed::{ColumnOut, FromRow, fetch_typed};
