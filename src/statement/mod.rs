// Statement seam - the opaque prepared-statement handle the binder drives

use crate::binder::{BufferSpec, ColumnBuffer};

/// Status of one statement operation. `fetch_next` answers with any
/// variant; `bind`, `execute` and `refetch_column` answer `Ok` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A row is available and every column fit its buffer.
    Ok,
    /// A row is available but at least one variable-width column exceeded
    /// its buffer; the affected columns report their true length.
    Truncated,
    /// The cursor is exhausted.
    NoMoreRows,
    /// A database-level error; the diagnostic is in `last_error`.
    Error,
}

/// An executable prepared statement with bindable output buffers.
///
/// Implemented by the statement/connection layer, which is out of scope
/// here; the binder only drives this interface. `fetch_next` and
/// `refetch_column` receive the binder's column buffers mutably on every
/// call and deposit fetched bytes via [`ColumnBuffer::write`] /
/// [`ColumnBuffer::set_null`], reporting each column's true length so the
/// binder can observe truncation per column.
///
/// One marshaling call owns the statement exclusively for its duration;
/// the `&mut` receivers make concurrent fetching from the same handle
/// unrepresentable within one process.
pub trait Statement {
    /// Number of output columns this statement produces.
    fn field_count(&self) -> usize;

    /// Attach output buffer descriptors, one per column in order.
    fn bind(&mut self, descriptors: &[BufferSpec]) -> FetchStatus;

    /// Run the statement, making the result cursor fetchable.
    fn execute(&mut self) -> FetchStatus;

    /// Advance the cursor one row, filling the bound column buffers.
    fn fetch_next(&mut self, columns: &mut [ColumnBuffer]) -> FetchStatus;

    /// Re-deposit the current row's value for one column only, without
    /// moving the cursor. Called after the binder grows an undersized
    /// buffer.
    fn refetch_column(&mut self, index: usize, column: &mut ColumnBuffer) -> FetchStatus;

    /// Release the statement. After close the handle must not be fetched.
    fn close(&mut self);

    /// Diagnostic message for the most recent `Error` status.
    fn last_error(&self) -> String;
}
