use crate::binder::strategy::{BufferSpec, describe_buffer};
use crate::core::{BindError, RowShape};

/// Mutable fetch state for one bound output column: the owned byte buffer,
/// the length the statement reported for the current row, and the null
/// indicator. Owned exclusively by one marshaling call; the buffer grows
/// monotonically during truncation recovery and never shrinks between rows.
#[derive(Debug)]
pub struct ColumnBuffer {
    spec: BufferSpec,
    data: Vec<u8>,
    reported_len: usize,
    is_null: bool,
}

impl ColumnBuffer {
    #[must_use]
    pub fn new(spec: BufferSpec) -> Self {
        Self {
            spec,
            data: vec![0; spec.capacity],
            reported_len: 0,
            is_null: false,
        }
    }

    #[must_use]
    pub const fn spec(&self) -> BufferSpec {
        self.spec
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Length the statement reported for the current row's value. May
    /// exceed `capacity` when the value was truncated.
    #[must_use]
    pub const fn reported_len(&self) -> usize {
        self.reported_len
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.is_null
    }

    /// Whether the current row's value did not fit the buffer.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !self.is_null && self.reported_len > self.data.len()
    }

    /// Resizes the buffer to the exact reported length, making room for a
    /// column-level refetch of the current row's value.
    pub fn grow_to_reported(&mut self) {
        if self.reported_len > self.data.len() {
            self.data.resize(self.reported_len, 0);
        }
    }

    /// The valid prefix of the buffer for the current row.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        let len = self.reported_len.min(self.data.len());
        &self.data[..len]
    }

    /// Statement-side writer: deposits a fetched value, reporting its true
    /// length. Bytes beyond the buffer's capacity are dropped; the caller
    /// observes that as truncation via `is_truncated`.
    pub fn write(&mut self, bytes: &[u8]) {
        self.is_null = false;
        self.reported_len = bytes.len();
        let len = bytes.len().min(self.data.len());
        self.data[..len].copy_from_slice(&bytes[..len]);
    }

    /// Statement-side writer: marks the current row's value as NULL. The
    /// buffer contents are left undefined and must not be decoded.
    pub fn set_null(&mut self) {
        self.is_null = true;
        self.reported_len = 0;
    }
}

/// Builds one output buffer per declared field, in declared order.
pub fn build_descriptors(shape: &RowShape) -> Result<Vec<ColumnBuffer>, BindError> {
    let mut columns = Vec::with_capacity(shape.len());
    for field in shape.fields() {
        columns.push(ColumnBuffer::new(describe_buffer(field)?));
    }
    Ok(columns)
}
