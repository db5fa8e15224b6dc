use bytes::{BufMut, BytesMut};
use rowbind::{BufferSpec, ColumnBuffer, FetchStatus, Statement, Value};

/// Scripted in-memory statement: replays a prerecorded grid of cells
/// (`None` = SQL NULL) through the `Statement` seam, encoding values in
/// network byte order per wire tag, honoring buffer capacity the way a
/// real client library does - a value that does not fit is deposited as a
/// truncated prefix with its true length reported. Records bind/execute/
/// close calls and per-column refetch counts so resource-safety and
/// recovery properties are assertable.
pub struct MockStatement {
    rows: Vec<Vec<Option<Value>>>,
    field_count: usize,
    cursor: usize,
    pub bound: Option<Vec<BufferSpec>>,
    pub executed: bool,
    pub closed: bool,
    pub refetches: Vec<usize>,
    fail_fetch_at: Option<usize>,
    error_message: String,
}

impl MockStatement {
    #[must_use]
    pub fn new(field_count: usize, rows: Vec<Vec<Option<Value>>>) -> Self {
        Self {
            rows,
            field_count,
            cursor: 0,
            bound: None,
            executed: false,
            closed: false,
            refetches: vec![0; field_count],
            fail_fetch_at: None,
            error_message: String::new(),
        }
    }

    /// Makes the fetch for row `at_row` (0-based) report a database error.
    #[must_use]
    pub fn with_fetch_failure(mut self, at_row: usize, message: &str) -> Self {
        self.fail_fetch_at = Some(at_row);
        self.error_message = message.to_string();
        self
    }

    fn encode(value: &Value) -> Vec<u8> {
        let mut buf = BytesMut::new();
        match value {
            Value::TinyInt(v) => buf.put_i8(*v),
            Value::TinyUint(v) => buf.put_u8(*v),
            Value::SmallInt(v) => buf.put_i16(*v),
            Value::SmallUint(v) => buf.put_u16(*v),
            Value::Int(v) => buf.put_i32(*v),
            Value::Uint(v) => buf.put_u32(*v),
            Value::BigInt(v) => buf.put_i64(*v),
            Value::BigUint(v) => buf.put_u64(*v),
            Value::Float(v) => buf.put_f32(*v),
            Value::Double(v) => buf.put_f64(*v),
            Value::Text(s) | Value::Json(s) => buf.put_slice(s.as_bytes()),
            Value::Bytea(b) => buf.put_slice(b),
            Value::Boolean(b) => buf.put_slice(if *b { b"t" } else { b"f" }),
            Value::Date(d) => buf.put_slice(d.format("%Y-%m-%d").to_string().as_bytes()),
            Value::Timestamp(t) => {
                buf.put_slice(t.format("%Y-%m-%d %H:%M:%S").to_string().as_bytes());
            }
            Value::Uuid(u) => buf.put_slice(u.to_string().as_bytes()),
            Value::Numeric(d) => buf.put_slice(d.to_string().as_bytes()),
            Value::Null => panic!("script NULL cells as None, not Value::Null"),
        }
        buf.to_vec()
    }

    fn deposit(cell: &Option<Value>, column: &mut ColumnBuffer) {
        match cell {
            None => column.set_null(),
            Some(value) => column.write(&Self::encode(value)),
        }
    }
}

impl Statement for MockStatement {
    fn field_count(&self) -> usize {
        self.field_count
    }

    fn bind(&mut self, descriptors: &[BufferSpec]) -> FetchStatus {
        self.bound = Some(descriptors.to_vec());
        FetchStatus::Ok
    }

    fn execute(&mut self) -> FetchStatus {
        self.executed = true;
        FetchStatus::Ok
    }

    fn fetch_next(&mut self, columns: &mut [ColumnBuffer]) -> FetchStatus {
        if self.fail_fetch_at == Some(self.cursor) {
            return FetchStatus::Error;
        }
        if self.cursor >= self.rows.len() {
            return FetchStatus::NoMoreRows;
        }
        let mut truncated = false;
        for (cell, column) in self.rows[self.cursor].iter().zip(columns.iter_mut()) {
            Self::deposit(cell, column);
            if column.is_truncated() {
                truncated = true;
            }
        }
        self.cursor += 1;
        if truncated { FetchStatus::Truncated } else { FetchStatus::Ok }
    }

    fn refetch_column(&mut self, index: usize, column: &mut ColumnBuffer) -> FetchStatus {
        self.refetches[index] += 1;
        Self::deposit(&self.rows[self.cursor - 1][index], column);
        FetchStatus::Ok
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn last_error(&self) -> String {
        self.error_message.clone()
    }
}
