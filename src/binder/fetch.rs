use crate::binder::descriptor::{ColumnBuffer, build_descriptors};
use crate::binder::strategy::{BufferSpec, decode_value};
use crate::core::{BindError, Row, RowShape};
use crate::statement::{FetchStatus, Statement};

/// Executes `statement` and appends every fetched row to `results`, decoded
/// per the declared `shape`.
///
/// Rows land in fetch order. Variable-width columns that arrive truncated
/// are grown to their reported length and refetched individually - the
/// statement is never re-executed, so the cursor position and already
/// fetched rows are preserved.
///
/// Error behavior: a column-count mismatch or an unsupported declaration
/// fails before the statement is touched. Once the statement is bound, any
/// failure closes it before the error propagates, and `results` is left
/// exactly as passed in. On success the statement stays open for the
/// caller.
pub fn fetch_all<S>(
    statement: &mut S,
    shape: &RowShape,
    results: &mut Vec<Row>,
) -> Result<(), BindError>
where
    S: Statement + ?Sized,
{
    let actual = statement.field_count();
    if shape.len() != actual {
        return Err(BindError::ArgumentCount { expected: shape.len(), actual });
    }
    let mut columns = build_descriptors(shape)?;

    let base = results.len();
    let outcome = drive(statement, shape, &mut columns, results);
    if outcome.is_err() {
        results.truncate(base);
    }
    outcome
}

fn drive<S>(
    statement: &mut S,
    shape: &RowShape,
    columns: &mut [ColumnBuffer],
    results: &mut Vec<Row>,
) -> Result<(), BindError>
where
    S: Statement + ?Sized,
{
    let specs: Vec<BufferSpec> = columns.iter().map(|c| c.spec()).collect();
    if statement.bind(&specs) == FetchStatus::Error {
        return Err(close_with_error(statement));
    }
    if statement.execute() == FetchStatus::Error {
        return Err(close_with_error(statement));
    }

    loop {
        let status = statement.fetch_next(columns);
        match status {
            FetchStatus::NoMoreRows => return Ok(()),
            FetchStatus::Error => return Err(close_with_error(statement)),
            FetchStatus::Ok | FetchStatus::Truncated => {
                if status == FetchStatus::Truncated {
                    refetch_truncated_columns(statement, columns)?;
                }
                match assemble_row(shape, columns) {
                    Ok(row) => results.push(row),
                    Err(err) => {
                        statement.close();
                        return Err(err);
                    }
                }
            }
        }
    }
}

/// Grows each oversized column to its exact reported length and refetches
/// just that column. One resize per column suffices since the reported
/// length is the true value length.
fn refetch_truncated_columns<S>(
    statement: &mut S,
    columns: &mut [ColumnBuffer],
) -> Result<(), BindError>
where
    S: Statement + ?Sized,
{
    for index in 0..columns.len() {
        if !columns[index].is_truncated() {
            continue;
        }
        columns[index].grow_to_reported();
        if statement.refetch_column(index, &mut columns[index]) == FetchStatus::Error {
            return Err(close_with_error(statement));
        }
    }
    Ok(())
}

/// Decodes the current fetched state of every column, in declared order,
/// into one row.
fn assemble_row(shape: &RowShape, columns: &[ColumnBuffer]) -> Result<Row, BindError> {
    let mut values = Vec::with_capacity(columns.len());
    for (index, (field, column)) in shape.fields().iter().zip(columns).enumerate() {
        values.push(decode_value(field, column, index)?);
    }
    Ok(Row::new(values))
}

fn close_with_error<S>(statement: &mut S) -> BindError
where
    S: Statement + ?Sized,
{
    let message = statement.last_error();
    statement.close();
    BindError::Fetch(message)
}
