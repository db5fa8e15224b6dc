use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::binder::fetch::fetch_all;
use crate::core::{BindError, FieldType, Row, RowShape, Value};
use crate::statement::Statement;

/// A Rust type that can be declared as one output column: it names its
/// `FieldType` and extracts itself from the decoded `Value`.
///
/// Raw pointers and references have no implementation on purpose - fetched
/// values must own their data, so a `*const T` or `&T` column simply does
/// not compile. `Option<T>` is the nullable declaration.
pub trait ColumnOut: Sized {
    fn field_type() -> FieldType;

    fn from_value(value: Value, column: usize) -> Result<Self, BindError>;
}

macro_rules! impl_column_out {
    ($rust:ty, $variant:ident) => {
        impl ColumnOut for $rust {
            fn field_type() -> FieldType {
                FieldType::$variant
            }

            fn from_value(value: Value, column: usize) -> Result<Self, BindError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(BindError::Conversion {
                        column,
                        message: format!(
                            concat!("expected ", stringify!($variant), " value, got {:?}"),
                            other
                        ),
                    }),
                }
            }
        }
    };
}

impl_column_out!(i8, TinyInt);
impl_column_out!(u8, TinyUint);
impl_column_out!(i16, SmallInt);
impl_column_out!(u16, SmallUint);
impl_column_out!(i32, Int);
impl_column_out!(u32, Uint);
impl_column_out!(i64, BigInt);
impl_column_out!(u64, BigUint);
impl_column_out!(f32, Float);
impl_column_out!(f64, Double);
impl_column_out!(String, Text);
impl_column_out!(Vec<u8>, Bytea);
impl_column_out!(bool, Boolean);
impl_column_out!(NaiveDate, Date);
impl_column_out!(NaiveDateTime, Timestamp);
impl_column_out!(Uuid, Uuid);
impl_column_out!(Decimal, Numeric);

impl<T: ColumnOut> ColumnOut for Option<T> {
    fn field_type() -> FieldType {
        FieldType::Nullable(Box::new(T::field_type()))
    }

    fn from_value(value: Value, column: usize) -> Result<Self, BindError> {
        match value {
            Value::Null => Ok(None),
            present => T::from_value(present, column).map(Some),
        }
    }
}

/// A row declaration carried by a tuple type, the compile-time counterpart
/// of building a `RowShape` by hand. Implemented for tuples of 1 to 12
/// `ColumnOut` fields.
pub trait FromRow: Sized {
    /// The shape this type declares. Falls out of the field types; fails
    /// only for declarations `RowShape::new` rejects (e.g. the nested
    /// nullability of `Option<Option<T>>`).
    fn row_shape() -> Result<RowShape, BindError>;

    fn from_row(row: Row) -> Result<Self, BindError>;
}

macro_rules! impl_from_row_tuple {
    ($($field:ident),+) => {
        impl<$($field: ColumnOut),+> FromRow for ($($field,)+) {
            fn row_shape() -> Result<RowShape, BindError> {
                RowShape::new(vec![$($field::field_type()),+])
            }

            fn from_row(row: Row) -> Result<Self, BindError> {
                let expected = [$(stringify!($field)),+].len();
                if row.len() != expected {
                    return Err(BindError::ArgumentCount { expected, actual: row.len() });
                }
                let mut values = row.values.into_iter().enumerate();
                Ok(($(
                    {
                        let (index, value) = values.next().expect("length checked above");
                        $field::from_value(value, index)?
                    },
                )+))
            }
        }
    };
}

impl_from_row_tuple!(A);
impl_from_row_tuple!(A, B);
impl_from_row_tuple!(A, B, C);
impl_from_row_tuple!(A, B, C, D);
impl_from_row_tuple!(A, B, C, D, E);
impl_from_row_tuple!(A, B, C, D, E, F);
impl_from_row_tuple!(A, B, C, D, E, F, G);
impl_from_row_tuple!(A, B, C, D, E, F, G, H);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_from_row_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Fetches every row of `statement` as the declared tuple type.
///
/// The row shape is derived from `T`, so a width or type mismatch against
/// the statement's actual result set surfaces as the usual marshaling
/// errors from [`fetch_all`].
pub fn fetch_typed<T, S>(statement: &mut S) -> Result<Vec<T>, BindError>
where
    T: FromRow,
    S: Statement + ?Sized,
{
    let shape = T::row_shape()?;
    let mut rows = Vec::new();
    fetch_all(statement, &shape, &mut rows)?;
    rows.into_iter().map(T::from_row).collect()
}
