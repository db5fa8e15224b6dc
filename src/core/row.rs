use serde::{Deserialize, Serialize};
use super::error::BindError;
use super::field_type::FieldType;
use super::value::Value;

/// One fetched result row: decoded values in declared column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// The caller's ordered declaration of expected column types for one result
/// row. Validated at construction: field declarations the engine cannot
/// marshal into owned values are rejected up front, before any statement
/// interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RowShape {
    fields: Vec<FieldType>,
}

impl RowShape {
    /// Builds a shape from declared field types.
    ///
    /// Rejects `FieldType::Ref` (fetched values must own their data) and
    /// nested `Nullable` declarations with `BindError::UnsupportedType`.
    pub fn new(fields: Vec<FieldType>) -> Result<Self, BindError> {
        for field in &fields {
            match field {
                FieldType::Ref => {
                    return Err(BindError::UnsupportedType(
                        "Ref: fetched values must own their data; declare Text or Bytea instead"
                            .to_string(),
                    ));
                }
                FieldType::Nullable(inner) => match inner.as_ref() {
                    FieldType::Ref => {
                        return Err(BindError::UnsupportedType(
                            "Nullable(Ref): fetched values must own their data".to_string(),
                        ));
                    }
                    FieldType::Nullable(_) => {
                        return Err(BindError::UnsupportedType(
                            "Nullable(Nullable): nullability does not nest".to_string(),
                        ));
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
