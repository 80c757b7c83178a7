//! Error types for squall.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SquallError {
    /// An operator landed on a rendering path that has no token for it.
    #[error("Unsupported operator in {context}: {operator}")]
    UnsupportedOperator {
        operator: String,
        context: &'static str,
    },

    /// The type translator or literal serializer met a shape it cannot map.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Column-name and column-type (or field and value) lists differ in length.
    #[error("Schema mismatch: {names} column names vs {types} column types")]
    SchemaMismatch { names: usize, types: usize },

    /// A required input was absent or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row payload could not be decoded against its schema.
    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

impl SquallError {
    /// Create an unsupported-operator error for the given rendering context.
    pub fn unsupported_operator(operator: impl Into<String>, context: &'static str) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
            context,
        }
    }

    /// Create an unsupported-type error naming the offending type.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType(type_name.into())
    }

    /// Create a schema mismatch error from the two list lengths.
    pub fn schema_mismatch(names: usize, types: usize) -> Self {
        Self::SchemaMismatch { names, types }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for squall operations.
pub type SquallResult<T> = Result<T, SquallError>;
