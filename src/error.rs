// Error taxonomy for option construction and export

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    /// A field received a value that cannot be coerced to its declared type.
    #[error("invalid value for \"{field}\": expected {expected}, received {value}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// An array-form data point whose length has no positional layout.
    #[error("{kind} does not support {len}-dimensional arrays (supported lengths: {supported:?})")]
    UnsupportedDimensions {
        kind: &'static str,
        len: usize,
        supported: Vec<usize>,
    },

    #[error("{kind} definition is missing its \"type\" discriminator")]
    MissingType { kind: &'static str },

    #[error("unknown {kind} type \"{value}\" (expected one of: {known})")]
    UnknownType {
        kind: &'static str,
        value: String,
        known: String,
    },

    #[error("{owner} has no field named \"{name}\"")]
    UnknownField { owner: &'static str, name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OptionsError {
    pub fn invalid(field: &str, value: &Value, expected: impl Into<String>) -> Self {
        OptionsError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// True for failures to find a registered field or discriminator,
    /// as opposed to a value that failed validation.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            OptionsError::MissingType { .. }
                | OptionsError::UnknownType { .. }
                | OptionsError::UnknownField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OptionsError>;
