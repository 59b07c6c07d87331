use thiserror::Error;

use super::FieldName;

#[derive(Debug, Error)]
pub enum SieveError {
    #[error("unexpected keyword arguments for schema={schema}: {}", join_keys(.keys))]
    UnknownKeys { schema: String, keys: Vec<FieldName> },

    #[error("duplicate field '{field}' in schema={schema}")]
    DuplicateField { schema: String, field: FieldName },

    #[error("decode into schema={schema}: {message}")]
    Decode { schema: String, message: String },

    #[error("consumer for schema={schema} failed: {message}")]
    Consumer { schema: String, message: String },

    #[error("invalid argument '{0}': expected key=value")]
    InvalidPair(String),
}

impl SieveError {
    /// Shorthand for consumers reporting their own failure.
    pub fn consumer(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Consumer {
            schema: schema.into(),
            message: message.into(),
        }
    }
}

/// Keys as `a, b, c` for messages and log fields.
pub(crate) fn join_keys(keys: &[FieldName]) -> String {
    keys.iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
