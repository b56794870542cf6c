//! Custom error types for the protected-record crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum RecordError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A read fell through to the fallback lookup and no slot holds the name.
    ///
    /// Always carries the name exactly as the caller requested it.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A construction source could not yield key/value pairs.
    ///
    /// `index` is the zero-based position of the source in builder order.
    #[error("malformed source at index {index}: {reason}")]
    MalformedSource { index: usize, reason: String },

    /// A source or named entry supplied an empty field name.
    #[error("empty field name in {origin}")]
    EmptyFieldName { origin: String },

    /// A typed conversion could not interpret a raw field value.
    #[error("invalid value for field `{name}`: expected {expected} ({reason})")]
    InvalidField {
        name: String,
        expected: &'static str,
        reason: String,
    },
}

/// A convenience `Result` type alias using the crate's `RecordError` type.
pub type Result<T> = std::result::Result<T, RecordError>;
