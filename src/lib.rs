//! # protected-record
//!
//! Ingests semi-structured key/value records (typically attributes parsed
//! out of a markup element) into a single keyed store, and layers curated,
//! typed accessors on top.
//!
//! A [`Record`] holds far more fields than any one consumer needs; consumers
//! declare the handful they care about with [`field_accessors!`] and read
//! everything else through the generic fallback. Declared accessors strictly
//! take precedence over the fallback, and a name that is neither declared
//! nor stored fails with an error naming it exactly.
pub mod record;

// Re-export the main types for convenience
pub use record::{
    error::{RecordError, Result},
    FieldAccess, FieldSource, FieldValue, FromField, MarkupSource, Record, RecordBuilder,
};
