//! Core protected record module

pub mod error;

mod accessor;
mod builder;
mod markup;
mod source;
mod value;

use std::collections::HashMap;

pub use accessor::FieldAccess;
pub use builder::RecordBuilder;
pub use error::{RecordError, Result};
pub use markup::MarkupSource;
pub use source::FieldSource;
pub use value::{FieldValue, FromField};

/// An immutable bag of raw fields keyed by name.
///
/// A record is populated exactly once, by [`RecordBuilder`], from an ordered
/// list of sources plus named entries. The store itself is private: reads go
/// through [`raw`](Record::raw) (the generic fallback), [`get`](Record::get)
/// (typed read-through), or an accessor declared on a typed view (see
/// [`FieldAccess`] and [`field_accessors!`](crate::field_accessors)).
///
/// The only supported mutation after construction is the
/// [`set_raw`](Record::set_raw) escape hatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    slots: HashMap<String, String>,
}

impl Record {
    /// Starts building a record from ordered sources and named entries.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    pub(crate) fn from_slots(slots: HashMap<String, String>) -> Self {
        Self { slots }
    }

    /// Returns the raw value stored for `name`.
    ///
    /// # Errors
    /// Fails with [`RecordError::UnknownField`] carrying `name` exactly as
    /// requested when no slot holds it.
    pub fn raw(&self, name: &str) -> Result<&str> {
        self.slots
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RecordError::UnknownField(name.to_string()))
    }

    /// Returns the raw value stored for `name`, or `None` if absent.
    pub fn raw_opt(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// True when a slot exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(name, raw value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads `name` and converts it through `T`'s [`FromField`] impl.
    ///
    /// Conversion failures carry the field name, so callers never have to
    /// reconstruct which field was at fault.
    pub fn get<T: FromField>(&self, name: &str) -> Result<T> {
        T::from_field(name, self.raw(name)?)
    }

    /// Escape hatch: overwrites one slot in place.
    ///
    /// Returns the previous raw value, if any. Post-construction mutation is
    /// deliberately limited to this single explicit entry point.
    pub fn set_raw(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.slots.insert(name.into(), value.into())
    }
}
