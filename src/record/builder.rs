//! Merge-then-store construction of records.

use std::collections::HashMap;

use log::{debug, trace};

use super::error::{RecordError, Result};
use super::source::FieldSource;
use super::Record;

/// Builds a [`Record`] from an ordered list of sources plus named entries.
///
/// Merge order is deterministic: sources are applied in the order they were
/// added, then named entries in the order they were added, last writer wins
/// per key. Named entries are the final merge stage, so they override source
/// entries with the same key regardless of the order builder calls were
/// made in.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    sources: Vec<Vec<(String, String)>>,
    named: Vec<(String, String)>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one positional source.
    ///
    /// The source's shape is validated here, not at [`build`](Self::build):
    /// a source that cannot yield key/value pairs fails immediately with
    /// [`RecordError::MalformedSource`] identifying its position.
    pub fn source<S: FieldSource>(mut self, source: S) -> Result<Self> {
        let index = self.sources.len();
        let fields = source
            .fields()
            .map_err(|reason| RecordError::MalformedSource { index, reason })?;
        trace!("source {} yielded {} fields", index, fields.len());
        self.sources.push(fields);
        Ok(self)
    }

    /// Appends one named entry, the highest-priority merge stage.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    /// Merges all sources and named entries into a record.
    ///
    /// # Errors
    /// Fails with [`RecordError::EmptyFieldName`] when any stage supplies an
    /// empty field name.
    pub fn build(self) -> Result<Record> {
        let mut slots = HashMap::new();

        for (index, fields) in self.sources.into_iter().enumerate() {
            for (name, value) in fields {
                if name.is_empty() {
                    return Err(RecordError::EmptyFieldName {
                        origin: format!("source {}", index),
                    });
                }
                slots.insert(name, value);
            }
        }

        for (name, value) in self.named {
            if name.is_empty() {
                return Err(RecordError::EmptyFieldName {
                    origin: "named entry".to_string(),
                });
            }
            slots.insert(name, value);
        }

        debug!("record built: {} fields", slots.len());
        Ok(Record::from_slots(slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_sources_override_earlier_ones() {
        let record = Record::builder()
            .source(vec![
                ("encoding".to_string(), "UTF-8".to_string()),
                ("title".to_string(), "first".to_string()),
            ])
            .expect("first source")
            .source(vec![("title".to_string(), "second".to_string())])
            .expect("second source")
            .build()
            .expect("build");

        assert_eq!(record.raw("title").expect("title"), "second");
        assert_eq!(record.raw("encoding").expect("encoding"), "UTF-8");
    }

    #[test]
    fn named_entries_win_regardless_of_call_order() {
        let record = Record::builder()
            .field("title", "named")
            .source(vec![("title".to_string(), "positional".to_string())])
            .expect("source")
            .build()
            .expect("build");

        assert_eq!(record.raw("title").expect("title"), "named");
    }

    #[test]
    fn empty_field_name_fails_with_origin() {
        let err = Record::builder()
            .source(vec![(String::new(), "value".to_string())])
            .expect("source shape is fine")
            .build()
            .expect_err("empty name must be rejected");

        match err {
            RecordError::EmptyFieldName { origin } => assert_eq!(origin, "source 0"),
            other => panic!("expected EmptyFieldName, got {:?}", other),
        }
    }

    #[test]
    fn empty_record_builds() {
        let record = Record::builder().build().expect("build");
        assert!(record.is_empty());
    }
}
