//! Field sources: anything that can yield ordered key/value pairs.

use std::collections::{BTreeMap, HashMap};

/// One positional construction source.
///
/// `fields` returns pairs in the source's own order. The error string
/// describes the shape problem; [`RecordBuilder`](super::RecordBuilder)
/// wraps it into [`RecordError::MalformedSource`](super::RecordError) with
/// the source's position attached.
pub trait FieldSource {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String>;
}

impl FieldSource for HashMap<String, String> {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String> {
        Ok(self.into_iter().collect())
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String> {
        Ok(self.into_iter().collect())
    }
}

impl FieldSource for Vec<(String, String)> {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String> {
        Ok(self)
    }
}

impl FieldSource for &[(&str, &str)] {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String> {
        Ok(self
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_slice_source_copies_pairs() {
        let pairs: &[(&str, &str)] = &[("a", "1"), ("b", "2")];
        let fields = pairs.fields().expect("slice source is always well formed");
        assert_eq!(
            fields,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn btree_source_yields_sorted_pairs() {
        let mut map = BTreeMap::new();
        map.insert("z".to_string(), "26".to_string());
        map.insert("a".to_string(), "1".to_string());
        let fields = map.fields().expect("map source is always well formed");
        assert_eq!(fields[0].0, "a");
        assert_eq!(fields[1].0, "z");
    }
}
