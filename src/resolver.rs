use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ColorError, Result};

/// A single entry returned by the color service.
///
/// Fields are kept as raw JSON so that any of them can act as the lookup key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NameRecord(Map<String, Value>);

impl NameRecord {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        NameRecord(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

pub type NameLookupTable = Vec<NameRecord>;

/// Returns the name of the first record whose `key_field` matches `key`,
/// ignoring ASCII case.
pub fn resolve(key: &str, key_field: &str, table: &[NameRecord]) -> Result<String> {
    table
        .iter()
        .filter(|record| {
            record
                .field(key_field)
                .is_some_and(|value| value.eq_ignore_ascii_case(key))
        })
        .find_map(NameRecord::name)
        .map(String::from)
        .ok_or_else(|| ColorError::NotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hex: &str, name: &str) -> NameRecord {
        [("hex", hex), ("name", name)].into_iter().collect()
    }

    fn sample_table() -> NameLookupTable {
        vec![
            record("ffffff", "White"),
            record("000000", "Black"),
            record("ff0000", "Red"),
        ]
    }

    #[test]
    fn resolve_found() {
        let result = resolve("ffffff", "hex", &sample_table());
        assert_eq!(result.unwrap(), "White");
    }

    #[test]
    fn resolve_not_found() {
        let result = resolve("123456", "hex", &sample_table());
        assert!(matches!(result, Err(ColorError::NotFound(key)) if key == "123456"));
    }

    #[test]
    fn resolve_ignores_record_case() {
        let table = vec![record("FF0000", "Red")];
        assert_eq!(resolve("ff0000", "hex", &table).unwrap(), "Red");
    }

    #[test]
    fn resolve_first_match_wins() {
        let table = vec![record("00ffff", "Aqua"), record("00ffff", "Cyan")];
        assert_eq!(resolve("00ffff", "hex", &table).unwrap(), "Aqua");
    }

    #[test]
    fn resolve_uses_given_key_field() {
        let table: NameLookupTable = vec![
            [("hex", "ffffff"), ("rgb", "255,255,255"), ("name", "White")]
                .into_iter()
                .collect(),
        ];
        assert_eq!(resolve("255,255,255", "rgb", &table).unwrap(), "White");
        assert!(resolve("ffffff", "rgb", &table).is_err());
    }

    #[test]
    fn resolve_skips_incomplete_records() {
        let table: NameLookupTable = vec![
            [("name", "Nameless")].into_iter().collect(),
            [("hex", "000000")].into_iter().collect(),
            record("000000", "Black"),
        ];
        assert_eq!(resolve("000000", "hex", &table).unwrap(), "Black");
    }

    #[test]
    fn resolve_empty_table() {
        assert!(matches!(
            resolve("000000", "hex", &[]),
            Err(ColorError::NotFound(_))
        ));
    }
}
