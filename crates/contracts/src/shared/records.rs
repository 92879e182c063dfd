//! Flexible-shape records returned by the reporting endpoints.
//!
//! Invoice and financial-statement rows have no fixed schema: the field
//! set is only known once the data arrives. Rows are modeled as an
//! insertion-ordered mapping from field name to a scalar value, so the
//! first record of a collection can define the display columns
//! deterministically.

use std::fmt;

use anyhow::{bail, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Scalar value of a single record field.
///
/// Only JSON scalars are representable; nested arrays/objects are not
/// valid cell values and are rejected at the fetch boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric view of the value. Non-numeric values yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn from_json(value: serde_json::Value) -> Result<FieldValue> {
        match value {
            serde_json::Value::Null => Ok(FieldValue::Null),
            serde_json::Value::Bool(b) => Ok(FieldValue::Bool(b)),
            serde_json::Value::Number(n) => {
                Ok(FieldValue::Number(n.as_f64().unwrap_or(0.0)))
            }
            serde_json::Value::String(s) => Ok(FieldValue::Text(s)),
            other => bail!("record field must be a scalar, got: {}", other),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// One flexible-shape data row.
///
/// Field order matches the order the keys had in the JSON document.
/// Within one collection all records are assumed to share the same
/// field set; the first record's keys define the schema for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, keeping the original position when the key already
    /// exists (last value wins, like JSON object parsing).
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text of a field, falling back when the field is missing, null or
    /// an empty string (the `row['Vendedor'] || fallback` idiom of the
    /// report pages).
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.get(key) {
            Some(FieldValue::Text(s)) if !s.is_empty() => s,
            _ => fallback,
        }
    }

    /// Numeric value of a field; missing or non-numeric counts as 0.
    pub fn number_or_zero(&self, key: &str) -> f64 {
        self.get(key).and_then(FieldValue::as_number).unwrap_or(0.0)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            match value {
                FieldValue::Null => map.serialize_entry(key, &())?,
                FieldValue::Bool(b) => map.serialize_entry(key, b)?,
                FieldValue::Number(n) => map.serialize_entry(key, n)?,
                FieldValue::Text(s) => map.serialize_entry(key, s)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object with scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((key, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    let value =
                        FieldValue::from_json(value).map_err(serde::de::Error::custom)?;
                    record.insert(key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Converts a raw JSON payload into records.
///
/// This is the precondition gate for the aggregation pipeline: the
/// payload must be an array of objects with scalar fields. Anything
/// else is a malformed response and surfaces as an error here, before
/// any derived view is computed.
pub fn records_from_json(value: serde_json::Value) -> Result<Vec<Record>> {
    let serde_json::Value::Array(items) = value else {
        bail!("expected a JSON array of records");
    };
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let serde_json::Value::Object(map) = item else {
            bail!("expected every record to be a JSON object");
        };
        let mut record = Record::new();
        for (key, value) in map {
            record.insert(key, FieldValue::from_json(value)?);
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_key_order() {
        let json = r#"{"Vendedor":"ANA","Vlr. Neto documento":1500.5,"Compania":1,"Nota":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(
            keys,
            vec!["Vendedor", "Vlr. Neto documento", "Compania", "Nota"]
        );
        assert_eq!(record.get("Vendedor"), Some(&FieldValue::Text("ANA".into())));
        assert_eq!(record.number_or_zero("Vlr. Neto documento"), 1500.5);
        assert!(record.get("Nota").unwrap().is_null());
    }

    #[test]
    fn text_or_falls_back_on_missing_null_and_empty() {
        let json = r#"{"a":"","b":null,"c":"valor"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.text_or("a", "Sin Vendedor"), "Sin Vendedor");
        assert_eq!(record.text_or("b", "Sin Vendedor"), "Sin Vendedor");
        assert_eq!(record.text_or("d", "Sin Vendedor"), "Sin Vendedor");
        assert_eq!(record.text_or("c", "Sin Vendedor"), "valor");
    }

    #[test]
    fn number_or_zero_treats_non_numeric_as_zero() {
        let json = r#"{"n":12,"s":"12","x":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.number_or_zero("n"), 12.0);
        assert_eq!(record.number_or_zero("s"), 0.0);
        assert_eq!(record.number_or_zero("x"), 0.0);
        assert_eq!(record.number_or_zero("missing"), 0.0);
    }

    #[test]
    fn records_from_json_rejects_non_array() {
        assert!(records_from_json(serde_json::json!({"a": 1})).is_err());
        assert!(records_from_json(serde_json::json!([[1, 2]])).is_err());
        assert!(records_from_json(serde_json::json!([{"a": [1]}])).is_err());
    }

    #[test]
    fn records_from_json_accepts_scalar_objects() {
        let records =
            records_from_json(serde_json::json!([{"a": 1, "b": "x"}, {"a": 2, "b": null}]))
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number_or_zero("a"), 1.0);
    }

    #[test]
    fn roundtrip_preserves_order_and_values() {
        let json = r#"{"z":1.0,"a":"x","m":true}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let back = serde_json::to_string(&record).unwrap();
        let again: Record = serde_json::from_str(&back).unwrap();
        assert_eq!(record, again);
    }
}
