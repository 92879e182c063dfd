//! Display-column derivation for flexible-shape tables.
//!
//! Invoice and financial-statement tables do not know their columns
//! until data arrives: the first record's keys define the column set.
//! A column is either a direct field or a synthesized display value
//! combining several fields, with sorting defined on one designated
//! underlying field.

use std::cmp::Ordering;

use super::records::{FieldValue, Record};

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// Renders the record field named by the column id.
    Field,
    /// Renders several underlying fields joined by a separator.
    /// Sorting compares `sort_field`, not the synthesized string.
    Combined {
        parts: Vec<String>,
        separator: String,
        sort_field: String,
    },
}

/// One display column of a dynamic table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn field(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ColumnKind::Field,
        }
    }

    pub fn combined(
        id: impl Into<String>,
        parts: &[&str],
        separator: &str,
        sort_field: &str,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ColumnKind::Combined {
                parts: parts.iter().map(|p| p.to_string()).collect(),
                separator: separator.to_string(),
                sort_field: sort_field.to_string(),
            },
        }
    }
}

/// Derives the column set from the first record's keys.
///
/// Keys listed in `prefix` (and present in the record) come first, in
/// `prefix` order; the remaining keys follow in their insertion order;
/// keys in `excluded` are dropped entirely. An empty record set yields
/// an empty column set.
pub fn infer_columns(records: &[Record], excluded: &[&str], prefix: &[&str]) -> Vec<Column> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let keys: Vec<&str> = first
        .keys()
        .filter(|k| !excluded.contains(k))
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(keys.len());
    for p in prefix {
        if keys.contains(p) {
            columns.push(Column::field(*p));
        }
    }
    for key in keys {
        if !prefix.contains(&key) {
            columns.push(Column::field(key));
        }
    }
    columns
}

/// Cell text for `column` in `record`.
pub fn display_value(record: &Record, column: &Column) -> String {
    match &column.kind {
        ColumnKind::Field => record
            .get(&column.id)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        ColumnKind::Combined {
            parts, separator, ..
        } => {
            let rendered: Vec<String> = parts
                .iter()
                .map(|p| {
                    record
                        .get(p)
                        .map(|v| v.to_string().trim().to_string())
                        .unwrap_or_default()
                })
                .filter(|s| !s.is_empty())
                .collect();
            rendered.join(separator)
        }
    }
}

/// Orders two records under `column`.
///
/// Field columns compare their values directly; combined columns
/// compare the designated sort field only, so an account list sorts by
/// account code even though it displays "code - name".
pub fn compare_records(a: &Record, b: &Record, column: &Column) -> Ordering {
    match &column.kind {
        ColumnKind::Field => cmp_values(a.get(&column.id), b.get(&column.id)),
        ColumnKind::Combined { sort_field, .. } => {
            cmp_values(a.get(sort_field), b.get(sort_field))
        }
    }
}

fn cmp_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => {
            x.trim().cmp(y.trim())
        }
        (Some(FieldValue::Bool(x)), Some(FieldValue::Bool(y))) => x.cmp(y),
        (a, b) => rank(a).cmp(&rank(b)),
    }
}

// Mixed-type ordering: absent/null sorts first, text last.
fn rank(value: Option<&FieldValue>) -> u8 {
    match value {
        None | Some(FieldValue::Null) => 0,
        Some(FieldValue::Bool(_)) => 1,
        Some(FieldValue::Number(_)) => 2,
        Some(FieldValue::Text(_)) => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn infer_columns_empty_input_gives_empty_set() {
        assert!(infer_columns(&[], &[], &[]).is_empty());
    }

    #[test]
    fn infer_columns_excludes_and_prefixes() {
        let records = vec![record(r#"{"a":1,"b":2,"c":3}"#)];
        let columns = infer_columns(&records, &["b"], &["c"]);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn infer_columns_keeps_insertion_order() {
        let records = vec![record(r#"{"z":1,"a":2,"m":3}"#)];
        let columns = infer_columns(&records, &[], &[]);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn infer_columns_ignores_prefix_keys_missing_from_record() {
        let records = vec![record(r#"{"a":1}"#)];
        let columns = infer_columns(&records, &[], &["nope", "a"]);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn combined_column_renders_parts_and_skips_blanks() {
        let column = Column::combined(
            "Cuenta",
            &["Código Cuenta", "Nombre de la Cuenta"],
            " - ",
            "Código Cuenta",
        );
        let r = record(r#"{"Código Cuenta":"1105 ","Nombre de la Cuenta":"Caja"}"#);
        assert_eq!(display_value(&r, &column), "1105 - Caja");

        let partial = record(r#"{"Código Cuenta":"1105","Nombre de la Cuenta":""}"#);
        assert_eq!(display_value(&partial, &column), "1105");
    }

    #[test]
    fn combined_column_sorts_on_underlying_field() {
        let column = Column::combined(
            "Cuenta",
            &["Código Cuenta", "Nombre de la Cuenta"],
            " - ",
            "Código Cuenta",
        );
        let a = record(r#"{"Código Cuenta":"1105","Nombre de la Cuenta":"Zulia"}"#);
        let b = record(r#"{"Código Cuenta":"2205","Nombre de la Cuenta":"Andes"}"#);
        // Display order would put "1105 - Zulia" after "2205 - Andes"
        // only if the synthesized string were compared; the code wins.
        assert_eq!(compare_records(&a, &b, &column), Ordering::Less);
    }

    #[test]
    fn field_column_compares_numbers_numerically() {
        let column = Column::field("Total");
        let a = record(r#"{"Total":9}"#);
        let b = record(r#"{"Total":10}"#);
        assert_eq!(compare_records(&a, &b, &column), Ordering::Less);
    }

    #[test]
    fn null_sorts_before_values() {
        let column = Column::field("x");
        let a = record(r#"{"x":null}"#);
        let b = record(r#"{"x":"abc"}"#);
        assert_eq!(compare_records(&a, &b, &column), Ordering::Less);
    }
}
