//! Derived datasets for charts and summary tables.
//!
//! Every report page follows the same pipeline over an in-memory record
//! set: bucket rows by a key, sum a measure, rank the buckets, and turn
//! values into shares of the total. The functions here are that
//! pipeline, normalized; pages only differ in the accessors and the
//! fallback label they pass in.

use std::collections::HashMap;

/// One group produced by [`group_and_sum`]: the bucket key and the
/// summed measure.
pub type GroupTotal = (String, f64);

/// Buckets `records` by `key_fn` and sums `value_fn` per bucket.
///
/// Groups keep the order in which their key was first encountered.
/// A `None` or empty key buckets the row under `fallback_label`, so
/// every row contributes to exactly one group and every distinct key
/// appears exactly once in the output.
pub fn group_and_sum<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> Option<String>,
    value_fn: impl Fn(&R) -> f64,
    fallback_label: &str,
) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = match key_fn(record) {
            Some(k) if !k.is_empty() => k,
            _ => fallback_label.to_string(),
        };
        let value = value_fn(record);
        match index.get(&key) {
            Some(&pos) => totals[pos].1 += value,
            None => {
                index.insert(key.clone(), totals.len());
                totals.push((key, value));
            }
        }
    }

    totals
}

/// Sorts groups by value descending and keeps the first `n`.
///
/// The sort is stable: groups with equal values stay in their
/// first-encountered order, which makes the result deterministic for a
/// given input ordering. Fewer than `n` groups are returned as-is.
pub fn top_n(groups: &[GroupTotal], n: usize) -> Vec<GroupTotal> {
    let mut sorted = groups.to_vec();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// Share of `value` in `total` as a percentage in `[0, 100]`.
///
/// A zero total yields 0 rather than dividing by zero, so empty record
/// sets render as 0% everywhere.
pub fn percent_of_total(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

/// Sum of all group values, for percentage denominators and totals rows.
pub fn sum_values(groups: &[GroupTotal]) -> f64 {
    groups.iter().map(|(_, v)| v).sum()
}

/// Distinct non-empty key values, in first-encountered order.
///
/// Used for filter dropdowns and for series enumeration (document
/// types, operation centers).
pub fn distinct_values<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> Option<String>,
) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if let Some(key) = key_fn(record) {
            if !key.is_empty() && !seen.iter().any(|k| k == &key) {
                seen.push(key);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sale {
        vendor: &'static str,
        amount: f64,
    }

    fn sales() -> Vec<Sale> {
        vec![
            Sale { vendor: "A", amount: 10.0 },
            Sale { vendor: "A", amount: 5.0 },
            Sale { vendor: "B", amount: 3.0 },
        ]
    }

    #[test]
    fn group_and_sum_sums_per_key() {
        let grouped = group_and_sum(
            &sales(),
            |s| Some(s.vendor.to_string()),
            |s| s.amount,
            "Sin Vendedor",
        );
        assert_eq!(grouped, vec![("A".to_string(), 15.0), ("B".to_string(), 3.0)]);
    }

    #[test]
    fn group_and_sum_uses_fallback_for_empty_keys() {
        let rows = vec![
            Sale { vendor: "", amount: 2.0 },
            Sale { vendor: "A", amount: 1.0 },
            Sale { vendor: "", amount: 4.0 },
        ];
        let grouped = group_and_sum(
            &rows,
            |s| Some(s.vendor.to_string()),
            |s| s.amount,
            "Sin Vendedor",
        );
        assert_eq!(
            grouped,
            vec![("Sin Vendedor".to_string(), 6.0), ("A".to_string(), 1.0)]
        );
    }

    #[test]
    fn group_and_sum_is_idempotent_over_immutable_input() {
        let rows = sales();
        let first = group_and_sum(&rows, |s| Some(s.vendor.into()), |s| s.amount, "X");
        let second = group_and_sum(&rows, |s| Some(s.vendor.into()), |s| s.amount, "X");
        assert_eq!(first, second);
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let groups = vec![
            ("A".to_string(), 15.0),
            ("B".to_string(), 3.0),
            ("C".to_string(), 40.0),
        ];
        let top = top_n(&groups, 2);
        assert_eq!(top, vec![("C".to_string(), 40.0), ("A".to_string(), 15.0)]);
    }

    #[test]
    fn top_n_keeps_first_encountered_order_on_ties() {
        let groups = vec![
            ("first".to_string(), 5.0),
            ("second".to_string(), 5.0),
            ("third".to_string(), 5.0),
        ];
        let top = top_n(&groups, 3);
        assert_eq!(top[0].0, "first");
        assert_eq!(top[1].0, "second");
        assert_eq!(top[2].0, "third");
    }

    #[test]
    fn top_n_returns_all_when_fewer_than_n() {
        let groups = vec![("A".to_string(), 1.0)];
        assert_eq!(top_n(&groups, 10).len(), 1);
    }

    #[test]
    fn percent_of_total_basic_and_zero_total() {
        assert_eq!(percent_of_total(25.0, 100.0), 25.0);
        assert_eq!(percent_of_total(123.0, 0.0), 0.0);
        assert_eq!(percent_of_total(0.0, 0.0), 0.0);
    }

    #[test]
    fn distinct_values_skips_empty_and_dedupes() {
        let rows = vec![
            Sale { vendor: "A", amount: 0.0 },
            Sale { vendor: "", amount: 0.0 },
            Sale { vendor: "B", amount: 0.0 },
            Sale { vendor: "A", amount: 0.0 },
        ];
        let values = distinct_values(&rows, |s| Some(s.vendor.to_string()));
        assert_eq!(values, vec!["A".to_string(), "B".to_string()]);
    }
}
