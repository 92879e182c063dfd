//! Value formatting for tables and cards (es-CO conventions).
//!
//! Currency renders as whole pesos with dot thousand separators, dates
//! render from the literal `YYYY-MM-DD` prefix to avoid the timezone
//! shift a midnight-UTC timestamp would get in UTC-5, and anything
//! missing renders as "N/A".

use chrono::{DateTime, NaiveDate, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Groups an integer with dot separators: `1234567` -> `"1.234.567"`.
pub fn group_thousands(n: i64) -> String {
    let grouped = group_digits(&n.abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

/// Whole-peso currency: `1234567.0` -> `"$ 1.234.567"`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("$ {}", group_thousands(v.round() as i64)),
        _ => "N/A".to_string(),
    }
}

/// Plain number with dot thousand separators and comma decimals.
pub fn format_number(value: Option<f64>, decimals: u8) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };
    if decimals == 0 {
        return group_thousands(v.round() as i64);
    }
    let formatted = format!("{:.prec$}", v, prec = decimals as usize);
    let sign = if formatted.starts_with('-') { "-" } else { "" };
    let digits = formatted.trim_start_matches('-');
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    format!("{}{},{}", sign, group_digits(int_part), frac_part)
}

/// Percentage with one decimal: `12.34` -> `"12,3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

/// Date from the literal `YYYY-MM-DD` prefix of a service date string.
///
/// `"2026-01-29T00:00:00.000Z"` -> `"29 ene 2026"`. The time and zone
/// suffix are ignored on purpose: converting would move midnight dates
/// to the previous day in UTC-5.
pub fn format_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return "N/A".to_string();
    }
    parse_date_prefix(date_str)
        .map(|(year, month, day)| {
            format!("{} {} {}", day, MONTH_NAMES[month as usize - 1], year)
        })
        .unwrap_or_else(|| "Fecha inválida".to_string())
}

fn parse_date_prefix(date_str: &str) -> Option<(i32, u32, u32)> {
    let prefix = date_str.get(..10)?;
    let mut parts = prefix.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    // Validates the calendar date (rejects 2024-02-31 and friends).
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some((year, month, day))
}

/// Period label for the YYYYMM convention: `202401` -> `"Ene 2024"`.
pub fn format_periodo(periodo: u32) -> String {
    let year = periodo / 100;
    let month = periodo % 100;
    if (1..=12).contains(&month) {
        let name = MONTH_NAMES[month as usize - 1];
        format!("{}{} {}", name[..1].to_uppercase(), &name[1..], year)
    } else {
        periodo.to_string()
    }
}

/// "HH:00" bucket of an ISO timestamp, for per-hour evolution charts.
pub fn hour_bucket(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| format!("{:02}:00", dt.hour()))
}

/// Truncates long labels with an ellipsis (vendor names on charts).
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234567), "1.234.567");
        assert_eq!(group_thousands(-1234), "-1.234");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234567.4)), "$ 1.234.567");
        assert_eq!(format_currency(Some(-500.0)), "$ -500");
        assert_eq!(format_currency(None), "N/A");
        assert_eq!(format_currency(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(1234.0), 0), "1.234");
        assert_eq!(format_number(Some(1234.567), 2), "1.234,57");
        assert_eq!(format_number(None, 2), "N/A");
    }

    #[test]
    fn test_format_date_ignores_time_suffix() {
        assert_eq!(format_date("2026-01-29T00:00:00.000Z"), "29 ene 2026");
        assert_eq!(format_date("2024-12-31"), "31 dic 2024");
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("no-es-fecha"), "Fecha inválida");
        assert_eq!(format_date("2024-02-31"), "Fecha inválida");
    }

    #[test]
    fn test_format_periodo() {
        assert_eq!(format_periodo(202401), "Ene 2024");
        assert_eq!(format_periodo(202512), "Dic 2025");
        assert_eq!(format_periodo(202499), "202499");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 25), "corto");
        assert_eq!(
            truncate("DISTRIBUIDORA NACIONAL DE ALIMENTOS SAS", 25),
            "DISTRIBUIDORA NACIONAL DE..."
        );
    }

    #[test]
    fn test_hour_bucket() {
        assert_eq!(
            hour_bucket("2024-05-10T14:23:45.000Z").as_deref(),
            Some("14:00")
        );
        assert_eq!(
            hour_bucket("2024-05-10T09:00:00+00:00").as_deref(),
            Some("09:00")
        );
        assert_eq!(hour_bucket(""), None);
        assert_eq!(hour_bucket("ayer"), None);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25,0%");
        assert_eq!(format_percent(33.333), "33,3%");
    }
}
