// src/utils/format.rs - Display formatting for amounts, dates and ratios

use chrono::{DateTime, Utc};

/// Formats a monetary amount the way the backend's users read it: `R$ 1.234,56`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}R$ {},{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

/// One decimal place, e.g. `9.1%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Shortens long identifiers for table cells (`3f2a9c1e…`)
pub fn short_id(id: &str) -> String {
    const KEEP: usize = 8;
    if id.chars().count() <= KEEP {
        id.to_string()
    } else {
        let head: String = id.chars().take(KEEP).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(5.5), "R$ 5,50");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(-42.1), "-R$ 42,10");
    }

    #[test]
    fn test_datetime_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_datetime(&ts), "07/03/2024 09:05");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("3f2a9c1e-aaaa-bbbb"), "3f2a9c1e…");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(9.0909), "9.1%");
    }
}
