//! Display formatting for dates, prices and counts.

use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// `2024-06-15` renders as `Jun 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Bare integer amount with the currency symbol in front: no decimals, no
/// digit grouping.
pub fn format_price(symbol: &str, amount: u32) -> String {
    format!("{}{}", symbol, amount)
}

/// `1 trip`, `0 trips`, `2 trips`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Cut `text` to at most `max` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_en_us() {
        let date = NaiveDate::parse_from_str("2024-06-15", "%Y-%m-%d").unwrap();
        assert_eq!(format_date(date), "Jun 15, 2024");
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2025");
    }

    #[test]
    fn test_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 22).unwrap();
        assert_eq!(format_date_range(start, end), "Dec 15, 2024 - Dec 22, 2024");
    }

    #[test]
    fn test_format_price_has_no_grouping() {
        assert_eq!(format_price("$", 100), "$100");
        assert_eq!(format_price("$", 12500), "$12500");
        assert_eq!(format_price("₹", 0), "₹0");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "trip"), "0 trips");
        assert_eq!(pluralize(1, "trip"), "1 trip");
        assert_eq!(pluralize(2, "trip"), "2 trips");
        assert_eq!(pluralize(1, "guest"), "1 guest");
        assert_eq!(pluralize(10, "guest"), "10 guests");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Kuttralam", 20), "Kuttralam");
        assert_eq!(truncate_to_width("Manali, Himachal Pradesh", 10), "Manali, H…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
