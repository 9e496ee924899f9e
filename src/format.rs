//! Display formatting helpers shared by timers, invoices and quotations

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

lazy_static::lazy_static! {
    static ref UTC_OFFSET_SUFFIX: Regex = Regex::new(r"[+-]\d{2}:\d{2}$").unwrap();
}

/// Currency codes offered in quotation and invoice forms
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "INR", "JPY", "AUD", "CAD", "CNY"];

/// Format seconds as HH:MM:SS.
///
/// Hours are not wrapped at 24, so `format_duration(90000)` is `"25:00:00"`.
pub fn format_duration(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hrs, mins, secs)
}

/// Symbol for a currency code; unknown codes are returned unchanged.
pub fn get_currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "JPY" => "¥",
        "AUD" => "A$",
        "CAD" => "C$",
        "CNY" => "¥",
        _ => currency,
    }
}

/// Parse a backend timestamp as UTC.
///
/// The backend stores UTC but may omit the `Z` suffix; such timestamps are
/// treated as UTC rather than local time. Unparseable input yields the
/// current time, matching how the UI treats a missing start time.
pub fn parse_as_utc(date_string: &str) -> DateTime<Utc> {
    let trimmed = date_string.trim();
    if trimmed.is_empty() {
        return Utc::now();
    }

    let normalized = if trimmed.ends_with('Z') || UTC_OFFSET_SUFFIX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}Z", trimmed)
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return parsed.with_timezone(&Utc);
    }

    // Date-times with a space separator, e.g. "2026-01-01 10:00:00"
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        Ok(naive) => naive.and_utc(),
        Err(e) => {
            tracing::warn!("Unparseable timestamp {:?}: {}", date_string, e);
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(90000), "25:00:00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(get_currency_symbol("USD"), "$");
        assert_eq!(get_currency_symbol("EUR"), "€");
        assert_eq!(get_currency_symbol("INR"), "₹");
        assert_eq!(get_currency_symbol("CNY"), "¥");
        assert_eq!(get_currency_symbol("XYZ"), "XYZ");
        for code in CURRENCIES {
            assert_ne!(get_currency_symbol(code), *code);
        }
    }

    #[test]
    fn test_parse_as_utc_without_suffix() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_as_utc("2026-03-01T10:00:00"), expected);
        assert_eq!(parse_as_utc("2026-03-01T10:00:00Z"), expected);
        assert_eq!(parse_as_utc("2026-03-01T12:00:00+02:00"), expected);
        assert_eq!(parse_as_utc("2026-03-01 10:00:00"), expected);
    }

    #[test]
    fn test_parse_as_utc_fractional_seconds() {
        let parsed = parse_as_utc("2026-03-01T10:00:00.250");
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }
}
