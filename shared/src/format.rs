//! Display formatting for prices, dates and signatures

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY: &str = "USDC";

/// "45.50 USDC"
pub fn format_currency(value: Decimal) -> String {
    format_amount(value, DEFAULT_CURRENCY)
}

pub fn format_amount(value: Decimal, currency: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2} {currency}")
}

/// "Oct 29, 2025"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Oct 31, 2025, 02:00 PM UTC"
pub fn format_date_time(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %I:%M %p UTC").to_string()
}

/// "14:40 UTC"
pub fn format_time_utc(date: DateTime<Utc>) -> String {
    date.format("%H:%M UTC").to_string()
}

/// Countdown label for an auction end relative to `now`
pub fn time_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = end - now;
    if diff <= chrono::Duration::zero() {
        return "Ended".to_string();
    }

    let days = diff.num_days();
    let hours = diff.num_hours() % 24;
    let minutes = diff.num_minutes() % 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Keep `start` leading and `end` trailing characters, e.g. "5J7k...3Nm9"
pub fn shorten_signature(signature: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = signature.chars().collect();
    if chars.len() <= start + end {
        return signature.to_string();
    }
    let head: String = chars[..start].iter().collect();
    let tail: String = chars[chars.len() - end..].iter().collect();
    format!("{head}...{tail}")
}

/// "30s ago", "15m ago", "3h ago"
pub fn relative_age(secs: u64) -> String {
    match secs {
        0..=59 => format!("{secs}s ago"),
        60..=3599 => format!("{}m ago", secs / 60),
        _ => format!("{}h ago", secs / 3600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(455, 1)), "45.50 USDC");
        assert_eq!(format_currency(Decimal::new(1250505, 3)), "1250.51 USDC");
        assert_eq!(format_currency(Decimal::ZERO), "0.00 USDC");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_date(at(29, 0, 0)), "Oct 29, 2025");
        assert_eq!(format_date(at(5, 0, 0)), "Oct 5, 2025");
        assert_eq!(format_date_time(at(31, 14, 0)), "Oct 31, 2025, 02:00 PM UTC");
        assert_eq!(format_time_utc(at(30, 14, 40)), "14:40 UTC");
    }

    #[test]
    fn test_time_remaining() {
        let now = at(29, 12, 0);
        assert_eq!(time_remaining(at(29, 12, 0), now), "Ended");
        assert_eq!(time_remaining(at(28, 12, 0), now), "Ended");
        assert_eq!(time_remaining(at(31, 14, 0), now), "2d 2h");
        assert_eq!(time_remaining(at(29, 15, 30), now), "3h 30m");
        assert_eq!(time_remaining(at(29, 12, 45), now), "45m");
    }

    #[test]
    fn test_shorten_signature() {
        assert_eq!(shorten_signature("5J7kQz8vXa3Nm9", 4, 4), "5J7k...3Nm9");
        assert_eq!(shorten_signature("5J7k3Nm9", 4, 4), "5J7k3Nm9");
        assert_eq!(shorten_signature("abc", 4, 4), "abc");
    }

    #[test]
    fn test_relative_age() {
        assert_eq!(relative_age(30), "30s ago");
        assert_eq!(relative_age(900), "15m ago");
        assert_eq!(relative_age(7200), "2h ago");
    }
}
