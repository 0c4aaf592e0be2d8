use chrono::{FixedOffset, NaiveDate, Utc};

/// Calendar-date format used throughout the persisted document.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Today's calendar date in the given timezone, falling back to UTC when
/// the timezone string is unrecognized.
///
/// This is the presentation layer's clock: core computations never call
/// it and always take the date as a parameter.
pub fn today_in_timezone(timezone: &str) -> NaiveDate {
    match parse_utc_offset(timezone) {
        Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
        None => {
            tracing::debug!("Unknown timezone '{}', using UTC", timezone);
            Utc::now().date_naive()
        }
    }
}

/// Parses timezone strings of the form `UTC`, `UTC+3`, `UTC-05:30`,
/// `+03:00`, or `-7`.
pub fn parse_utc_offset(timezone: &str) -> Option<FixedOffset> {
    let tz = timezone.trim();
    if tz.is_empty() {
        return None;
    }
    if tz.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let rest = match tz.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("utc") => &tz[3..],
        _ => tz,
    };

    let (sign, digits) = match rest.as_bytes().first() {
        Some(b'+') => (1i32, &rest[1..]),
        Some(b'-') => (-1i32, &rest[1..]),
        _ => return None,
    };

    let (hours_str, minutes_str) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None => (digits, "0"),
    };

    let hours = parse_component(hours_str)?;
    let minutes = parse_component(minutes_str)?;
    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_component(input: &str) -> Option<i32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}
