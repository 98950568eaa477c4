//! Date handling for content dates.
//!
//! Content files carry dates as free-form strings. Everything here is
//! lenient: an unparseable date never errors, it just ranks last or renders
//! unchanged.

use chrono::{DateTime, Datelike, NaiveDate};
use std::cmp::Ordering;

/// Parse `YYYY-MM-DD`, `YYYY-MM`, `YYYY` or an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    let mut parts = value.splitn(2, '-');
    let year = parts.next()?;
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) if m.len() == 2 => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Order two date strings newest first; unparseable dates go last.
pub fn compare_newest_first(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Long month and year, e.g. `January 2024`.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%B %Y").to_string(),
        None => value.to_string(),
    }
}

/// Month-granular duration between two dates, e.g. `1 year 2 months`.
///
/// `end = None` means "until `today`". Returns `None` when either date does
/// not parse. Negative spans clamp to zero months.
pub fn calculate_duration(start: &str, end: Option<&str>, today: NaiveDate) -> Option<String> {
    let start = parse_date(start)?;
    let end = match end {
        Some(value) => parse_date(value)?,
        None => today,
    };

    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    let months = months.max(0);

    if months < 12 {
        return Some(plural(months, "month"));
    }

    let years = months / 12;
    let remaining = months % 12;
    if remaining == 0 {
        Some(plural(years, "year"))
    } else {
        Some(format!(
            "{} {}",
            plural(years, "year"),
            plural(remaining, "month")
        ))
    }
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// New list sorted by the date `key` returns, newest first.
pub fn sort_by_date<T, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_newest_first(key(a), key(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_date("2024-06-01"), Some(day(2024, 6, 1)));
        assert_eq!(parse_date("2024-06"), Some(day(2024, 6, 1)));
        assert_eq!(parse_date("2024"), Some(day(2024, 1, 1)));
        assert_eq!(
            parse_date("2024-06-01T10:30:00Z"),
            Some(day(2024, 6, 1))
        );
        assert_eq!(parse_date(" 2024-06-01 "), Some(day(2024, 6, 1)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("24-01"), None);
    }

    #[test]
    fn newest_first_puts_unparseable_last() {
        assert_eq!(
            compare_newest_first("2024-06-01", "2024-01-01"),
            Ordering::Less
        );
        assert_eq!(
            compare_newest_first("not a date", "2020-01-01"),
            Ordering::Greater
        );
        assert_eq!(compare_newest_first("???", "!!!"), Ordering::Equal);
    }

    #[test]
    fn formats_long_month() {
        assert_eq!(format_date("2024-01-15"), "January 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn duration_rendering() {
        let today = day(2025, 1, 1);
        assert_eq!(
            calculate_duration("2023-01-01", Some("2024-03-01"), today).as_deref(),
            Some("1 year 2 months")
        );
        assert_eq!(
            calculate_duration("2023-01-01", Some("2023-02-01"), today).as_deref(),
            Some("1 month")
        );
        assert_eq!(
            calculate_duration("2023-01-01", Some("2023-01-20"), today).as_deref(),
            Some("0 months")
        );
        assert_eq!(
            calculate_duration("2021-05-01", Some("2023-05-01"), today).as_deref(),
            Some("2 years")
        );
        assert_eq!(
            calculate_duration("2023-12-01", Some("2025-01-01"), today).as_deref(),
            Some("1 year 1 month")
        );
    }

    #[test]
    fn duration_without_end_runs_to_today() {
        let today = day(2024, 9, 10);
        assert_eq!(
            calculate_duration("2024-03-01", None, today).as_deref(),
            Some("6 months")
        );
    }

    #[test]
    fn duration_is_none_for_bad_dates_and_clamps_negative() {
        let today = day(2024, 1, 1);
        assert_eq!(calculate_duration("whenever", None, today), None);
        assert_eq!(calculate_duration("2024-01-01", Some("later"), today), None);
        assert_eq!(
            calculate_duration("2024-05-01", Some("2024-01-01"), today).as_deref(),
            Some("0 months")
        );
    }

    #[test]
    fn sort_by_date_is_newest_first() {
        let items = vec![
            ("a", "2022-01-01"),
            ("b", "bogus"),
            ("c", "2024-01-01"),
        ];
        let sorted = sort_by_date(&items, |item| item.1);
        let ids: Vec<&str> = sorted.iter().map(|item| item.0).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
