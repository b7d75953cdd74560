//! Publish-date normalization.
//!
//! Store pages render review dates in locale-variant forms such as
//! `发布于：8 月 15 日` or `Posted: 2023 年 1 月 2 日`. This module strips
//! the known prefixes and tries an ordered list of date patterns, producing
//! a canonical [`NaiveDate`].
//!
//! # Year completion
//!
//! Patterns without a year field are completed with the caller-supplied
//! `reference_year` (the year the pipeline runs in). Two reviews posted in
//! different years but sharing month/day text therefore collapse onto the
//! same normalized date. This is a known precision limitation of the source
//! data, not something this module tries to repair; no cross-year
//! disambiguation is attempted.

use crate::error::AppError;
use chrono::NaiveDate;
use chrono::format::{Parsed, StrftimeItems, parse};

/// Localized prefixes stripped before pattern matching.
const PREFIXES: [&str; 2] = ["发布于：", "Posted: "];

/// Ordered date patterns; the second field records whether the pattern
/// carries an explicit year.
const PATTERNS: [(&str, bool); 2] = [("%Y 年 %m 月 %d 日", true), ("%m 月 %d 日", false)];

/// Normalizes a raw publish-date string to a calendar date.
///
/// The first matching pattern wins. A pattern with an explicit 4-digit year
/// parses absolutely; a year-less pattern is completed with
/// `reference_year`.
///
/// # Errors
///
/// Returns [`AppError::DateFormat`] when no pattern matches the input.
/// Note that feeding this function its own ISO output (`2024-08-15`) is out
/// of contract: ISO strings match none of the localized patterns.
pub fn normalize_date(raw: &str, reference_year: i32) -> Result<NaiveDate, AppError> {
    let mut stripped = raw.trim();
    for prefix in PREFIXES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            stripped = rest.trim_start();
            break;
        }
    }

    for (pattern, has_year) in PATTERNS {
        let mut parsed = Parsed::new();
        if parse(&mut parsed, stripped, StrftimeItems::new(pattern)).is_err() {
            continue;
        }
        if !has_year && parsed.set_year(i64::from(reference_year)).is_err() {
            continue;
        }
        if let Ok(date) = parsed.to_naive_date() {
            return Ok(date);
        }
    }

    Err(AppError::date_format(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_localized_prefix_without_year() {
        let result = normalize_date("发布于：8 月 15 日", 2024);
        assert_eq!(result.unwrap(), date(2024, 8, 15));
    }

    #[test]
    fn test_normalize_english_prefix_without_year() {
        let result = normalize_date("Posted: 8 月 15 日", 2024);
        assert_eq!(result.unwrap(), date(2024, 8, 15));
    }

    #[test]
    fn test_normalize_explicit_year_wins_over_reference() {
        let result = normalize_date("2023 年 1 月 2 日", 2024);
        assert_eq!(result.unwrap(), date(2023, 1, 2));
    }

    #[test]
    fn test_normalize_prefixed_explicit_year() {
        let result = normalize_date("发布于：2022 年 12 月 31 日", 2024);
        assert_eq!(result.unwrap(), date(2022, 12, 31));
    }

    #[test]
    fn test_normalize_without_prefix() {
        let result = normalize_date("8 月 15 日", 2024);
        assert_eq!(result.unwrap(), date(2024, 8, 15));
    }

    #[test]
    fn test_normalize_surrounding_whitespace() {
        let result = normalize_date("  发布于：8 月 15 日  ", 2024);
        assert_eq!(result.unwrap(), date(2024, 8, 15));
    }

    #[test]
    fn test_normalize_single_digit_fields() {
        let result = normalize_date("1 月 2 日", 2024);
        assert_eq!(result.unwrap(), date(2024, 1, 2));
    }

    #[test]
    fn test_normalize_yearless_dates_collapse_onto_reference_year() {
        // Documented precision limitation: month/day-only dates from
        // different years land on the same normalized date.
        let a = normalize_date("发布于：12 月 30 日", 2024).unwrap();
        let b = normalize_date("12 月 30 日", 2024).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, date(2024, 12, 30));
    }

    #[test]
    fn test_normalize_iso_output_is_out_of_contract() {
        let result = normalize_date("2024-08-15", 2024);
        assert!(matches!(result, Err(AppError::DateFormat { .. })));
    }

    #[test]
    fn test_normalize_unrecognized_input() {
        let result = normalize_date("yesterday", 2024);
        assert!(matches!(result, Err(AppError::DateFormat { .. })));
    }

    #[test]
    fn test_normalize_empty_string() {
        let result = normalize_date("", 2024);
        assert!(matches!(result, Err(AppError::DateFormat { .. })));
    }

    #[test]
    fn test_normalize_invalid_calendar_day() {
        let result = normalize_date("2 月 30 日", 2024);
        assert!(matches!(result, Err(AppError::DateFormat { .. })));
    }

    #[test]
    fn test_normalize_leap_day_with_reference_year() {
        assert_eq!(
            normalize_date("2 月 29 日", 2024).unwrap(),
            date(2024, 2, 29)
        );
        assert!(normalize_date("2 月 29 日", 2023).is_err());
    }

    #[test]
    fn test_normalize_error_reports_original_input() {
        let err = normalize_date("发布于：someday", 2024).unwrap_err();
        assert!(err.to_string().contains("someday"));
    }
}
