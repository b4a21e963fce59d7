/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Year and month extraction.

use std::sync::LazyLock;

use regex::Regex;

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{4})(?:\D|$)").expect("year pattern is valid"));

static NUMERIC_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d{4}\s*[-/.]\s*(\d{1,2})(?:\D|$)").expect("month pattern is valid")
});

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The publication year and, when no year can be read, the raw date text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearInfo {
    pub year: Option<i32>,
    pub date_text: Option<String>,
}

/// Extract a year, trying a 4-digit run in the date-like field first, then
/// the year field. Unreadable text is kept for display.
pub fn extract_year(date: Option<&str>, year: Option<&str>) -> YearInfo {
    if let Some(y) = date.and_then(four_digit_year) {
        return YearInfo {
            year: Some(y),
            date_text: None,
        };
    }
    if let Some(y) = year.and_then(|y| y.trim().parse::<i32>().ok().or_else(|| four_digit_year(y)))
    {
        return YearInfo {
            year: Some(y),
            date_text: None,
        };
    }

    let date_text = date
        .or(year)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    YearInfo {
        year: None,
        date_text,
    }
}

fn four_digit_year(text: &str) -> Option<i32> {
    FOUR_DIGITS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Normalize a month to its three-letter English abbreviation.
///
/// Accepts numbers (`3`, `03`), English names or abbreviations (`March`,
/// `mar`), and falls back to the month of a `YYYY-MM` / `YYYY/MM` date.
pub fn normalize_month(month: Option<&str>, date: Option<&str>) -> Option<String> {
    month
        .and_then(month_from_text)
        .or_else(|| {
            date.and_then(|d| NUMERIC_MONTH.captures(d))
                .and_then(|caps| caps.get(1))
                .and_then(|m| month_from_text(m.as_str()))
        })
        .map(str::to_string)
}

fn month_from_text(text: &str) -> Option<&'static str> {
    let text = text.trim().trim_end_matches('.');
    if let Ok(n) = text.parse::<usize>() {
        return (1..=12).contains(&n).then(|| MONTHS[n - 1]);
    }
    if text.len() < 3 {
        return None;
    }
    let prefix = text.get(..3)?;
    MONTHS
        .iter()
        .find(|m| m.eq_ignore_ascii_case(prefix))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_date_field_first() {
        let info = extract_year(Some("2021/05/03/"), Some("2020"));
        assert_eq!(info.year, Some(2021));
    }

    #[test]
    fn test_year_from_numeric_field() {
        assert_eq!(extract_year(None, Some(" 2023 ")).year, Some(2023));
        assert_eq!(extract_year(None, Some("2023///")).year, Some(2023));
    }

    #[test]
    fn test_unreadable_year_is_kept_as_text() {
        let info = extract_year(None, Some("in press"));
        assert_eq!(
            info,
            YearInfo {
                year: None,
                date_text: Some("in press".to_string())
            }
        );
        assert_eq!(extract_year(None, None), YearInfo::default());
    }

    #[test]
    fn test_longer_digit_runs_are_not_years() {
        assert_eq!(extract_year(Some("20230315"), None).year, None);
    }

    #[test]
    fn test_month_forms() {
        assert_eq!(normalize_month(Some("3"), None).as_deref(), Some("Mar"));
        assert_eq!(normalize_month(Some("March"), None).as_deref(), Some("Mar"));
        assert_eq!(normalize_month(Some("sept."), None).as_deref(), Some("Sep"));
        assert_eq!(normalize_month(None, Some("2023-11-02")).as_deref(), Some("Nov"));
        assert_eq!(normalize_month(Some("13"), None), None);
        assert_eq!(normalize_month(Some("Spring"), None), None);
    }
}
