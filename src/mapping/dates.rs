use crate::constants::{DAY_MONTH_YEAR_DATE_PATTERN, LETTER_MONTH_DATE_PATTERN, NO_DATE};
use crate::errors::{AppError, AppResult};
use crate::parser::ParsedRecord;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Cached regexes for the two repairable date shapes.
static LETTER_MONTH_REGEX: OnceLock<Regex> = OnceLock::new();
static DAY_MONTH_YEAR_REGEX: OnceLock<Regex> = OnceLock::new();

/// The malformed date shapes that get repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `Jun-17`: abbreviated month and two-digit year.
    LetterMonth,
    /// `21-01-1917`: day, month, four-digit year.
    DayMonthYear,
}

fn cached_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> AppResult<&'static Regex> {
    if let Some(re) = cell.get() {
        return Ok(re);
    }
    let re = Regex::new(pattern)?;
    Ok(cell.get_or_init(|| re))
}

/// Returns the malformed shape `raw` has, if any.
pub fn detect_shape(raw: &str) -> AppResult<Option<DateShape>> {
    if cached_regex(&LETTER_MONTH_REGEX, LETTER_MONTH_DATE_PATTERN)?.is_match(raw) {
        Ok(Some(DateShape::LetterMonth))
    } else if cached_regex(&DAY_MONTH_YEAR_REGEX, DAY_MONTH_YEAR_DATE_PATTERN)?.is_match(raw) {
        Ok(Some(DateShape::DayMonthYear))
    } else {
        Ok(None)
    }
}

/// Rewrites a date of a known malformed shape into `YYYY-MM` or `YYYY-MM-DD`.
///
/// Two-digit years always land in the 1900s: `Jan-00` is `1900-01` and
/// `Jan-62` is `1962-01`.
///
/// # Errors
///
/// Returns `DateFormatError` when `raw` has the shape but is not a calendar date
/// (`Xyz-99`, `32-13-1900`). The file name is left empty for the caller to fill.
pub fn normalize_date(raw: &str, shape: DateShape) -> AppResult<String> {
    let invalid = || AppError::DateFormatError {
        file: String::new(),
        raw: raw.to_string(),
    };

    match shape {
        DateShape::LetterMonth => {
            let date = NaiveDate::parse_from_str(&format!("01-{raw}"), "%d-%b-%y")
                .map_err(|_| invalid())?;
            let year = if date.year() > 1999 {
                date.year() - 100
            } else {
                date.year()
            };
            Ok(format!("{year:04}-{:02}", date.month()))
        }
        DateShape::DayMonthYear => NaiveDate::parse_from_str(raw, "%d-%m-%Y")
            .map(|date| date.format("%Y-%m-%d").to_string())
            .map_err(|_| invalid()),
    }
}

/// Repairs `raw` if it has a known malformed shape; anything else passes through.
pub fn repair_date(raw: &str) -> AppResult<String> {
    match detect_shape(raw)? {
        Some(shape) => normalize_date(raw, shape),
        None => Ok(raw.to_string()),
    }
}

/// The record's effective creation date: the first `dateIssued`, repaired,
/// or `n.d.` when there is none.
pub fn date_created(record: &ParsedRecord) -> AppResult<String> {
    match record.find_text("dateIssued").filter(|d| !d.is_empty()) {
        Some(raw) => repair_date(&raw),
        None => Ok(NO_DATE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_month_dates_map_to_1900s() {
        let cases = [
            ("Jan-20", "1920-01"),
            ("Jan-62", "1962-01"),
            ("Jan-00", "1900-01"),
            ("Dec-01", "1901-12"),
            ("Jun-17", "1917-06"),
            ("Aug-99", "1999-08"),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                normalize_date(raw, DateShape::LetterMonth).unwrap(),
                expected,
                "{raw}"
            );
        }
    }

    #[test]
    fn day_month_year_dates_are_reordered() {
        assert_eq!(
            normalize_date("30-01-1989", DateShape::DayMonthYear).unwrap(),
            "1989-01-30"
        );
        assert_eq!(
            normalize_date("21-01-1917", DateShape::DayMonthYear).unwrap(),
            "1917-01-21"
        );
    }

    #[test]
    fn shaped_but_invalid_dates_fail() {
        assert!(matches!(
            normalize_date("Xyz-99", DateShape::LetterMonth),
            Err(AppError::DateFormatError { raw, .. }) if raw == "Xyz-99"
        ));
        assert!(matches!(
            normalize_date("32-13-1900", DateShape::DayMonthYear),
            Err(AppError::DateFormatError { .. })
        ));
        assert!(repair_date("31-02-1950").is_err());
    }

    #[test]
    fn shape_detection() {
        assert_eq!(detect_shape("Jun-17").unwrap(), Some(DateShape::LetterMonth));
        assert_eq!(
            detect_shape("21-01-1917").unwrap(),
            Some(DateShape::DayMonthYear)
        );
        assert_eq!(detect_shape("JUN-17").unwrap(), None);
        assert_eq!(detect_shape("21-01-3017").unwrap(), None);
        assert_eq!(detect_shape("1-01-1917").unwrap(), None);
    }

    #[test]
    fn shape_regexes_are_compiled_once() {
        detect_shape("Jun-17").unwrap();
        detect_shape("21-01-1917").unwrap();
        let letter = LETTER_MONTH_REGEX.get().unwrap() as *const Regex;
        let numeric = DAY_MONTH_YEAR_REGEX.get().unwrap() as *const Regex;

        detect_shape("Dec-01").unwrap();
        detect_shape("30-01-1989").unwrap();
        assert!(std::ptr::eq(letter, LETTER_MONTH_REGEX.get().unwrap()));
        assert!(std::ptr::eq(numeric, DAY_MONTH_YEAR_REGEX.get().unwrap()));
    }

    #[test]
    fn well_formed_dates_pass_through_unchanged() {
        for raw in ["1917-06-21", "1917-06", "1917", "circa 1920", "n.d."] {
            assert_eq!(repair_date(raw).unwrap(), raw);
        }
    }

    #[test]
    fn date_created_defaults_to_no_date() {
        let record = ParsedRecord::parse("<mods><title>x</title></mods>").unwrap();
        assert_eq!(date_created(&record).unwrap(), "n.d.");

        let record =
            ParsedRecord::parse("<mods><originInfo><dateIssued> </dateIssued></originInfo></mods>")
                .unwrap();
        assert_eq!(date_created(&record).unwrap(), "n.d.");
    }

    #[test]
    fn date_created_uses_first_date_issued() {
        let xml = r#"<mods><originInfo>
  <dateIssued encoding="w3cdtf" keyDate="yes"> Jun-17 </dateIssued>
  <dateIssued point="end">1950</dateIssued>
</originInfo></mods>"#;
        let record = ParsedRecord::parse(xml).unwrap();
        assert_eq!(date_created(&record).unwrap(), "1917-06");
    }
}
