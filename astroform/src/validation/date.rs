//! Date-of-birth validation.

use std::sync::LazyLock;

use chrono::{Datelike, Local, Months, NaiveDate};
use log::trace;
use regex::{Captures, Regex};
use thiserror::Error;

/// Oldest plausible age, in years.
pub const DEFAULT_MAX_AGE_YEARS: u32 = 120;

/// Two-digit years below this belong to the 2000s, the rest to the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Please enter a date of birth")]
    Empty,

    #[error("Please enter a valid date format (e.g., 15-05-1990, 1990-05-15, 15/05/1990)")]
    UnknownFormat,

    /// The shape matched but a component could not be read as a number.
    #[error("Please enter a valid date format")]
    Unparseable,

    #[error("Please enter a valid date (e.g., 15-05-1990)")]
    NoSuchDate,

    #[error("Date of birth cannot be in the future")]
    InFuture,

    #[error("Please enter a reasonable date of birth")]
    Implausible,
}

#[derive(Debug, Clone, Copy)]
enum Order {
    YearMonthDay,
    DayMonthYear,
}

struct Shape {
    pattern: Regex,
    order: Order,
}

impl Shape {
    fn new(pattern: &str, order: Order) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid date shape pattern"),
            order,
        }
    }
}

static SHAPES: LazyLock<[Shape; 6]> = LazyLock::new(|| {
    [
        Shape::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$", Order::YearMonthDay),
        Shape::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$", Order::DayMonthYear),
        Shape::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$", Order::DayMonthYear),
        Shape::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$", Order::YearMonthDay),
        Shape::new(r"^(\d{1,2})-(\d{1,2})-(\d{2})$", Order::DayMonthYear),
        Shape::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$", Order::DayMonthYear),
    ]
});

/// Raw components as written, before any calendar check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Components {
    year: i32,
    month: u32,
    day: u32,
}

fn expand_year(digits: &str, year: i32) -> i32 {
    if digits.len() != 2 {
        return year;
    }
    if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> Result<&'h str, DateError> {
    caps.get(index)
        .map(|m| m.as_str())
        .ok_or(DateError::Unparseable)
}

// `\d` also matches non-ASCII digits, which do not parse.
fn number(digits: &str) -> Result<u32, DateError> {
    digits.parse().map_err(|_| DateError::Unparseable)
}

fn split(compact: &str) -> Result<Components, DateError> {
    let (shape, caps) = SHAPES
        .iter()
        .find_map(|shape| shape.pattern.captures(compact).map(|caps| (shape, caps)))
        .ok_or(DateError::UnknownFormat)?;

    let (y, m, d) = match shape.order {
        Order::YearMonthDay => (group(&caps, 1)?, group(&caps, 2)?, group(&caps, 3)?),
        Order::DayMonthYear => (group(&caps, 3)?, group(&caps, 2)?, group(&caps, 1)?),
    };

    let year = i32::try_from(number(y)?).map_err(|_| DateError::Unparseable)?;

    Ok(Components {
        year: expand_year(y, year),
        month: number(m)?,
        day: number(d)?,
    })
}

/// Rules for a plausible date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRules {
    /// Dates more than this many years before today are rejected.
    pub max_age_years: u32,
}

impl Default for DateRules {
    fn default() -> Self {
        Self {
            max_age_years: DEFAULT_MAX_AGE_YEARS,
        }
    }
}

impl DateRules {
    pub fn new(max_age_years: u32) -> Self {
        Self { max_age_years }
    }

    /// Earliest accepted date of birth relative to `today`.
    ///
    /// A Feb 29 anchor lands on Feb 28 in non-leap target years.
    pub fn earliest(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(self.max_age_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Parse and check `input` against today's date in `today`.
    pub fn parse(&self, input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
        if input.trim().is_empty() {
            return Err(DateError::Empty);
        }

        let compact: String = input.split_whitespace().collect();
        let parts = split(&compact)?;
        trace!("date {compact:?} split into {parts:?}");

        // A future year is reported as such even when month/day are nonsense.
        if parts.year > today.year() {
            return Err(DateError::InFuture);
        }

        let date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
            .ok_or(DateError::NoSuchDate)?;

        if date > today {
            return Err(DateError::InFuture);
        }
        if date < self.earliest(today) {
            return Err(DateError::Implausible);
        }

        Ok(date)
    }

    pub fn validate(&self, input: &str, today: NaiveDate) -> Result<(), DateError> {
        self.parse(input, today).map(|_| ())
    }
}

/// Parse a date of birth, checked against the local calendar date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, DateError> {
    parse_birth_date_on(input, Local::now().date_naive())
}

/// [`parse_birth_date`] as if today were `today`.
pub fn parse_birth_date_on(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    DateRules::default().parse(input, today)
}

/// Validate a date of birth against the local calendar date.
pub fn validate_date(input: &str) -> Result<(), DateError> {
    validate_date_on(input, Local::now().date_naive())
}

/// Validate a date of birth as if today were `today`.
pub fn validate_date_on(input: &str, today: NaiveDate) -> Result<(), DateError> {
    DateRules::default().validate(input, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2026, 10, 17)
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate_date_on("", today()), Err(DateError::Empty));
        assert_eq!(validate_date_on("  \t ", today()), Err(DateError::Empty));
    }

    #[test]
    fn test_accepted_shapes() {
        let rules = DateRules::default();
        let expected = ymd(1990, 5, 15);
        for input in [
            "1990-05-15",
            "1990-5-15",
            "15-05-1990",
            "15/05/1990",
            "1990/05/15",
            "15-05-90",
            "15/5/90",
        ] {
            assert_eq!(rules.parse(input, today()), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_parse_birth_date_returns_date() {
        assert_eq!(parse_birth_date_on("15/5/90", today()), Ok(ymd(1990, 5, 15)));
        assert_eq!(
            parse_birth_date_on("31-04-1990", today()),
            Err(DateError::NoSuchDate)
        );
        assert_eq!(parse_birth_date("1990-05-15"), Ok(ymd(1990, 5, 15)));
    }

    #[test]
    fn test_internal_whitespace_is_ignored() {
        assert_eq!(
            DateRules::default().parse(" 15 - 05 - 1990 ", today()),
            Ok(ymd(1990, 5, 15))
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let rules = DateRules::default();
        assert_eq!(rules.parse("01-01-49", today()), Err(DateError::InFuture));
        assert_eq!(rules.parse("01-01-20", today()), Ok(ymd(2020, 1, 1)));
        assert_eq!(rules.parse("01-01-50", today()), Ok(ymd(1950, 1, 1)));
    }

    #[test]
    fn test_unknown_formats() {
        for input in ["15.05.1990", "May 15 1990", "1990-05", "15-05-199", "123-1-1990"] {
            assert_eq!(
                validate_date_on(input, today()),
                Err(DateError::UnknownFormat),
                "{input}"
            );
        }
    }

    #[test]
    fn test_mixed_separators_rejected() {
        assert_eq!(
            validate_date_on("15-05/1990", today()),
            Err(DateError::UnknownFormat)
        );
    }

    #[test]
    fn test_non_ascii_digits_unparseable() {
        // ARABIC-INDIC digits match `\d` but are not ASCII numbers.
        assert_eq!(
            validate_date_on("١٥-٠٥-١٩٩٠", today()),
            Err(DateError::Unparseable)
        );
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        assert_eq!(validate_date_on("31-13-1990", today()), Err(DateError::NoSuchDate));
        assert_eq!(validate_date_on("31-04-1990", today()), Err(DateError::NoSuchDate));
        assert_eq!(validate_date_on("29-02-1990", today()), Err(DateError::NoSuchDate));
        assert_eq!(validate_date_on("00-01-1990", today()), Err(DateError::NoSuchDate));
        assert!(validate_date_on("29-02-1992", today()).is_ok());
    }

    #[test]
    fn test_future_year_wins_over_bad_month() {
        assert_eq!(validate_date_on("31-13-2050", today()), Err(DateError::InFuture));
    }

    #[test]
    fn test_future_dates() {
        assert_eq!(validate_date_on("18-10-2026", today()), Err(DateError::InFuture));
        assert!(validate_date_on("17-10-2026", today()).is_ok());
    }

    #[test]
    fn test_age_boundary() {
        // 120 years before 2026-10-17 is 1906-10-17.
        assert_eq!(
            validate_date_on("16-10-1906", today()),
            Err(DateError::Implausible)
        );
        assert!(validate_date_on("17-10-1906", today()).is_ok());
        assert!(validate_date_on("18-10-1906", today()).is_ok());
    }

    #[test]
    fn test_leap_day_anchor_clamps() {
        let rules = DateRules::new(1);
        assert_eq!(rules.earliest(ymd(2024, 2, 29)), ymd(2023, 2, 28));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DateError::UnknownFormat.to_string(),
            "Please enter a valid date format (e.g., 15-05-1990, 1990-05-15, 15/05/1990)"
        );
        assert_eq!(
            DateError::Implausible.to_string(),
            "Please enter a reasonable date of birth"
        );
    }
}
