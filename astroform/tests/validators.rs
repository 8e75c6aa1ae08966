use astroform::validation::{DateError, NameError, validate_date, validate_name};
use chrono::{Datelike, Duration, Local, Months};

fn format_dmy(date: chrono::NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

#[test]
fn test_blank_inputs_ask_for_a_value() {
    for blank in ["", " ", "\t\n"] {
        assert_eq!(validate_date(blank), Err(DateError::Empty));
        assert_eq!(validate_name(blank), Err(NameError::Empty));
    }
}

#[test]
fn test_documented_examples_pass() {
    for input in ["15-05-1990", "1990-05-15", "15/05/1990"] {
        assert_eq!(validate_date(input), Ok(()), "{input}");
    }
}

#[test]
fn test_far_future_with_bad_month() {
    assert_eq!(validate_date("31-13-2050"), Err(DateError::InFuture));
}

#[test]
fn test_age_limit_against_local_today() {
    let today = Local::now().date_naive();
    let limit = today.checked_sub_months(Months::new(120 * 12)).unwrap();

    let too_old = format_dmy(limit - Duration::days(1));
    let just_fits = format_dmy(limit + Duration::days(1));

    assert_eq!(validate_date(&too_old), Err(DateError::Implausible));
    assert_eq!(validate_date(&just_fits), Ok(()));
}

#[test]
fn test_tomorrow_is_future() {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    assert_eq!(
        validate_date(&format_dmy(tomorrow)),
        Err(DateError::InFuture)
    );
}

#[test]
fn test_name_examples() {
    assert_eq!(validate_name("Jo"), Ok(()));
    assert_eq!(validate_name("J"), Err(NameError::TooShort { min: 2 }));
    assert_eq!(validate_name("John123"), Err(NameError::InvalidCharacters));
    assert_eq!(validate_name("Mary-Jane O'Brien"), Ok(()));
}
