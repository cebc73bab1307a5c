use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use std::fmt;

use crate::{Error, Result};

/// Wire format for dates, `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A calendar day with no time component, ordered by calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Parse a `DD.MM.YYYY` string.
///
/// The shape is checked strictly before the calendar check: single-digit
/// days or months, other separators and surrounding whitespace are all
/// rejected, as are dates such as `31.04.2021` that do not exist.
pub fn parse(s: &str) -> Result<CalendarDate> {
    if !has_date_shape(s) {
        return Err(Error::Parse(s.to_string()));
    }

    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::Parse(s.to_string()))?;

    // Year 0000 has the right shape but sits before the first supported year.
    if date.year() < 1 {
        return Err(Error::Parse(s.to_string()));
    }

    Ok(CalendarDate(date))
}

/// Parse a date out of a request field value. Anything other than a JSON
/// string is a type error rather than a parse error.
pub fn parse_value(value: &Value) -> Result<CalendarDate> {
    match value {
        Value::String(s) => parse(s),
        other => Err(Error::Type(json_kind(other).to_string())),
    }
}

/// Signed number of whole days from `first` to `last`.
pub fn days_between(first: CalendarDate, last: CalendarDate) -> i64 {
    (last.0 - first.0).num_days()
}

/// English weekday name, Monday first.
pub fn weekday_of(date: CalendarDate) -> &'static str {
    WEEKDAYS[date.0.weekday().num_days_from_monday() as usize]
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
