use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use super::format::FormatError;

/// A signed duration with microsecond resolution, split into days, seconds
/// and microseconds. Used to carry a UTC offset expressed as a duration
/// from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Duration {
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            days: 0,
            seconds,
            microseconds: 0,
        }
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::from_seconds(hours * 3600)
    }

    /// Total number of whole seconds, sign preserved. The microsecond
    /// component is truncated toward zero; real-world UTC offsets never
    /// carry sub-second parts, so nothing is lost for the offsets this
    /// crate resolves.
    pub const fn total_seconds(&self) -> i64 {
        self.microseconds / 1_000_000 + self.seconds + self.days * 86_400
    }
}

/// A calendar date with no time-of-day and no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A proleptic-Gregorian calendar date-time, optionally carrying the UTC
/// offset it is expressed in. An attached offset is authoritative: the
/// offset resolver returns it without consulting any timezone database.
///
/// Field ranges are a caller precondition; out-of-range values (month 13
/// and the like) make the conversion to an instant panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub utc_offset: Option<Duration>,
}

impl CalendarDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset: None,
        }
    }

    /// Attach an explicit UTC offset.
    pub const fn with_offset(mut self, offset: Duration) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Same wall-clock fields under a different year. The attached offset,
    /// if any, is kept.
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Shift by a number of seconds with calendar-correct carry across
    /// minute, hour, day, month and year boundaries. The result carries no
    /// offset.
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        Self::from_naive(self.naive() + TimeDelta::seconds(seconds))
    }

    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
            utc_offset: None,
        }
    }

    /// The wall-clock fields as a chrono naive date-time, ignoring any
    /// attached offset.
    ///
    /// # Panics
    ///
    /// Panics if the fields are outside their calendar ranges.
    pub fn naive(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .expect("calendar fields out of range")
    }
}

impl From<CalendarDate> for CalendarDateTime {
    /// Widen to midnight with no attached offset.
    fn from(date: CalendarDate) -> Self {
        Self::new(date.year, date.month, date.day, 0, 0, 0)
    }
}

/// The accepted input shapes of the formatter entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput {
    /// Seconds since the Unix epoch, possibly fractional.
    Timestamp(f64),
    Date(CalendarDate),
    DateTime(CalendarDateTime),
}

impl From<f64> for DateInput {
    fn from(ts: f64) -> Self {
        DateInput::Timestamp(ts)
    }
}

impl From<i64> for DateInput {
    fn from(ts: i64) -> Self {
        DateInput::Timestamp(ts as f64)
    }
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<CalendarDateTime> for DateInput {
    fn from(date: CalendarDateTime) -> Self {
        DateInput::DateTime(date)
    }
}

impl TryFrom<&serde_json::Value> for DateInput {
    type Error = FormatError;

    /// Admit dynamically-typed input: a JSON number is a timestamp,
    /// anything else is rejected with the JSON type it actually was.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value.as_f64() {
            Some(ts) => Ok(DateInput::Timestamp(ts)),
            None => Err(FormatError::InvalidInputType {
                got: json_type_name(value).to_string(),
            }),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
