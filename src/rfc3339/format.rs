use chrono::{DateTime, TimeDelta};
use thiserror::Error;

use super::datetime::{CalendarDateTime, DateInput};
use crate::tz::{SystemTz, TzDatabase};

/// The single failure mode of the formatter: the supplied value could not
/// be interpreted as a timestamp or calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected timestamp or date value, got {got}")]
    InvalidInputType { got: String },
}

/// Options of the formatter entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Normalize to UTC and render with the "Z" marker.
    pub utc: bool,
    /// Consult the system timezone database for dates without an attached
    /// offset. When false, naive dates are taken as UTC (offset zero).
    pub use_system_timezone: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            utc: false,
            use_system_timezone: true,
        }
    }
}

/// Render a UTC offset in seconds as the RFC 3339 numeric form,
/// `{sign}{HH}:{MM}`.
///
/// Hours and minutes are derived from the magnitude so that negative
/// offsets come out right: -28800 is "-08:00" and -1800 is "-00:30",
/// where truncating signed division would mangle both.
pub fn offset_string(offset: i64) -> String {
    let sign = if offset < 0 { '-' } else { '+' };
    let magnitude = offset.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = magnitude % 3600 / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

/// Determine the UTC offset of `date` in seconds.
///
/// An attached offset takes absolute precedence. Otherwise, with
/// `use_system_timezone` unset the date is taken as UTC; with it set the
/// timezone database decides, applying the daylight-saving rule when one
/// is in effect at that local time.
///
/// Dates before 1970 are probed under the year 1972 instead: timezone
/// databases are unreliable before the epoch, and 1972 is the nearest
/// leap year, so a February 29th survives the substitution. Offsets for
/// such dates are only as accurate as the 1972 rule set.
pub fn resolve_offset<T: TzDatabase>(
    date: &CalendarDateTime,
    use_system_timezone: bool,
    tzdb: &T,
) -> i64 {
    if let Some(offset) = date.utc_offset {
        return offset.total_seconds();
    }
    if !use_system_timezone {
        return 0;
    }
    let probe = if date.year < 1970 {
        date.with_year(1972)
    } else {
        *date
    };
    tzdb.offsets_at_local(probe.naive()).current()
}

/// `{YYYY}-{MM}-{DD}T{HH}:{MM}:{SS}{tz}`, every numeric field zero-padded.
/// No conversion happens here; callers shift to UTC themselves before
/// asking for the "Z" marker.
fn timestamp_string(d: &CalendarDateTime, tz: &str) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
        d.year, d.month, d.day, d.hour, d.minute, d.second, tz
    )
}

/// Format `value` as an RFC 3339 timestamp using the system timezone
/// database and default options (keep local time, render the numeric
/// offset).
///
/// # Panics
///
/// Panics if a calendar input carries out-of-range fields; valid ranges
/// are a caller precondition.
pub fn format(value: impl Into<DateInput>) -> Result<String, FormatError> {
    format_with(value, FormatOptions::default(), &SystemTz::new())
}

/// Format `value` as an RFC 3339 timestamp against an explicit timezone
/// database.
///
/// Timestamps are converted to calendar time first: through `tzdb` when
/// `use_system_timezone` is set, as a plain UTC reading otherwise, in both
/// cases without an attached offset. Bare dates widen to midnight. With
/// `options.utc` set the resolved offset is subtracted, with
/// calendar-correct carry, and the result rendered with "Z"; otherwise
/// the numeric offset is rendered.
pub fn format_with<T: TzDatabase>(
    value: impl Into<DateInput>,
    options: FormatOptions,
    tzdb: &T,
) -> Result<String, FormatError> {
    let date = match value.into() {
        DateInput::Timestamp(ts) => from_timestamp(ts, options.use_system_timezone, tzdb)?,
        DateInput::Date(d) => CalendarDateTime::from(d),
        DateInput::DateTime(dt) => dt,
    };

    let offset = resolve_offset(&date, options.use_system_timezone, tzdb);
    if options.utc {
        // local time -> utc
        let shifted = CalendarDateTime::from_naive(date.naive() - TimeDelta::seconds(offset));
        Ok(timestamp_string(&shifted, "Z"))
    } else {
        Ok(timestamp_string(&date, &offset_string(offset)))
    }
}

/// Convert an epoch timestamp to naive calendar time, local or UTC.
/// Fractional seconds are floored away; the output grammar has no
/// sub-second field.
fn from_timestamp<T: TzDatabase>(
    ts: f64,
    use_system_timezone: bool,
    tzdb: &T,
) -> Result<CalendarDateTime, FormatError> {
    if !ts.is_finite() {
        return Err(FormatError::InvalidInputType {
            got: format!("non-finite timestamp {ts}"),
        });
    }
    let utc = DateTime::from_timestamp(ts.floor() as i64, 0)
        .ok_or_else(|| FormatError::InvalidInputType {
            got: format!("out-of-range timestamp {ts}"),
        })?
        .naive_utc();
    if use_system_timezone {
        let offset = tzdb.offsets_at_utc(utc).current();
        Ok(CalendarDateTime::from_naive(utc + TimeDelta::seconds(offset)))
    } else {
        Ok(CalendarDateTime::from_naive(utc))
    }
}
