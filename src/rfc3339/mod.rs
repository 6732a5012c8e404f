mod datetime;
mod format;

pub use datetime::{CalendarDate, CalendarDateTime, DateInput, Duration};
pub use format::{format, format_with, offset_string, resolve_offset, FormatError, FormatOptions};
