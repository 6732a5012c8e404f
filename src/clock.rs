use chrono::{Local, Utc};

use crate::rfc3339::CalendarDateTime;

/// A source of "now". The formatter never reads the clock; the generator
/// takes one as an injected collaborator so its output can be pinned in
/// tests.
pub trait Clock {
    /// Current local calendar time, without an attached offset.
    fn now_local(&self) -> CalendarDateTime;

    /// Current UTC calendar time, without an attached offset.
    fn now_utc(&self) -> CalendarDateTime;
}

/// The process-wide system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> CalendarDateTime {
        CalendarDateTime::from_naive(Local::now().naive_local())
    }

    fn now_utc(&self) -> CalendarDateTime {
        CalendarDateTime::from_naive(Utc::now().naive_utc())
    }
}
