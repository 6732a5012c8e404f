use chrono::{MappedLocalTime, NaiveDateTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

/// The offsets a zone prescribes at a particular moment, in seconds east
/// of UTC. `daylight` already includes the saving, so it equals `standard`
/// whenever the zone has no DST rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOffsets {
    pub standard: i64,
    pub daylight: i64,
    pub dst_active: bool,
}

impl ZoneOffsets {
    /// The offset actually in effect.
    pub const fn current(&self) -> i64 {
        if self.dst_active {
            self.daylight
        } else {
            self.standard
        }
    }
}

/// A timezone database for the process's configured zone. Lookups are pure
/// reads; implementations must be safe to share across threads.
pub trait TzDatabase {
    /// Rule in effect at a local wall-clock reading.
    fn offsets_at_local(&self, local: NaiveDateTime) -> ZoneOffsets;

    /// Rule in effect at a UTC instant.
    fn offsets_at_utc(&self, utc: NaiveDateTime) -> ZoneOffsets;
}

/// The host's zone, discovered through its IANA configuration and backed
/// by the bundled tz database.
#[derive(Debug, Clone, Copy)]
pub struct SystemTz {
    tz: Tz,
}

impl SystemTz {
    /// Discover the host zone, falling back to UTC when the host does not
    /// expose one.
    pub fn new() -> Self {
        let name = iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string());
        Self {
            tz: name.parse().unwrap_or(chrono_tz::UTC),
        }
    }

    /// Use a specific named zone instead of the host's.
    pub const fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemTz {
    fn default() -> Self {
        Self::new()
    }
}

impl TzDatabase for SystemTz {
    fn offsets_at_local(&self, local: NaiveDateTime) -> ZoneOffsets {
        match self.tz.offset_from_local_datetime(&local) {
            MappedLocalTime::Single(offset) => components(&offset),
            // fall-back hour: both rules fit, take the earlier one
            MappedLocalTime::Ambiguous(earlier, _) => components(&earlier),
            // spring-forward gap: no rule fits the wall time, use the one
            // in effect at its UTC reading
            MappedLocalTime::None => self.offsets_at_utc(local),
        }
    }

    fn offsets_at_utc(&self, utc: NaiveDateTime) -> ZoneOffsets {
        components(&self.tz.offset_from_utc_datetime(&utc))
    }
}

fn components(offset: &<Tz as TimeZone>::Offset) -> ZoneOffsets {
    let standard = offset.base_utc_offset().num_seconds();
    let saving = offset.dst_offset().num_seconds();
    ZoneOffsets {
        standard,
        daylight: standard + saving,
        dst_active: saving != 0,
    }
}

/// A zone with fixed standard and daylight offsets and a caller-supplied
/// DST predicate over local time. Deterministic, needs no database;
/// tests use it to pin the rules down.
#[derive(Debug, Clone, Copy)]
pub struct FixedZone {
    pub standard: i64,
    pub daylight: i64,
    pub dst: fn(NaiveDateTime) -> bool,
}

impl FixedZone {
    pub fn utc() -> Self {
        Self::standard_only(0)
    }

    /// A zone that never observes DST.
    pub fn standard_only(standard: i64) -> Self {
        Self {
            standard,
            daylight: standard,
            dst: |_| false,
        }
    }
}

impl TzDatabase for FixedZone {
    fn offsets_at_local(&self, local: NaiveDateTime) -> ZoneOffsets {
        ZoneOffsets {
            standard: self.standard,
            daylight: self.daylight,
            dst_active: (self.dst)(local),
        }
    }

    fn offsets_at_utc(&self, utc: NaiveDateTime) -> ZoneOffsets {
        // fixed rules don't distinguish the reading frame
        self.offsets_at_local(utc)
    }
}
