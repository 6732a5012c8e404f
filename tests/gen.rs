use std::net::Ipv4Addr;

use mkjson::clock::Clock;
use mkjson::gen::{name_to_addr, Generator};
use mkjson::rfc3339::{CalendarDateTime, FormatOptions};
use mkjson::tz::FixedZone;

/// A clock pinned to one instant
struct ManualClock {
    now: CalendarDateTime,
}

impl Clock for ManualClock {
    fn now_local(&self) -> CalendarDateTime {
        self.now
    }

    fn now_utc(&self) -> CalendarDateTime {
        self.now
    }
}

fn pinned_clock() -> ManualClock {
    ManualClock {
        now: CalendarDateTime::new(2008, 4, 2, 20, 0, 0),
    }
}

const NAIVE_AS_UTC: FormatOptions = FormatOptions {
    utc: false,
    use_system_timezone: false,
};

#[test]
fn same_seed_same_entry() {
    let mut a = Generator::new(pinned_clock(), 42);
    let mut b = Generator::new(pinned_clock(), 42);
    let entry_a = a.entry(Some(50), NAIVE_AS_UTC, &FixedZone::utc()).unwrap();
    let entry_b = b.entry(Some(50), NAIVE_AS_UTC, &FixedZone::utc()).unwrap();
    assert_eq!(entry_a, entry_b);

    let mut c = Generator::new(pinned_clock(), 43);
    let entry_c = c.entry(Some(50), NAIVE_AS_UTC, &FixedZone::utc()).unwrap();
    assert_ne!(entry_a.dns, entry_c.dns);
}

#[test]
fn entry_spans_a_one_minute_window() {
    let mut generator = Generator::new(pinned_clock(), 1);
    let entry = generator
        .entry(Some(1), NAIVE_AS_UTC, &FixedZone::utc())
        .unwrap();
    assert_eq!(entry.timestamp_start, "2008-04-02T20:00:00+00:00");
    assert_eq!(entry.timestamp_end, "2008-04-02T20:01:00+00:00");
}

#[test]
fn utc_option_renders_the_window_with_z() {
    let mut generator = Generator::new(pinned_clock(), 1);
    let entry = generator
        .entry(
            Some(1),
            FormatOptions {
                utc: true,
                use_system_timezone: false,
            },
            &FixedZone::utc(),
        )
        .unwrap();
    assert_eq!(entry.timestamp_start, "2008-04-02T20:00:00Z");
    assert_eq!(entry.timestamp_end, "2008-04-02T20:01:00Z");
}

#[test]
fn records_have_the_observation_shape() {
    let mut generator = Generator::new(pinned_clock(), 7);
    let entry = generator
        .entry(Some(25), NAIVE_AS_UTC, &FixedZone::utc())
        .unwrap();

    assert!(!entry.dns.is_empty() && entry.dns.len() <= 25);
    for (rrname, rrset) in &entry.dns {
        assert_eq!(rrname.len(), 9, "five letters plus .com: {rrname}");
        assert!(rrname.ends_with(".com"));
        assert!(rrname[..5].bytes().all(|b| b.is_ascii_lowercase()));

        assert_eq!(rrset.rdata.len(), 1);
        let record = &rrset.rdata[0];
        assert!(["A", "NS", "MX"].contains(&record.rrtype.as_str()));
        assert_eq!(record.rdata, name_to_addr(&rrname[..5]));
        assert_eq!(record.answering_host, "8.8.8.8");
        assert_eq!(record.count, 1);
        assert_eq!(record.rcode, "NOERROR");
    }
}

#[test]
fn entry_serializes_with_the_expected_keys() {
    let mut generator = Generator::new(pinned_clock(), 9);
    let entry = generator
        .entry(Some(3), NAIVE_AS_UTC, &FixedZone::utc())
        .unwrap();
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value["timestamp_start"].is_string());
    assert!(value["timestamp_end"].is_string());
    assert!(value["dns"].is_object());
}

#[test]
fn name_to_addr_is_a_stable_dotted_quad() {
    let addr = name_to_addr("abcde.com");
    assert_eq!(addr, name_to_addr("abcde.com"));
    assert!(addr.parse::<Ipv4Addr>().is_ok());
    assert_ne!(addr, name_to_addr("fghij.com"));
}
