use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::clock::Clock;
use crate::rfc3339::{format_with, FormatError, FormatOptions};
use crate::tz::TzDatabase;

const RRTYPES: [&str; 3] = ["A", "NS", "MX"];
const MAX_RECORDS: u64 = 20_000;

/// A synthetic passive-DNS observation entry.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp_start: String,
    pub timestamp_end: String,
    pub dns: BTreeMap<String, RrSet>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RrSet {
    pub rdata: Vec<RdataRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RdataRecord {
    pub rrtype: String,
    pub rdata: String,
    pub answering_host: String,
    pub count: u32,
    pub rcode: String,
}

/// Map a record name to an IPv4-looking address: a deterministic 32-bit
/// hash (FNV-1a) split into four octets. Nothing cryptographic is needed,
/// only a stable spread of names over the address space.
pub fn name_to_addr(name: &str) -> String {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    Ipv4Addr::from(hash).to_string()
}

/// A small seeded xorshift64 generator. Good enough for synthetic names
/// and reproducible under a seed, which is all the generator asks of it.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift state must never be zero
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn lowercase_label(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'a' + self.below(26) as u8))
            .collect()
    }
}

/// Builds synthetic observation entries from an injected clock and a
/// seeded random stream.
#[derive(Debug)]
pub struct Generator<C: Clock> {
    clock: C,
    rng: Rng,
}

impl<C: Clock> Generator<C> {
    pub fn new(clock: C, seed: u64) -> Self {
        Self {
            clock,
            rng: Rng::new(seed),
        }
    }

    /// Build one entry: a one-minute observation window stamped from the
    /// clock, and `records` random name-to-address mappings (a random
    /// count up to 20000 when unspecified).
    pub fn entry<T: TzDatabase>(
        &mut self,
        records: Option<usize>,
        options: FormatOptions,
        tzdb: &T,
    ) -> Result<Entry, FormatError> {
        let now = if options.use_system_timezone {
            self.clock.now_local()
        } else {
            self.clock.now_utc()
        };
        let timestamp_start = format_with(now, options, tzdb)?;
        let timestamp_end = format_with(now.plus_seconds(60), options, tzdb)?;

        let records = match records {
            Some(n) => n,
            None => 1 + self.rng.below(MAX_RECORDS) as usize,
        };

        let mut dns = BTreeMap::new();
        for _ in 0..records {
            let label = self.rng.lowercase_label(5);
            let rdata = name_to_addr(&label);
            let rrname = format!("{label}.com");
            let rrtype = RRTYPES[self.rng.below(RRTYPES.len() as u64) as usize];
            dns.insert(
                rrname,
                RrSet {
                    rdata: vec![RdataRecord {
                        rrtype: rrtype.to_string(),
                        rdata,
                        answering_host: "8.8.8.8".to_string(),
                        count: 1,
                        rcode: "NOERROR".to_string(),
                    }],
                },
            );
        }

        Ok(Entry {
            timestamp_start,
            timestamp_end,
            dns,
        })
    }
}
