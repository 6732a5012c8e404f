//! mkjson: synthetic passive-DNS observation entries with RFC 3339 timestamps
//!
//! This library provides an RFC 3339 timestamp formatter (numeric UTC
//! offsets or the literal "Z", whole-second precision) and a generator
//! that emits a synthetic DNS observation entry as JSON.

/// Wall-clock collaborator
pub mod clock;

/// Synthetic observation entry generator
pub mod gen;

/// RFC 3339 timestamp formatting
pub mod rfc3339;

/// Timezone database lookup
pub mod tz;
