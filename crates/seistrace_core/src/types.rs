//! Core type definitions for SeisTrace.

use std::fmt;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A fixed-precision timestamp: nanoseconds since the POSIX epoch.
///
/// Segment boundary times are compared against sub-sample tolerances, so
/// they are held as integer nanoseconds rather than floating seconds;
/// repeated arithmetic never drifts. `f64` seconds appear only at the
/// edges, when converting from caller input or measuring a gap against a
/// tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HiResTime(pub i64);

impl HiResTime {
    /// Creates a timestamp from nanoseconds since the epoch.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Returns the raw nanosecond value.
    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Creates a timestamp from seconds since the epoch, rounded to the
    /// nearest nanosecond.
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        Self((seconds * NANOS_PER_SECOND as f64).round() as i64)
    }

    /// Returns the timestamp as floating seconds since the epoch.
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        self.0 as f64 / NANOS_PER_SECOND as f64
    }

    /// Returns this timestamp shifted by `nanos`, saturating at the range
    /// limits.
    #[must_use]
    pub const fn saturating_add_nanos(self, nanos: i64) -> Self {
        Self(self.0.saturating_add(nanos))
    }

    /// Returns the signed difference `self - earlier` in seconds.
    #[must_use]
    pub fn seconds_since(self, earlier: Self) -> f64 {
        (self.0 - earlier.0) as f64 / NANOS_PER_SECOND as f64
    }
}

impl fmt::Display for HiResTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:09}s",
            abs / NANOS_PER_SECOND as u64,
            abs % NANOS_PER_SECOND as u64
        )
    }
}
