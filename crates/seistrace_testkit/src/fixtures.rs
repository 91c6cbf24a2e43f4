//! Segment and group fixtures.
//!
//! Provides convenience builders for trace segments with consistent
//! bookkeeping, plus an FDSN-style source namer.

use seistrace_buffer::{InMemoryBuffer, SampleEncoding};
use seistrace_core::{ChannelId, HiResTime, SourceNamer, TraceGroup, TraceSegment};

/// Renders FDSN-style source names: `NET_STA_LOC_CHN`, with `_Q`
/// appended when quality is requested and present.
#[derive(Debug, Default)]
pub struct FdsnNamer;

impl SourceNamer for FdsnNamer {
    fn source_name(&self, segment: &TraceSegment, include_quality: bool) -> String {
        let c = &segment.channel;
        let mut name = format!("{}_{}_{}_{}", c.network, c.station, c.location, c.channel);
        if include_quality {
            if let Some(quality) = segment.quality {
                name.push('_');
                name.push(quality);
            }
        }
        name
    }
}

/// Returns a channel identity on the given station (network `XX`,
/// empty location, channel `HHZ`).
#[must_use]
pub fn test_channel(station: &str) -> ChannelId {
    ChannelId::new("XX", station, "", "HHZ")
}

/// Builds a timeseries segment with an `Int32` in-memory buffer holding
/// `sample_count` zeroed samples.
#[must_use]
pub fn timeseries_segment(
    station: &str,
    start_seconds: f64,
    end_seconds: f64,
    sample_rate: f64,
    sample_count: u64,
) -> TraceSegment {
    TraceSegment::new(
        test_channel(station),
        HiResTime::from_seconds(start_seconds),
        HiResTime::from_seconds(end_seconds),
        sample_rate,
        Box::new(InMemoryBuffer::zeroed(SampleEncoding::Int32, sample_count)),
    )
}

/// Builds a timeseries segment whose end time is derived from the start,
/// rate, and count, so the segment is internally consistent.
#[must_use]
pub fn consistent_segment(
    station: &str,
    start_seconds: f64,
    sample_rate: f64,
    sample_count: u64,
) -> TraceSegment {
    let period = 1.0 / sample_rate;
    let end_seconds = start_seconds + period * (sample_count.saturating_sub(1)) as f64;
    timeseries_segment(station, start_seconds, end_seconds, sample_rate, sample_count)
}

/// Builds an irregular (non-timeseries) segment.
#[must_use]
pub fn irregular_segment(
    station: &str,
    start_seconds: f64,
    end_seconds: f64,
    sample_count: u64,
) -> TraceSegment {
    timeseries_segment(station, start_seconds, end_seconds, 0.0, sample_count)
}

/// Builds a group of perfectly abutting fragments of one stream: each
/// fragment starts exactly one sample period after its predecessor ends.
///
/// Under default tolerances every adjacent pair is merge-eligible, so
/// healing collapses the group to one segment.
#[must_use]
pub fn fragment_group(
    station: &str,
    start_seconds: f64,
    sample_rate: f64,
    counts: &[u64],
) -> TraceGroup {
    let period = 1.0 / sample_rate;
    let mut group = TraceGroup::new();
    let mut start = start_seconds;
    for &count in counts {
        let segment = consistent_segment(station, start, sample_rate, count);
        start = segment.end_time.as_seconds() + period;
        group.push(segment);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fdsn_namer_renders_codes() {
        let segment = timeseries_segment("ANMO", 0.0, 1.0, 1.0, 2);
        assert_eq!(FdsnNamer.source_name(&segment, false), "XX_ANMO__HHZ");
    }

    #[test]
    fn fdsn_namer_appends_quality_on_request() {
        let segment = timeseries_segment("ANMO", 0.0, 1.0, 1.0, 2).with_quality('D');
        assert_eq!(FdsnNamer.source_name(&segment, true), "XX_ANMO__HHZ_D");
        assert_eq!(FdsnNamer.source_name(&segment, false), "XX_ANMO__HHZ");
    }

    #[test]
    fn consistent_segment_is_consistent() {
        let segment = consistent_segment("ANMO", 100.0, 40.0, 500);
        assert!(segment.is_consistent());
        assert_eq!(segment.sample_count, 500);
    }

    #[test]
    fn fragment_group_heals_to_one() {
        let mut group = fragment_group("ANMO", 0.0, 100.0, &[50, 75, 25]);
        assert_eq!(group.len(), 3);

        let merges = group.heal(&FdsnNamer).unwrap();
        assert_eq!(merges, 2);
        assert_eq!(group.len(), 1);
        assert_eq!(group.segments()[0].sample_count, 150);
    }
}
