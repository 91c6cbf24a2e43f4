//! Canonical segment ordering.

use crate::source::SourceNamer;
use crate::trace::segment::TraceSegment;
use crate::types::HiResTime;
use std::cmp::Ordering;

/// Ordering key for one segment.
///
/// Keys are rendered once per segment before the sort runs, so the
/// source namer is consulted exactly `n` times regardless of how many
/// comparisons the sort performs.
struct SortKey {
    source: String,
    start: HiResTime,
    end: HiResTime,
    sample_rate: f64,
}

impl SortKey {
    fn for_segment(
        segment: &TraceSegment,
        namer: &dyn SourceNamer,
        include_quality: bool,
    ) -> Self {
        Self {
            source: namer.source_name(segment, include_quality),
            start: segment.start_time,
            end: segment.end_time,
            sample_rate: segment.sample_rate,
        }
    }

    /// Source name ascending, start ascending, end descending, rate
    /// ascending. Byte-wise string comparison; `total_cmp` keeps
    /// irregular (non-positive) rates ordered as well.
    fn compare(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| other.end.cmp(&self.end))
            .then_with(|| self.sample_rate.total_cmp(&other.sample_rate))
    }
}

/// Stable in-place sort of `segments` under the canonical 4-key order.
pub(crate) fn sort_in_place(
    segments: &mut Vec<TraceSegment>,
    namer: &dyn SourceNamer,
    include_quality: bool,
) {
    if segments.len() < 2 {
        return;
    }

    let mut keyed: Vec<(SortKey, TraceSegment)> = std::mem::take(segments)
        .into_iter()
        .map(|segment| {
            (
                SortKey::for_segment(&segment, namer, include_quality),
                segment,
            )
        })
        .collect();

    // Vec::sort_by is stable, so full-tie segments keep their input order.
    keyed.sort_by(|a, b| a.0.compare(&b.0));

    segments.extend(keyed.into_iter().map(|(_, segment)| segment));
}
