//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random segments and groups whose
//! bookkeeping invariants hold (end times derived from start, rate, and
//! count).

use crate::fixtures::{consistent_segment, irregular_segment};
use proptest::prelude::*;
use seistrace_core::{TraceGroup, TraceSegment};

/// Strategy for generating station codes.
pub fn station_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{3,5}").expect("Invalid regex")
}

/// Strategy for generating common instrument sample rates.
pub fn sample_rate_strategy() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![1.0, 20.0, 40.0, 50.0, 100.0, 200.0])
}

/// Strategy for generating internally consistent timeseries segments.
pub fn segment_strategy() -> impl Strategy<Value = TraceSegment> {
    (
        station_strategy(),
        0.0f64..10_000.0,
        sample_rate_strategy(),
        1u64..500,
    )
        .prop_map(|(station, start, rate, count)| {
            consistent_segment(&station, start, rate, count)
        })
}

/// Strategy for generating segments including the occasional irregular
/// one.
pub fn mixed_segment_strategy() -> impl Strategy<Value = TraceSegment> {
    prop_oneof![
        4 => segment_strategy(),
        1 => (station_strategy(), 0.0f64..10_000.0, 1u64..100).prop_map(
            |(station, start, count)| irregular_segment(&station, start, start + 60.0, count)
        ),
    ]
}

/// Strategy for generating trace groups in arbitrary insertion order.
pub fn group_strategy(max_segments: usize) -> impl Strategy<Value = TraceGroup> {
    prop::collection::vec(mixed_segment_strategy(), 0..max_segments)
        .prop_map(TraceGroup::from_segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_segments_are_consistent(segment in segment_strategy()) {
            prop_assert!(segment.is_consistent());
            prop_assert!(segment.is_timeseries());
        }

        #[test]
        fn generated_groups_respect_size(group in group_strategy(12)) {
            prop_assert!(group.len() < 12);
        }
    }
}
