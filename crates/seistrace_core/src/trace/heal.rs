//! Segment healing.
//!
//! Healing merges segments that are logically one continuous stream but
//! were split by fragmented delivery or timing jitter. This module
//! provides the [`Healer`] that performs this operation.
//!
//! ## Invariants
//!
//! - Healing **MUST NOT** merge across source-name or quality boundaries
//! - A merged segment's sample count is the sum of its inputs' counts
//! - The result is a local fixpoint: no adjacent same-source pair left in
//!   the group satisfies the merge predicate
//! - An absorbed segment's samples move into the survivor exactly once

use crate::error::CoreResult;
use crate::source::SourceNamer;
use crate::trace::group::TraceGroup;
use crate::trace::segment::TraceSegment;
use tracing::{debug, trace};

/// Relative sample-rate deviation allowed when the tolerance is
/// [`Tolerance::Auto`]: rates must match within this fixed fraction.
pub const DEFAULT_SAMPLE_RATE_TOLERANCE: f64 = 1.0e-4;

/// A tolerance value: caller-fixed, or computed per pair.
///
/// `Auto` replaces the magic `-1.0` sentinel of older trace engines, so
/// a legitimately negative caller value can never collide with "use the
/// default".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Tolerance {
    /// Compute the default per candidate pair.
    #[default]
    Auto,
    /// Use this fixed value. Units depend on the tolerance: seconds for
    /// time, relative fraction for sample rate. Negative values are a
    /// caller error and are not validated.
    Fixed(f64),
}

/// Configuration for healing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealConfig {
    /// Allowed deviation between a segment's start and the predicted
    /// next-sample time of its predecessor. `Auto` resolves to half the
    /// predecessor's sample period, so tolerance scales with the
    /// channel's own sampling rather than an absolute constant.
    pub time_tolerance: Tolerance,

    /// Allowed relative deviation `|1 - L.rate / R.rate|` between the
    /// pair's sample rates. `Auto` resolves to
    /// [`DEFAULT_SAMPLE_RATE_TOLERANCE`].
    pub sample_rate_tolerance: Tolerance,
}

impl HealConfig {
    /// Creates a configuration with both tolerances on `Auto`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time tolerance.
    #[must_use]
    pub const fn time_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.time_tolerance = tolerance;
        self
    }

    /// Sets the sample-rate tolerance.
    #[must_use]
    pub const fn sample_rate_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.sample_rate_tolerance = tolerance;
        self
    }
}

/// Why a same-source candidate pair was not merged.
///
/// Ineligible pairs are skipped, never an error: partial healing of a
/// large group must not be blocked by one malformed segment. The reasons
/// are kept per pair so the policy stays auditable through
/// [`Healer::heal_with_report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MergeRejection {
    /// One side has a zero or negative sample rate.
    IrregularRate,
    /// Sample rates differ beyond the effective tolerance.
    RateMismatch {
        /// Observed relative deviation `|1 - L.rate / R.rate|`.
        deviation: f64,
    },
    /// The right segment's start is too far from the predicted
    /// next-sample time of the left segment.
    TimeGap {
        /// Observed deviation from the predicted start, in seconds.
        gap_seconds: f64,
    },
    /// The two sample buffers cannot be spliced together.
    BufferMismatch,
}

/// One rejected candidate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Source name shared by the pair.
    pub source: String,
    /// Why the pair was not merged.
    pub reason: MergeRejection,
}

/// Result of a heal operation.
#[derive(Debug)]
pub struct HealReport {
    /// Number of segments before healing.
    pub input_segments: usize,
    /// Number of segments after healing.
    pub output_segments: usize,
    /// Number of merges performed.
    pub merges: u32,
    /// Same-source candidate pairs that were not merged, with reasons.
    /// Pairs with different source names are not candidates and are not
    /// recorded.
    pub rejections: Vec<Rejection>,
}

/// Verdict on one adjacent pair during the scan.
enum PairVerdict {
    Eligible,
    Rejected(MergeRejection),
    DifferentSource,
}

/// Healer for trace groups.
///
/// Always sorts first (healing is undefined on unsorted input, and always
/// with the quality indicator in the grouping key), then makes one
/// forward pass merging eligible adjacent pairs. A merged segment is
/// re-tested against the next element, so a stream split into many
/// fragments heals in a single pass.
///
/// ## Example
///
/// ```ignore
/// use seistrace_core::{HealConfig, Healer};
///
/// let healer = Healer::new(HealConfig::default());
/// let merges = healer.heal(&mut group, &namer)?;
/// ```
#[derive(Debug, Default)]
pub struct Healer {
    config: HealConfig,
}

impl Healer {
    /// Creates a healer with the given configuration.
    #[must_use]
    pub const fn new(config: HealConfig) -> Self {
        Self { config }
    }

    /// Creates a healer with default (auto) tolerances.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HealConfig::default())
    }

    /// Heals `group`, returning the number of merges performed.
    ///
    /// # Errors
    ///
    /// Propagates the sort error cases; nothing else is fatal.
    pub fn heal(&self, group: &mut TraceGroup, namer: &dyn SourceNamer) -> CoreResult<u32> {
        Ok(self.heal_with_report(group, namer)?.merges)
    }

    /// Heals `group`, returning the full report including rejected
    /// candidate pairs.
    ///
    /// # Errors
    ///
    /// Propagates the sort error cases; nothing else is fatal.
    pub fn heal_with_report(
        &self,
        group: &mut TraceGroup,
        namer: &dyn SourceNamer,
    ) -> CoreResult<HealReport> {
        // Quality always participates in grouping here: healing must
        // never merge across quality boundaries.
        group.sort(namer, true)?;

        let input_segments = group.segments.len();
        let mut merges = 0u32;
        let mut rejections = Vec::new();

        let sorted = std::mem::take(&mut group.segments);
        let mut out: Vec<TraceSegment> = Vec::with_capacity(sorted.len());
        let mut left_name: Option<String> = None;

        for right in sorted {
            let right_name = namer.source_name(&right, true);

            let verdict = match (out.last(), left_name.as_deref()) {
                (Some(left), Some(name)) if name == right_name => {
                    merge_eligibility(left, &right, &self.config)
                }
                _ => PairVerdict::DifferentSource,
            };

            let keep = match (verdict, out.last_mut()) {
                (PairVerdict::Eligible, Some(left)) => match left.absorb(right) {
                    Ok(()) => {
                        merges += 1;
                        trace!(source = %right_name, "merged segment into predecessor");
                        None
                    }
                    // eligibility probed the buffers, but an implementation
                    // may still refuse; keep the segment and move on
                    Err(restored) => {
                        rejections.push(Rejection {
                            source: right_name.clone(),
                            reason: MergeRejection::BufferMismatch,
                        });
                        Some(restored)
                    }
                },
                (PairVerdict::Rejected(reason), _) => {
                    rejections.push(Rejection {
                        source: right_name.clone(),
                        reason,
                    });
                    Some(right)
                }
                (PairVerdict::DifferentSource | PairVerdict::Eligible, _) => Some(right),
            };

            if let Some(segment) = keep {
                out.push(segment);
            }
            left_name = Some(right_name);
        }

        group.segments = out;
        debug!(
            input_segments,
            output_segments = group.segments.len(),
            merges,
            rejected_pairs = rejections.len(),
            "healed trace group"
        );

        Ok(HealReport {
            input_segments,
            output_segments: group.segments.len(),
            merges,
            rejections,
        })
    }
}

/// The merge predicate over one sorted adjacent same-source pair.
fn merge_eligibility(
    left: &TraceSegment,
    right: &TraceSegment,
    config: &HealConfig,
) -> PairVerdict {
    // Irregular segments are sortable but never merge sources or targets.
    let (Some(period), Some(predicted)) = (left.sample_period(), left.predicted_next_start())
    else {
        return PairVerdict::Rejected(MergeRejection::IrregularRate);
    };
    if !right.is_timeseries() {
        return PairVerdict::Rejected(MergeRejection::IrregularRate);
    }

    let deviation = (1.0 - left.sample_rate / right.sample_rate).abs();
    let rate_tolerance = match config.sample_rate_tolerance {
        Tolerance::Auto => DEFAULT_SAMPLE_RATE_TOLERANCE,
        Tolerance::Fixed(value) => value,
    };
    if deviation > rate_tolerance {
        return PairVerdict::Rejected(MergeRejection::RateMismatch { deviation });
    }

    let gap_seconds = right.start_time.seconds_since(predicted).abs();
    let time_tolerance = match config.time_tolerance {
        Tolerance::Auto => 0.5 * period,
        Tolerance::Fixed(value) => value,
    };
    if gap_seconds > time_tolerance {
        return PairVerdict::Rejected(MergeRejection::TimeGap { gap_seconds });
    }

    if !left.buffer.can_append(&*right.buffer) {
        return PairVerdict::Rejected(MergeRejection::BufferMismatch);
    }

    PairVerdict::Eligible
}
