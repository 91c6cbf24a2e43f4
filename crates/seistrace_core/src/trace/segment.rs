//! Trace segment type.

use crate::source::ChannelId;
use crate::types::{HiResTime, NANOS_PER_SECOND};
use seistrace_buffer::SampleBuffer;

/// One contiguous run of uniformly sampled time-series data.
///
/// Segments are created by an ingestion path and handed to a
/// [`super::TraceGroup`]. The engine reorders them, and healing may absorb
/// a segment into its left neighbour, at which point the absorbed
/// segment's samples move into the survivor's buffer and the rest of it
/// is dropped.
///
/// `sample_count` must equal the logical length of `buffer`; the engine
/// maintains this across merges but does not validate arbitrary caller
/// input (see [`TraceSegment::is_consistent`]).
#[derive(Debug)]
pub struct TraceSegment {
    /// Channel the segment was recorded on.
    pub channel: ChannelId,
    /// Data-quality indicator, if the source format carries one.
    pub quality: Option<char>,
    /// Time of the first sample.
    pub start_time: HiResTime,
    /// Time of the last sample.
    pub end_time: HiResTime,
    /// Nominal sample rate in Hz. Zero or negative marks an irregular
    /// (non-timeseries) segment: sortable, never healed.
    pub sample_rate: f64,
    /// Number of samples in the buffer.
    pub sample_count: u64,
    /// Encoded sample payload, owned by this segment and never
    /// interpreted by the engine.
    pub buffer: Box<dyn SampleBuffer>,
}

impl TraceSegment {
    /// Creates a segment; `sample_count` is taken from the buffer.
    #[must_use]
    pub fn new(
        channel: ChannelId,
        start_time: HiResTime,
        end_time: HiResTime,
        sample_rate: f64,
        buffer: Box<dyn SampleBuffer>,
    ) -> Self {
        let sample_count = buffer.sample_count();
        Self {
            channel,
            quality: None,
            start_time,
            end_time,
            sample_rate,
            sample_count,
            buffer,
        }
    }

    /// Sets the data-quality indicator.
    #[must_use]
    pub fn with_quality(mut self, quality: char) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Returns `true` if this segment carries regularly sampled data.
    #[must_use]
    pub fn is_timeseries(&self) -> bool {
        self.sample_rate > 0.0
    }

    /// Returns the nominal time between consecutive samples in seconds,
    /// or `None` for irregular segments.
    #[must_use]
    pub fn sample_period(&self) -> Option<f64> {
        self.is_timeseries().then(|| 1.0 / self.sample_rate)
    }

    /// Returns the expected time of the sample that would follow this
    /// segment, or `None` for irregular segments.
    #[must_use]
    pub fn predicted_next_start(&self) -> Option<HiResTime> {
        self.is_timeseries().then(|| {
            let period_nanos = (NANOS_PER_SECOND as f64 / self.sample_rate).round() as i64;
            self.end_time.saturating_add_nanos(period_nanos)
        })
    }

    /// Checks the segment's own bookkeeping.
    ///
    /// A consistent segment has a sample count matching its buffer, and
    /// for timeseries data an end time within one sample period of
    /// `start + (count - 1) * period`. Diagnostic only: inconsistent
    /// segments still sort, and simply never merge cleanly.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.sample_count != self.buffer.sample_count() {
            return false;
        }
        let Some(period) = self.sample_period() else {
            return true;
        };
        if self.sample_count == 0 {
            return true;
        }
        let span_nanos = (period * (self.sample_count - 1) as f64 * NANOS_PER_SECOND as f64).round();
        let expected_end = self.start_time.saturating_add_nanos(span_nanos as i64);
        self.end_time.seconds_since(expected_end).abs() <= period
    }

    /// Absorbs `other` into this segment: splices its samples onto the
    /// end of this buffer, extends the end time, and adds the counts.
    ///
    /// The caller is expected to have checked merge eligibility; identity
    /// attributes (channel, quality, rate) are inherited from `self`.
    ///
    /// # Errors
    ///
    /// If the buffers cannot be spliced, `other` is returned intact so
    /// the caller can keep it in the group.
    pub fn absorb(&mut self, mut other: TraceSegment) -> Result<(), TraceSegment> {
        match self.buffer.append_from(&mut *other.buffer) {
            Ok(()) => {
                self.end_time = other.end_time;
                self.sample_count += other.sample_count;
                Ok(())
            }
            Err(_) => Err(other),
        }
    }
}
