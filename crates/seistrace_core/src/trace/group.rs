//! Trace group container.

use crate::error::CoreResult;
use crate::source::SourceNamer;
use crate::trace::heal::Healer;
use crate::trace::segment::TraceSegment;
use crate::trace::sort;
use tracing::debug;

/// An ordered collection of trace segments.
///
/// The group is owned exclusively by the caller; sorting and healing
/// mutate it in place (reorder, merge, remove absorbed segments) but
/// never keep it beyond the call. Insertion order carries no meaning
/// until [`TraceGroup::sort`] has run.
///
/// The `&mut` receivers make the single-writer discipline a compile-time
/// property: no internal locking, callers needing concurrent access
/// serialize externally.
#[derive(Debug, Default)]
pub struct TraceGroup {
    pub(crate) segments: Vec<TraceSegment>,
}

impl TraceGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group from segments in arbitrary order.
    #[must_use]
    pub fn from_segments(segments: Vec<TraceSegment>) -> Self {
        Self { segments }
    }

    /// Adds a segment to the end of the group.
    pub fn push(&mut self, segment: TraceSegment) {
        self.segments.push(segment);
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the group holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TraceSegment> {
        self.segments.get(index)
    }

    /// Returns the segments in their current order.
    #[must_use]
    pub fn segments(&self) -> &[TraceSegment] {
        &self.segments
    }

    /// Iterates over the segments in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceSegment> {
        self.segments.iter()
    }

    /// Consumes the group, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<TraceSegment> {
        self.segments
    }

    /// Sorts the group into canonical order.
    ///
    /// Order: source name ascending, start time ascending, end time
    /// descending, sample rate ascending; stable for full ties. Source
    /// names are rendered once per segment by `namer`; `include_quality`
    /// controls whether the quality indicator participates in the name
    /// and therefore in grouping. No segment attribute is mutated.
    ///
    /// # Errors
    ///
    /// The safe API always succeeds; see [`crate::CoreError`] for the
    /// boundary-only failure case.
    pub fn sort(&mut self, namer: &dyn SourceNamer, include_quality: bool) -> CoreResult<()> {
        sort::sort_in_place(&mut self.segments, namer, include_quality);
        debug!(
            segments = self.segments.len(),
            include_quality, "sorted trace group"
        );
        Ok(())
    }

    /// Heals the group with default tolerances, returning the merge count.
    ///
    /// Convenience for [`Healer::with_defaults`]; see [`Healer::heal`].
    ///
    /// # Errors
    ///
    /// Propagates the sort error cases.
    pub fn heal(&mut self, namer: &dyn SourceNamer) -> CoreResult<u32> {
        Healer::with_defaults().heal(self, namer)
    }
}

impl<'a> IntoIterator for &'a TraceGroup {
    type Item = &'a TraceSegment;
    type IntoIter = std::slice::Iter<'a, TraceSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
