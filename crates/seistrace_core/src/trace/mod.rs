//! Trace segments, groups, and the sort/heal engine.
//!
//! A [`TraceGroup`] is a caller-owned ordered collection of
//! [`TraceSegment`]s. Two operations act on it:
//!
//! - [`TraceGroup::sort`] imposes the canonical order: source name
//!   ascending, start time ascending, end time descending, sample rate
//!   ascending, stable for full ties.
//! - [`Healer::heal`] sorts, then merges same-channel segments whose
//!   boundary times line up within tolerance, cascading merges in a
//!   single forward pass.
//!
//! ## Invariants
//!
//! - Sorting never mutates a segment's own attributes
//! - Healing reaches a local fixpoint: no adjacent same-source pair left
//!   in the group satisfies the merge predicate
//! - A merged segment keeps the left segment's identity and start, takes
//!   the right segment's end time, and sums the sample counts

mod group;
mod heal;
mod segment;
mod sort;

pub use group::TraceGroup;
pub use heal::{
    HealConfig, HealReport, Healer, MergeRejection, Rejection, Tolerance,
    DEFAULT_SAMPLE_RATE_TOLERANCE,
};
pub use segment::TraceSegment;
