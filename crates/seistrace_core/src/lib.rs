//! # SeisTrace Core
//!
//! Trace segment ordering and healing engine for SeisTrace.
//!
//! Continuous instrument recordings reach an archive as trace segments:
//! contiguous runs of uniformly sampled data that may arrive out of order,
//! in fragments, or with small clock discrepancies. This crate imposes a
//! canonical order over a caller-owned [`TraceGroup`] and merges ("heals")
//! segments that are logically one stream but were split by fragmented
//! delivery or timing jitter, within configurable tolerances.
//!
//! ## Design Principles
//!
//! - The group is caller-owned and mutated in place; the engine never
//!   keeps it beyond a call
//! - Source-name rendering and sample payloads are external collaborators
//!   ([`SourceNamer`] and `seistrace_buffer::SampleBuffer`)
//! - Healing is best-effort: malformed or incompatible segments are
//!   skipped, never a reason to abort the whole pass
//!
//! ## Example
//!
//! ```rust,ignore
//! use seistrace_core::{Healer, TraceGroup};
//!
//! let mut group = TraceGroup::from_segments(segments);
//! let merges = Healer::with_defaults().heal(&mut group, &namer)?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod source;
pub mod trace;
mod types;

pub use error::{CoreError, CoreResult};
pub use source::{ChannelId, SourceNamer};
pub use trace::{
    HealConfig, HealReport, Healer, MergeRejection, Rejection, Tolerance, TraceGroup, TraceSegment,
    DEFAULT_SAMPLE_RATE_TOLERANCE,
};
pub use types::{HiResTime, NANOS_PER_SECOND};
