//! Channel identity and source-name rendering boundary.

use crate::trace::TraceSegment;
use std::fmt;

/// Identity of the channel a segment was recorded on.
///
/// Network, station, location, and channel codes as they arrive from the
/// ingestion path. The core stores these verbatim; turning them into a
/// canonical source-name string is the job of a [`SourceNamer`]
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId {
    /// Network code.
    pub network: String,
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
    /// Channel code.
    pub channel: String,
}

impl ChannelId {
    /// Creates a channel identity from its four codes.
    pub fn new(
        network: impl Into<String>,
        station: impl Into<String>,
        location: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            station: station.into(),
            location: location.into(),
            channel: channel.into(),
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.network, self.station, self.location, self.channel
        )
    }
}

/// Renders the canonical source-name string for a segment.
///
/// Source names are the grouping key for sorting and healing. Rendering
/// is external to the core so that archives with different naming schemes
/// can share the engine.
///
/// # Invariants
///
/// - Deterministic and pure: the same segment must render to the same
///   string for the duration of one sort or heal call
/// - When `include_quality` is `true`, segments differing only in their
///   quality indicator must render to different names
pub trait SourceNamer {
    /// Returns the source name for `segment`.
    fn source_name(&self, segment: &TraceSegment, include_quality: bool) -> String;
}
