//! Sample buffer trait definition.

use crate::error::BufferResult;
use std::any::Any;
use std::fmt;

/// An ordered sequence of encoded samples owned by one trace segment.
///
/// Sample buffers are **opaque sample stores**. The trace engine queries
/// their length and splices one buffer onto the end of another when two
/// segments merge; it never decodes or inspects individual samples.
///
/// # Invariants
///
/// - `sample_count` reflects exactly the samples currently held
/// - After a successful `append_from`, the callee holds every sample from
///   both buffers in order and the drained buffer is empty
/// - After a failed `append_from`, both buffers are unchanged
/// - Dropping a buffer releases its samples; no operation leaves two live
///   buffers sharing the same samples
///
/// # Implementors
///
/// - [`super::InMemoryBuffer`] - Raw encoded samples in memory
pub trait SampleBuffer: fmt::Debug + Send {
    /// Returns the number of encoded samples currently held.
    fn sample_count(&self) -> u64;

    /// Returns `true` if the buffer holds no samples.
    fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }

    /// Checks whether `other` can be spliced onto the end of this buffer.
    ///
    /// Implementations typically require `other` to be the same concrete
    /// type with the same sample encoding. Callers probe this before a
    /// merge so that incompatible pairs can be skipped without error.
    fn can_append(&self, other: &dyn SampleBuffer) -> bool;

    /// Splices all samples from `other` onto the end of this buffer.
    ///
    /// On success `other` is left empty and may be dropped by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffers are incompatible. Both buffers are
    /// left unchanged in that case.
    fn append_from(&mut self, other: &mut dyn SampleBuffer) -> BufferResult<()>;

    /// Returns this buffer as [`Any`] for concrete-type downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Returns this buffer as mutable [`Any`] for concrete-type downcasts.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
