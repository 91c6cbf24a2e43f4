//! In-memory sample buffer.

use crate::buffer::SampleBuffer;
use crate::error::{BufferError, BufferResult};
use bytes::BytesMut;
use std::any::Any;
use std::fmt;

/// Encoding of the samples held by an [`InMemoryBuffer`].
///
/// The buffer never decodes samples; the encoding only fixes the sample
/// width and gates which buffers may be spliced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEncoding {
    /// 16-bit signed integers.
    Int16,
    /// 32-bit signed integers.
    Int32,
    /// 32-bit IEEE floats.
    Float32,
    /// 64-bit IEEE floats.
    Float64,
}

impl SampleEncoding {
    /// Returns the size of one encoded sample in bytes.
    #[must_use]
    pub const fn sample_size(self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
        };
        f.write_str(name)
    }
}

/// An in-memory sample buffer.
///
/// Holds raw encoded samples in a contiguous byte buffer. Suitable for:
/// - Unit and integration tests
/// - Ingestion paths that decode packets straight into memory
///
/// Splicing two in-memory buffers moves the right buffer's bytes onto the
/// end of the left one without copying when the allocations line up.
///
/// # Example
///
/// ```rust
/// use seistrace_buffer::{InMemoryBuffer, SampleBuffer, SampleEncoding};
///
/// let buffer = InMemoryBuffer::from_bytes(SampleEncoding::Int16, &[0, 1, 0, 2]).unwrap();
/// assert_eq!(buffer.sample_count(), 2);
/// ```
#[derive(Debug)]
pub struct InMemoryBuffer {
    encoding: SampleEncoding,
    data: BytesMut,
}

impl InMemoryBuffer {
    /// Creates a new empty buffer with the given encoding.
    #[must_use]
    pub fn new(encoding: SampleEncoding) -> Self {
        Self {
            encoding,
            data: BytesMut::new(),
        }
    }

    /// Creates a buffer from raw encoded sample bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Misaligned`] if `data` is not a whole number
    /// of samples for the encoding.
    pub fn from_bytes(encoding: SampleEncoding, data: &[u8]) -> BufferResult<Self> {
        let sample_size = encoding.sample_size();
        if data.len() % sample_size != 0 {
            return Err(BufferError::Misaligned {
                len: data.len(),
                sample_size,
            });
        }
        Ok(Self {
            encoding,
            data: BytesMut::from(data),
        })
    }

    /// Creates a buffer holding `samples` zero-valued samples.
    ///
    /// Useful for tests that only exercise bookkeeping.
    #[must_use]
    pub fn zeroed(encoding: SampleEncoding, samples: u64) -> Self {
        let len = (samples as usize) * encoding.sample_size();
        Self {
            encoding,
            data: BytesMut::zeroed(len),
        }
    }

    /// Returns the sample encoding.
    #[must_use]
    pub const fn encoding(&self) -> SampleEncoding {
        self.encoding
    }

    /// Returns the raw encoded sample bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl SampleBuffer for InMemoryBuffer {
    fn sample_count(&self) -> u64 {
        (self.data.len() / self.encoding.sample_size()) as u64
    }

    fn can_append(&self, other: &dyn SampleBuffer) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.encoding == self.encoding)
    }

    fn append_from(&mut self, other: &mut dyn SampleBuffer) -> BufferResult<()> {
        let Some(other) = other.as_any_mut().downcast_mut::<Self>() else {
            return Err(BufferError::incompatible(
                "right-hand buffer is not an in-memory buffer",
            ));
        };
        if other.encoding != self.encoding {
            return Err(BufferError::incompatible(format!(
                "encoding mismatch: {} vs {}",
                self.encoding, other.encoding
            )));
        }
        self.data.unsplit(other.data.split());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
