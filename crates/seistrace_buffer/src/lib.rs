//! # SeisTrace Buffer
//!
//! Sample buffer trait and implementations for SeisTrace.
//!
//! This crate provides the lowest-level payload abstraction for SeisTrace.
//! Sample buffers are **opaque sample stores** - the trace engine never
//! interprets the encoded samples they hold.
//!
//! ## Design Principles
//!
//! - Buffers are ordered sequences of encoded samples (query length,
//!   splice another buffer onto the end, drop to release)
//! - No knowledge of trace metadata, channels, or timing
//! - A failed splice leaves both buffers intact, so callers can keep the
//!   segments that own them
//!
//! ## Available Buffers
//!
//! - [`InMemoryBuffer`] - Raw encoded samples held in memory
//!
//! ## Example
//!
//! ```rust
//! use seistrace_buffer::{InMemoryBuffer, SampleBuffer, SampleEncoding};
//!
//! let mut left = InMemoryBuffer::zeroed(SampleEncoding::Int32, 10);
//! let mut right = InMemoryBuffer::zeroed(SampleEncoding::Int32, 5);
//! left.append_from(&mut right).unwrap();
//! assert_eq!(left.sample_count(), 15);
//! assert_eq!(right.sample_count(), 0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod error;
mod memory;

pub use buffer::SampleBuffer;
pub use error::{BufferError, BufferResult};
pub use memory::{InMemoryBuffer, SampleEncoding};
