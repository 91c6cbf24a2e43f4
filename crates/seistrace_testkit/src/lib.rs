//! # SeisTrace Testkit
//!
//! Test utilities for SeisTrace.
//!
//! This crate provides:
//! - Segment and group fixtures, including an FDSN-style source namer
//! - Property-based test generators using proptest
//! - Cross-crate integration tests for the sort/heal engine (under
//!   `tests/`)
//!
//! ## Usage
//!
//! ```rust
//! use seistrace_testkit::prelude::*;
//!
//! let mut group = fragment_group("ANMO", 0.0, 40.0, &[100, 100, 100]);
//! let merges = group.heal(&FdsnNamer).unwrap();
//! assert_eq!(merges, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
