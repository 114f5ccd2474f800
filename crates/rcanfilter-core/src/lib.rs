//! rcanfilter-core - CAN acceptance filter synthesis engine
//!
//! This crate turns a set of CAN identifier ranges into the smallest set of
//! hardware acceptance-filter entries (base identifier + bitmask pairs) that
//! accepts exactly the requested identifiers. The algorithm is the same
//! CIDR-style decomposition used for IP route aggregation: each range is
//! split into power-of-two aligned blocks, sibling blocks are merged back
//! together, and blocks covered by a wider block are discarded.
//!
//! It is designed to be `no_std` compatible and allocation-free so it can run
//! on a microcontroller with a few kilobytes of stack: all intermediate
//! storage lives in fixed-capacity [`heapless`] buffers and every loop is
//! bounded by a compile-time capacity.
//!
//! # Features
//!
//! - `std` - Enable standard library support (serde derives on public types)
//! - `embedded` - Conservative buffer profile for microcontroller targets
//!
//! # Example
//!
//! ```
//! use rcanfilter_core::{synthesize, FrameKind, IdentifierDomain, Range};
//!
//! let ranges = [Range::new(0x300, 0x30F, IdentifierDomain::Standard, FrameKind::Data).unwrap()];
//! let result = synthesize(&ranges, 14).unwrap();
//!
//! assert_eq!(result.filters.len(), 1);
//! assert!(result.accepts(0x305, IdentifierDomain::Standard, FrameKind::Data));
//! assert!(!result.accepts(0x310, IdentifierDomain::Standard, FrameKind::Data));
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod filter;
pub mod id;
pub mod output;
pub mod selftest;

pub use error::{Error, Result};
pub use filter::synth::{accepts, synthesize};
pub use filter::types::{Block, FilterSet, Range, Synthesis, MAX_FILTERS, MAX_RANGES};
pub use id::{FrameKind, IdentifierDomain};
