//! Error types for rcanfilter-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use crate::id::IdentifierDomain;
use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Input validation errors
    /// Range start is greater than its end
    InvalidRange {
        /// Requested range start
        start: u32,
        /// Requested range end
        end: u32,
    },
    /// Identifier does not fit the domain's bit width
    IdOutOfRange {
        /// The offending identifier
        id: u32,
        /// Domain the identifier was tagged with
        domain: IdentifierDomain,
    },
    /// More input ranges than the build profile supports
    TooManyRanges {
        /// Number of ranges supplied
        requested: usize,
        /// Maximum supported by this build
        max: usize,
    },
    /// Requested filter capacity is zero or above the build profile maximum
    InvalidCapacity {
        /// Capacity requested by the caller
        requested: usize,
        /// Maximum supported by this build
        max: usize,
    },

    // Internal bound violations
    /// The aggregation fixed point overran its iteration budget.
    ///
    /// This cannot happen for a correctly sized scratch buffer; it indicates
    /// a buffer sizing bug rather than bad input, and is reported distinctly
    /// from capacity truncation.
    ScratchExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start 0x{:X} > end 0x{:X}", start, end)
            }
            Self::IdOutOfRange { id, domain } => {
                write!(
                    f,
                    "identifier 0x{:X} exceeds {}-bit {} range",
                    id,
                    domain.bits(),
                    domain
                )
            }
            Self::TooManyRanges { requested, max } => {
                write!(f, "{} ranges exceed the limit of {}", requested, max)
            }
            Self::InvalidCapacity { requested, max } => {
                write!(f, "invalid filter capacity {} (valid: 1-{})", requested, max)
            }
            Self::ScratchExhausted => write!(f, "scratch buffer exhausted during aggregation"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
