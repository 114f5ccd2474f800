//! Filter synthesis types and buffer capacity profiles

use crate::error::{Error, Result};
use crate::id::{FrameKind, IdentifierDomain};

/// Maximum number of filter banks a synthesis call can produce
#[cfg(feature = "embedded")]
pub const MAX_FILTERS: usize = 14;
/// Maximum number of filter banks a synthesis call can produce
#[cfg(not(feature = "embedded"))]
pub const MAX_FILTERS: usize = 64;

/// Maximum number of input ranges per synthesis call
#[cfg(feature = "embedded")]
pub const MAX_RANGES: usize = 8;
/// Maximum number of input ranges per synthesis call
#[cfg(not(feature = "embedded"))]
pub const MAX_RANGES: usize = 128;

/// Scratch capacity for intermediate blocks before aggregation shrinks them.
/// The embedded profile keeps this tight to stay within a small stack budget.
#[cfg(feature = "embedded")]
pub(crate) const SCRATCH_CAPACITY: usize = MAX_FILTERS * 2;
#[cfg(not(feature = "embedded"))]
pub(crate) const SCRATCH_CAPACITY: usize = MAX_FILTERS * 4;

/// Scratch buffer owned by one synthesis call
pub(crate) type Scratch = heapless::Vec<Block, SCRATCH_CAPACITY>;

/// An inclusive range of CAN identifiers to accept
///
/// Created by the caller from parsed input; the engine treats it as
/// read-only. Use [`Range::new`] or [`Range::single`] so the bounds are
/// checked against the domain's bit width up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// First identifier in the range
    pub start: u32,
    /// Last identifier in the range (inclusive)
    pub end: u32,
    /// Identifier space the range lives in
    pub domain: IdentifierDomain,
    /// Frame kind the range applies to
    pub frame_kind: FrameKind,
}

impl Range {
    /// Create a validated inclusive range
    pub fn new(start: u32, end: u32, domain: IdentifierDomain, frame_kind: FrameKind) -> Result<Self> {
        let range = Self {
            start,
            end,
            domain,
            frame_kind,
        };
        range.validate()?;
        Ok(range)
    }

    /// Create a range covering a single identifier
    pub fn single(id: u32, domain: IdentifierDomain, frame_kind: FrameKind) -> Result<Self> {
        Self::new(id, id, domain, frame_kind)
    }

    /// Check the range invariants: `start <= end`, both within the domain
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        if !self.domain.contains(self.end) {
            return Err(Error::IdOutOfRange {
                id: self.end,
                domain: self.domain,
            });
        }
        Ok(())
    }
}

/// One acceptance filter: a CIDR-style identifier/mask block
///
/// An identifier `x` is accepted iff `(x & mask) == id`, with the block in
/// canonical form (`id & mask == id`). The mask is always a run of high
/// 1-bits followed by low 0-bits within the domain width, which is exactly
/// what CAN controller filter banks implement in mask mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Base identifier, pre-masked
    pub id: u32,
    /// Acceptance mask
    pub mask: u32,
    /// Identifier space the block filters
    pub domain: IdentifierDomain,
    /// Frame kind the block filters
    pub frame_kind: FrameKind,
}

impl Block {
    /// Number of identifiers the block accepts, modulo the domain width
    /// (the full-domain zero-mask block reports 0)
    pub const fn size(&self) -> u32 {
        self.mask.wrapping_neg() & self.domain.full_mask()
    }

    /// Last identifier covered by the block
    pub const fn end(&self) -> u32 {
        self.id | (!self.mask & self.domain.full_mask())
    }

    /// Whether the block accepts everything in its domain
    pub const fn is_pass_all(&self) -> bool {
        self.id == 0 && self.mask == 0
    }

    /// Whether a query identifier of the given domain and frame kind passes
    /// this filter
    pub fn matches(&self, id: u32, domain: IdentifierDomain, frame_kind: FrameKind) -> bool {
        self.domain == domain
            && self.frame_kind == frame_kind
            && (id & self.mask) == (self.id & self.mask)
    }

    /// Whether every identifier accepted by `other` is also accepted by
    /// `self` (same domain and frame kind)
    pub fn subsumes(&self, other: &Block) -> bool {
        self.domain == other.domain
            && self.frame_kind == other.frame_kind
            && (other.mask & self.mask) == self.mask
            && (other.id & self.mask) == (self.id & self.mask)
    }
}

/// Ordered, bounded list of filter blocks
pub type FilterSet = heapless::Vec<Block, MAX_FILTERS>;

/// Result of one synthesis call: the (possibly truncated) filter set plus an
/// explicit coverage-loss count
///
/// `dropped > 0` means the requested ranges needed more filter banks than
/// the capacity ceiling allowed and some identifiers will not be accepted by
/// hardware. How to surface that is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Synthesis {
    /// The filters to program, at most the requested capacity
    pub filters: FilterSet,
    /// Number of filters lost to the capacity ceiling
    pub dropped: usize,
}

impl Synthesis {
    /// Whether any filter in the set accepts the query
    pub fn accepts(&self, id: u32, domain: IdentifierDomain, frame_kind: FrameKind) -> bool {
        crate::filter::synth::accepts(&self.filters, id, domain, frame_kind)
    }

    /// Whether the set is the single pass-all filter
    pub fn is_pass_all(&self) -> bool {
        self.filters.len() == 1 && self.filters[0].is_pass_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(Range::new(0x100, 0x10F, IdentifierDomain::Standard, FrameKind::Data).is_ok());
        assert_eq!(
            Range::new(0x10F, 0x100, IdentifierDomain::Standard, FrameKind::Data),
            Err(Error::InvalidRange {
                start: 0x10F,
                end: 0x100
            })
        );
        assert_eq!(
            Range::new(0x100, 0x800, IdentifierDomain::Standard, FrameKind::Data),
            Err(Error::IdOutOfRange {
                id: 0x800,
                domain: IdentifierDomain::Standard
            })
        );
        // 0x800 is fine as an extended identifier
        assert!(Range::single(0x800, IdentifierDomain::Extended, FrameKind::Data).is_ok());
    }

    #[test]
    fn test_block_geometry() {
        let block = Block {
            id: 0x300,
            mask: 0x7F0,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        assert_eq!(block.size(), 16);
        assert_eq!(block.end(), 0x30F);
        assert!(!block.is_pass_all());

        let all = Block {
            id: 0,
            mask: 0,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        assert!(all.is_pass_all());
        assert_eq!(all.size(), 0x800 & 0x7FF); // wraps to 0: full-domain block
        assert_eq!(all.end(), 0x7FF);
    }

    #[test]
    fn test_block_matches_isolation() {
        let block = Block {
            id: 0x100,
            mask: 0x7FF,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        assert!(block.matches(0x100, IdentifierDomain::Standard, FrameKind::Data));
        assert!(!block.matches(0x100, IdentifierDomain::Extended, FrameKind::Data));
        assert!(!block.matches(0x100, IdentifierDomain::Standard, FrameKind::Remote));
        assert!(!block.matches(0x101, IdentifierDomain::Standard, FrameKind::Data));
    }

    #[test]
    fn test_block_subsumes() {
        let wide = Block {
            id: 0x300,
            mask: 0x7F0,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        let narrow = Block {
            id: 0x305,
            mask: 0x7FF,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        assert!(wide.subsumes(&narrow));
        assert!(!narrow.subsumes(&wide));
        // identical blocks subsume each other
        assert!(wide.subsumes(&wide));

        let other_kind = Block {
            frame_kind: FrameKind::Remote,
            ..narrow
        };
        assert!(!wide.subsumes(&other_kind));
    }
}
