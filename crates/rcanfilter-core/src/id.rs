//! CAN identifier domains and frame kinds
//!
//! A CAN bus carries two independent identifier spaces: 11-bit "standard"
//! identifiers and 29-bit "extended" identifiers. The same numeric value
//! names different messages in the two spaces, so filters never mix them.
//! The same holds for data frames vs remote-transmission requests.

use core::fmt;

/// The identifier space a CAN identifier or filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentifierDomain {
    /// 11-bit identifiers (CAN 2.0A)
    Standard,
    /// 29-bit identifiers (CAN 2.0B)
    Extended,
}

impl IdentifierDomain {
    /// Bit width of identifiers in this domain
    pub const fn bits(self) -> u32 {
        match self {
            Self::Standard => 11,
            Self::Extended => 29,
        }
    }

    /// Largest representable identifier (0x7FF or 0x1FFFFFFF)
    pub const fn max_id(self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Mask with every identifier bit set; a filter with this mask accepts
    /// a single identifier
    pub const fn full_mask(self) -> u32 {
        self.max_id()
    }

    /// Whether `id` fits within this domain's bit width
    pub const fn contains(self, id: u32) -> bool {
        id <= self.max_id()
    }
}

impl fmt::Display for IdentifierDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Whether a filter applies to data frames or remote-transmission requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    /// Data frame
    Data,
    /// Remote-transmission request
    Remote,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bounds() {
        assert_eq!(IdentifierDomain::Standard.max_id(), 0x7FF);
        assert_eq!(IdentifierDomain::Extended.max_id(), 0x1FFF_FFFF);
        assert_eq!(IdentifierDomain::Standard.full_mask(), 0x7FF);
        assert_eq!(IdentifierDomain::Extended.bits(), 29);
    }

    #[test]
    fn test_domain_contains() {
        assert!(IdentifierDomain::Standard.contains(0x7FF));
        assert!(!IdentifierDomain::Standard.contains(0x800));
        assert!(IdentifierDomain::Extended.contains(0x800));
        assert!(!IdentifierDomain::Extended.contains(0x2000_0000));
    }
}
