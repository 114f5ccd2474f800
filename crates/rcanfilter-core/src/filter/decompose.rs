//! Range-to-block decomposition
//!
//! Converts one inclusive identifier range into the minimal ordered list of
//! power-of-two aligned blocks covering exactly that range, greedy largest
//! block first. This is the same decomposition used to express an IP address
//! range as CIDR blocks.

use super::types::{Block, Range, Scratch};
use crate::error::Result;

/// Decompose `range` into canonical blocks appended to `out`.
///
/// Returns the number of blocks that could not be stored because `out` ran
/// out of capacity; a non-zero return means coverage of this range is
/// incomplete and counts toward the synthesis drop total.
pub(crate) fn decompose_into(range: &Range, out: &mut Scratch) -> Result<usize> {
    range.validate()?;

    let bits = range.domain.bits();
    let full = range.domain.full_mask();
    let mut current = range.start;
    let mut clipped = 0usize;

    while current <= range.end {
        // Grow the block while the next larger aligned block still starts at
        // `current` and ends at or before the range end. Reaching the domain
        // width yields the single zero-mask block covering the whole domain.
        let mut shift = 0;
        while shift < bits {
            let mask = (full << (shift + 1)) & full;
            let base = current & mask;
            let block_end = base | (!mask & full);
            if base == current && block_end <= range.end {
                shift += 1;
            } else {
                break;
            }
        }

        let mask = (full << shift) & full;
        let block = Block {
            id: current & mask,
            mask,
            domain: range.domain,
            frame_kind: range.frame_kind,
        };

        if out.push(block).is_err() {
            clipped += 1;
        }

        // Advance past the block; the checked add only trips on a block
        // ending at u32::MAX, which no domain can reach.
        let block_end = block.id | (!mask & full);
        match block_end.checked_add(1) {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(clipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::id::{FrameKind, IdentifierDomain};

    fn decompose(range: Range) -> Scratch {
        let mut out = Scratch::new();
        let clipped = decompose_into(&range, &mut out).unwrap();
        assert_eq!(clipped, 0);
        out
    }

    #[test]
    fn test_single_id_is_one_full_mask_block() {
        let range = Range::single(0x100, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 0x100);
        assert_eq!(blocks[0].mask, 0x7FF);
    }

    #[test]
    fn test_aligned_range_is_one_block() {
        let range = Range::new(0x300, 0x30F, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 0x300);
        assert_eq!(blocks[0].mask, 0x7F0);
    }

    #[test]
    fn test_full_domain_is_one_zero_mask_block() {
        let range = Range::new(0, 0x7FF, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_pass_all());

        let range = Range::new(0, 0x1FFF_FFFF, IdentifierDomain::Extended, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_pass_all());
    }

    #[test]
    fn test_unaligned_range_splits() {
        // 0x101..0x104 cannot be covered by one aligned block:
        // 0x101, 0x102-0x103, 0x104
        let range = Range::new(0x101, 0x104, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 3);
        assert_eq!((blocks[0].id, blocks[0].mask), (0x101, 0x7FF));
        assert_eq!((blocks[1].id, blocks[1].mask), (0x102, 0x7FE));
        assert_eq!((blocks[2].id, blocks[2].mask), (0x104, 0x7FF));
    }

    #[test]
    fn test_blocks_are_canonical_and_ordered() {
        let range = Range::new(0x0A3, 0x1C1, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        let mut next = 0x0A3;
        for block in &blocks {
            assert_eq!(block.id & block.mask, block.id);
            // mask is a contiguous run of high bits within the domain
            let inv = !block.mask & 0x7FF;
            assert_eq!(inv & (inv + 1), 0);
            // blocks tile the range in order with no gaps
            assert_eq!(block.id, next);
            next = block.end() + 1;
        }
        assert_eq!(next, 0x1C2);
    }

    #[test]
    fn test_domain_end_does_not_wrap() {
        let range = Range::new(0x7FE, 0x7FF, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let blocks = decompose(range);
        assert_eq!(blocks.len(), 1);
        assert_eq!((blocks[0].id, blocks[0].mask), (0x7FE, 0x7FE));
    }

    #[test]
    fn test_rejects_malformed_range() {
        let range = Range {
            start: 0x200,
            end: 0x100,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Data,
        };
        let mut out = Scratch::new();
        assert_eq!(
            decompose_into(&range, &mut out),
            Err(Error::InvalidRange {
                start: 0x200,
                end: 0x100
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_clipping_is_counted() {
        // Worst-case decomposition of a standard-domain range:
        // 0x001..0x7FE needs 20 blocks (10 up, 10 down).
        let range = Range::new(0x001, 0x7FE, IdentifierDomain::Standard, FrameKind::Data).unwrap();
        let mut out = Scratch::new();
        // Fill all but two slots so most of the range is clipped.
        let filler = Block {
            id: 0,
            mask: 0x7FF,
            domain: IdentifierDomain::Standard,
            frame_kind: FrameKind::Remote,
        };
        while out.len() < out.capacity() - 2 {
            out.push(filler).unwrap();
        }
        let clipped = decompose_into(&range, &mut out).unwrap();
        assert_eq!(clipped, 18);
        assert_eq!(out.len(), out.capacity());
    }
}
