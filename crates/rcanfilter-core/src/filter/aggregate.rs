//! Block aggregation and redundancy elimination
//!
//! After decomposition the scratch buffer holds one block list per input
//! range, concatenated. Two passes shrink it without changing the accepted
//! identifier set:
//!
//! 1. Buddy aggregation: two same-size adjacent blocks whose union is the
//!    next larger aligned block are replaced by that block. Run to a fixed
//!    point, because each merge can expose a new buddy pair one level up.
//! 2. Subsumption pruning: a block whose accepted identifiers are all
//!    accepted by another block is dropped (matching is inclusive-OR across
//!    filters, so the narrow block contributes nothing).

use super::types::{Block, Scratch};
use crate::error::{Error, Result};

/// Whether `a` and `b` are buddies: same domain, frame kind and size, `b`
/// immediately follows `a`, and both halves share the bits above the mask
/// bit that merging clears.
fn can_merge(a: &Block, b: &Block) -> bool {
    if a.domain != b.domain || a.frame_kind != b.frame_kind || a.mask != b.mask {
        return false;
    }
    let parent_mask = (a.mask << 1) & a.domain.full_mask();
    b.id == a.id.wrapping_add(a.size()) && (a.id & parent_mask) == (b.id & parent_mask)
}

/// Merge a buddy pair into the enclosing block. Mask arithmetic is modulo
/// the domain width: merging the two half-domain blocks yields the zero
/// mask, i.e. the pass-all block.
fn merge(a: &Block) -> Block {
    let mask = (a.mask << 1) & a.domain.full_mask();
    Block {
        id: a.id & mask,
        mask,
        domain: a.domain,
        frame_kind: a.frame_kind,
    }
}

/// Sort so buddies become adjacent and, at equal base identifier, more
/// specific blocks come first.
fn sort_blocks(blocks: &mut [Block]) {
    blocks.sort_unstable_by(|a, b| a.id.cmp(&b.id).then(b.mask.cmp(&a.mask)));
}

/// Run buddy aggregation to a fixed point.
///
/// Each pass performs at most one merge and restarts, so the loop is bounded
/// by the initial block count; overrunning that budget indicates a sizing
/// bug and is reported as [`Error::ScratchExhausted`].
pub(crate) fn aggregate(blocks: &mut Scratch) -> Result<()> {
    let mut budget = blocks.len();

    loop {
        sort_blocks(blocks);

        let mut merged = false;
        for i in 0..blocks.len().saturating_sub(1) {
            if can_merge(&blocks[i], &blocks[i + 1]) {
                blocks[i] = merge(&blocks[i]);
                blocks.remove(i + 1);
                merged = true;
                break;
            }
        }

        if !merged || blocks.len() <= 1 {
            return Ok(());
        }
        if budget == 0 {
            return Err(Error::ScratchExhausted);
        }
        budget -= 1;
    }
}

/// Remove every block subsumed by another block, restarting the scan from
/// the removal point until a full pass removes nothing.
pub(crate) fn prune_subsumed(blocks: &mut Scratch) {
    let mut i = 0;
    while i < blocks.len() {
        let mut removed = false;
        for j in 0..blocks.len() {
            if i != j && blocks[j].subsumes(&blocks[i]) {
                blocks.remove(i);
                removed = true;
                break;
            }
        }
        if !removed {
            i += 1;
        }
    }
}
