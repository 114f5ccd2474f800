//! Filter synthesis entry point and match evaluator

use super::aggregate::{aggregate, prune_subsumed};
use super::decompose::decompose_into;
use super::types::{Block, Range, Scratch, Synthesis, MAX_FILTERS, MAX_RANGES};
use crate::error::{Error, Result};
use crate::id::{FrameKind, IdentifierDomain};

/// Synthesize the smallest filter set accepting exactly the given ranges,
/// bounded by `max_filters` physical filter banks.
///
/// The call is pure and allocation-free: all intermediate blocks live in a
/// fixed-capacity scratch buffer owned by this call, so independent callers
/// may run in parallel without locking.
///
/// If the optimal set needs more than `max_filters` entries the result is
/// truncated and [`Synthesis::dropped`] reports how many filters were lost;
/// that is a degraded-but-defined outcome, not an error. Malformed ranges
/// and out-of-profile capacities are errors.
pub fn synthesize(ranges: &[Range], max_filters: usize) -> Result<Synthesis> {
    if max_filters == 0 || max_filters > MAX_FILTERS {
        return Err(Error::InvalidCapacity {
            requested: max_filters,
            max: MAX_FILTERS,
        });
    }
    if ranges.len() > MAX_RANGES {
        return Err(Error::TooManyRanges {
            requested: ranges.len(),
            max: MAX_RANGES,
        });
    }

    // Validate everything before emitting any block, so a bad range late in
    // the list does not produce a partial result.
    for range in ranges {
        range.validate()?;
    }

    let mut scratch = Scratch::new();
    let mut clipped = 0usize;
    for range in ranges {
        clipped += decompose_into(range, &mut scratch)?;
    }

    if scratch.is_empty() {
        return Ok(Synthesis::default());
    }

    aggregate(&mut scratch)?;
    prune_subsumed(&mut scratch);

    let keep = scratch.len().min(max_filters);
    let dropped = clipped + (scratch.len() - keep);

    if dropped > 0 {
        log::warn!(
            "filter list truncated: {} of {} filters dropped, some requested identifiers will not be accepted",
            dropped,
            scratch.len() + clipped
        );
    }

    let mut result = Synthesis {
        filters: heapless::Vec::new(),
        dropped,
    };
    for block in &scratch[..keep] {
        // Cannot fail: keep <= max_filters <= MAX_FILTERS.
        let _ = result.filters.push(*block);
    }

    log::debug!(
        "synthesized {} filters from {} ranges ({} dropped)",
        result.filters.len(),
        ranges.len(),
        dropped
    );

    Ok(result)
}

/// Whether any filter in `filters` accepts the query identifier.
///
/// A filter accepts iff its domain and frame kind match and
/// `(id & mask) == (base & mask)`.
pub fn accepts(filters: &[Block], id: u32, domain: IdentifierDomain, frame_kind: FrameKind) -> bool {
    filters
        .iter()
        .any(|block| block.matches(id, domain, frame_kind))
}
