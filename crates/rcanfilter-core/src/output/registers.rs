//! Filter-bank register image computation and dump
//!
//! Computes the FR1/FR2 register values and the mode/scale selection for
//! bxCAN-style filter banks. The bank assignment itself (which physical bank
//! gets which filter) is positional: bank `i` receives filter `i`.

use super::{ide_bit, rtr_bit};
use crate::filter::types::Block;
use crate::id::IdentifierDomain;
use core::fmt::{self, Write};

/// First filter-bank register: identifier side.
///
/// Standard: `[RTR][STDID << 21]`; extended: `[IDE][EXTID]`.
pub fn fr1_value(block: &Block) -> u32 {
    match block.domain {
        IdentifierDomain::Standard => {
            (rtr_bit(block.frame_kind) << 31) | ((block.id & 0x7FF) << 21)
        }
        IdentifierDomain::Extended => (1 << 31) | (block.id & 0x1FFF_FFFF),
    }
}

/// Second filter-bank register: mask side (or second identifier in list
/// mode, where the mask is the full-domain mask and equals a single id).
pub fn fr2_value(block: &Block) -> u32 {
    match block.domain {
        IdentifierDomain::Standard => {
            (rtr_bit(block.frame_kind) << 31) | ((block.mask & 0x7FF) << 21)
        }
        IdentifierDomain::Extended => block.mask & 0x1FFF_FFFF,
    }
}

/// Bank mode selection: 1 = identifier list, 0 = mask.
///
/// A full-domain mask accepts exactly one identifier, which list mode
/// expresses more cheaply; `list_optimization` turns that substitution on.
pub fn filter_mode(block: &Block, list_optimization: bool) -> u8 {
    if list_optimization && block.mask == block.domain.full_mask() {
        1
    } else {
        0
    }
}

/// Bank scale selection: 1 = 32-bit, 0 = 16-bit.
///
/// Extended identifiers need the 32-bit scale; standard identifiers fit the
/// 16-bit scale in list mode.
pub fn filter_scale(block: &Block, list_optimization: bool) -> u8 {
    match block.domain {
        IdentifierDomain::Extended => 1,
        IdentifierDomain::Standard => {
            if filter_mode(block, list_optimization) == 1 {
                0
            } else {
                1
            }
        }
    }
}

/// Render one line per filter bank with the raw id/mask, register images and
/// mode/scale selection.
pub fn write_register_dump<W: Write>(
    w: &mut W,
    filters: &[Block],
    list_optimization: bool,
) -> fmt::Result {
    for (bank, block) in filters.iter().enumerate() {
        let mode = if filter_mode(block, list_optimization) == 1 {
            "LIST"
        } else {
            "MASK"
        };
        let scale = if filter_scale(block, list_optimization) == 1 {
            "32BIT"
        } else {
            "16BIT"
        };
        writeln!(
            w,
            "BANK={:02} ID=0x{:08X} MASK=0x{:08X} FR1=0x{:08X} FR2=0x{:08X} IDE={} RTR={} MODE={} SCALE={}",
            bank,
            block.id,
            block.mask,
            fr1_value(block),
            fr2_value(block),
            ide_bit(block.domain),
            rtr_bit(block.frame_kind),
            mode,
            scale,
        )?;
    }
    Ok(())
}
