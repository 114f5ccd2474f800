//! Single-line wire-protocol serialization
//!
//! Each filter bank becomes one fixed-width command line:
//!
//! ```text
//! F<bank:2><id:8><mask:8><mode:1><scale:1><ide:1><rtr:1>
//! ```
//!
//! with the identifier and mask rendered as full 32-bit hex fields
//! regardless of domain, so the line is lossless for both identifier
//! spaces. The block `F0` ... `F1` frames a configuration; the degenerate
//! sets use `FB` (block all, empty set) and `FA` (accept all, single
//! zero-mask filter).

use super::registers::{filter_mode, filter_scale};
use super::{ide_bit, rtr_bit};
use crate::filter::types::Block;
use core::fmt::{self, Write};

/// Render the wire command sequence programming `filters`.
pub fn write_wire_commands<W: Write>(
    w: &mut W,
    filters: &[Block],
    list_optimization: bool,
) -> fmt::Result {
    if filters.is_empty() {
        return writeln!(w, "FB");
    }
    if filters.len() == 1 && filters[0].is_pass_all() {
        return writeln!(w, "FA");
    }

    writeln!(w, "F0")?;
    for (bank, block) in filters.iter().enumerate() {
        writeln!(
            w,
            "F{:02X}{:08X}{:08X}{:01X}{:01X}{:01X}{:01X}",
            bank,
            block.id,
            block.mask,
            filter_mode(block, list_optimization),
            filter_scale(block, list_optimization),
            ide_bit(block.domain),
            rtr_bit(block.frame_kind),
        )?;
    }
    writeln!(w, "F1")
}
