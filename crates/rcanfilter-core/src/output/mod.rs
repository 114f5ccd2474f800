//! Text serializers over a computed filter set
//!
//! Thin renderers that turn a [`Block`](crate::filter::types::Block) list
//! into register dumps, vendor HAL source, or single-line wire commands.
//! Everything writes into [`core::fmt::Write`] so the same code serves both
//! a desktop stdout and an embedded text console.

mod hal;
mod registers;
mod slcan;

pub use hal::write_hal_config;
pub use registers::{filter_mode, filter_scale, fr1_value, fr2_value, write_register_dump};
pub use slcan::write_wire_commands;

use crate::id::{FrameKind, IdentifierDomain};

/// IDE bit as programmed into a filter bank (0 = standard, 1 = extended)
pub(crate) fn ide_bit(domain: IdentifierDomain) -> u32 {
    match domain {
        IdentifierDomain::Standard => 0,
        IdentifierDomain::Extended => 1,
    }
}

/// RTR bit as programmed into a filter bank (0 = data, 1 = remote)
pub(crate) fn rtr_bit(frame_kind: FrameKind) -> u32 {
    match frame_kind {
        FrameKind::Data => 0,
        FrameKind::Remote => 1,
    }
}
