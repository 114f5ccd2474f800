//! Vendor HAL source rendering
//!
//! Emits ready-to-paste C source configuring one `CAN_FilterTypeDef` per
//! filter bank, for projects that program filters through the vendor HAL
//! instead of a wire protocol.

use super::registers::{filter_mode, filter_scale};
use crate::filter::types::Block;
use core::fmt::{self, Write};

/// Render HAL filter-config source for `filters`.
pub fn write_hal_config<W: Write>(
    w: &mut W,
    filters: &[Block],
    list_optimization: bool,
) -> fmt::Result {
    for (bank, block) in filters.iter().enumerate() {
        let mode = if filter_mode(block, list_optimization) == 1 {
            "CAN_FILTERMODE_IDLIST"
        } else {
            "CAN_FILTERMODE_IDMASK"
        };
        let scale = if filter_scale(block, list_optimization) == 1 {
            "CAN_FILTERSCALE_32BIT"
        } else {
            "CAN_FILTERSCALE_16BIT"
        };

        writeln!(w, "CAN_FilterTypeDef filter{} = {{", bank)?;
        writeln!(w, "  .FilterIdHigh = 0x{:04X},", block.id >> 16)?;
        writeln!(w, "  .FilterIdLow = 0x{:04X},", block.id & 0xFFFF)?;
        writeln!(w, "  .FilterMaskIdHigh = 0x{:04X},", block.mask >> 16)?;
        writeln!(w, "  .FilterMaskIdLow = 0x{:04X},", block.mask & 0xFFFF)?;
        writeln!(w, "  .FilterFIFOAssignment = CAN_FILTER_FIFO0,")?;
        writeln!(w, "  .FilterBank = {},", bank)?;
        writeln!(w, "  .FilterMode = {},", mode)?;
        writeln!(w, "  .FilterScale = {},", scale)?;
        writeln!(w, "  .FilterActivation = ENABLE")?;
        writeln!(w, "}};")?;
        writeln!(w, "HAL_CAN_ConfigFilter(&hcan1, &filter{});", bank)?;
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{FrameKind, IdentifierDomain};
    use std::string::String;

    #[test]
    fn test_hal_source_rendering() {
        let filters = [Block {
            id: 0x1FFFF,
            mask: 0x1FFF_FFFF,
            domain: IdentifierDomain::Extended,
            frame_kind: FrameKind::Data,
        }];
        let mut out = String::new();
        write_hal_config(&mut out, &filters, false).unwrap();

        assert!(out.starts_with("CAN_FilterTypeDef filter0 = {\n"));
        assert!(out.contains("  .FilterIdHigh = 0x0001,\n"));
        assert!(out.contains("  .FilterIdLow = 0xFFFF,\n"));
        assert!(out.contains("  .FilterMaskIdHigh = 0x1FFF,\n"));
        assert!(out.contains("  .FilterMaskIdLow = 0xFFFF,\n"));
        assert!(out.contains("  .FilterMode = CAN_FILTERMODE_IDMASK,\n"));
        assert!(out.contains("  .FilterScale = CAN_FILTERSCALE_32BIT,\n"));
        assert!(out.contains("HAL_CAN_ConfigFilter(&hcan1, &filter0);\n"));
    }
}
