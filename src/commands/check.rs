//! Filter verification command

use crate::cli::{parse_can_id, FilterArgs};
use rcanfilter_core::{accepts, synthesize};
use std::error::Error;

/// Synthesize filters and run each test identifier through the match
/// evaluator
pub fn cmd_check(args: &FilterArgs, ids: &[String]) -> Result<(), Box<dyn Error>> {
    let domain = args.domain();
    let frame_kind = args.frame_kind();

    let test_ids = ids
        .iter()
        .map(|s| parse_can_id(s, domain))
        .collect::<Result<Vec<_>, _>>()?;

    let ranges = args.parse_ranges()?;
    let result = synthesize(&ranges, args.max)?;

    println!("Test results ({} filters):", result.filters.len());
    let mut passed = 0;
    for id in &test_ids {
        let hit = accepts(&result.filters, *id, domain, frame_kind);
        println!("  ID 0x{:X}: {}", id, if hit { "PASS" } else { "FAIL" });
        if hit {
            passed += 1;
        }
    }
    println!("Summary: {}/{} accepted", passed, test_ids.len());

    Ok(())
}
