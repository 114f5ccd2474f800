//! Filter generation command

use crate::cli::{FilterArgs, OutputFormat};
use rcanfilter_core::output::{write_hal_config, write_register_dump, write_wire_commands};
use rcanfilter_core::synthesize;
use std::error::Error;

/// Synthesize filters from the CLI arguments and print them in the chosen
/// format
pub fn cmd_generate(args: &FilterArgs, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let ranges = args.parse_ranges()?;
    let result = synthesize(&ranges, args.max)?;

    if result.dropped > 0 {
        eprintln!(
            "warning: {} filter(s) dropped to fit {} banks; some requested identifiers will not be accepted",
            result.dropped, args.max
        );
        eprintln!("consider fewer ranges or a higher --max");
    }

    let list_optimization = !args.mask;
    let mut out = String::new();
    match format {
        OutputFormat::Registers => write_register_dump(&mut out, &result.filters, list_optimization)?,
        OutputFormat::Hal => write_hal_config(&mut out, &result.filters, list_optimization)?,
        OutputFormat::Slcan => write_wire_commands(&mut out, &result.filters, list_optimization)?,
    }
    print!("{}", out);

    log::info!(
        "generated {} filters from {} ranges",
        result.filters.len(),
        ranges.len()
    );
    Ok(())
}
