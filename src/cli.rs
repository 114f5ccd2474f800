//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use rcanfilter_core::{FrameKind, IdentifierDomain, Range, MAX_FILTERS};

/// Parse a CAN identifier written in hex (with or without `0x`) and check it
/// against the domain's bit width
pub fn parse_can_id(s: &str, domain: IdentifierDomain) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let id = u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{}': {}", s, e))?;
    if !domain.contains(id) {
        return Err(format!(
            "identifier 0x{:X} exceeds {}-bit {} range",
            id,
            domain.bits(),
            domain
        ));
    }
    Ok(id)
}

/// Parse a range token: a single identifier (`0x100`) or a dash-separated
/// range (`0x100-0x10F`). Reversed bounds are swapped.
pub fn parse_range_token(
    s: &str,
    domain: IdentifierDomain,
    frame_kind: FrameKind,
) -> Result<Range, String> {
    let range = match s.split_once('-') {
        None => {
            let id = parse_can_id(s, domain)?;
            Range::single(id, domain, frame_kind)
        }
        Some((first, second)) => {
            let mut start = parse_can_id(first, domain)?;
            let mut end = parse_can_id(second, domain)?;
            if start > end {
                core::mem::swap(&mut start, &mut end);
            }
            Range::new(start, end, domain, frame_kind)
        }
    };
    range.map_err(|e| e.to_string())
}

/// Output format for generated filters
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-bank register dump (id/mask plus FR1/FR2 images)
    Registers,
    /// Vendor HAL C source
    Hal,
    /// Single-line wire commands
    Slcan,
}

/// Options shared by every command that synthesizes filters
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// Identifier or range tokens, e.g. 0x100 or 0x100-0x10F
    #[arg(required = true)]
    pub ranges: Vec<String>,

    /// Use 29-bit extended identifiers (default: 11-bit standard)
    #[arg(long)]
    pub ext: bool,

    /// Filter remote-transmission requests (default: data frames)
    #[arg(long)]
    pub rtr: bool,

    /// Maximum number of hardware filter banks
    #[arg(long, default_value_t = MAX_FILTERS)]
    pub max: usize,

    /// Force mask mode for all banks (disable list-mode optimization)
    #[arg(long)]
    pub mask: bool,
}

impl FilterArgs {
    /// Identifier domain selected by the flags
    pub fn domain(&self) -> IdentifierDomain {
        if self.ext {
            IdentifierDomain::Extended
        } else {
            IdentifierDomain::Standard
        }
    }

    /// Frame kind selected by the flags
    pub fn frame_kind(&self) -> FrameKind {
        if self.rtr {
            FrameKind::Remote
        } else {
            FrameKind::Data
        }
    }

    /// Parse every range token against the selected domain and frame kind
    pub fn parse_ranges(&self) -> Result<Vec<Range>, String> {
        self.ranges
            .iter()
            .map(|token| parse_range_token(token, self.domain(), self.frame_kind()))
            .collect()
    }
}

#[derive(Parser)]
#[command(name = "rcanfilter")]
#[command(author, version, about = "CAN acceptance filter generator", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate filters and print them in the chosen format
    Generate {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "registers")]
        output: OutputFormat,
    },

    /// Generate filters and evaluate test identifiers against them
    Check {
        #[command(flatten)]
        filter: FilterArgs,

        /// Identifiers to test (repeatable)
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },

    /// Run the built-in self-test
    Selftest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_can_id() {
        assert_eq!(parse_can_id("0x100", IdentifierDomain::Standard), Ok(0x100));
        assert_eq!(parse_can_id("7FF", IdentifierDomain::Standard), Ok(0x7FF));
        assert!(parse_can_id("0x800", IdentifierDomain::Standard).is_err());
        assert_eq!(parse_can_id("0x800", IdentifierDomain::Extended), Ok(0x800));
        assert!(parse_can_id("zzz", IdentifierDomain::Standard).is_err());
    }

    #[test]
    fn test_parse_range_token() {
        let r = parse_range_token("0x100", IdentifierDomain::Standard, FrameKind::Data).unwrap();
        assert_eq!((r.start, r.end), (0x100, 0x100));

        let r = parse_range_token("0x100-0x10F", IdentifierDomain::Standard, FrameKind::Data).unwrap();
        assert_eq!((r.start, r.end), (0x100, 0x10F));

        // reversed bounds are swapped, matching lenient hand-typed input
        let r = parse_range_token("0x10F-0x100", IdentifierDomain::Standard, FrameKind::Data).unwrap();
        assert_eq!((r.start, r.end), (0x100, 0x10F));

        assert!(parse_range_token("0x100-0x800", IdentifierDomain::Standard, FrameKind::Data).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "rcanfilter",
            "generate",
            "--ext",
            "--output",
            "slcan",
            "0x100",
            "0x200-0x20F",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { filter, output } => {
                assert_eq!(output, OutputFormat::Slcan);
                assert_eq!(filter.ranges.len(), 2);
                assert_eq!(filter.domain(), IdentifierDomain::Extended);
                assert_eq!(filter.frame_kind(), FrameKind::Data);
                assert_eq!(filter.max, MAX_FILTERS);
            }
            _ => panic!("wrong command"),
        }
    }
}
