//! rcanfilter - CAN acceptance filter generator
//!
//! Turns CAN identifier ranges into the smallest set of hardware acceptance
//! filters (base identifier + mask pairs) that accepts exactly the requested
//! identifiers, using CIDR-style range decomposition and block aggregation.
//! The synthesis engine lives in `rcanfilter-core` and is `no_std` so the
//! same code runs inside device firmware; this binary is the desktop front
//! end for generating, inspecting and verifying filter configurations.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    match cli.command {
        Commands::Generate { filter, output } => commands::generate::cmd_generate(&filter, output),
        Commands::Check { filter, ids } => commands::check::cmd_check(&filter, &ids),
        Commands::Selftest => commands::selftest::cmd_selftest(),
    }
}
