//! CLI command implementations
//!
//! Each subcommand gets its own module; all of them go through the
//! `rcanfilter-core` synthesis entry point and only differ in how they
//! present the result.

pub mod check;
pub mod generate;
pub mod selftest;
