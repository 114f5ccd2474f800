//! Built-in self-test command

use rcanfilter_core::selftest::run_selftest;
use std::error::Error;

/// Run the engine's scenario suite and report per-case results
pub fn cmd_selftest() -> Result<(), Box<dyn Error>> {
    println!("Running filter engine self-test...");
    let report = run_selftest();

    for name in &report.failures {
        println!("  FAIL: {}", name);
    }
    println!("Self-test: {}/{} passed", report.passed, report.total);

    if report.all_passed() {
        Ok(())
    } else {
        Err("self-test failed".into())
    }
}
