//! Built-in self-test
//!
//! A fixed scenario suite exercising the whole synthesis pipeline through
//! the public entry points, suitable for running on the target at boot or
//! from a shell command. The harness returns a structured report instead of
//! printing, so the caller decides how to surface failures.

use crate::filter::synth::synthesize;
use crate::filter::types::Range;
use crate::id::{FrameKind, IdentifierDomain};

/// Filter capacity used by the scenarios; valid in both buffer profiles.
const SELFTEST_CAPACITY: usize = 14;

/// Outcome of [`run_selftest`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Number of scenarios that passed
    pub passed: usize,
    /// Total number of scenarios
    pub total: usize,
    /// Names of the scenarios that failed
    pub failures: heapless::Vec<&'static str, 16>,
}

impl SelfTestReport {
    /// Whether every scenario passed
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    fn record(&mut self, name: &'static str, ok: bool) {
        self.total += 1;
        if ok {
            self.passed += 1;
        } else {
            let _ = self.failures.push(name);
        }
    }
}

/// Run the scenario suite and report per-case results.
pub fn run_selftest() -> SelfTestReport {
    use FrameKind::{Data, Remote};
    use IdentifierDomain::{Extended, Standard};

    let mut report = SelfTestReport::default();

    report.record("single id, data frame", {
        let ranges = [Range::single(0x100, Standard, Data).unwrap()];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                r.filters.len() == 1
                    && r.filters[0].id == 0x100
                    && r.filters[0].mask == 0x7FF
                    && r.filters[0].frame_kind == Data
            }
            Err(_) => false,
        }
    });

    report.record("single id, remote frame", {
        let ranges = [Range::single(0x200, Standard, Remote).unwrap()];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                r.filters.len() == 1
                    && r.filters[0].id == 0x200
                    && r.filters[0].mask == 0x7FF
                    && r.filters[0].frame_kind == Remote
            }
            Err(_) => false,
        }
    });

    report.record("aligned data range", {
        let ranges = [Range::new(0x300, 0x30F, Standard, Data).unwrap()];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                !r.filters.is_empty()
                    && r.accepts(0x300, Standard, Data)
                    && r.accepts(0x30F, Standard, Data)
                    && !r.accepts(0x300, Standard, Remote)
                    && !r.accepts(0x310, Standard, Data)
            }
            Err(_) => false,
        }
    });

    report.record("standard/extended isolation", {
        let ranges = [
            Range::single(0x100, Standard, Data).unwrap(),
            Range::single(0x1FFFF, Extended, Data).unwrap(),
        ];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                r.filters.len() >= 2
                    && r.accepts(0x100, Standard, Data)
                    && r.accepts(0x1FFFF, Extended, Data)
                    && !r.accepts(0x100, Extended, Data)
                    && !r.accepts(0x1FFFF, Standard, Data)
            }
            Err(_) => false,
        }
    });

    report.record("data/remote isolation", {
        let ranges = [
            Range::single(0x400, Standard, Data).unwrap(),
            Range::single(0x400, Standard, Remote).unwrap(),
        ];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                r.filters.len() >= 2
                    && r.accepts(0x400, Standard, Data)
                    && r.accepts(0x400, Standard, Remote)
                    && !r.accepts(0x401, Standard, Data)
            }
            Err(_) => false,
        }
    });

    report.record("mixed domains, kinds and ranges", {
        let ranges = [
            Range::new(0x500, 0x50F, Standard, Data).unwrap(),
            Range::single(0x600, Standard, Remote).unwrap(),
            Range::single(0x10_0000, Extended, Data).unwrap(),
        ];
        match synthesize(&ranges, SELFTEST_CAPACITY) {
            Ok(r) => {
                r.filters.len() >= 3
                    && r.accepts(0x500, Standard, Data)
                    && r.accepts(0x50F, Standard, Data)
                    && r.accepts(0x600, Standard, Remote)
                    && r.accepts(0x10_0000, Extended, Data)
                    && !r.accepts(0x500, Standard, Remote)
                    && !r.accepts(0x600, Standard, Data)
                    && !r.accepts(0x10_0000, Standard, Data)
            }
            Err(_) => false,
        }
    });

    report.record("capacity truncation is reported", {
        let ranges = [
            Range::single(0x100, Standard, Data).unwrap(),
            Range::single(0x500, Standard, Data).unwrap(),
        ];
        match synthesize(&ranges, 1) {
            Ok(r) => {
                r.filters.len() == 1
                    && r.dropped == 1
                    && !r.accepts(0x500, Standard, Data)
            }
            Err(_) => false,
        }
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selftest_passes() {
        let report = run_selftest();
        assert!(
            report.all_passed(),
            "self-test failures: {:?}",
            report.failures
        );
        assert_eq!(report.total, 7);
    }
}
