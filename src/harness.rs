//! Suite orchestration and aggregation.
//!
//! The run is entirely sequential: fixtures are processed one at a time in
//! discovery order, each compiler invocation blocking until it exits. Every
//! discovered fixture is counted exactly once, so the summary's two
//! counters always sum to the number of fixtures discovered.

use crate::config::HarnessConfig;
use crate::discovery::FixtureDiscoverer;
use crate::errors::HarnessError;
use crate::executor::TestExecutor;
use crate::expectation::Expectation;
use crate::report::{Reporter, TestVerdict};

/// Aggregated pass/fail counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Records one verdict. Counters only ever increase.
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for automated callers: 0 iff nothing failed.
    /// An empty run counts as passing.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs the full suite described by `config` and returns the summary.
///
/// The compiler existence check happens before any discovery or execution:
/// a missing executable is a fatal precondition failure, not a per-test
/// one. Zero discovered fixtures, including a missing or unreadable
/// fixtures directory, yields a warning and an empty (passing) summary.
/// Per-fixture mismatches are recorded and reported but never abort the
/// loop.
pub fn run_suite(config: &HarnessConfig) -> Result<RunSummary, HarnessError> {
    if !config.compiler_path.is_file() {
        return Err(HarnessError::CompilerMissing {
            path: config.compiler_path.clone(),
        });
    }

    let fixtures = FixtureDiscoverer::discover(&config.fixtures_dir, &config.extension);
    let mut reporter = Reporter::new(config.color_choice());

    if fixtures.is_empty() {
        reporter.warn_no_fixtures(&config.fixtures_dir, &config.extension);
        return Ok(RunSummary::default());
    }

    reporter.header(fixtures.len());

    let executor = TestExecutor::new(config.compiler_path.clone());
    let mut summary = RunSummary::default();

    for fixture in fixtures {
        let expectation = Expectation::infer(&fixture.filename);
        let outcome = executor.run_fixture(&fixture)?;
        let verdict = TestVerdict::reconcile(fixture, expectation, outcome);
        reporter.verdict(&verdict);
        summary.record(verdict.passed);
    }

    reporter.summary(&summary);
    Ok(summary)
}
