//! Result reconciliation and reporting.
//!
//! Reconciliation turns one fixture's expectation and execution outcome
//! into a [`TestVerdict`]; reporting prints the verdict. Reporting is a
//! pure observer: nothing printed here feeds back into pass/fail
//! determination or the run summary.

use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::discovery::FixtureFile;
use crate::executor::ExecutionOutcome;
use crate::expectation::Expectation;
use crate::harness::RunSummary;

/// Reconciled result for one fixture.
#[derive(Debug)]
pub struct TestVerdict {
    pub fixture: FixtureFile,
    pub expectation: Expectation,
    pub outcome: ExecutionOutcome,
    pub passed: bool,
}

impl TestVerdict {
    /// Compares the expected and actual outcome. A fixture with an
    /// unclassifiable name never passes: its expectation is unknowable,
    /// so any outcome is a contract violation.
    pub fn reconcile(
        fixture: FixtureFile,
        expectation: Expectation,
        outcome: ExecutionOutcome,
    ) -> Self {
        let passed = match expectation {
            Expectation::Success => outcome.succeeded(),
            Expectation::Failure => !outcome.succeeded(),
            Expectation::Unspecified => false,
        };
        Self {
            fixture,
            expectation,
            outcome,
            passed,
        }
    }
}

/// Writes the per-fixture report lines and the final summary to stdout.
pub struct Reporter {
    stream: StandardStream,
}

impl Reporter {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(color),
        }
    }

    /// Run header, printed once when at least one fixture was discovered.
    pub fn header(&mut self, fixture_count: usize) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true));
        println!("=== Running Integration Tests ({} files) ===", fixture_count);
        let _ = self.stream.reset();
    }

    /// Zero discovered fixtures is a valid state, but worth flagging.
    pub fn warn_no_fixtures(&mut self, dir: &Path, extension: &str) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        println!("No .{} files found in {}", extension, dir.display());
        let _ = self.stream.reset();
    }

    /// One line per fixture, plus diagnostic detail on failure.
    pub fn verdict(&mut self, verdict: &TestVerdict) {
        if verdict.passed {
            self.marker("[PASS]", Color::Green);
            println!(" {}", verdict.fixture.filename);
            return;
        }

        self.marker("[FAIL]", Color::Red);
        println!(" {}", verdict.fixture.filename);

        let expected = match verdict.expectation {
            Expectation::Success => "0",
            Expectation::Failure => "non-zero",
            Expectation::Unspecified => {
                self.detail_line(
                    &format!(
                        "Naming contract violation: '{}' contains neither \"true\" nor \"false\"",
                        verdict.fixture.filename
                    ),
                    Color::Yellow,
                );
                self.detail_line(
                    "Cannot classify this fixture; rename it to encode the expected outcome",
                    Color::Yellow,
                );
                return;
            }
        };

        self.detail_line(
            &format!(
                "Expected exit code {}, got {}",
                expected,
                verdict.outcome.describe_exit()
            ),
            Color::Yellow,
        );
        self.detail_line("Stderr output:", Color::Red);
        for line in verdict.outcome.stderr.lines() {
            println!("      {}", line);
        }
    }

    /// Separator plus the final pass/fail totals.
    pub fn summary(&mut self, summary: &RunSummary) {
        println!("{}", "-".repeat(50));
        if summary.all_passed() {
            let _ = self
                .stream
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            println!("All {} tests passed!", summary.passed);
        } else {
            let _ = self
                .stream
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)));
            println!(
                "{} tests failed. ({} passed)",
                summary.failed, summary.passed
            );
        }
        let _ = self.stream.reset();
    }

    fn marker(&mut self, text: &str, color: Color) {
        let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(color)));
        print!("{}", text);
        let _ = self.stream.reset();
    }

    fn detail_line(&mut self, text: &str, color: Color) {
        let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(color)));
        println!("    {}", text);
        let _ = self.stream.reset();
    }
}
