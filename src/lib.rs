//! cact-harness: integration-test harness for the CACT compiler.
//!
//! Discovers `.cact` fixture files, infers each fixture's expected outcome
//! from its filename, runs the compiler under test against it, and
//! reconciles actual vs. expected exit codes into a pass/fail summary
//! suitable for CI pipelines.

pub use crate::config::HarnessConfig;
pub use crate::discovery::FixtureFile;
pub use crate::errors::HarnessError;
pub use crate::expectation::Expectation;
pub use crate::executor::ExecutionOutcome;
pub use crate::harness::{run_suite, RunSummary};
pub use crate::report::TestVerdict;

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod executor;
pub mod expectation;
pub mod harness;
pub mod report;
