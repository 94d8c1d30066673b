//! Unified error type for the harness.
//!
//! Only harness-level failures live here. A fixture whose compiler run
//! disagrees with its expectation is not an error in this sense: it is a
//! failed verdict, recorded in the run summary and reported inline.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// All ways the harness itself can fail, as opposed to a test failing.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The configured compiler path is not an existing regular file.
    /// Checked once at startup, before any fixture is touched.
    #[error("Compiler not found at {}", path.display())]
    #[diagnostic(
        code(cact_harness::compiler_missing),
        help("Please run 'make' first.")
    )]
    CompilerMissing { path: PathBuf },

    /// The compiler process could not be spawned at all. Distinct from a
    /// compiler that runs and exits non-zero, which is a normal outcome.
    #[error("Failed to launch compiler '{}' on fixture '{}'", compiler.display(), fixture.display())]
    #[diagnostic(
        code(cact_harness::compiler_launch),
        help("The executable existed at startup but could not be spawned; check permissions and interpreter lines.")
    )]
    CompilerLaunch {
        compiler: PathBuf,
        fixture: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
