//! Command-line entry point.
//!
//! A bare invocation runs the full suite with the project defaults; the
//! compiler path, fixtures directory, and extension can be overridden for
//! out-of-tree builds and for testing the harness itself.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::HarnessConfig;
use crate::harness;

/// The CLI argument structure. No subcommands: one invocation, one run.
#[derive(Debug, Parser)]
#[command(
    name = "cact-harness",
    version,
    about = "Runs the CACT compiler over a directory of fixture files and checks each against its filename-encoded expected outcome."
)]
pub struct HarnessArgs {
    /// Path to the compiler executable under test.
    #[arg(long, default_value = "./build/bin/cactc")]
    pub compiler: PathBuf,

    /// Directory scanned (non-recursively) for fixture files.
    #[arg(long, default_value = "tests/samples")]
    pub fixtures: PathBuf,

    /// Fixture file extension, without the leading dot.
    #[arg(long, default_value = "cact")]
    pub ext: String,

    /// Disable colored output even on a terminal.
    #[arg(long)]
    pub no_color: bool,
}

impl HarnessArgs {
    pub fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            compiler_path: self.compiler,
            fixtures_dir: self.fixtures,
            extension: self.ext,
            use_colors: !self.no_color && atty::is(atty::Stream::Stdout),
        }
    }
}

/// Parses arguments, runs the suite, and exits with the summary's code.
pub fn run() -> ! {
    let config = HarnessArgs::parse().into_config();

    match harness::run_suite(&config) {
        Ok(summary) => process::exit(summary.exit_code()),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}
