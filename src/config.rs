//! Harness configuration.
//!
//! All paths and knobs are carried in an explicit value handed to
//! [`crate::run_suite`] at startup, so tests can substitute their own
//! compiler and fixture locations instead of relying on module constants.

use std::path::PathBuf;

use termcolor::ColorChoice;

/// Configuration for a single harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path to the compiler executable under test.
    pub compiler_path: PathBuf,
    /// Directory scanned (non-recursively) for fixture files.
    pub fixtures_dir: PathBuf,
    /// Fixture file extension, without the leading dot.
    pub extension: String,
    /// Whether report output is colorized.
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compiler_path: PathBuf::from("./build/bin/cactc"),
            fixtures_dir: PathBuf::from("tests/samples"),
            extension: "cact".to_string(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl HarnessConfig {
    /// Color choice for the report stream. `termcolor`'s `Auto` still emits
    /// escape codes into pipes, so the tty check decides, not the env.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}
