//! Test executor.
//!
//! Runs the compiler under test against one fixture at a time. Each run is
//! a synchronous, blocking subprocess invocation with the fixture path as
//! the compiler's sole positional argument; stdout, stderr, and the exit
//! code are captured in full once the process terminates. There is no
//! timeout: a hanging compiler hangs the run.

use std::path::PathBuf;
use std::process::Command;

use crate::discovery::FixtureFile;
use crate::errors::HarnessError;

/// Everything the compiler process produced for one fixture.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Actual exit condition in words, for failure reports.
    pub fn describe_exit(&self) -> String {
        match self.exit_code {
            Some(code) => code.to_string(),
            None => "none (terminated by signal)".to_string(),
        }
    }
}

/// Invokes the compiler executable per fixture.
#[derive(Debug)]
pub struct TestExecutor {
    compiler: PathBuf,
}

impl TestExecutor {
    pub fn new(compiler: PathBuf) -> Self {
        Self { compiler }
    }

    /// Runs the compiler on `fixture` and waits for it to exit.
    ///
    /// A non-zero exit is a normal outcome. A process that cannot be
    /// spawned at all is a fatal harness error: the single exit code
    /// cannot distinguish "compiler rejected the input" from "compiler
    /// could not run", so the distinction is made here instead.
    pub fn run_fixture(&self, fixture: &FixtureFile) -> Result<ExecutionOutcome, HarnessError> {
        let output = Command::new(&self.compiler)
            .arg(&fixture.path)
            .output()
            .map_err(|e| HarnessError::CompilerLaunch {
                compiler: self.compiler.clone(),
                fixture: fixture.path.clone(),
                source: e,
            })?;

        Ok(ExecutionOutcome {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
