// End-to-end tests: drive the built harness binary against stub compilers.
// Requires: assert_cmd, predicates crates in [dev-dependencies]
//
// Stub compilers are /bin/sh scripts, so these tests are unix-only.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

/// Scratch directory holding fixtures and a stub compiler for one test.
struct Suite {
    root: PathBuf,
}

impl Suite {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "cact-harness-e2e-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("samples")).unwrap();
        Self { root }
    }

    fn fixtures(&self) -> PathBuf {
        self.root.join("samples")
    }

    fn add_fixture(&self, name: &str) {
        fs::write(self.fixtures().join(name), "int main() {}\n").unwrap();
    }

    /// Writes an executable /bin/sh script standing in for the compiler.
    fn add_compiler(&self, body: &str) -> PathBuf {
        let path = self.root.join("cactc");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn harness(&self, compiler: &Path) -> Command {
        let mut cmd = Command::cargo_bin("cact-harness").unwrap();
        cmd.arg("--compiler")
            .arg(compiler)
            .arg("--fixtures")
            .arg(self.fixtures());
        cmd
    }
}

impl Drop for Suite {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn passing_fixture_reports_pass_and_exits_zero() {
    let suite = Suite::new("pass");
    suite.add_fixture("01_true_basic.cact");
    let compiler = suite.add_compiler("exit 0");

    suite
        .harness(&compiler)
        .assert()
        .success()
        .stdout(is_match("(?m)^\\[PASS\\] 01_true_basic\\.cact$").unwrap())
        .stdout(contains("All 1 tests passed!"));
}

#[test]
fn expected_failure_fixture_passes_when_compiler_rejects() {
    let suite = Suite::new("expected-failure");
    suite.add_fixture("02_false_syntax.cact");
    let compiler = suite.add_compiler("echo 'error: unexpected token' >&2\nexit 1");

    suite
        .harness(&compiler)
        .assert()
        .success()
        .stdout(contains("[PASS]").and(contains("02_false_syntax.cact")));
}

#[test]
fn unexpected_exit_code_reports_detail_and_exits_one() {
    let suite = Suite::new("crash");
    suite.add_fixture("03_true_basic.cact");
    let compiler = suite.add_compiler("echo 'internal compiler error' >&2\nexit 2");

    suite
        .harness(&compiler)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("[FAIL]").and(contains("03_true_basic.cact")))
        .stdout(contains("Expected exit code 0, got 2"))
        .stdout(contains("Stderr output:"))
        .stdout(contains("      internal compiler error"));
}

#[test]
fn empty_fixtures_directory_warns_and_exits_zero() {
    let suite = Suite::new("empty");
    let compiler = suite.add_compiler("exit 0");

    suite
        .harness(&compiler)
        .assert()
        .success()
        .stdout(contains("No .cact files found"))
        .stdout(contains("[PASS]").not())
        .stdout(contains("[FAIL]").not());
}

#[test]
fn missing_fixtures_directory_warns_and_exits_zero() {
    let suite = Suite::new("missing-fixtures-dir");
    let compiler = suite.add_compiler("exit 0");
    let absent = suite.root.join("no-such-samples");

    let mut cmd = Command::cargo_bin("cact-harness").unwrap();
    cmd.arg("--compiler")
        .arg(&compiler)
        .arg("--fixtures")
        .arg(&absent);

    cmd.assert()
        .success()
        .stdout(contains("No .cact files found"))
        .stdout(contains("[PASS]").not())
        .stdout(contains("[FAIL]").not());
}

#[test]
fn expected_failure_fixture_fails_when_compiler_accepts() {
    let suite = Suite::new("unexpected-success");
    suite.add_fixture("04_false_semantic.cact");
    let compiler = suite.add_compiler("exit 0");

    suite
        .harness(&compiler)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("[FAIL]").and(contains("04_false_semantic.cact")))
        .stdout(contains("Expected exit code non-zero, got 0"));
}

#[test]
fn missing_compiler_is_fatal_before_any_fixture_runs() {
    let suite = Suite::new("missing-compiler");
    suite.add_fixture("01_true_basic.cact");
    let absent = suite.root.join("no-such-cactc");

    suite
        .harness(&absent)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Compiler not found"))
        .stdout(contains("Running Integration Tests").not())
        .stdout(contains("[PASS]").not())
        .stdout(contains("[FAIL]").not());
}

#[test]
fn report_order_is_lexicographic() {
    let suite = Suite::new("ordering");
    suite.add_fixture("10_true_later.cact");
    suite.add_fixture("01_true_first.cact");
    suite.add_fixture("02_true_second.cact");
    let compiler = suite.add_compiler("exit 0");

    suite.harness(&compiler).assert().success().stdout(is_match(
        "(?s)01_true_first\\.cact.*02_true_second\\.cact.*10_true_later\\.cact",
    ).unwrap());
}

#[test]
fn combined_tokens_are_classified_as_expected_failure() {
    let suite = Suite::new("combined-tokens");
    suite.add_fixture("15_true_syntax_false_semantic.cact");
    let compiler = suite.add_compiler("echo 'semantic error' >&2\nexit 1");

    suite
        .harness(&compiler)
        .assert()
        .success()
        .stdout(contains("[PASS]").and(contains("15_true_syntax_false_semantic.cact")));
}

#[test]
fn unclassifiable_fixture_is_a_naming_contract_violation() {
    let suite = Suite::new("naming-violation");
    suite.add_fixture("99_misc.cact");
    let compiler = suite.add_compiler("exit 0");

    suite
        .harness(&compiler)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("[FAIL]").and(contains("99_misc.cact")))
        .stdout(contains("Naming contract violation"));
}

#[test]
fn mixed_suite_counts_every_fixture_once() {
    let suite = Suite::new("mixed");
    suite.add_fixture("01_true_ok.cact");
    suite.add_fixture("02_false_rejected.cact");
    suite.add_fixture("03_true_broken.cact");
    // Rejects "false" fixtures with exit 1, crashes on the "broken" one.
    let compiler = suite.add_compiler(
        "case \"$1\" in\n  *broken*) echo crash >&2; exit 2 ;;\n  *false*) echo rejected >&2; exit 1 ;;\n  *) exit 0 ;;\nesac",
    );

    suite
        .harness(&compiler)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("=== Running Integration Tests (3 files) ==="))
        .stdout(contains("1 tests failed. (2 passed)"));
}

#[test]
fn non_matching_extensions_are_ignored() {
    let suite = Suite::new("extension-filter");
    suite.add_fixture("01_true_basic.cact");
    fs::write(suite.fixtures().join("README.md"), "not a fixture").unwrap();
    fs::write(suite.fixtures().join("02_true_other.txt"), "").unwrap();
    let compiler = suite.add_compiler("exit 0");

    suite
        .harness(&compiler)
        .assert()
        .success()
        .stdout(contains("=== Running Integration Tests (1 files) ==="))
        .stdout(contains("All 1 tests passed!"));
}
