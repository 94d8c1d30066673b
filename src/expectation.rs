//! Expectation inference.
//!
//! Fixture maintainers encode the expected compiler outcome in the filename
//! itself: the substring `"false"` marks a fixture the compiler must reject,
//! `"true"` one it must accept. `"false"` wins when both occur, because a
//! fixture like `15_true_syntax_false_semantic.cact` (valid syntax, invalid
//! semantics) must still fail overall: a later-stage error is still an error.
//!
//! A filename carrying neither token is a naming-contract violation, not a
//! default. Inferring "expect failure" for it would silently misclassify the
//! fixture, so the violation is surfaced as its own variant and reported as
//! a failed verdict downstream.

/// Expected outcome for a fixture, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Compiler must exit 0.
    Success,
    /// Compiler must exit non-zero.
    Failure,
    /// Filename encodes neither token; the fixture cannot be classified.
    Unspecified,
}

impl Expectation {
    /// Infers the expectation from a filename. Pure and total: never fails,
    /// performs no I/O, and is deterministic for a given name. Tokens are
    /// case-sensitive substrings.
    pub fn infer(filename: &str) -> Self {
        if filename.contains("false") {
            Expectation::Failure
        } else if filename.contains("true") {
            Expectation::Success
        } else {
            Expectation::Unspecified
        }
    }
}
