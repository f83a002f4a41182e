// src/error.rs

use thiserror::Error;

/// A source row that cannot be turned into a `CourseRecord`. Any one of
/// these aborts the whole load; no partial dataset is ever exposed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedRecordError {
    #[error("row {line}: expected {expected} fields, found {found}")]
    WrongArity {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {line}: column `{column}` has unparseable number `{value}`")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {line}: unparseable launch date `{value}`")]
    InvalidDate { line: usize, value: String },
}

/// Raised when the top-K ranking is asked to sort by a metric it does not
/// know. Never defaulted silently.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported ranking metric `{0}` (expected `hours` or `participants`)")]
pub struct UnsupportedMetricError(pub String);
