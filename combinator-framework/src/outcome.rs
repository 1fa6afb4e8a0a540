use common_framework::TextSlice;
use thiserror::Error;

/// The result of a single parse attempt.
///
/// A success carries the parsed value and the text left unconsumed; a failure
/// carries a description of what would have matched and the text found at the
/// point of failure. Failure is ordinary data, not an error to be thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success { value: T, remaining: TextSlice },
    Failure { expected: String, actual: TextSlice },
}

/// A parse failure detached from [`Outcome`], for callers that want to use `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found:?}")]
pub struct ParseError {
    /// What would have matched.
    pub expected: String,
    /// The text at the point of failure.
    pub found: String,
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    pub fn success(value: T, remaining: impl Into<TextSlice>) -> Self {
        Outcome::Success {
            value,
            remaining: remaining.into(),
        }
    }

    /// Creates a failed outcome.
    pub fn failure(expected: impl Into<String>, actual: impl Into<TextSlice>) -> Self {
        Outcome::Failure {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// Returns the parsed value, if successful.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Returns the unconsumed text, if successful.
    pub fn remaining(&self) -> Option<&TextSlice> {
        match self {
            Outcome::Success { remaining, .. } => Some(remaining),
            Outcome::Failure { .. } => None,
        }
    }

    /// Returns the description of what was expected, if failed.
    pub fn expected(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { expected, .. } => Some(expected),
        }
    }

    /// Returns the text at the point of failure, if failed.
    pub fn actual(&self) -> Option<&TextSlice> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { actual, .. } => Some(actual),
        }
    }

    /// Replaces a successful value with `f(value)`, keeping the remaining text.
    pub fn transform<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success { value, remaining } => Outcome::Success {
                value: f(value),
                remaining,
            },
            Outcome::Failure { expected, actual } => Outcome::Failure { expected, actual },
        }
    }

    /// Continues a successful outcome with `f(value, remaining)`.
    ///
    /// A failure is propagated unchanged.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T, TextSlice) -> Outcome<U>,
    {
        match self {
            Outcome::Success { value, remaining } => f(value, remaining),
            Outcome::Failure { expected, actual } => Outcome::Failure { expected, actual },
        }
    }

    /// Rewrites the `expected` description of a failure.
    pub fn map_expected<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Outcome::Failure { expected, actual } => Outcome::Failure {
                expected: f(expected),
                actual,
            },
            success => success,
        }
    }

    /// Converts into a regular rust [`Result`].
    pub fn into_result(self) -> Result<(T, TextSlice), ParseError> {
        match self {
            Outcome::Success { value, remaining } => Ok((value, remaining)),
            Outcome::Failure { expected, actual } => Err(ParseError {
                expected,
                found: actual.to_string(),
            }),
        }
    }
}
