//! Error types for the text algorithms.

use thiserror::Error;

use crate::date::DateComponent;

/// Reasons an input string is rejected.
///
/// Every variant is a synchronous validation failure; none is transient and
/// none should be retried. The `Display` output is meant to be shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Two whitespace characters appear next to each other.
    #[error("the input string contains trailing spaces")]
    TrailingSpaces,

    #[error("empty input")]
    Empty,

    #[error("the input only has spaces")]
    OnlySpaces,

    /// None of `-`, `/` or a space separates the date.
    #[error("invalid format: no date delimiter found")]
    NoDelimiter,

    /// The date did not split into exactly three tokens.
    #[error("invalid input: expected 3 date tokens, found {0}")]
    TokenCount(usize),

    #[error("invalid month: {0:?}")]
    UnknownMonth(String),

    #[error("year is out of range (1900-2099): {0}")]
    YearOutOfRange(String),

    #[error("month is out of range (1-12): {0}")]
    MonthOutOfRange(String),

    #[error("day is out of range (1-31): {0}")]
    DayOutOfRange(String),

    /// A numeric token is not 1, 2 or 4 ASCII digits.
    #[error("invalid format: unexpected date token {0:?}")]
    InvalidToken(String),

    /// The same date slot was filled twice.
    #[error("invalid format: more than one {0} in date")]
    DuplicateComponent(DateComponent),

    /// A date slot left empty after all tokens were read.
    #[error("invalid format: no {0} in date")]
    MissingComponent(DateComponent),

    /// An encoded run count with no character after it.
    #[error("invalid encoding: count {0} is not followed by a character")]
    DanglingCount(String),

    #[error("invalid encoding: run length of zero")]
    ZeroRunLength,

    #[error("invalid encoding: run length {0} is too large")]
    RunLengthOverflow(String),
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
