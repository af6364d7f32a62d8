use thiserror::Error;

/// Errors reported to callers of the evaluation API.
///
/// The combinator engine never produces these; it only returns empty outcome
/// sets. They are raised by [`crate::evaluator`], [`crate::symbol_table`] and
/// [`crate::config`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No match: the expression grammar did not match the input")]
    NoMatch,
    #[error("Trailing input after value {value}: {remainder:?}")]
    TrailingInput { value: i64, remainder: String },
    #[error("Invalid symbol name: {0:?} (expected one or more uppercase letters)")]
    InvalidSymbolName(String),
    #[error("Invalid symbol binding: {0:?} (expected NAME=VALUE)")]
    InvalidSymbolBinding(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type CalcResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn trailing_input(value: i64, remainder: &str) -> Self {
        Error::TrailingInput {
            value,
            remainder: remainder.to_string(),
        }
    }
}
