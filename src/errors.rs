use thiserror::Error;

/// The only way a calculation can fail.
///
/// Every error is recoverable: correct the input and submit again. The message
/// is meant to be shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A parameter was missing, not a number, or outside its valid range.
    #[error("{0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Shorthand for [CalcError::InvalidInput].
    pub fn invalid(message: impl Into<String>) -> CalcError {
        return CalcError::InvalidInput(message.into());
    }

    /// The user facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            CalcError::InvalidInput(message) => message,
        }
    }
}
