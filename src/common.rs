//! Common types for Bulls and Cows: code parsing errors and chain wiring errors.

/// Errors returned when turning input into a [`Code`](crate::Code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Input was empty after trimming.
    Empty,
    /// Input contained something other than an ASCII digit.
    NotADigit(char),
    /// Input had the wrong number of digits.
    WrongLength { expected: usize, got: usize },
    /// Number does not fit into a code of the configured length.
    OutOfRange(u32),
}

impl core::fmt::Display for CodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodeError::Empty => write!(f, "Code is empty"),
            CodeError::NotADigit(ch) => write!(f, "'{}' is not a digit", ch),
            CodeError::WrongLength { expected, got } => {
                write!(f, "Expected {} digits, got {}", expected, got)
            }
            CodeError::OutOfRange(n) => write!(f, "Number {} does not fit in a code", n),
        }
    }
}

impl core::error::Error for CodeError {}

/// Errors raised while wiring the command chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// No fallback handler was registered, so some input would go unanswered.
    MissingTerminal,
}

impl core::fmt::Display for ChainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChainError::MissingTerminal => {
                write!(f, "Command chain has no terminal handler")
            }
        }
    }
}

impl core::error::Error for ChainError {}
