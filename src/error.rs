/// Parsing errors.
///
/// Defines the errors raised while scanning a line into tokens or while
/// matching those tokens against the expression grammar. Every parse error
/// carries the 1-based character position it was detected at.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while folding operands into the
/// accumulator, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type returned by the public entry points.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
/// Any error that aborts the evaluation of a line.
///
/// Scanning and grammar faults are reported as [`EvalError::Parse`], faults
/// raised while applying an operator as [`EvalError::Runtime`].
pub enum EvalError {
    /// The line could not be scanned or does not match the grammar.
    Parse(ParseError),
    /// An operator could not be applied to its operands.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the 1-based character position the error was detected at.
    ///
    /// # Example
    /// ```
    /// use lexcalc::evaluate;
    ///
    /// let err = evaluate("3+x").unwrap_err();
    /// assert_eq!(err.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
