#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while applying operators.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The 1-based position of the `/` operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the 1-based character position the error was detected at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
