use crate::{
    error::RuntimeError,
    interpreter::token::{Token, TokenKind},
};

/// The four binary operators, applied strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, real-valued division.
    Div,
}

impl BinaryOperator {
    /// Returns the operator a token stands for, or `None` for non-operators.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Integer(_) | Token::EndOfInput => None,
        }
    }

    /// Returns the kind of token that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }

    /// Applies the operator to the accumulator and a right operand.
    ///
    /// Division is always real-valued, so `7 / 2` is `3.5`.
    ///
    /// # Parameters
    /// - `left`: The running accumulator.
    /// - `right`: The right operand.
    /// - `position`: Position of the operator, used for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use lexcalc::{error::RuntimeError, interpreter::operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 2.0, 2), Ok(3.5));
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 0.0, 2),
    ///            Err(RuntimeError::DivisionByZero { position: 2 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> Result<f64, RuntimeError> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { position });
                   }
                   left / right
               },
           })
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}
