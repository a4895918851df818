use num_bigint::BigUint;
use tracing::debug;

use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        operator::BinaryOperator,
        scanner::{ParseResult, Scanner},
        token::{Token, TokenKind},
        value::Number,
    },
    util::num::biguint_to_f64,
};

/// Folds the tokens of one line into a single number.
///
/// The evaluator recognizes `expr := INTEGER (op INTEGER)*` and applies each
/// operator to the running accumulator as soon as its right operand has been
/// read, so `2+3*4` is `(2+3)*4`. No syntax tree is built.
///
/// The evaluator keeps exactly one token of lookahead. A scanning error in the
/// lookahead is held until the grammar actually needs that token.
pub struct Evaluator<'src> {
    scanner:  Scanner<'src>,
    current:  ParseResult<Token>,
    position: usize,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator over `source` and scans the first token.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        let position = scanner.position();

        Self { scanner,
               current,
               position }
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// On success the consumed token is returned and the next token becomes
    /// the current one.
    ///
    /// # Errors
    /// - The pending scanning error, if the current token could not be
    ///   scanned.
    /// - `ParseError::UnexpectedToken` if the current token has another kind.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let found = self.current.as_ref().map(Token::kind).map_err(ParseError::clone)?;
        if found != expected {
            return Err(self.unexpected(expected, found));
        }

        self.advance()
    }

    /// Consumes the current token if it is an integer and returns its value.
    ///
    /// # Errors
    /// Same as [`Evaluator::eat`] with `TokenKind::Integer`.
    pub fn eat_integer(&mut self) -> ParseResult<BigUint> {
        match self.current.clone()? {
            Token::Integer(value) => {
                self.advance()?;
                Ok(value)
            },
            token => Err(self.unexpected(TokenKind::Integer, token.kind())),
        }
    }

    /// Evaluates the expression and returns the final accumulator.
    ///
    /// The fold stops at the first token that is not an operator. Whatever
    /// follows, including an unscannable character, is left unread.
    ///
    /// # Errors
    /// Returns an error if an operand is missing or cannot be scanned, or if a
    /// division by zero occurs.
    pub fn expr(&mut self) -> EvalResult<Number> {
        let mut result = self.operand()?;
        let mut real = false;

        while let Some(op) = self.current_operator() {
            let position = self.position;
            self.eat(op.token_kind())?;

            let right = self.operand()?;
            let folded = op.apply(result, right, position)?;
            debug!(left = result, %op, right, result = folded, "fold");
            result = folded;
            real |= op == BinaryOperator::Div;
        }

        match &self.current {
            Ok(Token::EndOfInput) => {},
            Ok(token) => debug!(position = self.position, %token, "ignoring trailing input"),
            Err(error) => debug!(%error, "ignoring trailing input"),
        }

        Ok(if real { Number::real(result) } else { Number::integer(result) })
    }

    /// Consumes an integer operand and promotes it to `f64`.
    fn operand(&mut self) -> EvalResult<f64> {
        let value = self.eat_integer()?;
        Ok(biguint_to_f64(&value))
    }

    /// Replaces the current token with the next one and returns it.
    fn advance(&mut self) -> ParseResult<Token> {
        let next = self.scanner.next_token();
        self.position = self.scanner.position();
        std::mem::replace(&mut self.current, next)
    }

    const fn unexpected(&self, expected: TokenKind, found: TokenKind) -> ParseError {
        ParseError::UnexpectedToken { expected,
                                      found,
                                      position: self.position }
    }

    fn current_operator(&self) -> Option<BinaryOperator> {
        self.current.as_ref().ok().and_then(BinaryOperator::from_token)
    }
}

/// Evaluates one line and returns its value.
///
/// A fresh scanner and evaluator are created for every call, so nothing
/// carries over from one line to the next.
///
/// # Errors
/// Returns the first scanning, grammar or arithmetic error encountered.
///
/// # Example
/// ```
/// use lexcalc::interpreter::evaluator::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 20.0);
/// assert_eq!(evaluate("8/2/2").unwrap(), 2.0);
/// ```
pub fn evaluate(source: &str) -> EvalResult<Number> {
    let result = Evaluator::new(source).expr();
    match &result {
        Ok(number) => debug!(source, %number, "evaluated"),
        Err(error) => debug!(source, %error, "evaluation failed"),
    }

    result
}
