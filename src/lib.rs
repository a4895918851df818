//! # lexcalc
//!
//! lexcalc evaluates one-line arithmetic expressions over non-negative
//! integers. The operators `+ - * /` are applied strictly from left to right,
//! without precedence, so `2+3*4` is `20`. Division is real-valued.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for scanning, parsing and evaluation.
///
/// This module defines every error that can abort the evaluation of a line.
/// All errors carry the 1-based character position at which they were
/// detected.
///
/// # Responsibilities
/// - Defines error enums for each phase (scanning and parsing, evaluation).
/// - Wraps both phases in a single error returned by [`evaluate`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Scans and evaluates a line of input.
///
/// This module ties together the lexer, the scanner and the evaluator.
///
/// # Responsibilities
/// - Converts the input text into tokens.
/// - Checks token order and folds tokens into a result.
pub mod interpreter;
/// General utilities for numeric conversion and source positions.
pub mod util;

pub use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        token::{Token, TokenKind},
        value::Number,
    },
};

/// Evaluates a single line and returns its numeric value.
///
/// This is the whole boundary of the library: the caller supplies one line of
/// text and receives either a number or the first error encountered. No state
/// is kept between calls.
///
/// # Errors
/// Returns an error if the line contains an invalid character where an operand
/// is required, if an operand is missing, or if a division by zero occurs.
///
/// # Examples
/// ```
/// use lexcalc::{EvalError, error::ParseError, evaluate};
///
/// assert_eq!(evaluate("12 + 345").unwrap(), 357.0);
/// assert_eq!(evaluate("10-2-3").unwrap(), 5.0);
///
/// let err = evaluate("3+x").unwrap_err();
/// assert_eq!(err,
///            EvalError::Parse(ParseError::InvalidCharacter { character: 'x',
///                                                            position:  3, }));
/// ```
pub fn evaluate(line: &str) -> EvalResult<Number> {
    interpreter::evaluator::evaluate(line)
}

/// Scans a whole line and returns its tokens, ending with
/// [`Token::EndOfInput`].
///
/// # Errors
/// Returns an error at the first invalid character.
///
/// # Examples
/// ```
/// use lexcalc::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            [Token::Integer(1u32.into()), Token::Plus, Token::Integer(2u32.into()), Token::EndOfInput]);
/// ```
pub fn tokenize(line: &str) -> EvalResult<Vec<Token>> {
    Ok(interpreter::scanner::tokenize(line)?)
}
