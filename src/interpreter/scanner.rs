use logos::{Lexer, Logos};
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexeme, token::Token},
    util::text::char_position,
};

/// Result type used by the scanner and the grammar checks.
pub type ParseResult<T> = Result<T, ParseError>;

/// Turns one line of text into a sequence of tokens, one token at a time.
///
/// A scanner owns its cursor over the line. The sequence is finite and cannot
/// be restarted: once [`Scanner::next_token`] has returned
/// [`Token::EndOfInput`] it keeps returning it. To scan the same text again,
/// construct a new scanner.
///
/// # Example
/// ```
/// use lexcalc::interpreter::{scanner::Scanner, token::Token};
///
/// let mut scanner = Scanner::new(" 12 +3");
/// assert_eq!(scanner.next_token().unwrap(), Token::Integer(12u32.into()));
/// assert_eq!(scanner.next_token().unwrap(), Token::Plus);
/// assert_eq!(scanner.next_token().unwrap(), Token::Integer(3u32.into()));
/// assert_eq!(scanner.next_token().unwrap(), Token::EndOfInput);
/// assert_eq!(scanner.next_token().unwrap(), Token::EndOfInput);
/// ```
pub struct Scanner<'src> {
    source:   &'src str,
    lexer:    Lexer<'src, Lexeme>,
    position: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: Lexeme::lexer(source),
               position: 0,
               finished: false }
    }

    /// Returns the 1-based position of the most recently scanned token.
    ///
    /// For [`Token::EndOfInput`] this is one past the last character of the
    /// line. Before the first call to [`Scanner::next_token`] it is `0`.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Scans the next token, skipping any whitespace before it.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCharacter` if a character is neither
    /// whitespace, a digit nor one of `+ - * /`.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if self.finished {
            return Ok(Token::EndOfInput);
        }

        let Some(lexeme) = self.lexer.next() else {
            self.finished = true;
            self.position = self.source.chars().count() + 1;
            trace!(position = self.position, "end of input");
            return Ok(Token::EndOfInput);
        };

        let span = self.lexer.span();
        self.position = char_position(self.source, span.start);

        let token = match lexeme {
            Ok(Lexeme::Integer(value)) => Token::Integer(value),
            Ok(Lexeme::Plus) => Token::Plus,
            Ok(Lexeme::Minus) => Token::Minus,
            Ok(Lexeme::Star) => Token::Star,
            Ok(Lexeme::Slash) => Token::Slash,
            Err(()) => {
                let character = self.source
                                    .get(span.start..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character,
                                                          position: self.position });
            },
        };

        trace!(position = self.position, %token, "scanned");
        Ok(token)
    }
}

/// Scans a whole line and returns every token, including the trailing
/// [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first scanning error encountered.
///
/// # Example
/// ```
/// use lexcalc::interpreter::{scanner::tokenize, token::Token};
///
/// let tokens = tokenize("3*4").unwrap();
/// assert_eq!(tokens,
///            [Token::Integer(3u32.into()), Token::Star, Token::Integer(4u32.into()), Token::EndOfInput]);
/// assert!(tokenize("3 $ 4").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
