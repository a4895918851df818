use num_bigint::BigUint;

/// The closed set of token kinds the scanner can produce.
///
/// Grammar checks compare kinds, never payloads: an `Integer` token matches
/// `TokenKind::Integer` whatever its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// No input left on the line.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MULTIPLY",
            Self::Slash => "DIVIDE",
            Self::EndOfInput => "EOF",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit produced by the [`Scanner`].
///
/// Integer tokens carry their value, of any size; operator tokens only expose their symbol
/// for display purposes. `EndOfInput` carries nothing.
///
/// # Example
/// ```
/// use lexcalc::interpreter::token::{Token, TokenKind};
/// use num_bigint::BigUint;
///
/// let token = Token::Integer(BigUint::from(3u32));
/// assert_eq!(token.kind(), TokenKind::Integer);
/// assert_eq!(token.value(), Some(&BigUint::from(3u32)));
/// assert_eq!(token.to_string(), "Token(INTEGER, 3)");
/// assert_eq!(Token::Plus.to_string(), "Token(PLUS, '+')");
/// assert_eq!(Token::EndOfInput.to_string(), "Token(EOF, None)");
/// ```
///
/// [`Scanner`]: crate::interpreter::scanner::Scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A non-negative integer literal, such as `42`.
    Integer(BigUint),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// The end of the line.
    EndOfInput,
}

impl Token {
    /// Returns the kind tag of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the integer payload, present only for `Integer` tokens.
    #[must_use]
    pub const fn value(&self) -> Option<&BigUint> {
        match self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the one-character symbol, present only for operator tokens.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Integer(_) | Self::EndOfInput => None,
        }
    }

    /// Returns `true` for the four binary operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.symbol().is_some()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match (self.value(), self.symbol()) {
            (Some(value), _) => write!(f, "Token({kind}, {value})"),
            (_, Some(symbol)) => write!(f, "Token({kind}, '{symbol}')"),
            (None, None) => write!(f, "Token({kind}, None)"),
        }
    }
}
