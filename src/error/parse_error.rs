use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// Found a character that is neither whitespace, a digit nor an operator.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The 1-based position of the character within the line.
        position:  usize,
    },
    /// The grammar required a different kind of token.
    UnexpectedToken {
        /// The kind of token the grammar required.
        expected: TokenKind,
        /// The kind of token actually found.
        found:    TokenKind,
        /// The 1-based position of the token that was found.
        position: usize,
    },
}

impl ParseError {
    /// Returns the 1-based character position the error was detected at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::UnexpectedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
