use logos::Logos;
use num_bigint::BigUint;

/// Represents a raw lexeme recognized in a line of input.
///
/// Whitespace is skipped. Digit runs are matched greedily, so `345` is one
/// lexeme rather than three, and may be of any length. Input that starts no
/// lexeme is reported by Logos as `Err(())`. The [`Scanner`] turns lexemes
/// into tokens and reports positions.
///
/// [`Scanner`]: crate::interpreter::scanner::Scanner
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// Integer literal lexemes, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigUint),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Parses an integer literal from the current lexeme slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current lexeme.
///
/// # Returns
/// - `Some(BigUint)`: The parsed value. The slice only holds ASCII digits, so
///   this always succeeds.
/// - `None`: If the slice is not a base-10 integer.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<BigUint> {
    BigUint::parse_bytes(lex.slice().as_bytes(), 10)
}
