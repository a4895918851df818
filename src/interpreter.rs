/// The evaluator module folds tokens into a result.
///
/// The evaluator pulls tokens from the scanner on demand, checks them against
/// the grammar `expr := INTEGER (op INTEGER)*` and applies every operator to
/// the running accumulator in the order it appears.
///
/// # Responsibilities
/// - Enforces token order with the expect-and-consume primitive.
/// - Applies operators left to right, without precedence.
/// - Reports grammar errors with the position of the offending token.
pub mod evaluator;
/// The lexer module recognizes raw lexemes.
///
/// Lexeme recognition is generated with `logos`: whitespace is skipped, digit
/// runs are matched greedily and the four operator characters are matched
/// one at a time.
pub mod lexer;
/// Binary operators and their arithmetic.
pub mod operator;
/// The scanner module turns a line of text into tokens.
///
/// The scanner wraps the lexer, converts byte spans into character positions
/// and produces the end-of-input token once the line is exhausted.
///
/// # Responsibilities
/// - Produces one token per call, lazily.
/// - Reports invalid characters with their 1-based position.
pub mod scanner;
/// Token kinds and token values.
pub mod token;
/// The value produced by evaluating a line.
pub mod value;
