/// Numeric conversion helpers.
///
/// Integer literals of any length are promoted to `f64` before they are folded
/// into the accumulator.
pub mod num;
/// Source text helpers.
///
/// Converts byte offsets reported by the lexer into the 1-based character
/// positions used in error messages.
pub mod text;
