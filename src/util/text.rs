/// Converts a byte offset into `source` into a 1-based character position.
///
/// Offsets that fall inside a multi-byte character map to that character.
/// Offsets at or past the end map to one past the last character.
///
/// # Example
/// ```
/// use lexcalc::util::text::char_position;
///
/// assert_eq!(char_position("3+x", 2), 3);
/// assert_eq!(char_position("é+x", 2), 2);
/// assert_eq!(char_position("é+x", 1), 1);
/// assert_eq!(char_position("12", 2), 3);
/// ```
#[must_use]
pub fn char_position(source: &str, byte_offset: usize) -> usize {
    source.char_indices()
          .take_while(|(index, c)| index + c.len_utf8() <= byte_offset)
          .count()
    + 1
}
