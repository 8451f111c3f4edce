//! Diamond construction.
//!
//! Builds the text representation of a letter diamond: row `i` of the top
//! half carries the letter `'A' + i`, mirrored around the center column,
//! and the bottom half mirrors the top. `'A'` sits at the top and bottom
//! vertices, the input letter at the left and right vertices.

use thiserror::Error;

/// Character used to pad rows where no letter is placed.
pub const FILL: char = ' ';

/// Character terminating every row, including the last.
pub const NEWLINE: char = '\n';

/// The input character was outside the range `[A-Z]`.
///
/// Carries the offending character for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character {0:?}: the character must be in range [A-Z]")]
pub struct InvalidCharacter(pub char);

/// Build the diamond for `letter` as a single string.
///
/// The result is `2d + 1` lines of `2d + 1` characters each (where
/// `d = letter - 'A'`), every line terminated by [`NEWLINE`]. The whole
/// figure is symmetric top-to-bottom and left-to-right.
///
/// # Errors
///
/// Returns [`InvalidCharacter`] if `letter` is not an ASCII uppercase
/// letter. Lowercase, digits, accented letters, and whitespace are all
/// rejected, even those numerically adjacent to the range.
///
/// # Examples
///
/// ```
/// let diamond = diamond::build('B').unwrap();
/// assert_eq!(diamond, " A \nB B\n A \n");
/// ```
pub fn build(letter: char) -> Result<String, InvalidCharacter> {
    if !letter.is_ascii_uppercase() {
        return Err(InvalidCharacter(letter));
    }

    let depth = usize::from(letter as u8 - b'A');
    let width = 2 * depth + 1;
    // Each line is `width` characters plus its newline.
    let line_len = width + 1;
    tracing::debug!(%letter, depth, width, "building diamond");

    let mut text = String::with_capacity(line_len * width);

    // Top half, center row included. Row `i` places `'A' + i` at the two
    // columns `depth - i` and `depth + i`, which coincide at the center.
    for i in 0..=depth {
        let current = char::from(b'A' + i as u8);
        let mut row = vec![FILL; width];
        row[depth - i] = current;
        row[depth + i] = current;
        text.extend(row);
        text.push(NEWLINE);
    }

    // Bottom half: the already-built top rows, in reverse, skipping the
    // center. Every character is ASCII so byte offsets are line offsets.
    for i in (0..depth).rev() {
        let start = i * line_len;
        let mirrored = text[start..start + line_len].to_owned();
        text.push_str(&mirrored);
    }

    Ok(text)
}
