//! Periodic separator insertion, used to group long tokens such as hashes.

use crate::error::{Result, TextError};

/// Inserts `separator` after every `n` code points of `text`.
///
/// No separator is ever appended after the final code point, so a text whose
/// length is an exact multiple of `n` does not end with one. For a non-empty
/// input of `len` code points the output has `len + (len - 1) / n` code points.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `n` is 0.
///
/// # Example
///
/// ```rust
/// use standout_text::insert_every_n;
///
/// assert_eq!(insert_every_n("Ghost", '-', 1).unwrap(), "G-h-o-s-t");
/// assert_eq!(insert_every_n("Ghost", '-', 2).unwrap(), "Gh-os-t");
/// assert_eq!(insert_every_n("Ghost", '-', 5).unwrap(), "Ghost");
/// ```
pub fn insert_every_n(text: &str, separator: char, n: usize) -> Result<String> {
    if n == 0 {
        return Err(TextError::invalid("n", "step must be at least 1"));
    }

    let mut result = String::with_capacity(text.len() + text.len() / n);
    let mut chars = text.chars().peekable();
    let mut emitted = 0;
    while let Some(c) = chars.next() {
        result.push(c);
        emitted += 1;
        if emitted % n == 0 && chars.peek().is_some() {
            result.push(separator);
        }
    }
    Ok(result)
}
