//! Hard wrapping to a fixed number of code points per line.

use crate::error::{Result, TextError};

/// Hard-wraps `text` so that no line is longer than `width` code points.
///
/// A line break is inserted in front of the code point that would make the
/// current line exceed `width`. Newlines already present in the input are kept
/// as they are and start a fresh line; when one arrives exactly at the limit it
/// serves as the break, so no empty line is produced and a trailing newline is
/// never doubled. Lines that already fit are left untouched, which makes
/// wrapping idempotent at a given width.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `width` is 0.
///
/// # Example
///
/// ```rust
/// use standout_text::wrap_text;
///
/// assert_eq!(wrap_text("Ghost", 2).unwrap(), "Gh\nos\nt");
/// assert_eq!(wrap_text("Jon\nSnow", 2).unwrap(), "Jo\nn\nSn\now");
/// assert_eq!(wrap_text("Jon\nSnow\n", 2).unwrap(), "Jo\nn\nSn\now\n");
/// ```
pub fn wrap_text(text: &str, width: usize) -> Result<String> {
    if width == 0 {
        return Err(TextError::invalid("width", "must be at least 1"));
    }

    let mut result = String::with_capacity(text.len() + text.len() / width);
    let mut column = 0;
    for c in text.chars() {
        if column == width {
            if c != '\n' {
                result.push('\n');
            }
            column = 0;
        }
        result.push(c);
        if c == '\n' {
            column = 0;
        } else {
            column += 1;
        }
    }
    Ok(result)
}
