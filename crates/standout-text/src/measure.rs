//! Line measurement for multi-line strings.
//!
//! Two measures are offered:
//!
//! - [`longest_line_length`] counts Unicode code points, the unit used by
//!   [`wrap_text`](crate::wrap_text) and [`insert_every_n`](crate::insert_every_n).
//! - [`longest_line_width`] counts terminal columns: ANSI escape codes are
//!   ignored and wide (CJK) characters take two columns.

use console::measure_text_width;

/// Returns the length, in code points, of the longest line in `text`.
///
/// Lines are separated by `\n`; the segment after the last newline counts as
/// a line too. An empty string, or one made only of newlines, yields 0.
///
/// # Example
///
/// ```rust
/// use standout_text::longest_line_length;
///
/// assert_eq!(longest_line_length("Winter\nIs\nComing"), 6);
/// assert_eq!(longest_line_length("日本\nab"), 2);
/// assert_eq!(longest_line_length("\n\n"), 0);
/// ```
pub fn longest_line_length(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '\n' {
            longest = longest.max(current);
            current = 0;
        } else {
            current += 1;
        }
    }
    longest.max(current)
}

/// Returns the display width of the longest line in `text`.
///
/// Unlike [`longest_line_length`], this measures what a terminal shows:
/// escape sequences contribute nothing and wide characters count double.
///
/// # Example
///
/// ```rust
/// use standout_text::longest_line_width;
///
/// assert_eq!(longest_line_width("\x1b[31mred\x1b[0m\nab"), 3);
/// assert_eq!(longest_line_width("日本\nabc"), 4);
/// ```
pub fn longest_line_width(text: &str) -> usize {
    text.split('\n').map(measure_text_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_line_length_empty() {
        assert_eq!(longest_line_length(""), 0);
    }

    #[test]
    fn test_longest_line_length_only_newlines() {
        assert_eq!(longest_line_length("\n"), 0);
        assert_eq!(longest_line_length("\n\n"), 0);
    }

    #[test]
    fn test_longest_line_length_multi_line() {
        assert_eq!(longest_line_length("Winter\nIs\nComing"), 6);
        assert_eq!(longest_line_length("Is\nWinter\nComing"), 6);
    }

    #[test]
    fn test_longest_line_length_trailing_segment() {
        assert_eq!(longest_line_length("ab\nabcd"), 4);
        assert_eq!(longest_line_length("abcd\n"), 4);
    }

    #[test]
    fn test_longest_line_length_counts_code_points() {
        assert_eq!(longest_line_length("Ünïcödé"), 7);
        assert_eq!(longest_line_length("日本語\nx"), 3);
    }

    #[test]
    fn test_longest_line_width_ignores_ansi() {
        assert_eq!(longest_line_width("\x1b[1mbold\x1b[0m"), 4);
    }

    #[test]
    fn test_longest_line_width_wide_chars() {
        assert_eq!(longest_line_width("日本語"), 6);
        assert_eq!(longest_line_width("日本語\nabcdefg"), 7);
    }

    #[test]
    fn test_longest_line_width_empty() {
        assert_eq!(longest_line_width(""), 0);
        assert_eq!(longest_line_width("\n\n"), 0);
    }
}
