//! Spreadsheet-style column labels.
//!
//! Labels use bijective base-26: the digits are `A` through `Z` and there is no
//! zero, so `Z` is followed by `AA` rather than `BA`. Every index has exactly
//! one label and the label length only grows at 26, 702, 18278, ...

use crate::error::{Result, TextError};

const RADIX: usize = 26;

/// Returns the label for the zero-based column `index`.
///
/// # Example
///
/// ```rust
/// use standout_text::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(25), "Z");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(702), "AAA");
/// ```
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(b'A' + (n % RADIX) as u8);
        if n < RADIX {
            break;
        }
        n = n / RADIX - 1;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Like [`column_label`], for callers holding a signed or wider integer.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `index` is negative or does
/// not fit in a `usize`.
///
/// ```rust
/// use standout_text::try_column_label;
///
/// assert_eq!(try_column_label(27i64).unwrap(), "AB");
/// assert!(try_column_label(-1i32).is_err());
/// ```
pub fn try_column_label<T: TryInto<usize>>(index: T) -> Result<String> {
    index
        .try_into()
        .map(column_label)
        .map_err(|_| TextError::invalid("index", "must be a non-negative integer"))
}

/// Returns the zero-based column index for `label`; the inverse of
/// [`column_label`].
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `label` is empty, contains
/// anything other than `A`-`Z`, or names a column beyond `usize::MAX`.
pub fn column_index(label: &str) -> Result<usize> {
    if label.is_empty() {
        return Err(TextError::invalid("label", "must not be empty"));
    }

    // 1-based value: one past usize::MAX for the label of usize::MAX.
    let mut value: u128 = 0;
    for c in label.chars() {
        if !c.is_ascii_uppercase() {
            return Err(TextError::invalid(
                "label",
                format!("'{}' is not a letter between A and Z", c),
            ));
        }
        let digit = u128::from(c as u8 - b'A') + 1;
        value = value
            .checked_mul(RADIX as u128)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TextError::invalid("label", format!("'{}' is too large", label)))?;
    }
    usize::try_from(value - 1)
        .map_err(|_| TextError::invalid("label", format!("'{}' is too large", label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(1), "B");
        assert_eq!(column_label(25), "Z");
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(52), "BA");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
        assert_eq!(column_label(18277), "ZZZ");
        assert_eq!(column_label(18278), "AAAA");
    }

    #[test]
    fn test_try_column_label_rejects_negative() {
        let err = try_column_label(-1i64).unwrap_err();
        assert!(matches!(err, TextError::InvalidArgument { name: "index", .. }));
        assert_eq!(try_column_label(0u8).unwrap(), "A");
        assert_eq!(try_column_label(701i32).unwrap(), "ZZ");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A").unwrap(), 0);
        assert_eq!(column_index("Z").unwrap(), 25);
        assert_eq!(column_index("AA").unwrap(), 26);
        assert_eq!(column_index("ZZ").unwrap(), 701);
        assert_eq!(column_index("AAAA").unwrap(), 18278);
    }

    #[test]
    fn test_column_index_rejects_malformed() {
        assert!(column_index("").is_err());
        assert!(column_index("a").is_err());
        assert!(column_index("A1").is_err());
        assert!(column_index("ÄB").is_err());
    }

    #[test]
    fn test_column_index_overflow() {
        let huge = "Z".repeat(64);
        assert!(column_index(&huge).is_err());
    }

    #[test]
    fn test_max_index_round_trips() {
        let label = column_label(usize::MAX);
        assert_eq!(column_index(&label).unwrap(), usize::MAX);
    }
}
