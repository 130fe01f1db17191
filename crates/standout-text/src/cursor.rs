//! ANSI CSI sequences for relative cursor movement and line erase.
//!
//! Progress lines are redrawn in place by moving the cursor back over them
//! and erasing. Each sequence has the shape `ESC [ [count] final`, where the
//! final byte selects the command.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The escape byte that starts every sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer: `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// Direction of a cursor command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorDirection {
    /// Cursor Up (CUU) - ESC [ n A
    Up,
    /// Cursor Down (CUD) - ESC [ n B
    Down,
    /// Cursor Backward (CUB) - ESC [ n D
    Left,
    /// Cursor Forward (CUF) - ESC [ n C
    Right,
    /// Erase in Line (EL) - ESC [ K
    EraseLine,
}

impl CursorDirection {
    /// All directions, in declaration order.
    pub const ALL: [CursorDirection; 5] = [
        CursorDirection::Up,
        CursorDirection::Down,
        CursorDirection::Left,
        CursorDirection::Right,
        CursorDirection::EraseLine,
    ];

    /// The final byte terminating the sequence for this direction.
    pub fn final_byte(self) -> char {
        match self {
            CursorDirection::Up => 'A',
            CursorDirection::Down => 'B',
            CursorDirection::Right => 'C',
            CursorDirection::Left => 'D',
            CursorDirection::EraseLine => 'K',
        }
    }

    /// Whether the sequence carries a repeat count.
    ///
    /// The parameter of EL selects an erase mode rather than a count, so it
    /// is never emitted for [`CursorDirection::EraseLine`].
    pub fn takes_count(self) -> bool {
        !matches!(self, CursorDirection::EraseLine)
    }
}

/// A cursor command ready to be written to a terminal.
///
/// Implements [`Display`](fmt::Display), so it can be interpolated into
/// `format!`/`write!` without building an intermediate string.
///
/// # Example
///
/// ```rust
/// use standout_text::{Cursor, CursorDirection};
///
/// let redraw = format!("{}{}", Cursor::new(CursorDirection::Up).count(2), Cursor::new(CursorDirection::EraseLine));
/// assert_eq!(redraw, "\x1b[2A\x1b[K");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub direction: CursorDirection,
    pub count: Option<usize>,
}

impl Cursor {
    /// A bare command with no count.
    pub fn new(direction: CursorDirection) -> Self {
        Self {
            direction,
            count: None,
        }
    }

    /// Sets the repeat count.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CSI_START)?;
        match self.count {
            Some(n) if n > 0 && self.direction.takes_count() => write!(f, "{}", n)?,
            _ => {}
        }
        write!(f, "{}", self.direction.final_byte())
    }
}

/// Renders the escape sequence for `direction`.
///
/// The count appears as a decimal number between `[` and the final byte only
/// when it is present and greater than zero; otherwise the bare form
/// `ESC [ final` is produced. [`CursorDirection::EraseLine`] always uses the
/// bare form.
///
/// # Example
///
/// ```rust
/// use standout_text::{cursor_escape, CursorDirection};
///
/// assert_eq!(cursor_escape(CursorDirection::Down, Some(5)), "\x1b[5B");
/// assert_eq!(cursor_escape(CursorDirection::Up, None), "\x1b[A");
/// assert_eq!(cursor_escape(CursorDirection::EraseLine, None), "\x1b[K");
/// ```
pub fn cursor_escape(direction: CursorDirection, count: Option<usize>) -> String {
    Cursor { direction, count }.to_string()
}
