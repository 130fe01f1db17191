//! # Standout Text - Layout and Terminal Control Primitives
//!
//! `standout-text` holds the small, precision-sensitive pieces that table, list
//! and progress-bar renderers are built on. Every function is pure: no I/O,
//! no shared state, safe to call from any thread.
//!
//! ## Components
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`longest_line_length`] | Longest line of a multi-line string, in code points |
//! | [`longest_line_width`] | Longest line in terminal columns (ANSI-aware) |
//! | [`insert_every_n`] | Group long tokens, e.g. hashes, with a separator |
//! | [`wrap_text`] | Hard-wrap to a fixed number of code points per line |
//! | [`cursor_escape`] | ANSI sequences to move the cursor or erase a line |
//! | [`column_label`] | Spreadsheet-style column names (`A`, `Z`, `AA`, ...) |
//! | [`Value::kind`] | Number / String / Other, for default alignment |
//!
//! Lengths are counted in Unicode code points, not bytes: `"日本"` is two
//! units long for wrapping purposes.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_text::{column_label, cursor_escape, wrap_text, CursorDirection};
//!
//! let headers: Vec<String> = (0..3).map(column_label).collect();
//! assert_eq!(headers, ["A", "B", "C"]);
//!
//! let cell = wrap_text("Winter Is Coming", 6)?;
//! assert_eq!(cell, "Winter\n Is Co\nming");
//!
//! // Redraw the previous line of a progress display.
//! let redraw = cursor_escape(CursorDirection::Up, Some(1)) + &cursor_escape(CursorDirection::EraseLine, None);
//! assert_eq!(redraw, "\x1b[1A\x1b[K");
//! # Ok::<(), standout_text::TextError>(())
//! ```
//!
//! ## Errors
//!
//! Misuse (a zero step or width, a negative column index, an absent value)
//! is reported as [`TextError::InvalidArgument`]; nothing panics or loops.

mod column;
mod cursor;
mod error;
mod insert;
mod measure;
mod value;
mod wrap;

pub use column::{column_index, column_label, try_column_label};
pub use cursor::{cursor_escape, Cursor, CursorDirection, CSI_START, ESC};
pub use error::{Result, TextError};
pub use insert::insert_every_n;
pub use measure::{longest_line_length, longest_line_width};
pub use value::{as_string, classify, Align, Kind, Number, Value};
pub use wrap::wrap_text;
