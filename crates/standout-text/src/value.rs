//! Cell values and their classification.
//!
//! Renderers decide default formatting from what kind of value a cell holds:
//! numbers are right-aligned, everything else left-aligned. The caller knows
//! the concrete type when it builds a cell, so the kind is captured there in a
//! closed [`Value`] enum and classification is a plain tag match.
//!
//! # Example
//!
//! ```
//! use standout_text::{Align, Kind, Value};
//!
//! let price = Value::from(19.5f64);
//! let name = Value::from("widget");
//!
//! assert_eq!(price.kind(), Kind::Number);
//! assert_eq!(price.kind().default_align(), Align::Right);
//! assert_eq!(name.kind().default_align(), Align::Left);
//! assert_eq!(price.as_string(), "19.5");
//! ```

use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A cell value, tagged with its underlying representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any fixed-width integer or floating point number.
    Number(Number),
    /// Text, kept verbatim.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Anything else, stored as its rendered text.
    Other(String),
}

impl Value {
    /// Returns the classification of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::String,
            Value::Bool(_) | Value::Other(_) => Kind::Other,
        }
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns the textual rendering of this value.
    ///
    /// Text is returned unchanged and borrowed; numbers are rendered in
    /// decimal, booleans as `true`/`false`, and other values as stored.
    pub fn as_string(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) | Value::Other(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Numeric value.
///
/// Signed integers widen to `I64`, unsigned to `U64`. Floats keep their
/// width so that `f32` values render without widening noise
/// (`1.1f32` renders as `1.1`, not `1.100000023841858`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer.
    I64(i64),
    /// Unsigned integer.
    U64(u64),
    /// 32-bit floating point.
    F32(f32),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F32(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $wide:ty, [$($t:ty),*]) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }

            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_number!(I64, i64, [i8, i16, i32, i64, isize]);
impl_from_number!(U64, u64, [u8, u16, u32, u64, usize]);
impl_from_number!(F32, f32, [f32]);
impl_from_number!(F64, f64, [f64]);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = TextError;

    /// Converts a JSON value, the form in which serialized rows reach the
    /// renderer. `null` is an absent value and is rejected.
    fn try_from(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Err(absent()),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => Ok(if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else if let Some(f) = n.as_f64() {
                Value::Number(Number::F64(f))
            } else {
                Value::Other(n.to_string())
            }),
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            other => Ok(Value::Other(other.to_string())),
        }
    }
}

/// Classification of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Integer or floating point value.
    Number,
    /// Text value.
    String,
    /// Anything else (booleans, nested structures).
    Other,
}

impl Kind {
    /// Default alignment for cells of this kind: numbers right, the rest left.
    pub fn default_align(self) -> Align {
        match self {
            Kind::Number => Align::Right,
            Kind::String | Kind::Other => Align::Left,
        }
    }
}

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

fn absent() -> TextError {
    TextError::invalid("value", "an absent value has no kind")
}

/// Classifies a possibly absent value.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `value` is `None`.
pub fn classify(value: Option<&Value>) -> Result<Kind> {
    value.map(Value::kind).ok_or_else(absent)
}

/// Renders a possibly absent value as text.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `value` is `None`.
pub fn as_string(value: Option<&Value>) -> Result<Cow<'_, str>> {
    value.map(Value::as_string).ok_or_else(absent)
}
