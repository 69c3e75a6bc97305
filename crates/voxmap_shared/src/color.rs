//! Model colors.
//!
//! Descriptors carry colors in whatever form the editor produced: text
//! (`"#fff"`, `"#12ab34"`, a CSS name), a packed `0xRRGGBB` number, or
//! anything else. The value is kept exactly as given; [`ModelColor::to_rgb`]
//! resolves the forms that have an unambiguous RGB meaning.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest packed color value (24-bit RGB).
pub const MAX_PACKED: u32 = 0x00FF_FFFF;

/// A color as carried by a model descriptor, kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelColor(Value);

impl ModelColor {
    /// Wraps a raw color value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The value exactly as given.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Resolves to an RGB triple.
    ///
    /// Returns `None` for text that is not `#rgb` / `#rrggbb` hex, for
    /// numbers that are not integers in `0..=0xFFFFFF`, and for every
    /// other shape.
    #[must_use]
    pub fn to_rgb(&self) -> Option<Rgb> {
        match &self.0 {
            Value::String(text) => parse_hex(text),
            Value::Number(number) => {
                let packed = u32::try_from(number.as_u64()?).ok()?;
                (packed <= MAX_PACKED).then_some(Rgb::from_packed(packed))
            }
            _ => None,
        }
    }
}

impl From<&str> for ModelColor {
    fn from(text: &str) -> Self {
        Self(Value::from(text))
    }
}

impl From<u32> for ModelColor {
    fn from(packed: u32) -> Self {
        Self(Value::from(packed))
    }
}

impl From<Value> for ModelColor {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ModelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB triple.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates from packed `0xRRGGBB`. Bits above 24 are ignored.
    #[inline]
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Packs to `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rgb` or `#rrggbb`.
fn parse_hex(text: &str) -> Option<Rgb> {
    let digits = text.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let packed = u32::from_str_radix(digits, 16).ok()?;

    match digits.len() {
        // #rgb: each nibble doubles (f -> ff)
        3 => {
            let nibble = |shift: u32| ((packed >> shift) & 0xF) * 0x11;
            Some(Rgb::from_packed(
                (nibble(8) << 16) | (nibble(4) << 8) | nibble(0),
            ))
        }
        6 => Some(Rgb::from_packed(packed)),
        _ => None,
    }
}
