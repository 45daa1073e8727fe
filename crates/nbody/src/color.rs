use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a `#RRGGBB` color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color length: {0:?}")]
    Length(String),
    #[error("invalid {channel} component: {digits:?}")]
    Component { channel: &'static str, digits: String },
}

/// Display color of a body.
///
/// Serialized as a hex string (`"#FFAA00"`) so scenario files and
/// snapshots stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF9944" or "ff9944")
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Length(s.to_string()));
        }

        // from_str_radix alone would accept a leading '+'
        let channel = |name: &'static str, range: std::ops::Range<usize>| {
            let part = &digits[range];
            let invalid = || ColorError::Component {
                channel: name,
                digits: part.to_string(),
            };
            if !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            u8::from_str_radix(part, 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel("red", 0..2)?,
            g: channel("green", 2..4)?,
            b: channel("blue", 4..6)?,
        })
    }

    /// Channels as `[r, g, b]`
    pub fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
