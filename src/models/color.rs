//! RGB color type used by themes and drawing primitives
//!
//! Colors travel through the drawing program as plain 8-bit RGB. The serde
//! form is the `"#rrggbb"` hex string so theme records and emitted programs
//! stay readable.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An 8-bit-per-channel RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string. The shape is validated here so a
    /// malformed theme field fails at construction, not at render time.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' is missing the '#' prefix", hex))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{}' is not of the form #rrggbb", hex));
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|e| e.to_string())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|e| e.to_string())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|e| e.to_string())?;
        Ok(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(D::Error::custom)
    }
}
