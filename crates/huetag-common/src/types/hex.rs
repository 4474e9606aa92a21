use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ColorError;

/// A `#rrggbb` color string.
///
/// Stored as the 24-bit value it spells; always displays as exactly seven
/// characters with lowercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorHex(u32);

impl ColorHex {
    /// Build from the low 24 bits of `value`.
    pub fn from_u24(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    pub fn as_u24(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for ColorHex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl TryFrom<String> for ColorHex {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorHex> for String {
    fn from(hex: ColorHex) -> Self {
        hex.to_string()
    }
}
