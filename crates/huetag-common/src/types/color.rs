use serde::{Deserialize, Serialize};

use super::ColorHex;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a CSS fraction, rounded to two decimals.
    pub fn alpha(&self) -> f64 {
        (f64::from(self.a) / 255.0 * 100.0).round() / 100.0
    }

    /// CSS `rgba(r,g,b,alpha)` with alpha in 0-1.
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.alpha())
    }
}

impl From<ColorHex> for Color {
    fn from(hex: ColorHex) -> Self {
        let [_, r, g, b] = hex.as_u24().to_be_bytes();
        Self::from_rgba(r, g, b, 255)
    }
}
