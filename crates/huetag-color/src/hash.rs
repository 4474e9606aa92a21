//! The label hash and its mapping onto a color.

use huetag_common::ColorHex;

/// Hex digits kept from the hash magnitude.
const COLOR_DIGITS: u32 = 6;

/// Hash a label into a signed 32-bit accumulator.
///
/// Walks the UTF-16 code units of `label` and folds each one in as
/// `unit + ((acc << 3) - acc)`, wrapping at 32 bits after every step.
/// Characters outside the Basic Multilingual Plane contribute both halves
/// of their surrogate pair.
pub fn label_hash(label: &str) -> i32 {
    label.encode_utf16().fold(0i32, |acc, unit| {
        i32::from(unit).wrapping_add(acc.wrapping_shl(3).wrapping_sub(acc))
    })
}

/// Map a hash onto a color.
///
/// The magnitude of `hash` is written in lowercase hex, cut down to its
/// leftmost six digits, and left-padded with zeros. Truncation happens
/// before padding, so `0x2ac90705` becomes `#2ac907` while `0xabc` becomes
/// `#000abc`.
pub fn color_from_hash(hash: i32) -> ColorHex {
    let magnitude = hash.unsigned_abs();
    let digits = hex_digit_count(magnitude);
    let kept = if digits > COLOR_DIGITS {
        magnitude >> (4 * (digits - COLOR_DIGITS))
    } else {
        magnitude
    };
    ColorHex::from_u24(kept)
}

/// Derive the color for `label`.
///
/// Total over all input: the empty string maps to `#000000` and any other
/// text, unicode included, maps to some `#rrggbb` value.
pub fn string_to_color(label: &str) -> ColorHex {
    color_from_hash(label_hash(label))
}

/// Number of hex digits needed to write `value` (0 for 0).
fn hex_digit_count(value: u32) -> u32 {
    (u32::BITS - value.leading_zeros()).div_ceil(4)
}
