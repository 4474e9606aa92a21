//! Deterministic label colors.
//!
//! Maps any text to a `#rrggbb` color so the same label is always drawn in
//! the same color, without keeping a lookup table. The mapping is a small
//! multiplicative hash over UTF-16 code units with 32-bit wraparound; it is
//! meant for visual grouping only and collides freely.
//!
//! ```rust
//! use huetag_color::string_to_color;
//!
//! assert_eq!(string_to_color("").to_string(), "#000000");
//! assert_eq!(string_to_color("hello").to_string(), "#046eca");
//! ```

pub mod hash;
pub mod legend;

pub use hash::{color_from_hash, label_hash, string_to_color};
pub use legend::Legend;
