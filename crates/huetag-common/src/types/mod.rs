mod color;
mod hex;

pub use color::*;
pub use hex::*;
