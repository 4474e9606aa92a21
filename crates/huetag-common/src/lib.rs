pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, HuetagError, InputError};
pub use types::{Color, ColorHex};

pub type Result<T> = std::result::Result<T, HuetagError>;
