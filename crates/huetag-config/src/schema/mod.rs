//! Configuration schema types for huetag.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod output;
mod system;

pub use output::*;
pub use system::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for huetag.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HuetagConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// Labels pinned to a fixed `#rrggbb` color instead of their hashed one.
    pub overrides: BTreeMap<String, String>,
}
