//! Output rendering configuration.

use serde::{Deserialize, Serialize};

/// How a legend is written to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `label<TAB>#rrggbb`, one per line.
    #[default]
    Plain,
    /// A JSON object keyed by label.
    Json,
    /// CSS custom properties inside a `:root` block.
    Css,
    /// `label<TAB>rgba(r,g,b,1)`, one per line.
    Rgba,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Prefix for CSS custom property names; must start with `--`.
    pub css_prefix: String,
    /// Log a warning for every group of labels sharing a color.
    pub show_collisions: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            css_prefix: "--tag-".into(),
            show_collisions: false,
        }
    }
}
