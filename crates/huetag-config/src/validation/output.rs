//! Output section validation.

use crate::schema::HuetagConfig;
use regex::Regex;
use std::sync::LazyLock;

/// A CSS custom property prefix: `--` followed by identifier characters.
static CSS_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--[A-Za-z0-9_-]*$").unwrap());

pub(super) fn validate_output(errors: &mut Vec<String>, config: &HuetagConfig) {
    let prefix = &config.output.css_prefix;
    if !CSS_PREFIX_RE.is_match(prefix) {
        errors.push(format!(
            "output.css_prefix = {prefix:?} must start with \"--\" and contain only letters, digits, '-' or '_'"
        ));
    }
}
