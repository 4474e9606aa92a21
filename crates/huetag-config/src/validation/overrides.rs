//! Pinned color validation.

use crate::schema::HuetagConfig;
use huetag_common::ColorHex;

pub(super) fn validate_overrides(errors: &mut Vec<String>, config: &HuetagConfig) {
    for (label, color) in &config.overrides {
        if label.trim().is_empty() {
            errors.push("overrides has a blank label".to_string());
            continue;
        }
        if color.parse::<ColorHex>().is_err() {
            errors.push(format!("overrides.{label} = {color:?} is not a #rrggbb color"));
        }
    }
}
