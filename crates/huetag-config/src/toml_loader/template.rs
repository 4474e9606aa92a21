//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# huetag configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[output]
# format = "plain"           # plain, json, css, rgba
# css_prefix = "--tag-"      # must start with "--"
# show_collisions = false    # warn when labels share a color

[logging]
# level = "warn"             # debug, info, warn, error

# Pin labels to fixed colors instead of their hashed ones.
[overrides]
# critical = "#ff4444"
# "mitre_execution" = "#ff6b00"
"##
}
