//! Legend output formats.

use std::collections::HashSet;

use huetag_color::Legend;
use huetag_common::{Color, HuetagError};
use huetag_config::OutputFormat;
use tracing::warn;

/// Render `legend` in `format`. CSS property names use `css_prefix`.
pub fn render(legend: &Legend, format: OutputFormat, css_prefix: &str) -> Result<String, HuetagError> {
    match format {
        OutputFormat::Plain => Ok(render_plain(legend)),
        OutputFormat::Json => render_json(legend),
        OutputFormat::Css => Ok(render_css(legend, css_prefix)),
        OutputFormat::Rgba => Ok(render_rgba(legend)),
    }
}

fn render_plain(legend: &Legend) -> String {
    legend
        .iter()
        .map(|(label, color)| format!("{label}\t{color}\n"))
        .collect()
}

fn render_rgba(legend: &Legend) -> String {
    legend
        .iter()
        .map(|(label, color)| format!("{label}\t{}\n", Color::from(color).to_rgba_string()))
        .collect()
}

fn render_json(legend: &Legend) -> Result<String, HuetagError> {
    let mut json = serde_json::to_string_pretty(legend)
        .map_err(|e| HuetagError::Other(format!("failed to serialize legend: {e}")))?;
    json.push('\n');
    Ok(json)
}

/// Labels whose slugs clash get `-2`, `-3`, ... appended so that no
/// property is declared twice.
fn render_css(legend: &Legend, prefix: &str) -> String {
    let mut css = String::from(":root {\n");
    let mut used = HashSet::new();
    for (label, color) in legend.iter() {
        let slug = css_slug(label);
        let mut name = slug.clone();
        let mut n = 2;
        while !used.insert(name.clone()) {
            name = format!("{slug}-{n}");
            n += 1;
        }
        if name != slug {
            warn!("label {label:?} clashes with another CSS name, declared as {prefix}{name}");
        }
        css.push_str(&format!("  {prefix}{name}: {color};\n"));
    }
    css.push_str("}\n");
    css
}

/// Lowercase `label` and replace anything outside `[a-z0-9_-]` with `-`.
fn css_slug(label: &str) -> String {
    label
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '_' | '-') => c,
            _ => '-',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend() -> Legend {
        ["rule", "list", "Mitre Execution"].into_iter().collect()
    }

    #[test]
    fn plain_is_tab_separated_lines() {
        let out = render(&legend(), OutputFormat::Plain, "--tag-").unwrap();
        assert_eq!(
            out,
            format!(
                "Mitre Execution\t{}\nlist\t#00a866\nrule\t#00b27c\n",
                huetag_color::string_to_color("Mitre Execution")
            )
        );
    }

    #[test]
    fn json_is_an_object_keyed_by_label() {
        let out = render(&legend(), OutputFormat::Json, "--tag-").unwrap();
        assert!(out.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["list"], "#00a866");
        assert_eq!(parsed["rule"], "#00b27c");
        assert_eq!(parsed.as_object().unwrap().len(), 3);
    }

    #[test]
    fn css_declares_custom_properties() {
        let out = render(&legend(), OutputFormat::Css, "--tag-").unwrap();
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("  --tag-list: #00a866;\n"));
        assert!(out.contains("  --tag-rule: #00b27c;\n"));
        assert!(out.contains("  --tag-mitre-execution: #"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn css_uses_configured_prefix() {
        let legend: Legend = ["list"].into_iter().collect();
        let out = render(&legend, OutputFormat::Css, "--falco-").unwrap();
        assert_eq!(out, ":root {\n  --falco-list: #00a866;\n}\n");
    }

    #[test]
    fn css_suffixes_clashing_slugs() {
        let legend: Legend = ["k8s audit", "k8s-audit", "K8s_Audit", "k8s/audit"]
            .into_iter()
            .collect();
        let out = render(&legend, OutputFormat::Css, "--tag-").unwrap();
        assert_eq!(out.matches("--tag-k8s-audit:").count(), 1);
        assert_eq!(out.matches("--tag-k8s-audit-2:").count(), 1);
        assert_eq!(out.matches("--tag-k8s-audit-3:").count(), 1);
        assert_eq!(out.matches("--tag-k8s_audit:").count(), 1);
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn css_suffix_skips_names_already_taken() {
        let legend: Legend = ["a b", "a-b", "a-b-2"].into_iter().collect();
        let out = render(&legend, OutputFormat::Css, "--tag-").unwrap();
        let names: HashSet<&str> = out
            .lines()
            .filter_map(|line| line.trim().split(':').next())
            .filter(|name| name.starts_with("--tag-"))
            .collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn rgba_lists_css_rgba_values() {
        let legend: Legend = ["network", "list"].into_iter().collect();
        let out = render(&legend, OutputFormat::Rgba, "--tag-").unwrap();
        assert_eq!(out, "list\trgba(0,168,102,1)\nnetwork\trgba(228,87,94,1)\n");
    }

    #[test]
    fn css_slug_replaces_unsafe_characters() {
        assert_eq!(css_slug("T1059"), "t1059");
        assert_eq!(css_slug("mitre_execution"), "mitre_execution");
        assert_eq!(css_slug("k8s audit/rules"), "k8s-audit-rules");
        assert_eq!(css_slug("h\u{e9}llo"), "h-llo");
    }

    #[test]
    fn empty_legend_renders_empty_plain_output() {
        let out = render(&Legend::new(), OutputFormat::Plain, "--tag-").unwrap();
        assert!(out.is_empty());
    }
}
