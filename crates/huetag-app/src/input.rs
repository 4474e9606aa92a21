//! Label sources: stdin lines and rules files.

use huetag_common::InputError;
use serde::Deserialize;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// One entry of a rules file. Macros and lists carry no tags and are
/// skipped; unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    rule: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Read one label per line.
pub fn read_lines<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<String>, InputError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| InputError::Read {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
}

/// Collect the tags of every `rule` entry in a rules YAML document.
///
/// The document is a sequence of `rule`, `macro` and `list` mappings; null
/// entries are allowed. Tags keep document order and may repeat.
pub fn rule_tags_from_str(content: &str, path: &Path) -> Result<Vec<String>, InputError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<Option<RuleEntry>> =
        serde_yaml::from_str(content).map_err(|e| InputError::Rules {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rules = 0usize;
    let tags: Vec<String> = entries
        .into_iter()
        .flatten()
        .filter(|entry| entry.rule.is_some())
        .inspect(|_| rules += 1)
        .flat_map(|entry| entry.tags)
        .collect();

    debug!("{}: {rules} rule(s), {} tag(s)", path.display(), tags.len());
    Ok(tags)
}

/// Read a rules YAML file and collect its rule tags.
pub fn read_rule_tags(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;
    rule_tags_from_str(&content, path)
}
