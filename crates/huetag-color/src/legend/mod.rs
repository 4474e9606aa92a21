//! A label-to-color legend built from many labels.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use huetag_common::ColorHex;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::hash::string_to_color;

/// Sorted set of labels with the color each one is drawn in.
///
/// Labels are trimmed and de-duplicated. Pinned overrides win over the
/// hashed color for their label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    entries: BTreeMap<String, ColorHex>,
    overrides: BTreeMap<String, ColorHex>,
}

impl Legend {
    /// Creates an empty legend with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty legend that pins the given labels to fixed colors.
    ///
    /// Override labels are trimmed the same way inserted labels are; blank
    /// override labels are dropped.
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, ColorHex)>,
        S: AsRef<str>,
    {
        let overrides = overrides
            .into_iter()
            .filter_map(|(label, color)| {
                let label = label.as_ref().trim();
                (!label.is_empty()).then(|| (label.to_string(), color))
            })
            .collect::<BTreeMap<_, _>>();
        debug!("legend created with {} override(s)", overrides.len());
        Self {
            entries: BTreeMap::new(),
            overrides,
        }
    }

    /// Adds `label` and returns its color, or `None` for a blank label.
    pub fn insert(&mut self, label: &str) -> Option<ColorHex> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        if let Some(color) = self.entries.get(label) {
            return Some(*color);
        }
        let color = match self.overrides.get(label) {
            Some(pinned) => {
                trace!("label {label:?} pinned to {pinned}");
                *pinned
            }
            None => string_to_color(label),
        };
        self.entries.insert(label.to_string(), color);
        Some(color)
    }

    /// Color of a label already in the legend.
    pub fn get(&self, label: &str) -> Option<ColorHex> {
        self.entries.get(label.trim()).copied()
    }

    /// Whether `label` resolves to a pinned override.
    pub fn is_pinned(&self, label: &str) -> bool {
        self.overrides.contains_key(label.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColorHex)> + '_ {
        self.entries
            .iter()
            .map(|(label, color)| (label.as_str(), *color))
    }

    /// Groups of two or more labels that ended up with the same color.
    ///
    /// Groups are ordered by color; labels inside a group by label.
    pub fn collisions(&self) -> Vec<(ColorHex, Vec<&str>)> {
        let mut by_color: BTreeMap<ColorHex, Vec<&str>> = BTreeMap::new();
        for (label, color) in self.iter() {
            by_color.entry(color).or_default().push(label);
        }
        by_color
            .into_iter()
            .filter(|(_, labels)| labels.len() > 1)
            .collect()
    }
}

impl<S: AsRef<str>> Extend<S> for Legend {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for label in iter {
            self.insert(label.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Legend {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut legend = Self::new();
        legend.extend(iter);
        legend
    }
}

impl Serialize for Legend {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.entries.serialize(serializer)
    }
}
