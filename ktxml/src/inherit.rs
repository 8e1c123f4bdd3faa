//! Style inheritance filtering.
//!
//! Only styles that descend from a configured root style family (by default the
//! platform `TextAppearance` family) can be expressed as a Compose `TextStyle`.
//! The filter runs in two passes over the whole batch: the first records every
//! style's parent, the second walks each style's chain through that map.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::types::RawStyle;

/// Root style family used when filtering is enabled without an explicit root.
pub const DEFAULT_STYLE_ROOT: &str = "TextAppearance";

const STYLE_REFERENCE_PREFIXES: [&str; 3] = ["@android:style/", "@style/", "android:style/"];

/// Keeps the styles of a batch whose parent chain reaches the root family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFilter {
    root: String,
}

impl Default for StyleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE_ROOT)
    }
}

impl StyleFilter {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns `true` if `name` is the root style or one of its dotted children.
    pub fn in_root_family(&self, name: &str) -> bool {
        name == self.root
            || name
                .strip_prefix(self.root.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }

    /// Filters `styles`, preserving the order of the retained ones.
    pub fn retain(&self, styles: Vec<RawStyle>) -> Vec<RawStyle> {
        let keep: Vec<bool> = {
            let parents: HashMap<&str, Option<String>> = styles
                .iter()
                .map(|s| {
                    let parent = match s.parent.as_deref() {
                        Some(parent) => Some(strip_style_reference(parent)),
                        None => implicit_parent(&s.name),
                    };
                    (s.name.as_str(), parent)
                })
                .collect();
            styles
                .iter()
                .map(|s| self.descends_from_root(&s.name, &parents))
                .collect()
        };

        let before = styles.len();
        let retained: Vec<RawStyle> = styles
            .into_iter()
            .zip(keep)
            .filter_map(|(style, keep)| keep.then_some(style))
            .collect();
        debug!(
            root = %self.root,
            "style filter kept {} of {} styles",
            retained.len(),
            before
        );
        retained
    }

    fn descends_from_root(&self, name: &str, parents: &HashMap<&str, Option<String>>) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = name;

        loop {
            if self.in_root_family(current) {
                return true;
            }
            if !visited.insert(current) {
                debug!(style = name, "cycle in style parent chain at '{}'", current);
                return false;
            }
            match parents.get(current) {
                Some(Some(parent)) => current = parent.as_str(),
                // Chain leaves the batch (or ends) without reaching the root.
                _ => return false,
            }
        }
    }
}

/// Android derives the parent of `Title.Large` from its name when no `parent` is given.
fn implicit_parent(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(parent, _)| parent.to_string())
}

fn strip_style_reference(parent: &str) -> String {
    let parent = parent.trim();
    STYLE_REFERENCE_PREFIXES
        .iter()
        .find_map(|prefix| parent.strip_prefix(prefix))
        .unwrap_or(parent)
        .to_string()
}
