//! Configuration types for tree building

use std::collections::BTreeSet;

/// Names skipped by default: VCS, editor, bytecode cache, virtualenv,
/// terraform state and deployment package directories.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".venv",
    ".idea",
    ".git",
    "__pycache__",
    ".terraform",
    "lambda_packages",
];

/// Entry names to skip at any depth. Matched exactly against the entry's
/// own name, never against a full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// An empty set; nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The [`DEFAULT_EXCLUDES`] names.
    pub fn defaults() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub exclusions: ExclusionSet,
    /// Entries at this depth or deeper are not descended into.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionSet::defaults(),
            max_depth: None,
        }
    }
}
