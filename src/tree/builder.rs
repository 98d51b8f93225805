//! TreeBuilder - renders a directory tree as indented text

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::fs::{FileSystem, StdFs};

use super::config::{ExclusionSet, TreeConfig};
use super::utils::push_entry_line;

/// Depth-first, pre-order renderer of a directory tree.
///
/// Every non-excluded entry gets one line, immediately followed by the lines
/// of its own subtree one level deeper. Files produce no children.
pub struct TreeBuilder<F = StdFs> {
    config: TreeConfig,
    fs: F,
}

impl TreeBuilder<StdFs> {
    pub fn new(config: TreeConfig) -> Self {
        Self::with_fs(config, StdFs)
    }
}

impl<F: FileSystem> TreeBuilder<F> {
    /// Build over a custom filesystem implementation.
    pub fn with_fs(config: TreeConfig, fs: F) -> Self {
        Self { config, fs }
    }

    /// Render the subtree below `path`, with its direct entries at `depth`.
    ///
    /// Returns an empty string when `path` is not a directory or cannot be
    /// listed for lack of permissions. Any other listing failure aborts the
    /// whole build.
    pub fn build(&self, path: &Path, depth: usize) -> Result<String> {
        let mut out = String::new();
        self.build_into(path, depth, &mut out)?;
        Ok(out)
    }

    fn build_into(&self, path: &Path, depth: usize, out: &mut String) -> Result<()> {
        if self.at_max_depth(depth) || !self.fs.is_dir(path) {
            return Ok(());
        }

        let Some(mut names) = self.read_entries(path)? else {
            return Ok(());
        };
        names.sort_unstable();

        for name in names {
            if self.is_excluded(&name) {
                continue;
            }
            push_entry_line(out, depth, &name.to_string_lossy());
            self.build_into(&path.join(&name), depth + 1, out)?;
        }

        Ok(())
    }

    /// List `path`, mapping a permission failure to `None`.
    fn read_entries(&self, path: &Path) -> Result<Option<Vec<OsString>>> {
        match self.fs.list_entries(path) {
            Ok(names) => {
                trace!(path = %path.display(), entries = names.len(), "listed directory");
                Ok(Some(names))
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "permission denied, skipping");
                Ok(None)
            }
            Err(e) => Err(TreeError::io(path, e)),
        }
    }

    /// Exclusions are UTF-8 names, so a non-UTF-8 entry never matches one.
    fn is_excluded(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.config.exclusions.contains(name))
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Render the tree below `path` on the real filesystem, skipping `exclusions`.
pub fn build_tree(path: &Path, depth: usize, exclusions: &ExclusionSet) -> Result<String> {
    let config = TreeConfig {
        exclusions: exclusions.clone(),
        max_depth: None,
    };
    TreeBuilder::new(config).build(path, depth)
}
