//! Sprig - print a project's directory tree, minus the clutter

pub mod error;
pub mod fs;
pub mod log_level;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use fs::{FileSystem, StdFs};
pub use log_level::{LogLevel, setup_tracing};
pub use output::{print_structure, write_structure};
pub use tree::{DEFAULT_EXCLUDES, ExclusionSet, TreeBuilder, TreeConfig, build_tree};
