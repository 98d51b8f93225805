//! Directory tree building
//!
//! `TreeBuilder` walks a directory depth-first and renders every entry as one
//! indented line, skipping names in an `ExclusionSet`.

mod builder;
mod config;
mod utils;

pub use builder::{TreeBuilder, build_tree};
pub use config::{DEFAULT_EXCLUDES, ExclusionSet, TreeConfig};
