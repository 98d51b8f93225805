//! CLI entry point for sprig

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use sprig::{
    ExclusionSet, LogLevel, TreeBuilder, TreeConfig, TreeError, print_structure, setup_tracing,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "Print a directory tree, skipping VCS, cache and virtualenv folders")]
#[command(version)]
struct Args {
    /// Directory to display (defaults to the current directory)
    path: Option<PathBuf>,

    /// Also skip entries with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not skip .venv, .idea, .git, __pycache__, .terraform, lambda_packages
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Diagnostic output on stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

impl Args {
    fn tree_config(&self) -> TreeConfig {
        let mut exclusions = if self.no_default_excludes {
            ExclusionSet::new()
        } else {
            ExclusionSet::defaults()
        };
        exclusions.extend(self.exclude.iter().cloned());

        TreeConfig {
            exclusions,
            max_depth: self.level,
        }
    }
}

/// Resolve the root against the working directory.
fn resolve_root(path: Option<&Path>) -> Result<PathBuf, TreeError> {
    match path {
        Some(p) if p.is_absolute() => Ok(p.to_path_buf()),
        Some(p) => Ok(std::env::current_dir()
            .map_err(TreeError::CurrentDir)?
            .join(p)),
        None => std::env::current_dir().map_err(TreeError::CurrentDir),
    }
}

fn run(args: &Args) -> Result<(), TreeError> {
    let root = resolve_root(args.path.as_deref())?;
    let config = args.tree_config();
    debug!(
        root = %root.display(),
        excludes = ?config.exclusions,
        "building tree"
    );

    let tree = TreeBuilder::new(config).build(&root, 0)?;

    if let Err(e) = print_structure(&root, &tree) {
        eprintln!("sprig: error writing output: {}", e);
        process::exit(1);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("sprig: {}", e);
        process::exit(1);
    }
}
