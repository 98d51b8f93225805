//! Printing the rendered tree

use std::io::{self, Write};
use std::path::Path;

/// Write the root line followed by the rendered tree.
///
/// The tree text already ends every entry with a newline; one more line
/// terminator closes the output, so a non-empty listing ends in a blank line.
pub fn write_structure<W: Write>(out: &mut W, root: &Path, tree: &str) -> io::Result<()> {
    writeln!(out, "{}\n{}", root.display(), tree)
}

/// Print the structure to stdout.
pub fn print_structure(root: &Path, tree: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_structure(&mut handle, root, tree)?;
    handle.flush()
}
