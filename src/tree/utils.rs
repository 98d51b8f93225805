//! Line rendering helpers

/// Indentation added per level of depth.
pub const INDENT_MARKER: &str = "│   ";

/// Marker in front of every entry name.
pub const BRANCH_MARKER: &str = "├── ";

/// Append one entry line at `depth` to `out`.
pub fn push_entry_line(out: &mut String, depth: usize, name: &str) {
    for _ in 0..depth {
        out.push_str(INDENT_MARKER);
    }
    out.push_str(BRANCH_MARKER);
    out.push_str(name);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_four_chars() {
        assert_eq!(INDENT_MARKER.chars().count(), 4);
        assert_eq!(BRANCH_MARKER.chars().count(), 4);
    }

    #[test]
    fn test_entry_line_at_root_depth() {
        let mut out = String::new();
        push_entry_line(&mut out, 0, "a.txt");
        assert_eq!(out, "├── a.txt\n");
    }

    #[test]
    fn test_entry_line_indentation() {
        let mut out = String::new();
        push_entry_line(&mut out, 3, "deep");
        assert_eq!(out, "│   │   │   ├── deep\n");
    }

    #[test]
    fn test_entry_lines_append() {
        let mut out = String::new();
        push_entry_line(&mut out, 0, "b");
        push_entry_line(&mut out, 1, "c.txt");
        assert_eq!(out, "├── b\n│   ├── c.txt\n");
    }
}
