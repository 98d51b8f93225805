//! Filesystem access used by the tree builder

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// The two filesystem primitives a traversal needs.
pub trait FileSystem {
    /// Whether `path` resolves to a directory. Follows symlinks; missing or
    /// unreadable paths are not directories.
    fn is_dir(&self, path: &Path) -> bool;

    /// Raw names of the direct entries of `path`, in no particular order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_entries_returns_names_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut names = StdFs.list_entries(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("a.txt"), OsString::from("sub")]);
    }

    #[test]
    fn test_is_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();

        assert!(StdFs.is_dir(dir.path()));
        assert!(!StdFs.is_dir(&file));
        assert!(!StdFs.is_dir(&dir.path().join("missing")));
    }

    #[test]
    fn test_list_missing_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = StdFs.list_entries(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
