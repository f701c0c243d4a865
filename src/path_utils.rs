//! Cross-platform path utilities for fm2pm
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::{Path, PathBuf};

/// Convert path separators to forward slashes
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Absolute form of `path` for log and error messages
///
/// Falls back to the path as given when the current directory is unavailable.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// `file:` URI of a local file, used as the source location of parsed documents
///
/// Symlinks are resolved when the file exists; `dunce` keeps Windows paths free
/// of the `\\?\` prefix.
pub fn file_uri(path: &Path) -> String {
    let resolved = dunce::canonicalize(path).unwrap_or_else(|_| absolute(path));
    let forward = to_forward_slashes(&resolved);
    if forward.starts_with('/') {
        format!("file://{forward}")
    } else {
        format!("file:///{forward}")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_to_forward_slashes_unix() {
        let path = Path::new("/usr/local/bin");
        assert_eq!(to_forward_slashes(path), "/usr/local/bin");
    }

    #[test]
    fn test_to_forward_slashes_windows() {
        let path = Path::new("C:\\Users\\file.txt");
        assert_eq!(to_forward_slashes(path), "C:/Users/file.txt");
    }

    #[test]
    fn test_to_forward_slashes_empty() {
        let path = Path::new("");
        assert_eq!(to_forward_slashes(path), "");
    }

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        assert_eq!(absolute(temp.path()), temp.path());
    }

    #[test]
    fn test_absolute_relative_path() {
        let path = absolute(Path::new("out/provisioning.txt"));
        assert!(path.is_absolute());
        assert!(path.ends_with("out/provisioning.txt"));
    }

    #[test]
    fn test_file_uri_existing_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let file = temp.path().join("feature.json");
        std::fs::write(&file, "{}").expect("Failed to write file");

        let uri = file_uri(&file);
        assert!(uri.starts_with("file:///"), "unexpected uri: {uri}");
        assert!(uri.ends_with("/feature.json"));
    }

    #[test]
    fn test_file_uri_missing_file() {
        let uri = file_uri(Path::new("does/not/exist.json"));
        assert!(uri.starts_with("file:///"));
        assert!(uri.ends_with("does/not/exist.json"));
    }
}
