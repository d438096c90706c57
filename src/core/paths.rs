//! Results path resolution
//!
//! All generated artifacts live under a hidden subdirectory of the working
//! tree unless an explicit results directory is given.

use std::path::{Path, PathBuf};

/// Get the default results directory for a given root
pub fn results_dir(root: &Path) -> PathBuf {
    root.join(".ctxlab").join("test-results")
}

/// Resolve the effective results directory for a run
///
/// An absolute override is taken as-is; a relative one is resolved against
/// the root. Without an override the default hidden directory is used.
pub fn resolve_results_dir(root: &Path, override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => root.join(dir),
        None => results_dir(root),
    }
}

/// Render a path for narration, relative to root when possible
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_dir() {
        let root = Path::new("/project");
        assert_eq!(
            results_dir(root),
            PathBuf::from("/project/.ctxlab/test-results")
        );
    }

    #[test]
    fn test_resolve_results_dir_default() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_results_dir(root, None),
            PathBuf::from("/project/.ctxlab/test-results")
        );
    }

    #[test]
    fn test_resolve_results_dir_relative_override() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_results_dir(root, Some(Path::new("artifacts/run1"))),
            PathBuf::from("/project/artifacts/run1")
        );
    }

    #[test]
    fn test_resolve_results_dir_absolute_override() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_results_dir(root, Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_display_path_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/project/.ctxlab/test-results/test-summary.json");
        assert_eq!(
            display_path(path, root),
            ".ctxlab/test-results/test-summary.json"
        );
    }

    #[test]
    fn test_display_path_outside_root() {
        let root = Path::new("/project");
        let path = Path::new("/tmp/out/test-summary.json");
        assert_eq!(display_path(path, root), "/tmp/out/test-summary.json");
    }
}
