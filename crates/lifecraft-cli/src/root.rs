use lifecraft_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the LifeCraft project root.
///
/// Priority:
/// 1. `--root` flag / `LIFECRAFT_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.lifecraft/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_dir(&cwd).unwrap_or(cwd)
}

fn find_project_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(paths::LIFECRAFT_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(Some(dir.path())), dir.path());
    }

    #[test]
    fn finds_lifecraft_dir_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".lifecraft")).unwrap();
        let subdir = dir.path().join("notes/2026");
        std::fs::create_dir_all(&subdir).unwrap();
        assert_eq!(find_project_dir(&subdir).as_deref(), Some(dir.path()));
    }

    #[test]
    fn no_project_dir_found() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_project_dir(dir.path()), None);
    }
}
