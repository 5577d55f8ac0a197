use std::path::{Path, PathBuf};

pub const LIFECRAFT_DIR: &str = ".lifecraft";
pub const CONFIG_FILE: &str = ".lifecraft/config.yaml";
pub const DEFAULT_DB_FILE: &str = ".lifecraft/lifecraft.db";

pub fn lifecraft_dir(root: &Path) -> PathBuf {
    root.join(LIFECRAFT_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a configured database path. Relative paths hang off `root`.
pub fn database_path(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}

pub fn is_initialized(root: &Path) -> bool {
    config_path(root).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_database_path_joins_root() {
        let root = Path::new("/srv/coach");
        assert_eq!(
            database_path(root, Path::new(DEFAULT_DB_FILE)),
            PathBuf::from("/srv/coach/.lifecraft/lifecraft.db")
        );
        assert_eq!(
            database_path(root, Path::new("/var/lib/lifecraft.db")),
            PathBuf::from("/var/lib/lifecraft.db")
        );
    }

    #[test]
    fn config_lives_under_lifecraft_dir() {
        let root = Path::new("/p");
        assert!(config_path(root).starts_with(lifecraft_dir(root)));
    }
}
