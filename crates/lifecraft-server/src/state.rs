use lifecraft_core::config::Config;
use lifecraft_core::service::ProgressService;
use lifecraft_core::store::{MemoryStore, SqliteStore};
use std::path::Path;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: ProgressService,
}

impl AppState {
    pub fn new(service: ProgressService) -> Self {
        Self { service }
    }

    /// Open the SQLite store configured for the project at `root`.
    pub fn from_root(root: &Path, config: &Config) -> lifecraft_core::Result<Self> {
        let db_path = config.database_path(root);
        tracing::debug!(path = %db_path.display(), "opening progress database");
        let store = SqliteStore::open(&db_path)?;
        let service =
            ProgressService::new(Arc::new(store)).admin_bypass(config.journey.admin_bypass);
        Ok(Self::new(service))
    }

    /// Process-local state with nothing persisted.
    pub fn in_memory() -> Self {
        Self::new(ProgressService::new(Arc::new(MemoryStore::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_root_creates_database() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        AppState::from_root(dir.path(), &config).unwrap();
        assert!(dir.path().join(".lifecraft/lifecraft.db").exists());
    }
}
