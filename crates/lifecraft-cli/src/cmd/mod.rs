pub mod config;
pub mod enneagram;
pub mod gate;
pub mod init;
pub mod journey;
pub mod modules;
pub mod next;
pub mod progress;
pub mod role;
pub mod serve;

use anyhow::Context;
use lifecraft_core::config::Config;
use lifecraft_core::service::ProgressService;
use lifecraft_core::store::SqliteStore;
use std::path::Path;
use std::sync::Arc;

/// Open the project's progress database behind a [`ProgressService`].
pub fn open_service(root: &Path) -> anyhow::Result<ProgressService> {
    let config = Config::load(root).context("failed to load config")?;
    let db_path = config.database_path(root);
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;
    Ok(ProgressService::new(Arc::new(store)).admin_bypass(config.journey.admin_bypass))
}
