use anyhow::Context;
use lifecraft_core::{config::Config, io, paths, store::SqliteStore};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing LifeCraft in: {}", root.display());

    let dir = paths::lifecraft_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config = if paths::is_initialized(root) {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load config")?
    } else {
        let cfg = Config::default();
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        cfg
    };

    let db_path = config.database_path(root);
    let existed = db_path.exists();
    SqliteStore::open(&db_path)
        .with_context(|| format!("failed to create database {}", db_path.display()))?;
    let verb = if existed { "exists: " } else { "created:" };
    println!("  {verb} {}", config.database.path.display());

    println!("\nNext: lifecraft serve");
    Ok(())
}
