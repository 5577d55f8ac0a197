use anyhow::Context;
use lifecraft_core::config::Config;
use lifecraft_server::AppState;
use std::path::Path;

pub fn run(root: &Path, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(p) = port {
        config.server.port = p;
    }
    for w in config.validate() {
        tracing::warn!("config: {}", w.message);
    }

    let state = AppState::from_root(root, &config).context("failed to open progress store")?;
    let addr = config.bind_addr();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        println!("LifeCraft API → http://{}", listener.local_addr()?);

        tokio::select! {
            res = lifecraft_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
