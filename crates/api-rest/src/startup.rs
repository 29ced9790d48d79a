//! Server startup shared by the workspace binaries.

use crate::{router, AppState};
use analyzer_core::config::{
    docs_path_from_env_value, resolve_static_data_dir, rest_addr_from_env_value,
};
use analyzer_core::{seeded_store, CoreConfig, ResourceService};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything needed to start serving, resolved from the environment.
pub struct Startup {
    pub addr: SocketAddr,
    pub state: AppState,
}

/// Resolve configuration from environment variables and build the seeded state.
///
/// # Environment Variables
/// - `ANALYZER_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `ANALYZER_STATIC_DATA_DIR`: Directory of attachment data files (default: "static/data")
/// - `ANALYZER_DOCS_PATH`: Path the root redirects to (default: "/docs")
///
/// # Errors
///
/// Returns an error if:
/// - the listen address cannot be parsed,
/// - the static data directory cannot be located,
/// - the seed dataset fails its integrity check.
pub fn from_env() -> anyhow::Result<Startup> {
    let addr = rest_addr_from_env_value(std::env::var("ANALYZER_REST_ADDR").ok())?;

    let static_override = std::env::var("ANALYZER_STATIC_DATA_DIR")
        .ok()
        .map(PathBuf::from);
    let static_data_dir = resolve_static_data_dir(static_override)?;
    let docs_path = docs_path_from_env_value(std::env::var("ANALYZER_DOCS_PATH").ok());

    let cfg = Arc::new(CoreConfig::new(static_data_dir, docs_path)?);

    let store = seeded_store()?;
    let state = AppState::new(cfg.clone(), ResourceService::new(Arc::new(store)))?;

    tracing::info!(
        static_data_dir = %cfg.static_data_dir().display(),
        docs_path = cfg.docs_path(),
        "configuration resolved"
    );

    Ok(Startup { addr, state })
}

/// Bind `addr` and serve the REST router until the server stops.
pub async fn serve(startup: Startup) -> anyhow::Result<()> {
    let app = router(startup.state);
    let listener = tokio::net::TcpListener::bind(startup.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
