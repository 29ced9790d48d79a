use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Heart Analyzer application
///
/// Loads `.env`, installs logging, resolves configuration, seeds the entity
/// store and serves the REST API (default `0.0.0.0:8000`).
///
/// # Environment Variables
/// - `RUST_LOG`: log filter (the `analyzer_run`, `api_rest` and `analyzer_core` targets default to `info`)
/// - `ANALYZER_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `ANALYZER_STATIC_DATA_DIR`: Directory of attachment data files (default: "static/data")
/// - `ANALYZER_DOCS_PATH`: Documentation path the root redirects to (default: "/docs")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("analyzer_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("analyzer_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let startup = api_rest::startup::from_env()?;

    tracing::info!("++ Starting Heart Analyzer REST on {}", startup.addr);

    api_rest::startup::serve(startup).await
}
