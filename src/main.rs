use std::net::SocketAddr;

use anyhow::Context;

use description_service::{
    app::build_app,
    config::{AppConfig, LoggingConfig},
    description::load_document,
    logging::init_tracing,
    shutdown::shutdown_signal,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            // Still report the failure through the usual subscriber
            init_tracing(&LoggingConfig::default());
            return Err(err.context("failed to load config"));
        }
    };
    init_tracing(&cfg.logging);

    // Nothing is served unless the document loads completely.
    let document = load_document(&cfg.data.description_path)?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid host/port")?;

    let state = AppState::new(cfg, document);
    let app = build_app(state);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
