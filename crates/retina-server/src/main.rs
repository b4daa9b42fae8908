use std::sync::Arc;

use eyre::Result;
use tracing_subscriber::EnvFilter;

use retina_genai::gemini::GeminiClient;
use retina_server::config::ServerConfig;
use retina_server::controller::Controller;
use retina_server::session::SessionRegistry;
use retina_server::state::AppState;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if std::env::var_os("RETINA_LOG_JSON").is_some() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    // A missing credential stops startup before anything is served.
    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "startup halted");
    })?;

    let generator = Arc::new(GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
    ));
    let sessions = SessionRegistry::with_idle_ttl(config.session_ttl);
    // Sweep a few times per TTL so an abandoned session outlives it only briefly.
    let _sweeper = sessions.spawn_sweeper(config.session_ttl / 4);
    let state = AppState::new(
        Controller::new(generator),
        sessions,
        config.export_dir.clone(),
    );
    let app = retina_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        model = %config.model,
        export_dir = %config.export_dir.display(),
        session_ttl_secs = config.session_ttl.as_secs(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
