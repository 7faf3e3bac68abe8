mod config;
mod detect;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;
mod types;

#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("speak_backend=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;

    // Collaborators are built once and shared by every request
    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system_config.host, config.system_config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;
    info!("Serving {} on {}", config.system_config.static_dir, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Config from `CONFIG_PATH`, `conf.yaml` or `conf.json`, else defaults
fn load_config() -> Result<Config> {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    Config::discover(&config_paths)
}
