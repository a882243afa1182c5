mod config;
mod routes;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "acme-shell failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let host = config::HostConfig::from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(host.addr).await?;

    tracing::info!(addr = %host.addr, "acme-shell listening");
    axum::serve(listener, app).await?;
    Ok(())
}
