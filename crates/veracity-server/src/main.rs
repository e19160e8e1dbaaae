use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use veracity_core::config::VeracityConfig;
use veracity_observability::init_tracing;
use veracity_server::{build_router, AppState};

const CONFIG_ENV_VAR: &str = "VERACITY_CONFIG";

fn load_config() -> Result<VeracityConfig, Box<dyn std::error::Error>> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => Ok(VeracityConfig::load(Path::new(&path))?),
        Err(_) => Ok(VeracityConfig::default()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config.observability);
    tracing::info!(service = "veracity-server", "starting");

    // Built before the runtime starts: the probe uses a blocking HTTP client.
    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config.server);
    let addr: SocketAddr = config.server.bind_addr.parse()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, "listening");
        axum::serve(listener, app).await
    })?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("veracity-server: {err}");
            ExitCode::FAILURE
        }
    }
}
