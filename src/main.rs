use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use hnfollow::follow::FollowService;
use hnfollow::hn::HnClient;
use hnfollow::web::{AppState, WebServer};
use hnfollow::{store, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // Initialize logging
    if let Err(e) = hnfollow::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        hnfollow::logging::init_console_only(&config.logging.level);
    }

    info!("hnfollow - follow Hacker News items");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> hnfollow::Result<()> {
    let store = store::open(&config.store).await?;
    let client = Arc::new(HnClient::new(&config.hn)?);

    let follow = FollowService::new(store, client.clone());
    let state = AppState::new(follow, client);

    let server = WebServer::new(&config.server, state)?;
    info!(
        "Server configured on {}:{} with {} store",
        config.server.host, config.server.port, config.store.backend
    );

    server.run().await
}
