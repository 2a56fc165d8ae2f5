use healthcheck_api::{config::Config, create_app, errors::StartupError, routes::health};
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

async fn serve(config: Config) -> Result<(), StartupError> {
    let app = create_app(&config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("  GET    {:<17} - Health check", health::mounted_path(&config.health_prefix));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from this same config, so report straight to stderr
            eprintln!("Error: {}", StartupError::from(e));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; `RUST_LOG` already lands in `config.log_level`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = serve(config).await {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
