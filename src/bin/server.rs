use clap::Parser;
use server_monitor::version::{VERSION, version_line};
use server_monitor::server::bootstrap;
use server_monitor::server::config::{DEFAULT_LOG_DIR, ServerConfig};
use server_monitor::web;
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(log_dir: &str) {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily(log_dir, "server.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sea_orm=warn,sqlx::query=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal.");
        return;
    }
    info!("Shutdown signal received.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Checked before full parsing to keep the plain version output.
    if std::env::args().any(|arg| arg == "--version") {
        println!("{}", version_line());
        return Ok(());
    }

    let args = Args::parse();

    let config = ServerConfig::load(args.config.as_deref());
    init_logging(
        config
            .as_ref()
            .map(|c| c.log_dir.as_str())
            .unwrap_or(DEFAULT_LOG_DIR),
    );
    info!("Starting server, version: {}", VERSION);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load server configuration: {}", e);
            return Err(e.into());
        }
    };

    let db_pool = bootstrap::connect(&config).await?;
    bootstrap::prepare_database(&db_pool).await?;

    let app = web::create_axum_router(db_pool.clone(), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, allowed_origins = ?config.allowed_origins, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await?;
    Ok(())
}
