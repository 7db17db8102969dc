use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_tailor::cli::{run_update, Cli, Command, ServeArgs};
use resume_tailor::config::Config;
use resume_tailor::output::FsOutputSink;
use resume_tailor::routes::build_router;
use resume_tailor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging (stderr keeps stdout free for CLI prompts)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    {
        Command::Serve(args) => serve(config, args).await,
        Command::Update(args) => {
            let path = run_update(&config, args).await?;
            println!("Updated resume saved at: {}", path.display());
            Ok(())
        }
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    info!("Starting resume-tailor v{}", env!("CARGO_PKG_VERSION"));

    // Initialize output sink
    let sink = Arc::new(FsOutputSink::new(config.output_dir.clone()));
    info!("Output sink initialized (dir: {})", sink.dir().display());

    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);

    // Build app state
    let state = AppState { config, sink };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload form has a fixed host

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
