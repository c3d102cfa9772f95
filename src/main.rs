use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use triagex_api::RestApi;
use triagex_storage::CorpusStore;

/// An in-memory escalation triage engine
#[derive(Parser, Debug)]
#[command(name = "triagex")]
#[command(about = "Escalation triage with TF-IDF similarity search", long_about = None)]
struct Args {
    /// Path to the escalations JSON dataset
    #[arg(short, long)]
    data_path: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 4000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting TriageX v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(CorpusStore::open(args.data_path.as_deref())?);
    if let Some(source) = store.source() {
        info!("Dataset: {}", source.display());
    }
    info!("Corpus ready: {} escalations", store.len());

    let store_http = store.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("TriageX started successfully");
    info!("HTTP API: http://localhost:{}/escalations", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
