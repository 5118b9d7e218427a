//! DocQA: answers questions about a fetched PDF document.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use docqa_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                println!("DocQA — extractive question answering over PDF documents");
                println!();
                println!("Usage: docqa");
                println!();
                println!("Environment:");
                println!("  PORT                       HTTP port (default 8000)");
                println!("  DOCQA_MAX_QUESTIONS        questions answered per request (default 10)");
                println!("  DOCQA_CONTEXT_CHARS        context budget per question (default 3000)");
                println!("  DOCQA_WORKER_LIMIT         concurrent answer workers (default 5)");
                println!("  DOCQA_QUESTION_TIMEOUT_MS  per-question timeout (default 5000)");
                println!("  DOCQA_ANSWER_MAX_LEN       answer length bound (default 200)");
                println!("  DOCQA_CHUNK_WORDS          chunk window in words (default 1000)");
                println!("  DOCQA_FETCH_TIMEOUT_SECS   document download timeout (default 30)");
                println!("  RUST_LOG                   log filter (default info)");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'docqa help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = docqa_core::DocQaConfig::from_env()?;
    let port = config.port;
    info!(
        "Limits: {} questions, {} context chars, {} workers, {:?} per question",
        config.max_questions, config.context_chars, config.worker_limit, config.question_timeout
    );

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("DocQA server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
