//! dagobah entry point.
//!
//! Binary name: `dagobah`
//!
//! Parses the single optional MODEL argument, initializes tracing, and
//! hands off to the interactive chat loop.

mod chat;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dagobah_infra::ollama::OllamaGateway;

/// Chat with Master Yoda, you will. Streams replies from a local Ollama
/// server with his distinctive speech patterns.
#[derive(Parser)]
#[command(name = "dagobah", about, long_about = None)]
struct Cli {
    /// Model to chat with, as listed by `ollama list`.
    #[arg(default_value = "llama3:latest")]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics only; the chat protocol itself is plain printed text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let gateway = OllamaGateway::new();
    chat::run_chat_loop(&gateway, &cli.model).await
}
