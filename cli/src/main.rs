//! Terminal client for the ANDO.5 assistant API.

mod error;
mod render;
mod repl;
mod transport;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use ando_core::ChatApi;
use ando_core::api::{ChatRequest, RecommendRequest};
use ando_core::config::{DEFAULT_API_BASE_URL, WidgetConfig};
use ando_core::format::info_summary;
use ando_core::message::Message;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;
use crate::transport::HttpApi;

#[derive(Parser, Debug)]
#[command(name = "ando", about = "ANDO.5 assistant API client")]
struct Cli {
    #[arg(long, env = "ANDO_API_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds; 0 waits indefinitely.
    #[arg(long, env = "ANDO_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is online.
    Health,
    /// Send one message and print the reply.
    Chat { message: String },
    /// List suggested questions.
    Suggestions,
    /// Ask for a personalised recommendation.
    Recommend {
        #[arg(long)]
        name: String,
        #[arg(long)]
        language: String,
    },
    /// Show the knowledge-base entry for a language.
    LanguageInfo { language: String },
    /// Show the server's recent conversation history.
    History,
    /// Interactive chat (default).
    Repl,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
    let config = WidgetConfig::new(&cli.base_url).with_timeout(timeout);
    tracing::debug!(base_url = %config.api_base_url, ?timeout, "client configured");
    let api = HttpApi::new(config)?;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Health => {
            let reply = api.health().await?;
            println!("{}", render::health(&reply));
        }
        Command::Chat { message } => {
            let reply = api.chat(&ChatRequest { message }).await?;
            tracing::debug!(intent = ?reply.intent, confidence = ?reply.confidence, "chat reply");
            println!("{}", render::message(&Message::ai(&reply.message)));
            if let Some(info) = reply.data {
                println!("{}", render::message(&Message::info(info)));
            }
            if let Some(suggestions) = reply.suggestions.filter(|s| !s.is_empty()) {
                println!("{}", render::suggestions(&suggestions));
            }
        }
        Command::Suggestions => {
            let suggestions = api.suggestions().await?;
            println!("{}", render::suggestions(&suggestions));
        }
        Command::Recommend { name, language } => {
            let recommendation = api.recommend(&RecommendRequest { name, language }).await?;
            println!("{}", render::message(&Message::ai(&recommendation.compose())));
        }
        Command::LanguageInfo { language } => {
            let info = api.language_info(&language).await?;
            println!("{}", info_summary(&info));
        }
        Command::History => {
            let history = api.history().await?;
            println!("{}", render::history(&history));
        }
        Command::Repl => {
            let stdin = io::stdin();
            repl::run(&api, stdin.lock(), &mut io::stdout()).await?;
        }
    }
    Ok(())
}
