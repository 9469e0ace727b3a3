mod repl;
mod terminal;
mod transport;

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use travel_chat::config::{DEFAULT_CHAT_ENDPOINT, RevealPacing};
use travel_chat::net::types::TranscriptEntry;
use travel_chat::{ChatController, ChatError, ConfigError, SubmitOutcome, WidgetConfig};

use crate::repl::{HELP, Input};
use crate::terminal::{TerminalSurface, TokioClock};
use crate::transport::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpTransport, Timeouts};

type TerminalChat<W> = ChatController<TerminalSurface<W>, HttpTransport, TokioClock>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] io::Error),
    #[error("{0}")]
    Chat(#[from] ChatError),
}

#[derive(Parser, Debug)]
#[command(name = "travel-chat", about = "Chat with the travel-planner assistant from a terminal")]
struct Cli {
    #[arg(long, env = "TRAVEL_CHAT_ENDPOINT", default_value = DEFAULT_CHAT_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "TRAVEL_CHAT_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "TRAVEL_CHAT_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[arg(long, default_value_t = false, help = "Print replies at once instead of line by line")]
    no_pacing: bool,

    #[arg(long, default_value_t = false, help = "Show a canned reply when the service is unreachable")]
    fallback_on_unreachable: bool,

    #[arg(long, help = "Send one message, print the reply, and exit")]
    message: Option<String>,
}

impl Cli {
    fn widget_config(&self) -> Result<WidgetConfig, ConfigError> {
        let config = WidgetConfig {
            endpoint: self.endpoint.trim().trim_end_matches('/').to_owned(),
            pacing: if self.no_pacing { RevealPacing::INSTANT } else { RevealPacing::default() },
            fallback_on_unreachable: self.fallback_on_unreachable,
            ..WidgetConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn timeouts(&self) -> Timeouts {
        Timeouts { request_secs: self.request_timeout_secs, connect_secs: self.connect_timeout_secs }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = cli.widget_config()?;
    let transport = HttpTransport::new(&config, cli.timeouts())?;
    tracing::debug!(endpoint = %config.endpoint, "starting chat session");

    let one_shot = cli.message.is_some();
    let chat = ChatController::new(config, TerminalSurface::stdout(one_shot), transport, TokioClock, seed());

    match cli.message {
        Some(message) => run_once(&chat, &message).await,
        None => run_interactive(&chat).await,
    }
}

async fn run_once<W: Write>(chat: &TerminalChat<W>, message: &str) -> Result<(), CliError> {
    match chat.submit(message).await {
        SubmitOutcome::Failed(err) => Err(CliError::Chat(err)),
        _ => Ok(()),
    }
}

async fn run_interactive<W: Write>(chat: &TerminalChat<W>) -> Result<(), CliError> {
    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Say(text) => {
                chat.submit(text).await;
            }
            Input::History => match chat.history().await {
                Ok(entries) => print_history(&entries),
                Err(err) => tracing::warn!("history unavailable: {err}"),
            },
            Input::Reset => {
                chat.reset().await;
                println!("Started a new conversation.");
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
            Input::Unknown(command) => println!("Unknown command /{command}; try /help"),
        }
        prompt();
    }
    Ok(())
}

fn print_history(entries: &[TranscriptEntry]) {
    if entries.is_empty() {
        println!("(no conversation yet)");
        return;
    }
    for entry in entries {
        println!("[{}] {}", entry.role, entry.content);
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

#[allow(clippy::cast_possible_truncation)]
fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
