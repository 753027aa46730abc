//! team-chat - terminal client for the AI team chat backend
//!
//! Usage:
//!   team-chat chat [--config FILE] [--base-url URL] [--timeout SECS] [--legacy]
//!   team-chat format [FILE] [--config FILE] [--html] [--trusted]
//!
//! In `chat`, a line ending in `\` continues the message on the next line.

use anyhow::{Context, Result};
use chat_core::controller::{ChatController, ChatView, EntryBody, TranscriptEntry};
use chat_core::observability::{setup_logging, LogFormat};
use chat_core::render::{render_html, render_text};
use chat_core::{format, ClientConfig, HttpTransport};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "team-chat", version, about = "Chat with the multi-agent AI team")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),
    /// Render a raw backend response
    Format(FormatArgs),
}

#[derive(Args)]
struct ChatArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Response timeout in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Plain-text client without timeout or multi-agent formatting
    #[arg(long)]
    legacy: bool,
}

#[derive(Args)]
struct FormatArgs {
    /// File holding the raw response (stdin when omitted)
    file: Option<PathBuf>,

    /// TOML configuration file (`trust_markup` applies to HTML output)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print HTML instead of terminal text
    #[arg(long)]
    html: bool,

    /// Insert bodies as markup without escaping
    #[arg(long, requires = "html")]
    trusted: bool,
}

/// Prints transcript entries to stdout as they arrive.
#[derive(Default)]
struct TerminalView {
    input: String,
}

impl ChatView for TerminalView {
    fn append(&mut self, entry: TranscriptEntry) {
        let label = entry.sender.label();
        match &entry.body {
            EntryBody::Text(text) => println!("{label}: {text}\n"),
            EntryBody::Loading(text) => eprintln!("... {text}"),
            EntryBody::Document(document) => println!("{label}:\n{}\n", render_text(document)),
        }
    }

    fn remove(&mut self, _id: Uuid) -> bool {
        true
    }

    fn set_input_enabled(&mut self, _enabled: bool) {}

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn push_input(&mut self, text: &str) {
        self.input.push_str(text);
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty });

    match cli.command {
        Command::Chat(args) => run_chat(args).await,
        Command::Format(args) => run_format(args),
    }
}

fn read_config(path: Option<&PathBuf>) -> Result<ClientConfig> {
    match path {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ClientConfig::default()),
    }
}

fn load_config(args: &ChatArgs) -> Result<ClientConfig> {
    let mut config = read_config(args.config.as_ref())?;
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if args.legacy {
        config.legacy = true;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn run_chat(args: ChatArgs) -> Result<()> {
    let config = load_config(&args)?;
    let transport = HttpTransport::from_config(&config);
    tracing::info!(url = transport.url(), legacy = config.legacy, "starting chat session");

    let mut controller = ChatController::new(transport, TerminalView::default(), config.variant());
    match &config.greeting {
        Some(greeting) => controller.greet_with(greeting),
        None => controller.greet(),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        controller.on_line(&line).await;
    }

    Ok(())
}

fn run_format(args: FormatArgs) -> Result<()> {
    let mut config = read_config(args.config.as_ref())?;
    if args.trusted {
        config.trust_markup = true;
    }

    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let document = format(&raw);
    if args.html {
        println!("{}", render_html(&document, config.markup_policy()));
    } else {
        println!("{}", render_text(&document));
    }
    Ok(())
}
