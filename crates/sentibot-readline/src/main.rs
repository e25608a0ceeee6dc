use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use sentibot_core::config::ClassifierBackend;
use sentibot_core::{ChatSession, Reply, Sentiment};
use sentibot_infrastructure::ConfigService;
use sentibot_interaction::build_classifier;

/// Sample customer messages to try the bot with.
const EXAMPLES: &[&str] = &[
    "Hello! I need help with my order",
    "I'm very disappointed with the product quality",
    "Thank you so much! You've been really helpful",
    "This is frustrating! My order hasn't arrived yet",
    "I love this product! It's amazing!",
    "Can you help me track my package?",
    "I want to return this item",
    "Your service is terrible!",
];

const COMMANDS: &[&str] = &["/summary", "/reset", "/examples", "/help"];

#[derive(Parser)]
#[command(name = "sentibot")]
#[command(about = "Sentiment-aware customer service chatbot", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Classifier backend override: huggingface or lexicon
    #[arg(long)]
    backend: Option<ClassifierBackend>,

    /// Seed for reply prefix selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn init_tracing() {
    // Logs go to stderr so they never interleave with the chat on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  {}  show sentiment statistics for this session", "/summary ".bright_cyan());
    println!("  {}  clear the conversation history", "/reset   ".bright_cyan());
    println!("  {}  list sample customer messages", "/examples".bright_cyan());
    println!("  {}  show this help", "/help    ".bright_cyan());
    println!("  {}  leave", "quit     ".bright_cyan());
}

fn print_reply(reply: &Reply) {
    for line in reply.text.lines() {
        println!("{}", line.bright_blue());
    }

    let annotation = reply.annotation();
    let annotation = match reply.sentiment {
        Sentiment::Positive => annotation.green(),
        Sentiment::Negative => annotation.red(),
        Sentiment::Neutral => annotation.bright_black(),
    };
    println!("{}", annotation);
    println!();
}

/// The main entry point for the Sentibot REPL.
///
/// Loads configuration, builds the configured classifier, and runs one
/// [`ChatSession`] for the lifetime of the process. Each line is processed to
/// completion before the next prompt is shown.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // ===== Backend Initialization =====
    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let mut config = config_service.load()?;
    if let Some(backend) = cli.backend {
        config.classifier.backend = backend;
    }

    let classifier = build_classifier(&config.classifier)?;
    let mut session = match cli.seed {
        Some(seed) => ChatSession::with_seed(classifier, seed),
        None => ChatSession::new(classifier),
    };
    tracing::info!(session_id = session.id(), "Session started");

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Sentibot: Customer Service Chat ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Classifier: {} | Type '/help' for commands or 'quit' to exit.",
            session.engine().classifier_name()
        )
        .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/summary" => {
                        println!("{}", session.summarize().bright_yellow());
                        println!();
                    }
                    "/reset" => println!("{}", session.reset().bright_green()),
                    "/examples" => {
                        for (n, example) in EXAMPLES.iter().enumerate() {
                            println!("  {}", format!("{}. {}", n + 1, example).bright_black());
                        }
                    }
                    "/help" => print_help(),
                    cmd if cmd.starts_with('/') => {
                        println!("{}", format!("Unknown command: {}", cmd).yellow());
                    }
                    message => {
                        println!("{}", format!("> {}", message).green());
                        match session.respond(message).await {
                            Ok(reply) => print_reply(&reply),
                            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
