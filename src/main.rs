use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use sposearch::{config, error, tui, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Running without a subcommand starts the interactive search session
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

/// When the `DEBUG` environment variable is set, trace output goes to
/// `debug.log` in the working directory. Nothing may print to stdout while
/// the terminal is in raw mode.
fn init_debug_logging() {
    let enabled = std::env::var("DEBUG").map(|v| !v.is_empty()).unwrap_or(false);
    if !enabled {
        return;
    }

    match std::fs::File::create("debug.log") {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("sposearch=debug")),
                )
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            warning!("Cannot create debug.log, continuing without logs. Err: {}", e);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::validate() {
        error!("{}", e);
    }

    init_debug_logging();

    if let Err(e) = tui::run().await {
        error!("Terminal session failed. Err: {}", e);
    }
}
