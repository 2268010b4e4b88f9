use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sticky_core::{AppConfig, PullDirection};

mod commands;

#[derive(Parser)]
#[command(name = "sticky")]
#[command(author, version, about = "Pull-to-reveal sticky transition for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/sticky-transition/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal demo
    Run,
    /// Replay a JSON sample script through the state machine
    Simulate {
        /// JSON array of samples; reads stdin when omitted
        file: Option<PathBuf>,
        /// Direction of the interaction
        #[arg(short = 'd', long, value_enum, default_value_t = DirectionArg::PullDown)]
        direction: DirectionArg,
        /// Drive the two-page toggle instead of a single interaction
        #[arg(short = 't', long)]
        toggle: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    PullDown,
    PullUp,
}

impl From<DirectionArg> for PullDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::PullDown => PullDirection::PullDown,
            DirectionArg::PullUp => PullDirection::PullUp,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = Arc::new(AppConfig::load_from(&config_path)?);

    // The TUI owns the screen, so its logs go to a file
    let log_to_file = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, log_to_file)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            file,
            direction,
            toggle,
            json,
        }) => commands::simulate::run(&config, file.as_deref(), direction.into(), toggle, json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
