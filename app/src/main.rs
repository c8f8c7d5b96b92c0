#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoInput, InfoStrategy, InitStrategy,
    NoteSelection, SendInput, SendStrategy, VersionStrategy, load_config,
};

#[derive(Parser)]
#[command(name = "dme")]
#[command(about = "Extract DME orders from physician notes", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/dme/config.json)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct NoteArgs {
    /// Note file to read (overrides note.path)
    #[arg(short = 'n', long, conflicts_with = "text")]
    note: Option<PathBuf>,

    /// Note text given inline
    #[arg(short = 't', long)]
    text: Option<String>,
}

impl From<NoteArgs> for NoteSelection {
    fn from(args: NoteArgs) -> Self {
        Self {
            path: args.note,
            text: args.text,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an order and post it to the intake endpoint (default)
    Send {
        #[command(flatten)]
        note: NoteArgs,

        /// Intake endpoint (overrides endpoint.url)
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// Extract an order and print its JSON without sending it
    Extract {
        #[command(flatten)]
        note: NoteArgs,

        /// Pretty-print the JSON
        #[arg(short = 'p', long)]
        pretty: bool,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let command = cli.command.unwrap_or_else(|| Commands::Send {
        note: NoteArgs::default(),
        endpoint: None,
    });

    match command {
        Commands::Send { note, endpoint } => {
            let config = load_config(cli.config.as_deref())?;
            SendStrategy
                .execute(SendInput {
                    config,
                    note: note.into(),
                    endpoint,
                })
                .await?;
        }
        Commands::Extract { note, pretty } => {
            let config = load_config(cli.config.as_deref())?;
            ExtractStrategy
                .execute(ExtractInput {
                    config,
                    note: note.into(),
                    pretty,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => {
            InfoStrategy
                .execute(InfoInput {
                    config_path: cli.config,
                })
                .await?;
        }
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
