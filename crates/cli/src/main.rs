mod config;
mod list_cmd;
mod logging;
mod show_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "podview",
    version,
    about = "Browse and compare model-generated podcast summaries"
)]
struct Cli {
    /// Catalog manifest (.toml) or combined document (.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file (default: ~/.config/podview/podview.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer (default)
    Tui {
        /// Episode id to open first
        #[arg(long)]
        episode: Option<String>,

        /// Model to select first
        #[arg(long)]
        model: Option<String>,
    },

    /// List catalog episodes
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one episode's summary
    Show {
        /// Episode id
        id: String,

        /// Model whose summary to show (default: the episode's first)
        #[arg(long)]
        model: Option<String>,

        /// Append the full transcript
        #[arg(long)]
        transcript: bool,

        /// Print the current view as JSON
        #[arg(long)]
        json: bool,

        /// Wrap width for text output
        #[arg(long, default_value_t = 80)]
        width: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui {
        episode: None,
        model: None,
    });

    let result = config::resolve(cli.config.as_deref(), cli.catalog).and_then(|settings| {
        let tui_mode = matches!(command, Commands::Tui { .. });
        let _log_guard = logging::init(&settings.config, tui_mode);
        tracing::debug!(catalog = %settings.catalog_path.display(), "resolved settings");

        match command {
            Commands::Tui { episode, model } => {
                let catalog = settings.load_catalog()?;
                podview_tui::run_with_options(
                    catalog,
                    podview_tui::RunOptions {
                        display: settings.config.display.clone(),
                        episode,
                        model,
                    },
                )
            }
            Commands::List { json } => list_cmd::run_list(&settings.load_catalog()?, json),
            Commands::Show {
                id,
                model,
                transcript,
                json,
                width,
            } => show_cmd::run_show(
                settings.load_catalog()?,
                &show_cmd::ShowArgs {
                    id,
                    model,
                    transcript,
                    json,
                    width,
                    keyword_limit: settings.config.display.keyword_limit,
                },
            ),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
