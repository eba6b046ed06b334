mod client;
mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use eventdesk_core::config::Settings;
use tracing_subscriber::EnvFilter;

use commands::AppContext;
use commands::edit::{EditArgs, parse_indexed};

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Browse events from an event API and edit them with a live JSON preview")]
struct Cli {
    /// Base URL of the event API (overrides config and EVENTDESK_API_URL)
    #[arg(long, global = true, value_parser = parse_api_url)]
    api_url: Option<String>,

    /// Timezone occurrence times are interpreted in (e.g. "Europe/Berlin")
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events with a preview of their upcoming occurrences
    List {
        /// Preview past occurrences too
        #[arg(long)]
        all: bool,
    },
    /// Print an event as JSON
    Show {
        /// Event id
        id: String,
    },
    /// Edit an event and print the result as JSON (interactive without edit flags)
    Edit {
        /// Event id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        teaser: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Set an occurrence's duration in minutes, e.g. "0=90"
        #[arg(long = "duration", value_name = "INDEX=MINUTES", value_parser = parse_indexed)]
        durations: Vec<(usize, String)>,

        /// Set an occurrence's start, e.g. "1=2019-04-12T19:30"
        #[arg(long = "start", value_name = "INDEX=DATETIME", value_parser = parse_indexed)]
        starts: Vec<(usize, String)>,

        /// Remove the occurrence at this index
        #[arg(long, value_name = "INDEX")]
        remove: Vec<usize>,
    },
    /// Show occurrences grouped by date
    Schedule {
        /// Include occurrences that are already over
        #[arg(long)]
        all: bool,
    },
    /// Show configuration paths and effective settings
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    if let Some(timezone) = cli.timezone {
        settings.timezone = timezone;
    }

    match cli.command {
        Commands::Config { init } => commands::config::run(&settings, init),
        Commands::List { all } => commands::list::run(&AppContext::new(settings)?, all).await,
        Commands::Show { id } => commands::show::run(&AppContext::new(settings)?, &id).await,
        Commands::Edit {
            id,
            name,
            teaser,
            description,
            durations,
            starts,
            remove,
        } => {
            let args = EditArgs {
                name,
                teaser,
                description,
                durations,
                starts,
                remove,
            };
            commands::edit::run(&AppContext::new(settings)?, &id, args).await
        }
        Commands::Schedule { all } => {
            commands::schedule::run(&AppContext::new(settings)?, all).await
        }
    }
}

/// Log to stderr so stdout only carries command output.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_api_url(s: &str) -> Result<String, String> {
    let url = url::Url::parse(s).map_err(|e| format!("Invalid URL '{}': {}", s, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Unsupported scheme '{}'", url.scheme()));
    }
    Ok(s.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_must_be_http() {
        assert_eq!(
            parse_api_url("https://events.example.org/"),
            Ok("https://events.example.org".to_string())
        );
        assert!(parse_api_url("ftp://events.example.org").is_err());
        assert!(parse_api_url("events").is_err());
    }

    #[test]
    fn edit_flags_parse() {
        let cli = Cli::try_parse_from([
            "eventdesk",
            "edit",
            "6f1c2a9e-3b0e-4a53-9d5c-1f1b8c3f5e21",
            "--name",
            "Lindy Night",
            "--duration",
            "0=90",
            "--duration",
            "1=120",
            "--remove",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Edit {
                name,
                durations,
                remove,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("Lindy Night"));
                assert_eq!(durations, vec![(0, "90".to_string()), (1, "120".to_string())]);
                assert_eq!(remove, vec![2]);
            }
            _ => panic!("expected edit command"),
        }
    }

    #[test]
    fn list_previews_upcoming_unless_all() {
        let cli = Cli::try_parse_from(["eventdesk", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { all: false }));

        let cli = Cli::try_parse_from(["eventdesk", "list", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::List { all: true }));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
