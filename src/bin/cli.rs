//! Activities CLI
//!
//! Command-line front-end for the activities API:
//! - List activities with availability and participants
//! - Sign a participant up
//! - Unregister a participant
//! - Print a default config file

use activities::config::generate_default_config;
use activities::message::{self, StatusMessage};
use activities::{ActivitiesClient, ActivityCard, Config, LoggingConfig};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities and manage sign-ups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and ACTIVITIES_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: searched in the user config dir, then ./activities.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities
    List,

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Unregister a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::List => {
            let client = ActivitiesClient::new(&config.api)?;
            let activities = match client.list().await {
                Ok(activities) => activities,
                Err(e) => {
                    tracing::error!("Error fetching activities: {}", e);
                    anyhow::bail!(message::LOAD_FAILED);
                }
            };

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&activities)?);
                }
                OutputFormat::Table => {
                    let cards = ActivityCard::from_activities(&activities);
                    if cards.is_empty() {
                        println!("No activities.");
                    }
                    for card in &cards {
                        print_card(card);
                    }
                }
            }
        }

        Commands::Signup { activity, email } => {
            let client = ActivitiesClient::new(&config.api)?;
            let outcome = client.signup(&activity, &email).await;
            if let Err(e) = &outcome {
                tracing::error!("Error signing up: {}", e);
            }

            let status = StatusMessage::from_signup(&outcome);
            if status.is_success() {
                println!("{}", status.text);
            } else {
                anyhow::bail!(status.text);
            }
        }

        Commands::Unregister {
            activity,
            email,
            yes,
        } => {
            if !yes && !confirm(&message::unregister_prompt(&email, &activity))? {
                return Ok(());
            }

            let client = ActivitiesClient::new(&config.api)?;
            match client.unregister(&activity, &email).await {
                Ok(Some(text)) => println!("{}", text),
                Ok(None) => println!("Unregistered {} from {}", email, activity),
                Err(e) => {
                    tracing::error!("Error unregistering participant: {}", e);
                    anyhow::bail!(message::unregister_failure(&e));
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("activities={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    // Logs go to stderr so table/json output stays clean
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_card(card: &ActivityCard) {
    println!("{}", card.name);
    if !card.description.is_empty() {
        println!("  {}", card.description);
    }
    println!("  Schedule:     {}", card.schedule);
    println!("  Availability: {}", card.availability());
    println!("  Participants:");
    if card.has_participants() {
        for p in &card.participants {
            println!("    [{}] {}", p.avatar, p.email);
        }
    } else {
        println!("    {}", message::NO_PARTICIPANTS);
    }
    println!();
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
