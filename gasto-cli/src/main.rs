use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gasto_core::{Channel, IncomingMessage};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

mod backend;
mod config;
mod ingest;
mod state;

use backend::BackendClient;
use config::{Config, config_path, init_config, load_config};
use ingest::{Summary, classify_all, read_messages};

#[derive(Parser, Debug)]
#[command(
    name = "gasto",
    version,
    about = "Turn bank SMS and push notifications into expense/income records"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single message body and print the record as JSON
    Parse {
        /// SMS sender or notification title
        #[arg(long, default_value = "")]
        sender: String,

        #[arg(long, value_enum, default_value_t = ChannelArg::Sms)]
        channel: ChannelArg,

        body: String,
    },

    /// Classify a JSON Lines feed of messages (stdin when no --input)
    Ingest {
        #[arg(long)]
        input: Option<PathBuf>,

        /// Post every record to the backend
        #[arg(long, default_value_t = false)]
        send: bool,
    },

    /// Manage ~/.gasto/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Sms,
    Notification,
}

impl From<ChannelArg> for Channel {
    fn from(c: ChannelArg) -> Self {
        match c {
            ChannelArg::Sms => Channel::Sms,
            ChannelArg::Notification => Channel::Notification,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config()?;
    init_logging(&cfg);

    match cli.command {
        Command::Parse {
            sender,
            channel,
            body,
        } => {
            let message = IncomingMessage {
                sender_or_title: sender,
                body,
                channel: channel.into(),
            };
            match gasto_ingest::classify(&message) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => eprintln!("no match"),
            }
        }

        Command::Ingest { input, send } => {
            run_ingest(&cfg, input, send).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config_path()?.display());
                println!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_logging(cfg: &Config) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| cfg.log.filter.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run_ingest(cfg: &Config, input: Option<PathBuf>, send: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut summary = Summary::default();
    let messages = read_messages(reader, &cfg.notifications.package_filter, &mut summary)?;
    let records = classify_all(&messages, &mut summary);

    for r in &records {
        println!("{}", serde_json::to_string(r)?);
    }

    if send {
        let client = BackendClient::new(&cfg.backend)?;
        let mut failed = 0;
        for r in &records {
            // keep going: one rejected record should not drop the rest
            if let Err(e) = client.send(r).await {
                warn!(error = %e, "failed to deliver record");
                failed += 1;
            }
        }
        info!(sent = records.len() - failed, failed, "delivery finished");
    }

    eprintln!(
        "read={} expenses={} incomes={} unmatched={} invalid_lines={} ignored_notifications={}",
        summary.read,
        summary.expenses,
        summary.incomes,
        summary.unmatched,
        summary.invalid_lines,
        summary.ignored_notifications
    );

    Ok(())
}
