mod api;
mod i18n;
mod notifier;
mod tracker;

#[cfg(test)]
mod testing;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use hearth_channels::telegram::TelegramChannel;
use hearth_core::config::{self, Config, HearthConfig};
use hearth_core::traits::Messenger;
use notifier::{Mode, Notifier};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing::{error, info};
use tracker::Tracker;

#[derive(Parser)]
#[command(
    name = "hearth",
    version,
    about = "Family morning briefings, reminders and a Telegram task checklist"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "hearth.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one notification and exit.
    Notify {
        /// Which message to send.
        #[arg(value_enum, default_value_t = Mode::Morning)]
        mode: Mode,
    },
    /// Run the checklist tracker and health endpoint.
    Track,
    /// Show the loaded configuration and this month's event dates.
    Status,
}

/// Install the subscriber: `RUST_LOG` wins over `hearth.log_level`; a daily
/// log file is added when `hearth.log_dir` is set. Hold the guard for the
/// life of the process so the file writer keeps flushing.
fn init_logging(cfg: &HearthConfig) -> Option<WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let (file_layer, guard) = match cfg.log_dir {
        Some(ref dir) => {
            let appender = tracing_appender::rolling::daily(config::shellexpand(dir), "hearth.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut cfg = config::load(&cli.config)?;
    let _guard = init_logging(&cfg.hearth);
    cfg.apply_env()?;

    match cli.command {
        Commands::Status => {
            print_status(&cli.config, &cfg);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Notify { mode } => {
            let messenger = connect(&cfg)?;
            let today = chrono::Local::now().date_naive();
            if Notifier::new(cfg, messenger).run(mode, today).await {
                Ok(ExitCode::SUCCESS)
            } else {
                error!("notification failed");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Track => {
            let messenger = connect(&cfg)?;
            let now = chrono::Local::now().naive_local();
            let tracker = Tracker::new(cfg.clone(), messenger, now)?;

            tokio::spawn(api::serve(
                cfg.tracker.port,
                cfg.hearth.name.clone(),
                cfg.hearth.locale.clone(),
            ));
            info!("{} tracker started", cfg.hearth.name);
            tracker.run().await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validate required settings and build the Telegram messenger.
fn connect(cfg: &Config) -> anyhow::Result<Arc<dyn Messenger>> {
    if let Err(e) = cfg.validate() {
        error!("configuration error: {e}");
        return Err(e.into());
    }
    let channel = TelegramChannel::new(
        cfg.telegram.clone(),
        Duration::from_secs(cfg.hearth.request_timeout_secs),
        cfg.tracker.long_poll_timeout_secs,
    );
    Ok(Arc::new(channel))
}

fn print_status(path: &str, cfg: &Config) {
    println!("{} status\n", cfg.hearth.name);
    println!("Config: {path}");
    println!(
        "  telegram: {}",
        match (cfg.telegram.bot_token.is_empty(), cfg.telegram.chat_id.is_empty()) {
            (false, false) => format!("configured (chat {})", cfg.telegram.chat_id),
            (true, _) => "missing bot token".to_string(),
            (false, true) => "missing chat id".to_string(),
        }
    );
    println!(
        "  weather: {} ({}, {})",
        cfg.weather.city, cfg.weather.latitude, cfg.weather.longitude
    );
    println!(
        "  birthdays: {}, quotes: {}, events: {}",
        cfg.birthdays.len(),
        cfg.quotes.len(),
        cfg.events.len()
    );
    println!(
        "  tracker: port {}, summary at {}, stats in {}",
        cfg.tracker.port, cfg.tracker.summary_time, cfg.tracker.stats_path
    );
    println!();

    let today = chrono::Local::now().date_naive();
    for event in &cfg.events {
        match event.rule.date_in(today.year(), today.month()) {
            Some(date) => println!("  {} ({}): {date}", event.name, event.rule),
            None => println!("  {} ({}): not this month", event.name, event.rule),
        }
    }
}
