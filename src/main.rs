#![doc = include_str!("../README.md")]

use clap::Parser;
use commonware_runtime::{tokio, Metrics, Runner};
use std::sync::{Arc, Mutex};
use tracing::{error, Level};
use zkvote::{i18n::Language, logger, ui};

/// Lines of captured log output kept for the log pane.
const LOG_CAPACITY: usize = 256;

/// An interactive terminal walkthrough of zero-knowledge voting.
#[derive(Parser)]
#[command(name = "zkvote")]
struct Args {
    /// The log level for traces. opts: (error, debug, info, warn, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Seed for the simulated wallet's accounts.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Storage partition holding the language preference.
    #[arg(long, default_value = "zkvote")]
    partition: String,

    /// Language to start in, overriding the persisted preference.
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,
}

fn parse_language(value: &str) -> Result<Language, String> {
    match value {
        "zh" => Ok(Language::Zh),
        "en" => Ok(Language::En),
        _ => Err(format!("unrecognized language: {value} (expected zh or en)")),
    }
}

fn main() {
    let args = Args::parse();

    // The interface owns the terminal, so traces are captured into a shared
    // buffer rendered by the log pane instead of written to stdout.
    let logs = Arc::new(Mutex::new(Vec::new()));
    let writer = logger::Writer::new(logs.clone(), LOG_CAPACITY);
    tracing_subscriber::fmt()
        .json()
        .with_max_level(args.log_level)
        .with_writer(writer)
        .init();

    let runner = tokio::Runner::new(tokio::Config::new().with_catch_panics(false));
    runner.start(|context| async move {
        let app = match ui::App::init(
            context.with_label("ui"),
            logs,
            &args.partition,
            args.seed,
            args.lang,
        )
        .await
        {
            Ok(app) => app,
            Err(err) => {
                error!(?err, "failed to initialize interface");
                return;
            }
        };
        if let Err(err) = app.run().await {
            error!(?err, "interface failed");
        }
    });
}
