use anyhow::Context;
use std::io;
use std::path::PathBuf;
use tourdesk_core::{logging, Config, SqliteTourStore};
use tourdesk_desk::{Controller, ControllerSettings, Notifier};
use tracing::{info, warn};

mod console;

use console::ConsoleUi;

const USAGE: &str = "usage: tourdesk [--config <path>]";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let (config, config_problem) = startup_config(&args);

    logging::init(&config.logging);
    if let Some(problem) = &config_problem {
        warn!(error = %problem, "Configuration rejected, using defaults");
    }
    info!(
        db_path = %config.storage.db_path.display(),
        currency = %config.display.currency_suffix,
        strict_dates = config.validation.strict_dates,
        "Starting TourDesk"
    );

    let store = SqliteTourStore::new(&config.storage.db_path);
    let mut controller = Controller::new(store, ControllerSettings::from_config(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut ui = ConsoleUi::new(stdin.lock(), stdout.lock(), config.display.clone());

    // Startup problems are reported in the window, never fatal
    if let Some(problem) = config_problem {
        ui.failure(
            "Error",
            &format!("Could not load configuration: {}. Using defaults.", problem),
        );
    }
    if let Err(err) = controller.start() {
        ui.failure(
            "Error",
            &format!("Could not connect to the tour database: {}", err),
        );
    }

    ui.run(&mut controller)?;

    info!("TourDesk closed");
    Ok(())
}

/// Configuration to start with, plus the reason defaults were used instead
fn startup_config(args: &[String]) -> (Config, Option<String>) {
    let loaded = parse_config_path(args).and_then(|path| {
        Config::load(path.as_deref()).context("failed to load configuration")
    });

    match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::load(None).unwrap_or_default(), Some(format!("{:#}", err))),
    }
}

fn parse_config_path(args: &[String]) -> anyhow::Result<Option<PathBuf>> {
    let mut args_iter = args.iter().skip(1);
    while let Some(arg) = args_iter.next() {
        if arg == "--config" {
            if let Some(path) = args_iter.next() {
                return Ok(Some(PathBuf::from(path)));
            }
            anyhow::bail!("--config was provided without a path\n{}", USAGE);
        }
    }

    Ok(None)
}
