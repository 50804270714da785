//! # goldbuy CLI - Gold Buy-Back Calculator TUI
//!
//! A terminal front end for the goldbuy calculator.
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! goldbuy-cli
//!
//! # With file logging and a custom config file
//! goldbuy-cli --log --config ./goldbuy.toml
//!
//! # One-shot quote
//! goldbuy-cli quote --price 2000 --deduction 5 --weight 1
//! goldbuy-cli quote --price 2000 --weight 15.2 --explain
//! ```

use clap::{Parser, Subcommand};
use goldbuy::prelude::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;

mod config_loader;
mod tui;

use config_loader::CliConfig;
use tui::{handle_events, ui, App};

/// Longest the event loop waits for input when no effect is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Gold buy-back price calculator
#[derive(Parser, Debug)]
#[command(name = "goldbuy-cli")]
#[command(author = "goldbuy contributors")]
#[command(version)]
#[command(about = "Gold buy-back price calculator with Thai baht output", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Read settings from this TOML file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price one ornament purchase and exit
    Quote {
        /// Gold spot price
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,

        /// Melt deduction in percent
        #[arg(long, allow_negative_numbers = true, default_value = "5")]
        deduction: Decimal,

        /// Weight in grams
        #[arg(long, allow_negative_numbers = true)]
        weight: Decimal,

        /// Print the full breakdown as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Print every calculation step
        #[arg(long, default_value = "false")]
        explain: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = CliConfig::try_load(args.config.as_deref());
    let file_logging = args.log
        || loaded
            .as_ref()
            .ok()
            .and_then(|c| c.enable_logging)
            .unwrap_or(false);

    // Initialize tracing with optional file logging
    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none();

    if file_logging {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "goldbuy.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter =
            tracing_subscriber::EnvFilter::from_default_env().add_directive("goldbuy=debug".parse()?);

        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        tracing::info!(
            "--- goldbuy Session Started [{}] ---",
            chrono::Utc::now()
        );
    } else {
        _file_guard = None;
        // Quote output goes to stdout, so console logs go to stderr
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("goldbuy=info".parse()?),
                )
                .init();
        }
    }

    let cli_config = loaded.unwrap_or_else(|e| {
        warn!("{}", e);
        CliConfig::default()
    });
    let config = cli_config.into_calculator_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        CalculatorConfig::default()
    });

    match args.command {
        Some(Commands::Quote {
            price,
            deduction,
            weight,
            json,
            explain,
        }) => {
            let ok = run_quote(price, deduction, weight, json, explain)?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_tui(config),
    }
}

/// Run the TUI application
fn run_tui(config: CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config)?;

    // Initialize terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        let timeout = app
            .calc
            .next_effect_in()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if handle_events(app, timeout)? {
            break;
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    Ok(())
}

/// Prices one ornament purchase. Returns `false` when the inputs were rejected.
fn run_quote(
    price: Decimal,
    deduction: Decimal,
    weight: Decimal,
    json: bool,
    explain: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let input = CalculationInput {
        price,
        deduction_percent: deduction,
        weight_grams: weight,
    };

    match calculate(&input) {
        Ok(CalculationResult::Priced(breakdown)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else if explain {
                print!("{}", breakdown.explain());
            } else {
                let formatter = BahtFormatter::new()?;
                println!("{}", formatter.format_currency(breakdown.final_price));
            }
            Ok(true)
        }
        Ok(CalculationResult::Invalid { fields }) => {
            if json {
                let invalid = CalculationResult::Invalid { fields };
                println!("{}", serde_json::to_string_pretty(&invalid)?);
            } else {
                println!("Error");
            }
            for field in fields.fields() {
                eprintln!("{} must not be negative", field);
            }
            Ok(false)
        }
        Err(e) => {
            println!("Error");
            eprintln!("{}", e);
            Ok(false)
        }
    }
}
