mod app_state;
mod cli;

use std::fmt::Display;
use std::process::ExitCode;
use std::rc::Rc;

use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use app_state::SashApp;
use cli::{Args, Command};
use sash_common::{Event, EventBus, SashError};
use sash_config::SashConfig;
use sash_explorer::FsFileSource;

const DEFAULT_LOG_DIRECTIVE: &str = "sash=info";
const EVENT_BUS_CAPACITY: usize = 256;

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log level {directive:?} ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Log every bus event until shutdown. Returns how many were seen.
fn spawn_event_monitor(bus: &EventBus) -> JoinHandle<usize> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        let mut seen = 0;
        loop {
            match rx.recv().await {
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Ok(event) => {
                    seen += 1;
                    tracing::debug!(?event, "bus event");
                }
                Err(RecvError::Lagged(skipped)) => {
                    seen += skipped as usize;
                    tracing::debug!(skipped, "event monitor lagged");
                }
            }
        }
        seen
    })
}

fn print_report(report: &(impl Serialize + Display), json: bool) -> Result<(), SashError> {
    if json {
        let out = serde_json::to_string_pretty(report)
            .map_err(|e| SashError::Other(format!("failed to serialize output: {e}")))?;
        println!("{out}");
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run(app: &mut SashApp, args: &Args) -> Result<(), SashError> {
    match &args.command {
        Command::Layout { width, height } => {
            if width.is_some() || height.is_some() {
                let container = app.geometry().container();
                app.resize_container(
                    width.unwrap_or(container.width),
                    height.unwrap_or(container.height),
                );
            }
            print_report(&app.layout(), args.json)
        }
        Command::Drag { divider, to, steps } => {
            let report = app.drag_divider(*divider, *to, *steps)?;
            print_report(&report, args.json)
        }
        Command::Cards { folder, open } => {
            let report = app.list_cards(folder.as_deref(), &FsFileSource, open.as_deref())?;
            print_report(&report, args.json)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = sash_config::load_config_from(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("sash v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    // An explicit --config must load and validate; the platform default
    // falls back to built-in defaults.
    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_none() => {
            tracing::warn!("Config load failed, using defaults: {e}");
            SashConfig::default()
        }
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let bus = Rc::new(EventBus::new(EVENT_BUS_CAPACITY));
    let monitor = spawn_event_monitor(&bus);

    let result = SashApp::new(config, Rc::clone(&bus)).and_then(|mut app| {
        let result = run(&mut app, &args);
        app.shutdown();
        result
    });
    if result.is_err() {
        bus.publish(Event::Shutdown);
    }

    match monitor.await {
        Ok(seen) => tracing::debug!(events = seen, "event monitor stopped"),
        Err(e) => tracing::warn!("event monitor failed: {e}"),
    }

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
