use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use addon_watch::catalog::CatalogClient;
use addon_watch::check::run_check;
use addon_watch::config::{self, Config, DEFAULT_CHECK_INTERVAL_MINUTES};
use addon_watch::host::{InstalledItem, ItemSource, ManifestSource};
use addon_watch::messages::{MessageCatalog, MessageKey};
use addon_watch::notify::{Dispatcher, ReplySink};
use addon_watch::report::{RenderTarget, ReportBuilder};
use addon_watch::scheduler::Scheduler;

#[derive(Parser)]
#[command(name = "addon-watch")]
#[command(version, about = "Checks installed add-ons against a remote catalog")]
struct Cli {
    /// Path to the installed add-on manifest (JSON array)
    #[arg(long)]
    manifest: PathBuf,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one check now and print both reports
    Updates,
}

/// Replies to the invoking terminal
struct StdoutSink;

impl ReplySink for StdoutSink {
    fn reply(&self, text: &str) {
        println!("{text}");
    }
}

/// Everything one check run needs, wired once at startup
struct Engine {
    catalog: CatalogClient,
    source: ManifestSource,
    messages: MessageCatalog,
    locale: Option<String>,
    dispatcher: Dispatcher,
}

impl Engine {
    fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            catalog: CatalogClient::new(&config.check.catalog_url),
            source: ManifestSource::new(&cli.manifest),
            messages: load_messages(),
            locale: config.locale.clone(),
            dispatcher: Dispatcher::from_config(&config.notify, reqwest::Client::new()),
        }
    }

    async fn check_and_notify(&self, items: &[InstalledItem], requestor: Option<&dyn ReplySink>) {
        let run = run_check(&self.catalog, items).await;

        let builder = ReportBuilder::new(&self.messages, self.locale.as_deref());
        let (outdated, failures) = builder.build(run.outcomes());

        self.dispatcher.dispatch(&outdated, requestor).await;
        self.dispatcher.dispatch(&failures, requestor).await;
    }
}

/// Built-in messages, with per-locale overrides from the data directory
/// when a messages.json is present.
fn load_messages() -> MessageCatalog {
    let path = config::messages_path();
    match std::fs::read_to_string(&path) {
        Ok(raw) => MessageCatalog::from_overrides(&raw).unwrap_or_else(|e| {
            warn!("Could not parse {:?} ({}); using built-in messages", path, e);
            MessageCatalog::default()
        }),
        Err(_) => MessageCatalog::default(),
    }
}

fn init_tracing(log_to_file: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_to_file {
        let data_dir = config::data_dir();
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            eprintln!("Failed to create data directory {data_dir:?}: {e}");
        }
        let appender = tracing_appender::rolling::never(data_dir, "addon-watch.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

async fn run_updates(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config.clone().unwrap_or_else(config::config_path));
    let engine = Engine::new(&cli, &config);
    let sink = StdoutSink;

    sink.reply(&RenderTarget::Plain.apply(
        engine
            .messages
            .get(MessageKey::Checking, engine.locale.as_deref()),
    ));

    let items = engine.source.installed_items()?;
    engine.check_and_notify(&items, Some(&sink)).await;
    Ok(())
}

async fn run_watch(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config.clone().unwrap_or_else(config::config_path));

    let minutes = config.check.auto_check_interval_minutes;
    let minutes = if minutes > 0.0 {
        minutes
    } else {
        warn!(
            "Invalid check interval {minutes}; using {} minutes",
            DEFAULT_CHECK_INTERVAL_MINUTES
        );
        DEFAULT_CHECK_INTERVAL_MINUTES
    };
    let period = Duration::from_secs_f64(minutes * 60.0);

    let engine = Arc::new(Engine::new(&cli, &config));
    let scheduler = Scheduler::start(period, move || {
        let engine = engine.clone();
        async move {
            // The manifest is re-read every run so newly installed add-ons
            // are picked up without a restart.
            match engine.source.installed_items() {
                Ok(items) => engine.check_and_notify(&items, None).await,
                Err(e) => warn!("Skipping check, could not enumerate items: {}", e),
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    scheduler.shutdown();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Command::Updates) => {
            let _guard = init_tracing(false);
            runtime.block_on(run_updates(cli))
        }
        None => {
            let _guard = init_tracing(true);
            runtime.block_on(run_watch(cli))
        }
    }
}
