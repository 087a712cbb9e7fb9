use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_timeout_secs;
use services::{AppServices, QuizConfig, QuizLoopService};
use storage::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEndpoint { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEndpoint { raw } => write!(f, "invalid --endpoint value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }
}

/// Command-line overrides; anything left `None` falls back to the environment.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    endpoint: Option<Url>,
    timeout: Option<Duration>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--endpoint <url>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --endpoint http://127.0.0.1:5000/calculate-match");
    eprintln!("  no submit timeout");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DNA_SITE_URL, DNA_SCORING_URL, DNA_SCORING_TIMEOUT_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--endpoint" => {
                    let value = require_value(args, "--endpoint")?;
                    let url = Url::parse(value.trim())
                        .map_err(|_| ArgsError::InvalidEndpoint { raw: value.clone() })?;
                    parsed.endpoint = Some(url);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let timeout = parse_timeout_secs("--timeout-secs", &value)
                        .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(timeout);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn apply(self, mut config: QuizConfig) -> QuizConfig {
        if let Some(endpoint) = self.endpoint {
            config = config.with_scoring_url(endpoint);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_submit_timeout(Some(timeout));
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config = args.apply(QuizConfig::from_env()?);
    info!(
        endpoint = %config.scoring_url,
        timeout = ?config.submit_timeout,
        "launching match quiz"
    );

    // Session storage lives exactly as long as this desktop process.
    let storage = Storage::in_memory();
    let app = DesktopApp {
        services: AppServices::from_config(&config, &storage),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Pixel Perfection")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
