use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ConfigError, SubmissionConfig, SurveyFlowService, load_catalog};
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

mod telemetry;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidConfig { flag: &'static str, source: ConfigError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidConfig { flag, source } => write!(f, "invalid {flag}: {source}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidConfig { source, .. } => Some(source),
            ArgsError::MissingValue { .. } | ArgsError::UnknownArg(_) => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    survey_flow: Arc<SurveyFlowService>,
}

impl UiApp for DesktopApp {
    fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(DesktopLinkOpener)
    }
}

#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    api_base: Option<String>,
    timeout_secs: Option<String>,
    no_submit: bool,
    log: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--api-base <url>] [--timeout-secs <n>]");
    eprintln!("                      [--no-submit] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog       bundled ten-question catalog");
    eprintln!("  --api-base      {}", services::config::DEFAULT_API_BASE_URL);
    eprintln!("  --timeout-secs  {}", services::config::DEFAULT_TIMEOUT_SECS);
    eprintln!("  --log           {}", telemetry::DEFAULT_LOG_FILTER);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SURVEY_CATALOG, SURVEY_API_BASE_URL, SURVEY_API_TIMEOUT_SECS,");
    eprintln!("  SURVEY_SUBMIT=off, RUST_LOG, SURVEY_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            catalog: std::env::var_os("SURVEY_CATALOG").map(PathBuf::from),
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => parsed.catalog = Some(require_value(args, "--catalog")?.into()),
                "--api-base" => parsed.api_base = Some(require_value(args, "--api-base")?),
                "--timeout-secs" => {
                    parsed.timeout_secs = Some(require_value(args, "--timeout-secs")?);
                }
                "--no-submit" => parsed.no_submit = true,
                "--log" => parsed.log = Some(require_value(args, "--log")?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn submission_config(&self) -> Result<SubmissionConfig, ArgsError> {
        self.submission_config_with(|key| std::env::var(key).ok())
    }

    /// A flag replaces its environment variable before anything is parsed, so a
    /// malformed variable is never read when the flag is given.
    fn submission_config_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<SubmissionConfig, ArgsError> {
        let lookup = |key: &str| match key {
            "SURVEY_API_BASE_URL" if self.api_base.is_some() => self.api_base.clone(),
            "SURVEY_API_TIMEOUT_SECS" if self.timeout_secs.is_some() => self.timeout_secs.clone(),
            "SURVEY_SUBMIT" if self.no_submit => Some("off".to_string()),
            _ => env(key),
        };

        SubmissionConfig::from_lookup(lookup).map_err(|source| {
            let flag = match &source {
                ConfigError::InvalidTimeout { .. } if self.timeout_secs.is_some() => {
                    "--timeout-secs"
                }
                ConfigError::InvalidTimeout { .. } => "SURVEY_API_TIMEOUT_SECS",
                _ if self.api_base.is_some() => "--api-base",
                _ => "SURVEY_API_BASE_URL",
            };
            ArgsError::InvalidConfig { flag, source }
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    telemetry::init(args.log.as_deref())?;

    let submission = args.submission_config().inspect_err(|_| print_usage())?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    tracing::info!(
        questions = catalog.len(),
        catalog = ?args.catalog,
        submit = submission.enabled(),
        "starting survey"
    );

    let services = AppServices::new(catalog, &submission, Clock::system())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        survey_flow: services.survey_flow(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Personal Impact Survey")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
