use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::app_services::DEFAULT_ASSET_ROOT;
use services::{AppConfig, AppServices, Clock};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAssetRoot { raw: String },
    InvalidReturnDelay { raw: String },
    InvalidVideoPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAssetRoot { raw } => write!(f, "invalid --assets value: {raw}"),
            ArgsError::InvalidReturnDelay { raw } => {
                write!(f, "invalid --return-delay value: {raw}")
            }
            ArgsError::InvalidVideoPath { raw } => write!(f, "invalid --video value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--assets <dir>] [--catalog <file.json>] [--return-delay <secs>] [--video <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --assets {DEFAULT_ASSET_ROOT}");
    eprintln!("  --catalog (built-in Maseru tour)");
    eprintln!("  --return-delay 5");
    eprintln!("  --video videos/maseru_video.mp4 (relative to --assets)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TOUR_ASSET_ROOT, TOUR_CATALOG, TOUR_RETURN_DELAY_SECS, TOUR_VIDEO, RUST_LOG");
}

fn parse_delay(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidReturnDelay { raw })
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<AppConfig, ArgsError> {
    let mut config = AppConfig::default();
    if let Ok(root) = std::env::var("TOUR_ASSET_ROOT") {
        config.asset_root = PathBuf::from(root);
    }
    config.catalog_path = std::env::var_os("TOUR_CATALOG").map(PathBuf::from);
    if let Ok(raw) = std::env::var("TOUR_RETURN_DELAY_SECS") {
        config.return_delay_secs = Some(parse_delay(raw)?);
    }
    config.video_path = std::env::var_os("TOUR_VIDEO").map(PathBuf::from);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => {
                let value = require_value(args, "--assets")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidAssetRoot { raw: value });
                }
                config.asset_root = PathBuf::from(value);
            }
            "--catalog" => {
                config.catalog_path = Some(PathBuf::from(require_value(args, "--catalog")?));
            }
            "--return-delay" => {
                let value = require_value(args, "--return-delay")?;
                config.return_delay_secs = Some(parse_delay(value)?);
            }
            "--video" => {
                let value = require_value(args, "--video")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidVideoPath { raw: value });
                }
                config.video_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    config.asset_root = absolutize(&config.asset_root);
    Ok(config)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = parse_args(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(
        assets = %config.asset_root.display(),
        catalog = ?config.catalog_path,
        video = ?config.video_path,
        "starting tour"
    );

    let services = AppServices::new(&config, Clock::System)?;
    let window_title = services.catalog().settings().window_title();
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window_title)
            .with_maximized(true)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
