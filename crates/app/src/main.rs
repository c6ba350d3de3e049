use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ProgressConfig};
use ui::{App, LinkOpenerRef, SystemLinkOpener, UiApp, build_app_context};

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("invalid --poll-ms value: {raw}")]
    InvalidPollMs { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui]   [--db <sqlite_url>] [--poll-ms <ms>]");
    eprintln!("  app progress [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://<cwd>/plan.sqlite3");
    eprintln!("  --poll-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PLAN_DB_URL, PLAN_POLL_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    poll_interval: Duration,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("PLAN_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url("plan.sqlite3".into()), normalize_sqlite_url);
        let mut poll_interval = match std::env::var("PLAN_POLL_MS") {
            Ok(raw) => parse_poll_ms(raw)?,
            Err(_) => ProgressConfig::DEFAULT_POLL_INTERVAL,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--poll-ms" if cmd == Command::Ui => {
                    poll_interval = parse_poll_ms(require_value(args, "--poll-ms")?)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            db_url,
            poll_interval,
        }))
    }
}

fn parse_poll_ms(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ArgsError::InvalidPollMs { raw }),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn print_progress(services: &AppServices) {
    let progress = services.progress();
    let curriculum = services.curriculum();

    let overall = progress.snapshot().await;
    println!(
        "Program Progress: {}% ({} / {} items)",
        overall.percent, overall.checked, overall.total
    );
    for (phase_id, snapshot) in progress.phase_snapshots().await {
        let name = curriculum
            .phase(phase_id)
            .map_or("unknown phase", |phase| phase.name.as_str());
        println!(
            "  {name}: {}% ({} / {})",
            snapshot.percent, snapshot.checked, snapshot.total
        );
    }
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(services);
    let links: LinkOpenerRef = Arc::new(SystemLinkOpener);
    let context = build_app_context(&app, links);

    // tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Internship Plan")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1).peekable();

    // No subcommand launches the UI.
    let first = argv.peek().cloned();
    let cmd = match first.as_deref() {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            let cmd = Command::from_arg(first).ok_or_else(|| {
                print_usage();
                ArgsError::UnknownCommand(first.to_string())
            })?;
            argv.next();
            cmd
        }
    };

    let Some(parsed) = Args::parse(cmd, &mut argv).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };

    init_tracing();
    tracing::info!(db = %parsed.db_url, ?cmd, "starting");

    prepare_sqlite_file(&parsed.db_url)?;
    let config = ProgressConfig::with_poll_interval(parsed.poll_interval);
    let services = AppServices::new_sqlite(&parsed.db_url, config).await?;

    match cmd {
        Command::Ui => launch_ui(services),
        Command::Progress => print_progress(&services).await,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
