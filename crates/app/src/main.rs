use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use lesson_core::fragment::{self, Position};
use services::{ContentClient, DifficultyService, LibraryService, StageService, TextSource};
use storage::repository::Storage;
use ui::{App, ViewerApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidContentUrl { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidContentUrl { raw } => write!(f, "invalid --content-url value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    library: Arc<LibraryService>,
    stages: Arc<StageService>,
    difficulty: Arc<DifficultyService>,
    boot_position: Option<Position>,
}

impl ViewerApp for DesktopApp {
    fn library(&self) -> Arc<LibraryService> {
        Arc::clone(&self.library)
    }

    fn stages(&self) -> Arc<StageService> {
        Arc::clone(&self.stages)
    }

    fn difficulty(&self) -> Arc<DifficultyService> {
        Arc::clone(&self.difficulty)
    }

    fn boot_position(&self) -> Option<Position> {
        self.boot_position.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- ui  [--content-url <url>] [--db <sqlite_url>] [--at <fragment>]"
    );
    eprintln!("  cargo run -p app -- gen [--root <dir>]  # regenerate lessons.json");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --content-url http://localhost:8000/");
    eprintln!("  --db sqlite:viewer.sqlite3");
    eprintln!();
    eprintln!("Deep links:");
    eprintln!("  --at '#lesson=001&stage=2'");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VIEWER_CONTENT_URL, VIEWER_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Gen,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "gen" => Some(Self::Gen),
            _ => None,
        }
    }
}

struct UiArgs {
    content_url: String,
    db_url: String,
    boot_position: Option<Position>,
}

impl UiArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut content_url = std::env::var("VIEWER_CONTENT_URL")
            .unwrap_or_else(|_| "http://localhost:8000/".into());
        let mut db_url = std::env::var("VIEWER_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://viewer.sqlite3".into(), normalize_sqlite_url);
        let mut boot_position = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content-url" => {
                    let value = require_value(args, "--content-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentUrl { raw: value });
                    }
                    content_url = value;
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--at" => {
                    let value = require_value(args, "--at")?;
                    // A fragment without a lesson reference means the picker,
                    // same as launching with no --at at all.
                    boot_position = fragment::decode(&value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            content_url,
            db_url,
            boot_position,
        })
    }
}

struct GenArgs {
    root: PathBuf,
}

impl GenArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut root = PathBuf::from(".");
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--root" => {
                    root = PathBuf::from(require_value(args, "--root")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Self { root })
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
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
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

    let path = Path::new(path);
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

/// Scan the content root for three-digit lesson folders and regenerate
/// `lessons.json`, warning (without failing) about incomplete lessons.
fn run_gen(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.len() == 3 && name.chars().all(|c| c.is_ascii_digit()) {
            folders.push(name.to_string());
        }
    }
    folders.sort_by_key(|name| name.parse::<u32>().unwrap_or(u32::MAX));

    let manifest = serde_json::to_string_pretty(&folders)?;
    std::fs::write(root.join("lessons.json"), manifest)?;

    let mut warnings = Vec::new();
    for folder in &folders {
        for required in ["dialogue_teacher.md", "dialogue_pupil.md", "dialogue_image.png"] {
            if !root.join(folder).join(required).exists() {
                warnings.push(format!("missing {folder}/{required}"));
            }
        }
        if !root.join(folder).join("watch_together.txt").exists() {
            warnings.push(format!("optional: {folder}/watch_together.txt not found"));
        }
    }
    if !warnings.is_empty() {
        eprintln!("[gen] Warnings:\n  - {}", warnings.join("\n  - "));
    }
    eprintln!("[gen] wrote lessons.json with {} lessons", folders.len());

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }
    let mut iter = argv.into_iter();

    match cmd {
        Command::Gen => {
            let parsed = GenArgs::parse(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;
            run_gen(&parsed.root)
        }
        Command::Ui => {
            let parsed = UiArgs::parse(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            // Open + migrate SQLite at startup. Keep this in the binary glue
            // so core/services stay pure.
            prepare_sqlite_file(&parsed.db_url)?;
            let storage = Storage::sqlite(&parsed.db_url).await?;

            let source: Arc<dyn TextSource> = Arc::new(ContentClient::new(&parsed.content_url)?);
            let app = DesktopApp {
                library: Arc::new(LibraryService::new(Arc::clone(&source))),
                stages: Arc::new(StageService::new(Arc::clone(&source))),
                difficulty: Arc::new(DifficultyService::new(Arc::clone(&storage.preferences))),
                boot_position: parsed.boot_position,
            };

            let context = build_app_context(&(Arc::new(app) as Arc<dyn ViewerApp>));

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Lesson Viewer")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
