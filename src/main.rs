use clap::{Parser, Subcommand};
use hypermd::app::Workbench;
use hypermd::core::AppContext;
use hypermd::kernel::services::adapters::{load_settings, HeadlessSurface, JsonSettingsStore};
use hypermd::kernel::services::ports::{AppConfig, MemorySettingsStore, SettingsStore};
use hypermd::models::{FileTreeRow, RowKind};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "hypermd")]
#[command(about = "Headless driver for the hypermd editor core")]
struct Args {
    /// Mirror the log to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Directory the `app://data/` assets and the editor template come from
    #[arg(long, global = true, value_name = "DIR")]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sidebar tree of a folder
    Tree { dir: PathBuf },
    /// Resolve an app:// URI and print the response body
    Route {
        uri: String,
        /// Documents to open before routing, so their editor pages resolve
        #[arg(long = "open", value_name = "PATH")]
        open: Vec<PathBuf>,
    },
    /// Create the next free Untitled document in a folder
    New { dir: PathBuf },
    /// Rename a document or folder
    Rename { old: PathBuf, new: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log_guard = logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("hypermd: {e}");
            if let Some(guard) = &log_guard {
                eprintln!("hypermd: log in {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> hypermd::Result<ExitCode> {
    let settings = load_settings().unwrap_or_default();
    let asset_root = args
        .assets
        .or_else(|| settings.asset_root.clone())
        .unwrap_or_else(|| PathBuf::from("assets"));
    let ctx = AppContext::local(AppConfig::new(asset_root));

    let store: Box<dyn SettingsStore> = match JsonSettingsStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "settings unavailable, using defaults");
            Box::new(MemorySettingsStore::new(settings))
        }
    };
    let mut workbench = Workbench::new(ctx, HeadlessSurface::new(), store);
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Tree { dir } => {
            workbench.add_root(&dir);
            for row in workbench.sidebar().rows() {
                let _ = writeln!(stdout, "{}", format_row(&row));
            }
        }
        Command::Route { uri, open } => {
            for path in &open {
                workbench.open_document(path);
            }
            let response = workbench.handle_uri(&uri);
            if response.is_empty() {
                eprintln!("hypermd: nothing at {uri}");
                return Ok(ExitCode::FAILURE);
            }
            let _ = stdout.write_all(&response.body);
            let _ = writeln!(stdout);
            for script in workbench.surface().pending_scripts() {
                tracing::info!(script, "script left pending: no live editor");
            }
        }
        Command::New { dir } => {
            workbench.add_root(&dir);
            let id = workbench.new_document(&dir)?;
            if let Some(buffer) = workbench.buffers().find_by_id(id) {
                let _ = writeln!(stdout, "{}", buffer.path().display());
            }
        }
        Command::Rename { old, new } => {
            let op = workbench.rename_path(&old, &new)?;
            let _ = writeln!(stdout, "{op}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn format_row(row: &FileTreeRow) -> String {
    let indent = "  ".repeat(row.depth as usize);
    let name = row.name.to_string_lossy();
    match row.kind {
        RowKind::Dir { expanded: true } => format!("{indent}v {name}/"),
        RowKind::Dir { expanded: false } => format!("{indent}> {name}/"),
        RowKind::File => format!("{indent}  {name}"),
        RowKind::Placeholder => format!("{indent}  {name}"),
    }
}
