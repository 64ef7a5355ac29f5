//! Standalone TUI binary for Profesor.exe.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use prof_session::{GameMaster, GeminiService, SessionConfig};
use prof_tui::app::TuiApp;
use prof_tui::config::UiConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "profexe",
    about = "Profesor.exe: survive a semester of teaching in your terminal",
    version
)]
struct Args {
    /// Model to ask for narration (overrides PROFEXE_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the generative language API (overrides PROFEXE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Milliseconds between revealed characters; 0 shows narration at once
    #[arg(long, default_value = "15")]
    char_delay_ms: u64,

    /// Directory for profexe.log (defaults to the system temp directory)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("profexe"));
    let _guard = match setup_logging(&log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: cannot open log directory {}: {e}", log_dir.display());
            process::exit(1);
        }
    };

    let mut config = SessionConfig::from_env();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }

    let service = match GeminiService::new(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Narrative service unavailable");
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    tracing::info!(model = service.model(), "Narrative service ready");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: cannot start async runtime: {e}");
            process::exit(1);
        }
    };

    let ui = UiConfig::default().with_char_delay_ms(args.char_delay_ms);
    let app = TuiApp::new(GameMaster::new(service), runtime.handle().clone(), ui);

    if let Err(e) = prof_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to a file only; the terminal belongs to the UI.
fn setup_logging(dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, "profexe.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Log file: {}/profexe.log", dir.display());
    Ok(guard)
}
