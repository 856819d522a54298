mod config;
mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use sheetchat_core::constants::MIN_POLL_INTERVAL;
use sheetchat_core::store::SqliteStore;
use sheetchat_core::{login, ChatRuntime, SyncConfig};

use crate::config::TuiConfig;
use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "sheetchat")]
#[command(about = "Two-party chat over a shared tabular store")]
struct Args {
    /// Path to the shared chat database
    #[arg(long)]
    store: Option<PathBuf>,

    /// Path to JSON config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Display name to log in with
    #[arg(long)]
    name: Option<String>,

    /// Ten-digit phone number to log in with
    #[arg(long)]
    number: Option<String>,

    /// Open the conversation with this person after login
    #[arg(long)]
    peer: Option<String>,

    /// How often to poll the store, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing()?;

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let config = TuiConfig::load_or_default(args.config.as_deref())?;

    let store_path = args
        .store
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(default_store_path);
    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }
    }
    let store = SqliteStore::open(&store_path)
        .with_context(|| format!("Failed to open chat store at {}", store_path.display()))?;

    let mut sync_config = SyncConfig::default();
    if let Some(ms) = args.interval_ms.or(config.poll_interval_ms) {
        let interval = Duration::from_millis(ms).max(MIN_POLL_INTERVAL);
        sync_config = sync_config.with_poll_interval(interval);
    }

    let mut chat_runtime = ChatRuntime::new(Arc::new(store), sync_config);
    let update_rx = chat_runtime
        .take_update_rx()
        .ok_or_else(|| anyhow::anyhow!("Chat runtime already has an active update receiver"))?;
    let mut app = App::new(chat_runtime.handle(), update_rx);
    app.pending_peer_name = args.peer;

    // Flags beat config for identity; a complete one logs in straight away,
    // a partial one just prefills the form.
    let identity_name = args
        .name
        .or_else(|| config.identity.as_ref().map(|i| i.name.clone()));
    let identity_number = args
        .number
        .or_else(|| config.identity.as_ref().map(|i| i.number.clone()));
    match (identity_name, identity_number) {
        (Some(name), Some(number)) => match login(&name, &number) {
            Ok(ctx) => app.enter_session(ctx),
            Err(e) => {
                app.name_input = name;
                app.number_input = number;
                app.login_error = Some(e.to_string());
            }
        },
        (name, number) => {
            if let Some(name) = name {
                app.name_input = name;
            }
            if let Some(number) = number {
                app.number_input = number;
            }
        }
    }

    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app).await;

    chat_runtime.shutdown();

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Logs go to a file so they cannot corrupt the alternate screen.
/// Without `SHEETCHAT_LOG_FILE` in the environment, logging stays off.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let Ok(path) = std::env::var("SHEETCHAT_LOG_FILE") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("sheetchat").join("chat.db"))
        .unwrap_or_else(|| PathBuf::from("sheetchat.db"))
}
