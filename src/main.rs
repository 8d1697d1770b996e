use anyhow::{Context, Result};
use clap::Parser;
use remora::app::App;
use remora::cli::Cli;
use remora::config::Config;
use remora::tui::Tui;
use remora::utils::get_log_dir;
use std::time::Instant;
use tracing::{info, warn};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("remora.log");

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "remora.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    // Print log location before TUI starts (this will be visible briefly)
    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let mut config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    for key in config.keymap.invalid_overrides() {
        warn!("Ignoring keymap override with unknown key: {}", key);
    }
    info!("Starting with config {:?}", config_path);

    let mut app = App::new(config, config_path, Instant::now())?;
    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    drop(tui);
    drop(guard);

    result
}
