use anyhow::Result;
use bottui::app::App;
use bottui::config::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Terminal dashboard for the tweet bot: live stats, last post, and
/// quick actions.
#[derive(Debug, Parser)]
#[command(name = "bottui", version, about)]
struct Args {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bot server base URL, overriding the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Seconds between automatic stats polls, overriding the config file.
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Log file path (the terminal itself is taken over by the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(default_log_path);
    let _log_guard = init_logging(&log_path)?;

    let config_path = args.config.unwrap_or_else(Config::default_path);
    let mut config = Config::load(&config_path)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(poll_interval) = args.poll_interval {
        config.poll_interval_secs = poll_interval;
    }

    // Panics must reach the log file; the terminal is in raw mode.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));

    let mut terminal = ratatui::init();
    let mut app = App::new(config, config_path);
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bottui")
        .join("bottui.log")
}

fn init_logging(path: &PathBuf) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let directory = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "bottui.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
