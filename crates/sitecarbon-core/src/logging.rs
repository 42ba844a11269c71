//! Tracing setup. Logs go to a file under the XDG state dir so report output
//! on stdout stays clean; stderr is used only when that file can't be opened.

use anyhow::Result;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV: &str = "SITECARBON_LOG";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::File(p) => write!(f, "{}", p.display()),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

/// Filter directives for `-v` repeated `verbosity` times.
pub fn filter_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,sitecarbon_core=info,sitecarbon=info",
        1 => "info,sitecarbon_core=debug,sitecarbon=debug",
        _ => "debug,sitecarbon_core=trace,sitecarbon=trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)))
}

/// `~/.local/state/sitecarbon/sitecarbon.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitecarbon")?;
    let dir = xdg_dirs.get_state_home().join("sitecarbon");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("sitecarbon.log"))
}

fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Never fails: if the log file is unusable
/// the subscriber writes to stderr instead. Returns the sink chosen.
pub fn init(verbosity: u8) -> LogSink {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_ansi(false);

    match open_log_file() {
        Ok((path, file)) => {
            builder.with_writer(Mutex::new(file)).init();
            tracing::info!("sitecarbon {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
            LogSink::File(path)
        }
        Err(e) => {
            builder.with_writer(std::io::stderr).init();
            tracing::warn!("log file unavailable ({e:#}); logging to stderr");
            LogSink::Stderr
        }
    }
}
