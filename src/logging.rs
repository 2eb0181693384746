use std::path::{Path, PathBuf};

use thiserror::Error;
use time::macros::format_description;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt::time::UtcTime};

use crate::paths;

pub const LOG_FILE_NAME: &str = "mapvi.log";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory failed")]
	CreateLogDir {
		#[source]
		source: std::io::Error,
	},
	#[error("invalid log filter {filter:?}")]
	Filter {
		filter: String,
		#[source]
		source: ParseError,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Sends logs to `mapvi.log` in the user log directory; the terminal belongs
/// to the editor frame. Returns the log file path.
pub fn init_logging(default_filter: &str) -> Result<PathBuf, LoggingError> {
	let log_dir = paths::user_log_dir();
	std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateLogDir { source })?;
	let filter = session_filter(default_filter, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(filter)
		.with_writer(file_appender)
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	let log_file = log_dir.join(LOG_FILE_NAME);
	info!("mapvi {} logging to {}", env!("CARGO_PKG_VERSION"), log_file.display());
	Ok(log_file)
}

/// `RUST_LOG` wins when it parses. A broken configured filter is an error,
/// a broken `RUST_LOG` only falls back to the configured one.
fn session_filter(default_filter: &str, from_env: Option<&str>) -> Result<EnvFilter, LoggingError> {
	if let Some(filter) = from_env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
		return Ok(filter);
	}
	EnvFilter::try_new(default_filter)
		.map_err(|source| LoggingError::Filter { filter: default_filter.to_string(), source })
}

/// First log line of an editing session, naming what is mapped.
pub fn log_window(path: &Path, offset: u64, size: usize) {
	info!("editing {} bytes of {} at offset {:#x}", size, path.display(), offset);
}
