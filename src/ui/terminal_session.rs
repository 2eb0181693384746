use std::io::{self, Write};

use crossterm::{cursor::{MoveTo, Show}, execute, terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode}};
use thiserror::Error;

use super::TerminalSurface;
use crate::state::ScreenSize;

#[derive(Debug, Error)]
pub enum TerminalSessionError {
	#[error("enable raw mode failed")]
	EnableRawMode {
		#[source]
		source: io::Error,
	},
	#[error("enter alternate screen failed")]
	EnterAlternateScreen {
		#[source]
		source: io::Error,
	},
	#[error("query terminal size failed")]
	Size {
		#[source]
		source: io::Error,
	},
	#[error("write frame failed")]
	Present {
		#[source]
		source: io::Error,
	},
}

struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
	fn drop(&mut self) {
		let mut stdout = io::stdout();
		let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), Show, LeaveAlternateScreen);
		let _ = disable_raw_mode();
	}
}

/// Raw-mode terminal on the alternate screen, restored when dropped.
pub struct TerminalSession {
	stdout:      io::Stdout,
	_mode_guard: TerminalModeGuard,
}

impl TerminalSession {
	pub fn enter(title: &str) -> Result<Self, TerminalSessionError> {
		enable_raw_mode().map_err(|source| TerminalSessionError::EnableRawMode { source })?;
		let mode_guard = TerminalModeGuard;
		let mut stdout = io::stdout();
		execute!(stdout, EnterAlternateScreen, SetTitle(title))
			.map_err(|source| TerminalSessionError::EnterAlternateScreen { source })?;
		Ok(Self { stdout, _mode_guard: mode_guard })
	}
}

impl TerminalSurface for TerminalSession {
	fn size(&self) -> Result<ScreenSize, TerminalSessionError> {
		let (cols, rows) = terminal::size().map_err(|source| TerminalSessionError::Size { source })?;
		Ok(ScreenSize::from_terminal(cols, rows))
	}

	fn present(&mut self, frame: &[u8]) -> Result<(), TerminalSessionError> {
		let mut out = self.stdout.lock();
		out.write_all(frame).map_err(|source| TerminalSessionError::Present { source })?;
		out.flush().map_err(|source| TerminalSessionError::Present { source })
	}
}
