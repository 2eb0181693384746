use tracing::debug;

use crate::window::ByteWindow;

mod cursor;
mod edit;
pub mod lines;
mod viewport;

#[cfg(test)]
mod tests;

pub use cursor::MoveDirection;

/// Logical cursor position. `row` is the 0-based line number and `col` the
/// 0-based byte offset inside that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
	pub row: usize,
	pub col: usize,
}

/// First visible row and column of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
	pub row_offset: usize,
	pub col_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
	pub rows: u16,
	pub cols: u16,
}

impl ScreenSize {
	pub const FALLBACK: Self = Self { rows: 25, cols: 80 };

	/// Terminals that report a zero width get the classic 80x25 grid.
	pub fn from_terminal(cols: u16, rows: u16) -> Self {
		if cols == 0 { Self::FALLBACK } else { Self { rows, cols } }
	}

	/// Rows available for text; the last screen row belongs to the status line.
	/// Never zero so cursor scrolling keeps working on a one-row screen.
	pub fn text_rows(&self) -> usize { usize::from(self.rows.saturating_sub(1)).max(1) }

	/// A single-row screen only has room for the status line.
	pub fn shows_text(&self) -> bool { self.rows >= 2 }

	pub fn text_cols(&self) -> usize { usize::from(self.cols).max(1) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
	Normal,
	Insert,
	Command,
}

impl EditorMode {
	pub fn label(self) -> &'static str {
		match self {
			EditorMode::Normal => "NORMAL",
			EditorMode::Insert => "INSERT",
			EditorMode::Command => "COMMAND",
		}
	}
}

/// First key of a Normal mode chord that is waiting for its second key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingChord {
	Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarState {
	pub message: String,
}

#[derive(Debug)]
pub struct EditorState<W> {
	pub window:           W,
	pub base:             u64,
	pub cursor:           CursorState,
	pub viewport:         ViewportState,
	pub screen:           ScreenSize,
	pub mode:             EditorMode,
	pub command_line:     String,
	pub command_capacity: usize,
	pub pending_chord:    Option<PendingChord>,
	pub status_bar:       StatusBarState,
}

impl<W: ByteWindow> EditorState<W> {
	pub const DEFAULT_COMMAND_CAPACITY: usize = 255;

	pub fn new(window: W, base: u64) -> Self {
		Self {
			window,
			base,
			cursor: CursorState::default(),
			viewport: ViewportState::default(),
			screen: ScreenSize::FALLBACK,
			mode: EditorMode::Normal,
			command_line: String::new(),
			command_capacity: Self::DEFAULT_COMMAND_CAPACITY,
			pending_chord: None,
			status_bar: StatusBarState::default(),
		}
	}

	pub fn with_command_capacity(mut self, capacity: usize) -> Self {
		self.command_capacity = capacity;
		self
	}

	pub fn bytes(&self) -> &[u8] { self.window.bytes() }

	/// Byte offset of the cursor, rescanned from the window start.
	pub fn cursor_offset(&self) -> usize {
		lines::cursor_to_offset(self.bytes(), self.cursor.row, self.cursor.col)
	}

	pub fn line_count(&self) -> usize { lines::line_count(self.bytes()) }

	pub fn set_screen_size(&mut self, screen: ScreenSize) {
		if self.screen != screen {
			debug!("screen resized to {}x{}", screen.cols, screen.rows);
			self.screen = screen;
		}
	}

	pub fn is_insert_mode(&self) -> bool { self.mode == EditorMode::Insert }

	pub fn is_command_mode(&self) -> bool { self.mode == EditorMode::Command }

	pub fn enter_insert_mode(&mut self) {
		self.mode = EditorMode::Insert;
		debug!("mode -> INSERT");
	}

	pub fn exit_insert_mode(&mut self) {
		self.mode = EditorMode::Normal;
		debug!("mode -> NORMAL");
	}

	pub fn enter_command_mode(&mut self) {
		self.mode = EditorMode::Command;
		self.command_line.clear();
		self.status_bar.message.clear();
		debug!("mode -> COMMAND");
	}

	pub fn exit_command_mode(&mut self) {
		self.mode = EditorMode::Normal;
		self.command_line.clear();
		debug!("mode -> NORMAL");
	}

	/// Appends a printable byte; ignored once the command line is full.
	pub fn push_command_byte(&mut self, byte: u8) {
		if self.command_line.len() < self.command_capacity && is_printable(byte) {
			self.command_line.push(char::from(byte));
		}
	}

	pub fn pop_command_byte(&mut self) -> Option<char> { self.command_line.pop() }

	pub fn take_command_line(&mut self) -> String { std::mem::take(&mut self.command_line) }
}

pub fn is_printable(byte: u8) -> bool { (0x20..=0x7e).contains(&byte) }
