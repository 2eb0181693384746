mod status_bar;
mod terminal_session;

use std::io;

use crossterm::{cursor::{Hide, MoveTo, Show}, queue, style::{Attribute, SetAttribute}, terminal::{Clear, ClearType}};
use tracing::trace;

use crate::{state::{EditorState, ScreenSize, lines}, window::ByteWindow};
pub use terminal_session::{TerminalSession, TerminalSessionError};

/// Where finished frames go.
pub trait TerminalSurface {
	fn size(&self) -> Result<ScreenSize, TerminalSessionError>;
	/// Writes one complete frame in a single output operation.
	fn present(&mut self, frame: &[u8]) -> Result<(), TerminalSessionError>;
}

/// Composes whole frames: text rows, status line and cursor placement.
#[derive(Debug, Default)]
pub struct Renderer {
	frame: Vec<u8>,
}

impl Renderer {
	pub fn new() -> Self { Self::default() }

	/// Realigns the viewport around the cursor and returns the next frame.
	pub fn render<W: ByteWindow>(&mut self, state: &mut EditorState<W>) -> io::Result<&[u8]> {
		state.align_viewport_to_cursor();

		self.frame.clear();
		queue!(self.frame, Hide, MoveTo(0, 0))?;
		self.draw_rows(state)?;
		self.draw_status_bar(state)?;

		let (cursor_row, cursor_col) = state.cursor_screen_position();
		queue!(self.frame, MoveTo(to_cell(cursor_col), to_cell(cursor_row)), Show)?;
		trace!("frame composed: {} bytes", self.frame.len());
		Ok(&self.frame)
	}

	fn draw_rows<W: ByteWindow>(&mut self, state: &EditorState<W>) -> io::Result<()> {
		if !state.screen.shows_text() {
			return Ok(());
		}
		let bytes = state.bytes();
		let text_rows = state.screen.text_rows();
		let text_cols = state.screen.text_cols();
		let col_offset = state.viewport.col_offset;
		let mut pos = state.first_visible_offset();

		for row in 0..text_rows {
			let line_start = pos;
			let line_end = lines::line_end(bytes, line_start);

			if line_start >= bytes.len() {
				self.frame.push(b'~');
			} else if line_end - line_start > col_offset {
				let shown_start = line_start + col_offset;
				let shown_end = line_end.min(shown_start + text_cols);
				self.frame.extend(bytes[shown_start..shown_end].iter().map(|byte| cell_byte(*byte)));
			}

			queue!(self.frame, Clear(ClearType::UntilNewLine))?;
			if row + 1 < text_rows {
				self.frame.extend_from_slice(b"\r\n");
			}

			pos = if line_end < bytes.len() { line_end + 1 } else { bytes.len() };
		}
		Ok(())
	}

	fn draw_status_bar<W: ByteWindow>(&mut self, state: &EditorState<W>) -> io::Result<()> {
		let status = status_bar::fit_to_width(&status_bar::status_text(state), state.screen.text_cols());
		if state.screen.shows_text() {
			self.frame.extend_from_slice(b"\r\n");
		}
		queue!(self.frame, SetAttribute(Attribute::Reverse))?;
		self.frame.extend_from_slice(status.as_bytes());
		queue!(self.frame, SetAttribute(Attribute::Reset))?;
		Ok(())
	}
}

/// One byte, one cell: anything that is not printable ASCII shows as `.`.
fn cell_byte(byte: u8) -> u8 { if crate::state::is_printable(byte) { byte } else { b'.' } }

fn to_cell(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }
