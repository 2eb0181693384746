use super::{EditorState, lines};
use crate::window::ByteWindow;

impl<W: ByteWindow> EditorState<W> {
	/// Brings the viewport back around the cursor before a frame is drawn.
	///
	/// Up/Down navigation already scrolls vertically; this only catches the
	/// rows the cursor reached some other way (newline insertion, wrapping
	/// Left/Right, a smaller terminal).
	pub fn align_viewport_to_cursor(&mut self) {
		let text_rows = self.screen.text_rows();
		if self.cursor.row < self.viewport.row_offset {
			self.viewport.row_offset = self.cursor.row;
		} else if self.cursor.row >= self.viewport.row_offset + text_rows {
			self.viewport.row_offset = self.cursor.row + 1 - text_rows;
		}

		let text_cols = self.screen.text_cols();
		if self.cursor.col < self.viewport.col_offset {
			self.viewport.col_offset = self.cursor.col;
		}
		if self.cursor.col >= self.viewport.col_offset + text_cols {
			self.viewport.col_offset = self.cursor.col + 1 - text_cols;
		}
	}

	/// Byte offset of the first visible row.
	pub fn first_visible_offset(&self) -> usize { lines::row_start(self.bytes(), self.viewport.row_offset) }

	/// Cursor cell relative to the text area origin, as `(row, col)`.
	pub fn cursor_screen_position(&self) -> (usize, usize) {
		(
			self.cursor.row.saturating_sub(self.viewport.row_offset),
			self.cursor.col.saturating_sub(self.viewport.col_offset),
		)
	}
}
