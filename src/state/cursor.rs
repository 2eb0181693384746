use super::{EditorState, lines};
use crate::window::ByteWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
	Left,
	Right,
	Up,
	Down,
}

impl<W: ByteWindow> EditorState<W> {
	/// Moves the cursor one step. Moves past the window start or end are
	/// ignored, and the column is clamped to the new line afterwards.
	pub fn move_cursor(&mut self, direction: MoveDirection) {
		match direction {
			MoveDirection::Left => self.move_cursor_left(),
			MoveDirection::Right => self.move_cursor_right(),
			MoveDirection::Up => self.move_cursor_up(),
			MoveDirection::Down => self.move_cursor_down(),
		}
		self.clamp_cursor_col_to_row();
	}

	fn move_cursor_left(&mut self) {
		if self.cursor.col > 0 {
			self.cursor.col -= 1;
		} else if self.cursor.row > 0 {
			self.cursor.row -= 1;
			self.cursor.col = lines::line_len(self.bytes(), self.cursor.row);
		}
	}

	fn move_cursor_right(&mut self) {
		let bytes = self.window.bytes();
		let pos = lines::cursor_to_offset(bytes, self.cursor.row, self.cursor.col);
		if pos < bytes.len() && bytes[pos] != b'\n' {
			self.cursor.col += 1;
		} else if self.cursor.row + 1 < lines::line_count(bytes) {
			self.cursor.row += 1;
			self.cursor.col = 0;
		}
	}

	fn move_cursor_up(&mut self) {
		if self.cursor.row == 0 {
			return;
		}
		self.cursor.row -= 1;
		if self.cursor.row < self.viewport.row_offset {
			self.viewport.row_offset = self.cursor.row;
		}
	}

	fn move_cursor_down(&mut self) {
		if self.cursor.row + 1 >= self.line_count() {
			return;
		}
		self.cursor.row += 1;
		let text_rows = self.screen.text_rows();
		if self.cursor.row >= self.viewport.row_offset + text_rows {
			self.viewport.row_offset = self.cursor.row + 1 - text_rows;
		}
	}

	pub(super) fn clamp_cursor_col_to_row(&mut self) {
		let bytes = self.window.bytes();
		let start = lines::line_start(bytes, self.cursor_offset());
		let max_col = lines::line_end(bytes, start) - start;
		self.cursor.col = self.cursor.col.min(max_col);
	}
}
