use tracing::{error, trace};

use super::EditorState;
use crate::window::ByteWindow;

impl<W: ByteWindow> EditorState<W> {
	/// Inserts `byte` at the cursor inside the fixed window.
	///
	/// Everything after the cursor shifts right by one and the last byte of the
	/// window falls off. Nothing happens once the cursor sits on or past the
	/// last byte. Each successful insertion is synced to storage right away.
	/// Returns whether the byte was inserted.
	pub fn insert_byte(&mut self, byte: u8) -> bool {
		let capacity = self.window.capacity();
		let offset = self.cursor_offset();
		if capacity == 0 || offset >= capacity - 1 {
			trace!("insert dropped: offset {} is at the window end ({})", offset, capacity);
			return false;
		}

		let bytes = self.window.bytes_mut();
		bytes.copy_within(offset..capacity - 1, offset + 1);
		bytes[offset] = byte;

		if byte == b'\n' {
			self.cursor.row += 1;
			self.cursor.col = 0;
		} else {
			self.cursor.col += 1;
		}

		self.sync_window();
		true
	}

	pub fn insert_newline(&mut self) -> bool { self.insert_byte(b'\n') }

	/// Insert mode backspace: steps left inside the line, never deletes.
	pub fn backspace_in_line(&mut self) {
		self.cursor.col = self.cursor.col.saturating_sub(1);
	}

	/// Writes the window back to storage. Failures end up on the status line.
	pub fn sync_window(&mut self) -> bool {
		match self.window.flush() {
			Ok(()) => true,
			Err(err) => {
				let err = anyhow::Error::from(err);
				error!("window sync failed: {:#}", err);
				self.status_bar.message = format!("sync failed: {}", err.root_cause());
				false
			}
		}
	}

	/// The `:w` command.
	pub fn write_window(&mut self) {
		if self.sync_window() {
			self.status_bar.message = "File synced".to_string();
		}
	}
}
