use crate::{state::{EditorMode, EditorState}, window::ByteWindow};

/// Text of the reverse-video bottom line, before padding.
pub(super) fn status_text<W: ByteWindow>(state: &EditorState<W>) -> String {
	if state.mode == EditorMode::Command {
		return format!(":{}", state.command_line);
	}

	let mut text = format!(" {} | Pos: {} | Offset: 0x{:x} ", state.mode.label(), state.cursor_offset(), state.base);
	if !state.status_bar.message.is_empty() {
		text.push_str("| ");
		text.push_str(&state.status_bar.message);
		text.push(' ');
	}
	text
}

/// Cuts or right-pads `text` to exactly `width` cells.
pub(super) fn fit_to_width(text: &str, width: usize) -> String {
	let mut line = text.chars().take(width).collect::<String>();
	let used = line.chars().count();
	line.extend(std::iter::repeat_n(' ', width - used));
	line
}

#[cfg(test)]
mod tests {
	use super::{fit_to_width, status_text};
	use crate::{state::{CursorState, EditorState}, window::MemoryWindow};

	#[test]
	fn normal_status_shows_mode_offset_and_base() {
		let mut state = EditorState::new(MemoryWindow::new(b"abc\ndef".to_vec()), 0x1000);
		state.cursor = CursorState { row: 1, col: 2 };
		assert_eq!(status_text(&state), " NORMAL | Pos: 6 | Offset: 0x1000 ");

		state.enter_insert_mode();
		state.status_bar.message = "File synced".to_string();
		assert_eq!(status_text(&state), " INSERT | Pos: 6 | Offset: 0x1000 | File synced ");
	}

	#[test]
	fn command_status_is_the_literal_command_line() {
		let mut state = EditorState::new(MemoryWindow::new(b"abc".to_vec()), 0);
		state.enter_command_mode();
		state.push_command_byte(b'w');
		assert_eq!(status_text(&state), ":w");
	}

	#[test]
	fn fit_to_width_pads_and_truncates() {
		assert_eq!(fit_to_width("ab", 4), "ab  ");
		assert_eq!(fit_to_width("abcdef", 4), "abcd");
		assert_eq!(fit_to_width("", 0), "");
	}
}
