use crate::{state::{EditorState, ScreenSize}, window::MemoryWindow};

pub(super) fn test_state(text: &[u8]) -> EditorState<MemoryWindow> {
	let mut state = EditorState::new(MemoryWindow::new(text.to_vec()), 0);
	state.set_screen_size(ScreenSize { rows: 25, cols: 80 });
	state
}

pub(super) fn small_screen_state(text: &[u8], rows: u16, cols: u16) -> EditorState<MemoryWindow> {
	let mut state = test_state(text);
	state.set_screen_size(ScreenSize { rows, cols });
	state
}

pub(super) fn assert_cursor_in_bounds(state: &EditorState<MemoryWindow>) {
	let row_len = crate::state::lines::line_len(state.bytes(), state.cursor.row);
	assert!(state.cursor.row < state.line_count(), "row {} out of range", state.cursor.row);
	assert!(state.cursor.col <= row_len, "col {} past line length {}", state.cursor.col, row_len);
}
