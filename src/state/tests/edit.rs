use super::common::test_state;
use crate::state::CursorState;

#[test]
fn insert_splices_byte_and_advances_cursor() {
	let mut state = test_state(b"abc\0\0\0\0\0");
	state.cursor = CursorState { row: 0, col: 1 };

	assert!(state.insert_byte(b'X'));
	assert_eq!(state.bytes(), b"aXbc\0\0\0\0");
	assert_eq!(state.cursor, CursorState { row: 0, col: 2 });
	assert_eq!(state.window.flush_count(), 1);
}

#[test]
fn insert_newline_moves_cursor_to_next_row_start() {
	let mut state = test_state(b"abcdef\0\0");
	state.cursor = CursorState { row: 0, col: 3 };

	assert!(state.insert_newline());
	assert_eq!(state.bytes(), b"abc\ndef\0");
	assert_eq!(state.cursor, CursorState { row: 1, col: 0 });
}

#[test]
fn insert_into_full_window_drops_last_byte_exactly_once() {
	let mut state = test_state(b"abcdefgh");
	state.cursor = CursorState { row: 0, col: 2 };

	assert!(state.insert_byte(b'-'));
	assert_eq!(state.bytes(), b"ab-cdefg");
	assert_eq!(state.bytes().len(), 8);
}

#[test]
fn insert_at_last_byte_is_a_no_op() {
	let mut state = test_state(b"abcd");
	state.cursor = CursorState { row: 0, col: 3 };

	assert!(!state.insert_byte(b'z'));
	assert_eq!(state.bytes(), b"abcd");
	assert_eq!(state.cursor, CursorState { row: 0, col: 3 });
	assert_eq!(state.window.flush_count(), 0);

	state.cursor = CursorState { row: 0, col: 4 };
	assert!(!state.insert_byte(b'z'));
	assert_eq!(state.bytes(), b"abcd");
}

#[test]
fn repeated_inserts_never_grow_the_window() {
	let mut state = test_state(b"0123456789");
	let mut inserted = 0;
	for byte in b"abcdefghijklmnop" {
		if state.insert_byte(*byte) {
			inserted += 1;
		}
		assert_eq!(state.bytes().len(), 10);
	}
	assert_eq!(inserted, 9);
	assert_eq!(state.bytes(), b"abcdefghi0");
	assert_eq!(state.cursor_offset(), 9);
}

#[test]
fn space_at_second_line_start_truncates_trailing_newline() {
	let mut state = test_state(b"abc\ndef\n");
	state.cursor = CursorState { row: 1, col: 0 };

	assert!(state.insert_byte(b' '));
	assert_eq!(state.bytes(), b"abc\n def");
	assert_eq!(state.cursor, CursorState { row: 1, col: 1 });
}

#[test]
fn backspace_only_moves_left_within_line() {
	let mut state = test_state(b"ab\ncd");
	state.cursor = CursorState { row: 1, col: 1 };

	state.backspace_in_line();
	assert_eq!(state.cursor, CursorState { row: 1, col: 0 });

	state.backspace_in_line();
	assert_eq!(state.cursor, CursorState { row: 1, col: 0 });
	assert_eq!(state.bytes(), b"ab\ncd");
}

#[test]
fn write_window_syncs_and_sets_message() {
	let mut state = test_state(b"abc");
	state.write_window();
	assert_eq!(state.window.flush_count(), 1);
	assert_eq!(state.status_bar.message, "File synced");
}
