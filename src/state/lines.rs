//! Line boundary scans over the window bytes.
//!
//! Nothing here is cached: every lookup rescans from the window start, so the
//! results stay correct after any in-place shift.

/// Offset of the first byte of the line containing `pos`.
pub fn line_start(bytes: &[u8], pos: usize) -> usize {
	let mut pos = pos.min(bytes.len());
	while pos > 0 && bytes[pos - 1] != b'\n' {
		pos -= 1;
	}
	pos
}

/// Offset just past the last byte of the line containing `pos`: the newline
/// itself, or the end of the window.
pub fn line_end(bytes: &[u8], pos: usize) -> usize {
	let mut pos = pos.min(bytes.len());
	while pos < bytes.len() && bytes[pos] != b'\n' {
		pos += 1;
	}
	pos
}

pub fn line_count(bytes: &[u8]) -> usize { bytes.iter().filter(|byte| **byte == b'\n').count() + 1 }

/// First byte of logical row `row`, or the end of the window when the window
/// has fewer rows.
pub fn row_start(bytes: &[u8], row: usize) -> usize {
	let mut pos = 0;
	let mut current = 0;
	while pos < bytes.len() && current < row {
		if bytes[pos] == b'\n' {
			current += 1;
		}
		pos += 1;
	}
	pos
}

/// Byte offset of `(row, col)`. The column advance stops early at a newline
/// or the end of the window.
pub fn cursor_to_offset(bytes: &[u8], row: usize, col: usize) -> usize {
	let start = row_start(bytes, row);
	let end = line_end(bytes, start);
	start + col.min(end - start)
}

pub fn line_len(bytes: &[u8], row: usize) -> usize {
	let start = row_start(bytes, row);
	line_end(bytes, start) - start
}

#[cfg(test)]
mod tests {
	use super::{cursor_to_offset, line_count, line_end, line_len, line_start, row_start};

	const TEXT: &[u8] = b"abc\ndef\n\nxy";

	#[test]
	fn line_start_scans_back_to_previous_newline() {
		assert_eq!(line_start(TEXT, 0), 0);
		assert_eq!(line_start(TEXT, 2), 0);
		assert_eq!(line_start(TEXT, 3), 0);
		assert_eq!(line_start(TEXT, 4), 4);
		assert_eq!(line_start(TEXT, 6), 4);
		assert_eq!(line_start(TEXT, 8), 8);
		assert_eq!(line_start(TEXT, 10), 9);
	}

	#[test]
	fn line_end_stops_on_newline_or_window_end() {
		assert_eq!(line_end(TEXT, 0), 3);
		assert_eq!(line_end(TEXT, 3), 3);
		assert_eq!(line_end(TEXT, 5), 7);
		assert_eq!(line_end(TEXT, 8), 8);
		assert_eq!(line_end(TEXT, 9), 11);
		assert_eq!(line_end(TEXT, 11), 11);
	}

	#[test]
	fn line_count_is_newlines_plus_one() {
		assert_eq!(line_count(b""), 1);
		assert_eq!(line_count(b"abc"), 1);
		assert_eq!(line_count(b"abc\n"), 2);
		assert_eq!(line_count(TEXT), 4);
	}

	#[test]
	fn row_start_walks_rows_and_saturates_at_end() {
		assert_eq!(row_start(TEXT, 0), 0);
		assert_eq!(row_start(TEXT, 1), 4);
		assert_eq!(row_start(TEXT, 2), 8);
		assert_eq!(row_start(TEXT, 3), 9);
		assert_eq!(row_start(TEXT, 9), TEXT.len());
	}

	#[test]
	fn cursor_to_offset_clamps_column_to_line() {
		assert_eq!(cursor_to_offset(TEXT, 0, 0), 0);
		assert_eq!(cursor_to_offset(TEXT, 0, 2), 2);
		assert_eq!(cursor_to_offset(TEXT, 0, 40), 3);
		assert_eq!(cursor_to_offset(TEXT, 1, 1), 5);
		assert_eq!(cursor_to_offset(TEXT, 2, 5), 8);
		assert_eq!(cursor_to_offset(TEXT, 3, 2), 11);
	}

	#[test]
	fn line_len_excludes_newline() {
		assert_eq!(line_len(TEXT, 0), 3);
		assert_eq!(line_len(TEXT, 2), 0);
		assert_eq!(line_len(TEXT, 3), 2);
		assert_eq!(line_len(b"abc\n", 1), 0);
	}
}
