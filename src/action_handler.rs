use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::{input::Key, state::{EditorMode, EditorState, MoveDirection, PendingChord, is_printable}, window::ByteWindow};

/// Mode state machine. `ControlFlow::Break` asks the control loop to quit.
#[derive(Debug, Default)]
pub struct ActionHandler;

impl ActionHandler {
	pub fn apply<W: ByteWindow>(&self, state: &mut EditorState<W>, key: Key) -> ControlFlow<()> {
		match state.mode {
			EditorMode::Normal => self.handle_normal_mode_key(state, key),
			EditorMode::Insert => {
				self.handle_insert_mode_key(state, key);
				ControlFlow::Continue(())
			}
			EditorMode::Command => self.handle_command_mode_key(state, key),
		}
	}

	fn handle_normal_mode_key<W: ByteWindow>(&self, state: &mut EditorState<W>, key: Key) -> ControlFlow<()> {
		if let Some(PendingChord::Quit) = state.pending_chord.take() {
			if key == Key::Byte(b'q') {
				info!("quit requested by chord");
				return ControlFlow::Break(());
			}
			debug!("quit chord cancelled by {:?}", key);
		}

		match key {
			Key::Byte(b':') => state.enter_command_mode(),
			Key::Byte(b'i') => state.enter_insert_mode(),
			Key::Byte(b'h') | Key::Left => state.move_cursor(MoveDirection::Left),
			Key::Byte(b'j') | Key::Down => state.move_cursor(MoveDirection::Down),
			Key::Byte(b'k') | Key::Up => state.move_cursor(MoveDirection::Up),
			Key::Byte(b'l') | Key::Right => state.move_cursor(MoveDirection::Right),
			Key::Byte(b'x') => {
				state.insert_byte(b' ');
			}
			Key::Byte(b'q') => state.pending_chord = Some(PendingChord::Quit),
			_ => {}
		}
		ControlFlow::Continue(())
	}

	fn handle_insert_mode_key<W: ByteWindow>(&self, state: &mut EditorState<W>, key: Key) {
		match key {
			Key::Escape => state.exit_insert_mode(),
			Key::Backspace => state.backspace_in_line(),
			Key::Enter => {
				state.insert_newline();
			}
			Key::Up => state.move_cursor(MoveDirection::Up),
			Key::Down => state.move_cursor(MoveDirection::Down),
			Key::Left => state.move_cursor(MoveDirection::Left),
			Key::Right => state.move_cursor(MoveDirection::Right),
			Key::Byte(byte) if is_printable(byte) => {
				state.insert_byte(byte);
			}
			Key::Byte(_) => {}
		}
	}

	fn handle_command_mode_key<W: ByteWindow>(&self, state: &mut EditorState<W>, key: Key) -> ControlFlow<()> {
		match key {
			Key::Enter => {
				let command = state.take_command_line();
				state.exit_command_mode();
				return self.run_command(state, &command);
			}
			Key::Escape => state.exit_command_mode(),
			Key::Backspace => {
				if state.pop_command_byte().is_none() {
					state.exit_command_mode();
				}
			}
			Key::Byte(byte) => state.push_command_byte(byte),
			Key::Up | Key::Down | Key::Left | Key::Right => {}
		}
		ControlFlow::Continue(())
	}

	fn run_command<W: ByteWindow>(&self, state: &mut EditorState<W>, command: &str) -> ControlFlow<()> {
		match command {
			"w" => {
				debug!("command :w");
				state.write_window();
			}
			"q" => {
				info!("quit requested by command");
				return ControlFlow::Break(());
			}
			other => debug!("ignoring unknown command {:?}", other),
		}
		ControlFlow::Continue(())
	}
}
