use std::{io, time::{Duration, Instant}};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::{action_handler::ActionHandler, config::Config, input::{ByteSource, InputError, KeyDecoder}, snapshot::{ContentSnapshot, PollTimer}, state::EditorState, ui::{Renderer, TerminalSessionError, TerminalSurface}, window::ByteWindow};

#[derive(Debug, Error)]
pub enum AppError {
	#[error("read terminal input failed")]
	Input {
		#[source]
		source: InputError,
	},
	#[error("terminal output failed")]
	Terminal {
		#[source]
		source: TerminalSessionError,
	},
	#[error("compose frame failed")]
	Compose {
		#[source]
		source: io::Error,
	},
}

impl From<InputError> for AppError {
	fn from(source: InputError) -> Self { Self::Input { source } }
}

impl From<TerminalSessionError> for AppError {
	fn from(source: TerminalSessionError) -> Self { Self::Terminal { source } }
}

/// The single-threaded control loop: decode a key, apply it, redraw, and
/// between keys watch the window for changes made by someone else.
pub struct App<W> {
	state:          EditorState<W>,
	renderer:       Renderer,
	action_handler: ActionHandler,
	decoder:        KeyDecoder,
	snapshot:       ContentSnapshot,
	poll_timer:     PollTimer,
	input_wait:     Duration,
}

impl<W: ByteWindow> App<W> {
	pub fn new(window: W, base: u64, config: &Config) -> Self {
		let state = EditorState::new(window, base).with_command_capacity(config.command_capacity);
		let snapshot = ContentSnapshot::capture(state.bytes());
		Self {
			state,
			renderer: Renderer::new(),
			action_handler: ActionHandler,
			decoder: KeyDecoder::new(config.escape_timeout()),
			snapshot,
			poll_timer: PollTimer::new(config.poll_interval(), Instant::now()),
			input_wait: config.input_wait(),
		}
	}

	pub fn state(&self) -> &EditorState<W> { &self.state }

	/// Runs until the user quits. Returns without flushing the window.
	pub fn run(&mut self, input: &mut impl ByteSource, surface: &mut impl TerminalSurface) -> Result<(), AppError> {
		self.state.set_screen_size(surface.size()?);
		self.render(surface)?;

		loop {
			match self.decoder.next_key(input, self.input_wait)? {
				Some(key) => {
					if self.action_handler.apply(&mut self.state, key).is_break() {
						info!("leaving editor");
						return Ok(());
					}
					self.render(surface)?;
				}
				None => self.on_idle(surface)?,
			}
		}
	}

	fn on_idle(&mut self, surface: &mut impl TerminalSurface) -> Result<(), AppError> {
		let screen = surface.size()?;
		if screen != self.state.screen {
			self.state.set_screen_size(screen);
			self.render(surface)?;
		}

		if self.poll_timer.fire_if_due(Instant::now()) {
			self.poll_for_external_change(surface)?;
		}
		Ok(())
	}

	/// Redraws when the window no longer matches the last drawn contents.
	pub fn poll_for_external_change(&mut self, surface: &mut impl TerminalSurface) -> Result<bool, AppError> {
		if !self.snapshot.differs_from(self.state.bytes()) {
			return Ok(false);
		}
		debug!("window changed outside the editor");
		self.render(surface)?;
		Ok(true)
	}

	fn render(&mut self, surface: &mut impl TerminalSurface) -> Result<(), AppError> {
		let frame = self.renderer.render(&mut self.state).map_err(|source| AppError::Compose { source })?;
		surface.present(frame)?;
		self.snapshot.update(self.state.bytes());
		trace!("redraw");
		Ok(())
	}
}
