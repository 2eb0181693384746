use std::{collections::VecDeque, io::{self, Read}, thread, time::Duration};

use thiserror::Error;
use tracing::{error, trace};

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Escape,
	Up,
	Down,
	Left,
	Right,
	Enter,
	Backspace,
	Byte(u8),
}

#[derive(Debug, Error)]
pub enum InputError {
	#[error("input source disconnected")]
	Disconnected,
}

/// Raw byte stream the decoder pulls from.
pub trait ByteSource {
	/// Waits up to `timeout` for the next byte; `Ok(None)` means nothing arrived.
	fn next_byte(&mut self, timeout: Duration) -> Result<Option<u8>, InputError>;
}

impl ByteSource for flume::Receiver<u8> {
	fn next_byte(&mut self, timeout: Duration) -> Result<Option<u8>, InputError> {
		match self.recv_timeout(timeout) {
			Ok(byte) => Ok(Some(byte)),
			Err(flume::RecvTimeoutError::Timeout) => Ok(None),
			Err(flume::RecvTimeoutError::Disconnected) => Err(InputError::Disconnected),
		}
	}
}

/// Pre-recorded input; runs dry instead of blocking.
impl ByteSource for VecDeque<u8> {
	fn next_byte(&mut self, _timeout: Duration) -> Result<Option<u8>, InputError> { Ok(self.pop_front()) }
}

/// Turns raw terminal bytes into keys.
///
/// An escape byte is only the start of an arrow key if `[` and a direction
/// letter follow within `escape_timeout` each; otherwise it is a lone Escape.
/// Up to two bytes arriving after the escape belong to its sequence and are
/// consumed even when they do not form an arrow key.
#[derive(Debug, Clone)]
pub struct KeyDecoder {
	escape_timeout: Duration,
}

impl KeyDecoder {
	pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(1);

	pub fn new(escape_timeout: Duration) -> Self { Self { escape_timeout } }

	pub fn next_key(&mut self, source: &mut impl ByteSource, wait: Duration) -> Result<Option<Key>, InputError> {
		let Some(byte) = source.next_byte(wait)? else {
			return Ok(None);
		};

		let key = match byte {
			ESC => self.decode_escape(source)?,
			b'\r' | b'\n' => Key::Enter,
			0x7f | 0x08 => Key::Backspace,
			other => Key::Byte(other),
		};
		trace!("key {:?}", key);
		Ok(Some(key))
	}

	fn decode_escape(&self, source: &mut impl ByteSource) -> Result<Key, InputError> {
		let Some(intro) = source.next_byte(self.escape_timeout)? else {
			return Ok(Key::Escape);
		};
		let Some(last) = source.next_byte(self.escape_timeout)? else {
			return Ok(Key::Escape);
		};
		let key = match (intro, last) {
			(b'[', b'A') => Key::Up,
			(b'[', b'B') => Key::Down,
			(b'[', b'C') => Key::Right,
			(b'[', b'D') => Key::Left,
			_ => Key::Escape,
		};
		Ok(key)
	}
}

impl Default for KeyDecoder {
	fn default() -> Self { Self::new(Self::DEFAULT_ESCAPE_TIMEOUT) }
}

/// Background reader that forwards stdin bytes to the control loop.
pub struct InputPump;

impl InputPump {
	pub fn start() -> flume::Receiver<u8> {
		let (byte_tx, byte_rx) = flume::bounded(4096);
		thread::spawn(move || Self::run(io::stdin(), byte_tx));
		byte_rx
	}

	fn run(mut input: impl Read, byte_tx: flume::Sender<u8>) {
		let mut chunk = [0u8; 64];
		loop {
			let read = match input.read(&mut chunk) {
				Ok(0) => {
					trace!("input pump stopped: end of input");
					break;
				}
				Ok(read) => read,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
				Err(err) => {
					error!("input pump stopped: failed to read terminal input: {}", err);
					break;
				}
			};
			for byte in &chunk[..read] {
				if byte_tx.send(*byte).is_err() {
					return;
				}
			}
		}
	}
}
