use std::time::{Duration, Instant};

/// Copy of the window contents as of the last drawn frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
	bytes: Vec<u8>,
}

impl ContentSnapshot {
	pub fn capture(bytes: &[u8]) -> Self { Self { bytes: bytes.to_vec() } }

	pub fn differs_from(&self, bytes: &[u8]) -> bool { self.bytes != bytes }

	pub fn update(&mut self, bytes: &[u8]) {
		if self.bytes.len() == bytes.len() {
			self.bytes.copy_from_slice(bytes);
		} else {
			self.bytes = bytes.to_vec();
		}
	}
}

/// Fixed-period timer for the out-of-band change check.
#[derive(Debug, Clone, Copy)]
pub struct PollTimer {
	interval:  Duration,
	last_poll: Instant,
}

impl PollTimer {
	pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

	pub fn new(interval: Duration, now: Instant) -> Self { Self { interval, last_poll: now } }

	/// Returns true and restarts the period once `interval` has elapsed.
	pub fn fire_if_due(&mut self, now: Instant) -> bool {
		if now.saturating_duration_since(self.last_poll) < self.interval {
			return false;
		}
		self.last_poll = now;
		true
	}
}
