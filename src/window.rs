use std::{fs::{File, OpenOptions}, io, path::{Path, PathBuf}};

use memmap2::{MmapMut, MmapOptions};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WindowError {
	#[error("open {path} failed")]
	Open {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("window size must be greater than zero")]
	EmptyWindow,
	#[error("window 0x{offset:x}+0x{size:x} lies past the end of {path} ({file_len} bytes)")]
	OutOfRange { path: PathBuf, offset: u64, size: usize, file_len: u64 },
	#[error("map {path} failed")]
	Map {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("sync window to storage failed")]
	Flush {
		#[source]
		source: io::Error,
	},
}

/// A fixed-capacity region of bytes the editor operates on in place.
///
/// The region never grows or shrinks; `bytes().len() == capacity()` holds for
/// the whole lifetime of the value.
pub trait ByteWindow {
	fn bytes(&self) -> &[u8];
	fn bytes_mut(&mut self) -> &mut [u8];
	/// Writes the whole region back to its backing storage and waits for it.
	fn flush(&mut self) -> Result<(), WindowError>;

	fn capacity(&self) -> usize { self.bytes().len() }
}

/// A window of a file mapped shared and writable, so edits land in the file
/// and edits made by other processes show up in `bytes()`.
#[derive(Debug)]
pub struct MappedWindow {
	map:    MmapMut,
	offset: u64,
	_file:  File,
}

impl MappedWindow {
	pub fn open(path: &Path, offset: u64, size: usize) -> Result<Self, WindowError> {
		if size == 0 {
			return Err(WindowError::EmptyWindow);
		}

		let file = OpenOptions::new()
			.read(true)
			.write(true)
			.open(path)
			.map_err(|source| WindowError::Open { path: path.to_path_buf(), source })?;
		let file_len =
			file.metadata().map_err(|source| WindowError::Open { path: path.to_path_buf(), source })?.len();
		let end = offset.checked_add(size as u64);
		if end.is_none_or(|end| end > file_len) {
			return Err(WindowError::OutOfRange { path: path.to_path_buf(), offset, size, file_len });
		}

		// SAFETY: the mapping is only reached through `&self`/`&mut self`, and
		// concurrent writers to the same file are part of the editing model.
		let map = unsafe { MmapOptions::new().offset(offset).len(size).map_mut(&file) }
			.map_err(|source| WindowError::Map { path: path.to_path_buf(), source })?;
		info!("mapped {} at 0x{:x}, {} bytes", path.display(), offset, size);

		Ok(Self { map, offset, _file: file })
	}

	/// File offset of the first byte of the window.
	pub fn offset(&self) -> u64 { self.offset }
}

impl ByteWindow for MappedWindow {
	fn bytes(&self) -> &[u8] { &self.map }

	fn bytes_mut(&mut self) -> &mut [u8] { &mut self.map }

	fn flush(&mut self) -> Result<(), WindowError> {
		self.map.flush().map_err(|source| WindowError::Flush { source })
	}
}

impl Drop for MappedWindow {
	fn drop(&mut self) {
		debug!("unmapping window at 0x{:x}", self.offset);
	}
}

/// Heap-backed window with the same fixed-capacity contract as a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryWindow {
	bytes:       Vec<u8>,
	flush_count: usize,
}

impl MemoryWindow {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self { Self { bytes: bytes.into(), flush_count: 0 } }

	pub fn flush_count(&self) -> usize { self.flush_count }
}

impl ByteWindow for MemoryWindow {
	fn bytes(&self) -> &[u8] { &self.bytes }

	fn bytes_mut(&mut self) -> &mut [u8] { &mut self.bytes }

	fn flush(&mut self) -> Result<(), WindowError> {
		self.flush_count += 1;
		Ok(())
	}
}
