use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A byte buffer that stays mutable after it has been queued.
///
/// Writers hold a handle, not a copy: whatever the buffer contains when the
/// writer is materialized is what gets written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
	inner: Arc<RwLock<BytesMut>>,
}

impl SharedBuffer {
	pub fn new(buffer: BytesMut) -> Self {
		Self {
			inner: Arc::new(RwLock::new(buffer)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn read(&self) -> RwLockReadGuard<'_, BytesMut> {
		self.inner.read()
	}

	pub fn write(&self) -> RwLockWriteGuard<'_, BytesMut> {
		self.inner.write()
	}
}

impl From<BytesMut> for SharedBuffer {
	fn from(buffer: BytesMut) -> Self {
		SharedBuffer::new(buffer)
	}
}

impl From<&[u8]> for SharedBuffer {
	fn from(bytes: &[u8]) -> Self {
		SharedBuffer::new(BytesMut::from(bytes))
	}
}

/// Where a raw-bytes write reads from.
#[derive(Debug, Clone)]
pub enum ByteSource {
	Frozen(Bytes),
	Shared(SharedBuffer),
}

impl ByteSource {
	pub fn len(&self) -> usize {
		match self {
			ByteSource::Frozen(bytes) => bytes.len(),
			ByteSource::Shared(shared) => shared.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Copies `start..end` into `dst`, clipped to what the source holds right
	/// now. Returns the number of bytes copied.
	pub(crate) fn copy_range(&self, start: usize, end: usize, dst: &mut [u8]) -> usize {
		match self {
			ByteSource::Frozen(bytes) => copy_clipped(&bytes[..], start, end, dst),
			ByteSource::Shared(shared) => copy_clipped(&shared.read()[..], start, end, dst),
		}
	}
}

fn copy_clipped(bytes: &[u8], start: usize, end: usize, dst: &mut [u8]) -> usize {
	let end = end.min(bytes.len());
	let available = end.saturating_sub(start).min(dst.len());
	if available > 0 {
		dst[..available].copy_from_slice(&bytes[start..start + available]);
	}
	available
}

impl From<Bytes> for ByteSource {
	fn from(bytes: Bytes) -> Self {
		ByteSource::Frozen(bytes)
	}
}

impl From<BytesMut> for ByteSource {
	fn from(bytes: BytesMut) -> Self {
		ByteSource::Frozen(bytes.freeze())
	}
}

impl From<Vec<u8>> for ByteSource {
	fn from(bytes: Vec<u8>) -> Self {
		ByteSource::Frozen(Bytes::from(bytes))
	}
}

impl From<&[u8]> for ByteSource {
	fn from(bytes: &[u8]) -> Self {
		ByteSource::Frozen(Bytes::copy_from_slice(bytes))
	}
}

impl From<SharedBuffer> for ByteSource {
	fn from(shared: SharedBuffer) -> Self {
		ByteSource::Shared(shared)
	}
}

impl From<&SharedBuffer> for ByteSource {
	fn from(shared: &SharedBuffer) -> Self {
		ByteSource::Shared(shared.clone())
	}
}

/// Argument of the general `write` entry point.
#[derive(Debug, Clone)]
pub enum Chunk {
	Text(String),
	Bytes(ByteSource),
}

impl From<&str> for Chunk {
	fn from(text: &str) -> Self {
		Chunk::Text(text.to_string())
	}
}

impl From<String> for Chunk {
	fn from(text: String) -> Self {
		Chunk::Text(text)
	}
}

impl From<&String> for Chunk {
	fn from(text: &String) -> Self {
		Chunk::Text(text.clone())
	}
}

macro_rules! chunk_from_bytes {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Chunk {
				fn from(source: $ty) -> Self {
					Chunk::Bytes(source.into())
				}
			}
		)*
	};
}

chunk_from_bytes!(Bytes, BytesMut, Vec<u8>, &[u8], SharedBuffer, &SharedBuffer, ByteSource);

/// Pattern repeated by a fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillValue {
	Byte(u8),
	Text(String),
	Bytes(Bytes),
}

impl FillValue {
	pub(crate) fn pattern(&self) -> &[u8] {
		match self {
			FillValue::Byte(byte) => std::slice::from_ref(byte),
			FillValue::Text(text) => text.as_bytes(),
			FillValue::Bytes(bytes) => bytes,
		}
	}
}

macro_rules! fill_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FillValue {
				// only the low byte takes part in the pattern
				fn from(value: $ty) -> Self {
					FillValue::Byte(value as u8)
				}
			}
		)*
	};
}

fill_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<char> for FillValue {
	fn from(value: char) -> Self {
		FillValue::Text(value.to_string())
	}
}

impl From<&str> for FillValue {
	fn from(value: &str) -> Self {
		FillValue::Text(value.to_string())
	}
}

impl From<String> for FillValue {
	fn from(value: String) -> Self {
		FillValue::Text(value)
	}
}

impl From<Bytes> for FillValue {
	fn from(value: Bytes) -> Self {
		FillValue::Bytes(value)
	}
}

impl From<&[u8]> for FillValue {
	fn from(value: &[u8]) -> Self {
		FillValue::Bytes(Bytes::copy_from_slice(value))
	}
}

#[cfg(test)]
mod tests {
	use super::{ByteSource, Chunk, FillValue, SharedBuffer};
	use bytes::{Bytes, BytesMut};

	#[test]
	fn test_copy_range_clips_to_source() {
		let source = ByteSource::from(Bytes::from_static(b"123456"));
		let mut dst = [0u8; 4];
		assert_eq!(source.copy_range(4, 8, &mut dst), 2);
		assert_eq!(&dst, b"56\0\0");
		assert_eq!(source.copy_range(7, 9, &mut dst), 0);
	}

	#[test]
	fn test_shared_reads_latest_contents() {
		let shared = SharedBuffer::from(&b"abc"[..]);
		let source = ByteSource::from(&shared);
		shared.write()[0] = b'z';

		let mut dst = [0u8; 3];
		assert_eq!(source.copy_range(0, 3, &mut dst), 3);
		assert_eq!(&dst, b"zbc");

		shared.write().truncate(1);
		let mut dst = [0u8; 3];
		assert_eq!(source.copy_range(0, 3, &mut dst), 1);
		assert_eq!(&dst, b"z\0\0");
	}

	#[test]
	fn test_chunk_conversions() {
		assert!(matches!(Chunk::from("a"), Chunk::Text(_)));
		assert!(matches!(Chunk::from(vec![1u8, 2]), Chunk::Bytes(_)));
		assert!(matches!(Chunk::from(BytesMut::new()), Chunk::Bytes(_)));
	}

	#[test]
	fn test_fill_values() {
		assert_eq!(FillValue::from(0x164), FillValue::Byte(0x64));
		assert_eq!(FillValue::from(-1i32), FillValue::Byte(0xff));
		assert_eq!(FillValue::from('Q').pattern(), b"Q");
		assert_eq!(FillValue::from(&b"ab"[..]).pattern(), b"ab");
	}
}
