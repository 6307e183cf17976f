use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::Writer;
use crate::error::{Error, Result};

impl Writer {
	/// Lays every queued operation out, in order, in a fresh buffer of
	/// exactly [`Writer::len`] bytes. The queue is left untouched.
	pub fn to_buffer(&self) -> BytesMut {
		let mut buffer = BytesMut::zeroed(self.length);
		let mut offset = 0;
		for operation in &self.operations {
			let end = offset + operation.len();
			operation.write_to(&mut buffer[offset..end]);
			offset = end;
		}
		debug_assert_eq!(offset, self.length);

		trace!(
			operations = self.operations.len(),
			length = self.length,
			"materialized buffer"
		);
		buffer
	}

	pub fn to_bytes(&self) -> Bytes {
		self.to_buffer().freeze()
	}

	/// Materializes the writer and copies `source_start..source_end` of it into
	/// `target` at `target_start`. The copy stops at whichever of the source
	/// range or the target runs out first. Returns the number of bytes copied.
	pub fn copy(
		&self,
		target: &mut [u8],
		target_start: usize,
		source_start: usize,
		source_end: Option<usize>,
	) -> Result<usize> {
		if source_start > self.length {
			return Err(Error::CopyOutOfRange {
				start: source_start,
				len: self.length,
			});
		}
		let source_end = source_end.unwrap_or(self.length).min(self.length);
		if target_start >= target.len() || source_end <= source_start {
			return Ok(0);
		}

		let source = self.to_buffer();
		let copied = (source_end - source_start).min(target.len() - target_start);
		target[target_start..target_start + copied]
			.copy_from_slice(&source[source_start..source_start + copied]);

		trace!(target_start, source_start, source_end, copied, "copied buffer");
		Ok(copied)
	}
}
