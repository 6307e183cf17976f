use bytes::BufMut;

use super::source::{ByteSource, FillValue};
use crate::encoding::Encoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
	Big,
	Little,
}

/// A validated fixed-width number. The width follows from the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
	U8(u8),
	I8(i8),
	U16(u16, Endian),
	I16(i16, Endian),
	U32(u32, Endian),
	I32(i32, Endian),
	F32(f32, Endian),
	F64(f64, Endian),
}

impl Numeric {
	pub fn width(&self) -> usize {
		match self {
			Numeric::U8(_) | Numeric::I8(_) => 1,
			Numeric::U16(..) | Numeric::I16(..) => 2,
			Numeric::U32(..) | Numeric::I32(..) | Numeric::F32(..) => 4,
			Numeric::F64(..) => 8,
		}
	}

	fn encode(&self, mut dst: &mut [u8]) {
		match *self {
			Numeric::U8(v) => dst.put_u8(v),
			Numeric::I8(v) => dst.put_i8(v),
			Numeric::U16(v, Endian::Big) => dst.put_u16(v),
			Numeric::U16(v, Endian::Little) => dst.put_u16_le(v),
			Numeric::I16(v, Endian::Big) => dst.put_i16(v),
			Numeric::I16(v, Endian::Little) => dst.put_i16_le(v),
			Numeric::U32(v, Endian::Big) => dst.put_u32(v),
			Numeric::U32(v, Endian::Little) => dst.put_u32_le(v),
			Numeric::I32(v, Endian::Big) => dst.put_i32(v),
			Numeric::I32(v, Endian::Little) => dst.put_i32_le(v),
			Numeric::F32(v, Endian::Big) => dst.put_f32(v),
			Numeric::F32(v, Endian::Little) => dst.put_f32_le(v),
			Numeric::F64(v, Endian::Big) => dst.put_f64(v),
			Numeric::F64(v, Endian::Little) => dst.put_f64_le(v),
		}
	}
}

/// One queued write. Operations are never changed once queued.
#[derive(Debug, Clone)]
pub enum Operation {
	Numeric(Numeric),
	Text {
		text: String,
		length: usize,
		encoding: Encoding,
	},
	Bytes {
		source: ByteSource,
		start: usize,
		end: usize,
	},
	Fill { value: FillValue, length: usize },
}

impl Operation {
	/// Bytes this operation occupies in the materialized buffer.
	pub fn len(&self) -> usize {
		match self {
			Operation::Numeric(numeric) => numeric.width(),
			Operation::Text { length, .. } | Operation::Fill { length, .. } => *length,
			Operation::Bytes { start, end, .. } => end - start,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Writes the operation into `dst`, which is exactly `self.len()` bytes.
	pub(crate) fn write_to(&self, dst: &mut [u8]) {
		match self {
			Operation::Numeric(numeric) => numeric.encode(dst),
			Operation::Text { text, encoding, .. } => {
				encoding.encode_into(text, dst);
			}
			Operation::Bytes { source, start, end } => {
				source.copy_range(*start, *end, dst);
			}
			Operation::Fill { value, .. } => match value.pattern() {
				[] => dst.fill(0),
				[byte] => {
					let length = dst.len();
					let mut dst = dst;
					dst.put_bytes(*byte, length);
				}
				pattern => {
					for (slot, byte) in dst.iter_mut().zip(pattern.iter().cycle()) {
						*slot = *byte;
					}
				}
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{Endian, Numeric, Operation};
	use crate::{encoding::Encoding, FillValue};

	fn written(operation: &Operation) -> Vec<u8> {
		let mut dst = vec![0u8; operation.len()];
		operation.write_to(&mut dst);
		dst
	}

	#[test]
	fn test_numeric_widths() {
		assert_eq!(Numeric::U8(1).width(), 1);
		assert_eq!(Numeric::I16(1, Endian::Big).width(), 2);
		assert_eq!(Numeric::F32(1.0, Endian::Little).width(), 4);
		assert_eq!(Numeric::F64(1.0, Endian::Big).width(), 8);
	}

	#[test]
	fn test_numeric_encode() {
		assert_eq!(
			written(&Operation::Numeric(Numeric::U32(0x01020304, Endian::Little))),
			[4, 3, 2, 1]
		);
		assert_eq!(
			written(&Operation::Numeric(Numeric::I16(-2, Endian::Big))),
			[0xff, 0xfe]
		);
	}

	#[test]
	fn test_fill_patterns() {
		let fill = |value: FillValue, length| Operation::Fill { value, length };
		assert_eq!(written(&fill(FillValue::Byte(0x64), 4)), [0x64; 4]);
		assert_eq!(written(&fill("ab".into(), 5)), b"ababa");
		assert_eq!(written(&fill("".into(), 2)), [0, 0]);
		assert!(written(&fill('x'.into(), 0)).is_empty());
	}

	#[test]
	fn test_text_shorter_than_declared() {
		let operation = Operation::Text {
			text: "ab".to_string(),
			length: 4,
			encoding: Encoding::Utf8,
		};
		assert_eq!(written(&operation), [b'a', b'b', 0, 0]);
	}
}
