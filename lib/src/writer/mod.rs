use std::{any::Any, fmt::Debug};

use bytes::{Bytes, BytesMut};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::{
	encoding::Encoding,
	error::{Error, Result},
	options::WriterOptions,
};

mod materialize;
mod operation;
mod range;
mod source;

pub use operation::{Endian, Numeric, Operation};
pub use source::{ByteSource, Chunk, FillValue, SharedBuffer};

/// Queues writes and lays them out in a single buffer on demand.
///
/// Every write call validates its input, appends one or two operations and
/// returns the writer for chaining. Nothing is allocated for the output until
/// [`Writer::to_buffer`] is called, which can be done any number of times.
#[derive(Debug, Clone, Default)]
pub struct Writer {
	operations: Vec<Operation>,
	length: usize,
	options: WriterOptions,
}

macro_rules! int_writers {
	($($name:ident => $ty:ty, $variant:ident $(, $endian:ident)?;)*) => {
		$(
			pub fn $name<V>(&mut self, value: V) -> Result<&mut Self>
			where
				V: ToPrimitive + Debug,
			{
				let value = range::check(stringify!($name), value, <$ty>::MIN as i128, <$ty>::MAX as i128)?;
				self.append([Operation::Numeric(Numeric::$variant(value as $ty $(, Endian::$endian)?))])
			}
		)*
	};
}

macro_rules! float_writers {
	($($name:ident => $ty:ty, $variant:ident, $endian:ident;)*) => {
		$(
			pub fn $name(&mut self, value: f64) -> Result<&mut Self> {
				self.append([Operation::Numeric(Numeric::$variant(value as $ty, Endian::$endian))])
			}
		)*
	};
}

impl Writer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: WriterOptions) -> Self {
		Self {
			operations: Vec::with_capacity(options.capacity),
			length: 0,
			options,
		}
	}

	/// Total bytes queued so far.
	pub fn len(&self) -> usize {
		self.length
	}

	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	pub fn operations(&self) -> &[Operation] {
		&self.operations
	}

	pub fn options(&self) -> &WriterOptions {
		&self.options
	}

	// all operations land or none do
	fn append<const N: usize>(&mut self, operations: [Operation; N]) -> Result<&mut Self> {
		let additional = operations
			.iter()
			.try_fold(0usize, |sum, operation| sum.checked_add(operation.len()));
		let length = additional.and_then(|additional| self.length.checked_add(additional));

		match length {
			Some(length) => {
				self.length = length;
				self.operations.extend(operations);
				Ok(self)
			}
			None => Err(Error::LengthOverflow {
				length: self.length,
				additional: additional.unwrap_or(usize::MAX),
			}),
		}
	}

	int_writers! {
		write_u8 => u8, U8;
		write_u16_be => u16, U16, Big;
		write_u16_le => u16, U16, Little;
		write_u32_be => u32, U32, Big;
		write_u32_le => u32, U32, Little;
		write_i8 => i8, I8;
		write_i16_be => i16, I16, Big;
		write_i16_le => i16, I16, Little;
		write_i32_be => i32, I32, Big;
		write_i32_le => i32, I32, Little;
	}

	float_writers! {
		write_f32_be => f32, F32, Big;
		write_f32_le => f32, F32, Little;
		write_f64_be => f64, F64, Big;
		write_f64_le => f64, F64, Little;
	}

	/// Queues a 64-bit unsigned integer as two 32-bit halves, high first.
	pub fn write_u64_be<V>(&mut self, value: V) -> Result<&mut Self>
	where
		V: ToPrimitive + Debug,
	{
		let (high, low) = self.unsigned_halves("write_u64_be", value)?;
		self.append([
			Operation::Numeric(Numeric::U32(high, Endian::Big)),
			Operation::Numeric(Numeric::U32(low, Endian::Big)),
		])
	}

	/// Queues a 64-bit unsigned integer as two 32-bit halves, low first.
	pub fn write_u64_le<V>(&mut self, value: V) -> Result<&mut Self>
	where
		V: ToPrimitive + Debug,
	{
		let (high, low) = self.unsigned_halves("write_u64_le", value)?;
		self.append([
			Operation::Numeric(Numeric::U32(low, Endian::Little)),
			Operation::Numeric(Numeric::U32(high, Endian::Little)),
		])
	}

	/// Queues a 64-bit signed integer as a signed high half followed by an
	/// unsigned low half.
	pub fn write_i64_be<V>(&mut self, value: V) -> Result<&mut Self>
	where
		V: ToPrimitive + Debug,
	{
		let (high, low) = self.signed_halves("write_i64_be", value)?;
		self.append([
			Operation::Numeric(Numeric::I32(high, Endian::Big)),
			Operation::Numeric(Numeric::U32(low, Endian::Big)),
		])
	}

	pub fn write_i64_le<V>(&mut self, value: V) -> Result<&mut Self>
	where
		V: ToPrimitive + Debug,
	{
		let (high, low) = self.signed_halves("write_i64_le", value)?;
		self.append([
			Operation::Numeric(Numeric::U32(low, Endian::Little)),
			Operation::Numeric(Numeric::I32(high, Endian::Little)),
		])
	}

	fn unsigned_halves<V>(&self, method: &'static str, value: V) -> Result<(u32, u32)>
	where
		V: ToPrimitive + Debug,
	{
		let (min, max) = self.options.int64_range.unsigned_bounds();
		let (high, low) = range::split(range::check(method, value, min, max)?);
		Ok((high as u32, low))
	}

	fn signed_halves<V>(&self, method: &'static str, value: V) -> Result<(i32, u32)>
	where
		V: ToPrimitive + Debug,
	{
		let (min, max) = self.options.int64_range.signed_bounds();
		let (high, low) = range::split(range::check(method, value, min, max)?);
		Ok((high as i32, low))
	}

	/// Queues text as UTF-8 or bytes as a whole.
	pub fn write(&mut self, chunk: impl Into<Chunk>) -> Result<&mut Self> {
		match chunk.into() {
			Chunk::Text(text) => self.write_str(text, None, Encoding::Utf8),
			Chunk::Bytes(source) => self.write_bytes(source, None, None),
		}
	}

	/// Queues text under `encoding`. Without an explicit `length` the text's
	/// full encoded size is reserved; with one, exactly `length` bytes are
	/// reserved and the encoded text is cut to fit.
	pub fn write_str(
		&mut self,
		text: impl Into<String>,
		length: Option<usize>,
		encoding: impl Into<Encoding>,
	) -> Result<&mut Self> {
		let text = text.into();
		let encoding = encoding.into();
		let length = length.unwrap_or_else(|| encoding.byte_length(&text));
		self.append([Operation::Text {
			text,
			length,
			encoding,
		}])
	}

	pub fn write_encoded(
		&mut self,
		text: impl Into<String>,
		encoding: impl Into<Encoding>,
	) -> Result<&mut Self> {
		self.write_str(text, None, encoding)
	}

	/// Queues `start..end` of `source`, defaulting to the whole source. The
	/// source is read when the writer is materialized, not now.
	pub fn write_bytes(
		&mut self,
		source: impl Into<ByteSource>,
		start: Option<usize>,
		end: Option<usize>,
	) -> Result<&mut Self> {
		let source = source.into();
		let len = source.len();
		let start = start.unwrap_or(0);
		let end = end.unwrap_or(len);

		if start > end || end > len {
			debug!(start, end, len, "rejected byte range");
			return Err(Error::SliceOutOfRange { start, end, len });
		}
		self.append([Operation::Bytes { source, start, end }])
	}

	/// Runtime-typed variant of [`Writer::write`]. Accepts `String`,
	/// `&'static str`, `Bytes`, `BytesMut`, `Vec<u8>`, `SharedBuffer` and
	/// `Chunk`; anything else is a type error.
	pub fn write_any<T: Any>(&mut self, value: &T) -> Result<&mut Self> {
		let value = value as &dyn Any;
		if let Some(text) = value.downcast_ref::<String>() {
			return self.write(text);
		}
		if let Some(text) = value.downcast_ref::<&'static str>() {
			return self.write(*text);
		}
		if let Some(bytes) = value.downcast_ref::<Bytes>() {
			return self.write(bytes.clone());
		}
		if let Some(bytes) = value.downcast_ref::<BytesMut>() {
			return self.write(bytes.clone());
		}
		if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
			return self.write(bytes.clone());
		}
		if let Some(shared) = value.downcast_ref::<SharedBuffer>() {
			return self.write(shared);
		}
		if let Some(chunk) = value.downcast_ref::<Chunk>() {
			return self.write(chunk.clone());
		}

		let type_name = std::any::type_name::<T>();
		debug!(type_name, "rejected value that is neither text nor bytes");
		Err(Error::NotTextOrBuffer { type_name })
	}

	/// Queues `length` bytes of the repeating `value` pattern.
	pub fn fill(&mut self, value: impl Into<FillValue>, length: usize) -> Result<&mut Self> {
		self.append([Operation::Fill {
			value: value.into(),
			length,
		}])
	}
}
