//! Deferred binary buffer building.
//!
//! A [`Writer`] records numbers, text, byte ranges and fills without knowing
//! the final size, keeps a running byte count, and writes everything into one
//! contiguous buffer when asked.
//!
//! ```
//! use buffer_writer::Writer;
//!
//! let mut writer = Writer::new();
//! writer.write("a")?.fill(1, 3)?.write_i8(0x72)?;
//! assert_eq!(writer.len(), 5);
//! assert_eq!(&writer.to_buffer()[..], b"a\x01\x01\x01r");
//! # Ok::<(), buffer_writer::Error>(())
//! ```

pub mod encoding;
pub mod error;
pub mod options;
mod writer;

pub use encoding::Encoding;
pub use error::{Error, ErrorKind, Result};
pub use options::{Int64Range, WriterOptions, MAX_SAFE_INTEGER};
pub use writer::{
	ByteSource, Chunk, Endian, FillValue, Numeric, Operation, SharedBuffer, Writer,
};

/// Lowercase hex rendering of `data`.
pub fn hex(data: &[u8]) -> String {
	::hex::encode(data)
}
