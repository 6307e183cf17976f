use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The two ways a write call can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Range,
	Type,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("value is out of bounds: {method}({value}) expects {min}..={max}")]
	OutOfRange {
		method: &'static str,
		value: String,
		min: i128,
		max: i128,
	},
	#[error("byte range {start}..{end} is out of bounds for a source of {len} bytes")]
	SliceOutOfRange { start: usize, end: usize, len: usize },
	#[error("copy source start {start} is out of bounds for {len} queued bytes")]
	CopyOutOfRange { start: usize, len: usize },
	#[error("queued length {length} cannot grow by {additional} bytes")]
	LengthOverflow { length: usize, additional: usize },
	#[error("value is not a string or buffer: {type_name}")]
	NotTextOrBuffer { type_name: &'static str },
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::NotTextOrBuffer { .. } => ErrorKind::Type,
			Error::OutOfRange { .. }
			| Error::SliceOutOfRange { .. }
			| Error::CopyOutOfRange { .. }
			| Error::LengthOverflow { .. } => ErrorKind::Range,
		}
	}
}
