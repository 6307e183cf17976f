use std::{convert::Infallible, fmt, str::FromStr};

mod encoder;

/// How queued text is turned into bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
	#[default]
	Utf8,
	Ascii,
	Latin1,
	Hex,
	Base64,
	Utf16Le,
}

impl Encoding {
	/// Resolves an encoding name. Matching is case-insensitive and unknown
	/// names resolve to `Utf8`.
	pub fn from_name(name: &str) -> Self {
		match name.to_ascii_lowercase().as_str() {
			"ascii" => Encoding::Ascii,
			"latin1" | "binary" => Encoding::Latin1,
			"hex" => Encoding::Hex,
			"base64" | "base64url" => Encoding::Base64,
			"ucs2" | "ucs-2" | "utf16le" | "utf-16le" => Encoding::Utf16Le,
			_ => Encoding::Utf8,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Encoding::Utf8 => "utf8",
			Encoding::Ascii => "ascii",
			Encoding::Latin1 => "latin1",
			Encoding::Hex => "hex",
			Encoding::Base64 => "base64",
			Encoding::Utf16Le => "utf16le",
		}
	}

	/// Number of bytes `text` occupies under this encoding.
	pub fn byte_length(self, text: &str) -> usize {
		match self {
			Encoding::Utf8 => text.len(),
			Encoding::Ascii | Encoding::Latin1 => utf16_len(text),
			Encoding::Utf16Le => utf16_len(text) * 2,
			Encoding::Hex => utf16_len(text) / 2,
			Encoding::Base64 => {
				let mut symbols = utf16_len(text);
				let mut padding = text.bytes().rev().take_while(|b| *b == b'=');
				if padding.next().is_some() {
					symbols -= 1;
				}
				if symbols > 1 && padding.next().is_some() {
					symbols -= 1;
				}
				(symbols * 3) / 4
			}
		}
	}

	/// Encodes `text` into `dst`, writing at most `dst.len()` bytes. Returns
	/// the number of bytes written; the rest of `dst` is left as is.
	pub fn encode_into(self, text: &str, dst: &mut [u8]) -> usize {
		match self {
			Encoding::Utf8 => encoder::utf8(text, dst),
			Encoding::Ascii | Encoding::Latin1 => encoder::latin1(text, dst),
			Encoding::Utf16Le => encoder::utf16le(text, dst),
			Encoding::Hex => encoder::hex(text, dst),
			Encoding::Base64 => encoder::base64(text, dst),
		}
	}
}

fn utf16_len(text: &str) -> usize {
	text.encode_utf16().count()
}

impl FromStr for Encoding {
	type Err = Infallible;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Ok(Encoding::from_name(name))
	}
}

impl From<&str> for Encoding {
	fn from(name: &str) -> Self {
		Encoding::from_name(name)
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::Encoding;

	#[test]
	fn test_names() {
		assert_eq!(Encoding::from_name("HEX"), Encoding::Hex);
		assert_eq!(Encoding::from_name("binary"), Encoding::Latin1);
		assert_eq!(Encoding::from_name("ucs-2"), Encoding::Utf16Le);
		assert_eq!(Encoding::from_name("base64url"), Encoding::Base64);
		assert_eq!(Encoding::from_name("klingon"), Encoding::Utf8);
		assert_eq!("utf16le".parse::<Encoding>(), Ok(Encoding::Utf16Le));
		assert_eq!(Encoding::Latin1.to_string(), "latin1");
	}

	#[test]
	fn test_byte_length() {
		assert_eq!(Encoding::Utf8.byte_length("héllo"), 6);
		assert_eq!(Encoding::Latin1.byte_length("héllo"), 5);
		assert_eq!(Encoding::Ascii.byte_length("😀"), 2);
		assert_eq!(Encoding::Utf16Le.byte_length("ab😀"), 8);
		assert_eq!(Encoding::Hex.byte_length("abef"), 2);
		assert_eq!(Encoding::Hex.byte_length("abc"), 1);
		assert_eq!(Encoding::Base64.byte_length("aGVsbG8="), 5);
		assert_eq!(Encoding::Base64.byte_length("aGk="), 2);
		assert_eq!(Encoding::Base64.byte_length("aGVsbG8gd29ybGQ="), 11);
		assert_eq!(Encoding::Base64.byte_length("YQ=="), 1);
		assert_eq!(Encoding::Base64.byte_length(""), 0);
	}

	#[test]
	fn test_encode_into_respects_destination() {
		let mut dst = [0u8; 2];
		assert_eq!(Encoding::Utf8.encode_into("12345", &mut dst), 2);
		assert_eq!(&dst, b"12");

		let mut dst = [0u8; 2];
		assert_eq!(Encoding::Hex.encode_into("123456", &mut dst), 2);
		assert_eq!(dst, [0x12, 0x34]);
	}
}
