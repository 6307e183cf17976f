use ::base64::{
	alphabet,
	engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
	Engine as _,
};

const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new()
		.with_decode_padding_mode(DecodePaddingMode::RequireNone)
		.with_decode_allow_trailing_bits(true),
);

// only whole characters are written
pub fn utf8(text: &str, dst: &mut [u8]) -> usize {
	let mut end = text.len().min(dst.len());
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	dst[..end].copy_from_slice(&text.as_bytes()[..end]);
	end
}

// low byte of each utf-16 code unit
pub fn latin1(text: &str, dst: &mut [u8]) -> usize {
	let mut written = 0;
	for (slot, unit) in dst.iter_mut().zip(text.encode_utf16()) {
		*slot = unit as u8;
		written += 1;
	}
	written
}

pub fn utf16le(text: &str, dst: &mut [u8]) -> usize {
	let mut written = 0;
	for (slot, unit) in dst.chunks_exact_mut(2).zip(text.encode_utf16()) {
		slot.copy_from_slice(&unit.to_le_bytes());
		written += 2;
	}
	written
}

pub fn hex(text: &str, dst: &mut [u8]) -> usize {
	let mut written = 0;
	for (slot, pair) in dst.iter_mut().zip(text.as_bytes().chunks_exact(2)) {
		let mut byte = [0u8; 1];
		if ::hex::decode_to_slice(pair, &mut byte).is_err() {
			break;
		}
		*slot = byte[0];
		written += 1;
	}
	written
}

pub fn base64(text: &str, dst: &mut [u8]) -> usize {
	let mut symbols: Vec<u8> = text
		.bytes()
		.take_while(|b| *b != b'=')
		.filter_map(|b| match b {
			b'-' => Some(b'+'),
			b'_' => Some(b'/'),
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => Some(b),
			_ => None,
		})
		.collect();
	// a lone trailing symbol carries fewer than 8 bits
	if symbols.len() % 4 == 1 {
		symbols.pop();
	}

	let decoded = match LENIENT_BASE64.decode(&symbols) {
		Ok(decoded) => decoded,
		Err(_) => return 0,
	};
	let written = decoded.len().min(dst.len());
	dst[..written].copy_from_slice(&decoded[..written]);
	written
}
