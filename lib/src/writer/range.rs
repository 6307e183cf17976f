use std::fmt::Debug;

use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::{Error, Result};

const TWO_POW_32: i128 = 1 << 32;

/// Checks `min <= value <= max` on both the integer and the float view of
/// `value`, so fractional inputs just past a bound are refused too. Returns
/// the value truncated toward zero.
pub fn check<V>(method: &'static str, value: V, min: i128, max: i128) -> Result<i128>
where
	V: ToPrimitive + Debug,
{
	let exact = value.to_i128();
	let approx = value.to_f64();
	let in_bounds = match (exact, approx) {
		(Some(exact), Some(approx)) => {
			exact >= min && exact <= max && approx >= min as f64 && approx <= max as f64
		}
		(Some(exact), None) => exact >= min && exact <= max,
		(None, _) => false,
	};

	match exact {
		Some(exact) if in_bounds => Ok(exact),
		_ => {
			debug!(method, ?value, ?min, ?max, "rejected out of range value");
			Err(Error::OutOfRange {
				method,
				value: format!("{:?}", value),
				min,
				max,
			})
		}
	}
}

/// Splits a 64-bit quantity into `(high, low)` 32-bit halves. `high` is
/// floored so negative values keep their two's-complement layout.
pub fn split(value: i128) -> (i128, u32) {
	let high = value.div_euclid(TWO_POW_32);
	let low = value.rem_euclid(TWO_POW_32) as u32;
	(high, low)
}

#[cfg(test)]
mod tests {
	use super::{check, split};
	use crate::{error::ErrorKind, options::MAX_SAFE_INTEGER};

	#[test]
	fn test_bounds_are_inclusive() {
		assert_eq!(check("write_u8", 0, 0, 255), Ok(0));
		assert_eq!(check("write_u8", 255u64, 0, 255), Ok(255));
		assert!(check("write_u8", 256, 0, 255).is_err());
		assert!(check("write_u8", -1i8, 0, 255).is_err());
	}

	#[test]
	fn test_float_inputs() {
		assert_eq!(check("write_u8", 1.9f64, 0, 255), Ok(1));
		assert_eq!(check("write_u8", 255.0f32, 0, 255), Ok(255));
		assert!(check("write_u8", 255.5f64, 0, 255).is_err());
		assert!(check("write_u8", -0.5f64, 0, 255).is_err());
		assert!(check("write_u8", f64::NAN, 0, 255).is_err());
		assert!(check("write_i32", f64::INFINITY, i32::MIN as i128, i32::MAX as i128).is_err());
	}

	#[test]
	fn test_error_details() {
		let err = check("write_u64_be", MAX_SAFE_INTEGER + 1, 0, MAX_SAFE_INTEGER).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Range);
		assert_eq!(
			err.to_string(),
			"value is out of bounds: write_u64_be(9007199254740992) expects 0..=9007199254740991"
		);
	}

	#[test]
	fn test_split() {
		assert_eq!(split(0x0000_0001_0000_0000), (1, 0));
		assert_eq!(split(0x001f_ffff_ffff_ffff), (0x001f_ffff, 0xffff_ffff));
		assert_eq!(split(-1), (-1, 0xffff_ffff));
		assert_eq!(split(-0x1_0000_0001), (-2, 0xffff_ffff));
		assert_eq!(split(u64::MAX as i128), (0xffff_ffff, 0xffff_ffff));
	}
}
