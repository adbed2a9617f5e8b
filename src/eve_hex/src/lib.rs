//! Lowercase hex encoding for the bytes fields of EVE cipher messages.
//!
//! Certificate hashes, initial values and digests are rendered as hex when
//! messages are shown as JSON. With the `serde` feature enabled, the
//! [`serde`](mod@serde) module can be used as a field adapter:
//!
//! ```ignore
//! #[serde(with = "eve_hex::serde")]
//! pub device_cert_hash: Vec<u8>,
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(missing_docs, clippy::pedantic)]

use std::fmt;

const MEGABYTE: usize = 1024 * 1024;
const STR_MAX_LENGTH: usize = 64 * MEGABYTE;

const LOWER: &[u8; 16] = b"0123456789abcdef";

/// Error type for decoding hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
	/// The input (after an optional `0x` prefix) has an odd number of chars.
	OddLength,
	/// A char that is not in `0..=9`, `a..=f` or `A..=F`.
	InvalidChar {
		/// Offset of the offending byte, counted after any `0x` prefix.
		index: usize,
		/// The offending byte.
		byte: u8,
	},
	/// The input exceeds the max allowed length.
	ExceedsMaxLength,
}

impl fmt::Display for HexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HexError::OddLength => write!(f, "hex input has an odd length"),
			HexError::InvalidChar { index, byte } => {
				write!(f, "invalid hex byte {byte:#04x} at offset {index}")
			}
			HexError::ExceedsMaxLength => {
				write!(f, "hex input exceeds {STR_MAX_LENGTH} chars")
			}
		}
	}
}

impl std::error::Error for HexError {}

fn nibble(index: usize, byte: u8) -> Result<u8, HexError> {
	match byte {
		b'0'..=b'9' => Ok(byte - b'0'),
		b'a'..=b'f' => Ok(byte - b'a' + 10),
		b'A'..=b'F' => Ok(byte - b'A' + 10),
		_ => Err(HexError::InvalidChar { index, byte }),
	}
}

/// Decode bytes from a hex string. A leading `0x` is accepted, as is mixed
/// casing.
pub fn decode(raw: &str) -> Result<Vec<u8>, HexError> {
	let digits = raw.strip_prefix("0x").unwrap_or(raw).as_bytes();

	if digits.len() >= STR_MAX_LENGTH {
		return Err(HexError::ExceedsMaxLength);
	}
	if digits.len() % 2 != 0 {
		return Err(HexError::OddLength);
	}

	digits
		.chunks_exact(2)
		.enumerate()
		.map(|(i, pair)| {
			let hi = nibble(2 * i, pair[0])?;
			let lo = nibble(2 * i + 1, pair[1])?;
			Ok((hi << 4) | lo)
		})
		.collect()
}

/// Encode a byte slice as a lowercase hex string with no prefix.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for b in bytes {
		out.push(LOWER[usize::from(b >> 4)] as char);
		out.push(LOWER[usize::from(b & 0x0f)] as char);
	}
	out
}

/// Serde adapter rendering `Vec<u8>` as a lowercase hex string.
#[cfg(feature = "serde")]
pub mod serde {
	use serde::{de, Deserialize, Deserializer, Serializer};

	/// Serialize bytes as hex.
	pub fn serialize<S, T>(bytes: T, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
		T: AsRef<[u8]>,
	{
		serializer.serialize_str(&super::encode(bytes.as_ref()))
	}

	/// Deserialize bytes from hex. `null` reads as no bytes.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(s) => super::decode(&s).map_err(de::Error::custom),
			None => Ok(Vec::new()),
		}
	}
}
