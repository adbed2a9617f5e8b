//! Errors for working with cipher metadata.

use std::fmt;

/// Errors for `eve_common`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
	/// Wire bytes could not be decoded into the expected message.
	Decode(prost::DecodeError),
	/// A `CipherContext` or `CipherBlock` has an empty context id.
	MissingContextId,
	/// A `CipherBlock` references a context that was never exchanged.
	UnknownCipherContext(String),
	/// A `CipherBlock` carries no clear text digest to verify against.
	MissingClearTextDigest,
	/// The SHA-256 of the decrypted bytes differs from `clear_text_sha256`.
	ClearTextDigestMismatch,
	/// An enum field holds a value this build does not know about.
	UnknownEnumValue {
		/// Proto name of the field.
		field: &'static str,
		/// Raw wire value.
		value: i32,
	},
	/// Certificate hashing was requested with `HASH_ALGORITHM_INVALID`.
	UnsupportedHashAlgorithm,
	/// The decryption collaborator failed.
	Decrypt(String),
}

impl fmt::Display for CipherError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CipherError::Decode(e) => write!(f, "failed to decode message: {e}"),
			CipherError::MissingContextId => {
				write!(f, "cipher context id is empty")
			}
			CipherError::UnknownCipherContext(id) => {
				write!(f, "no cipher context with id {id:?}")
			}
			CipherError::MissingClearTextDigest => {
				write!(f, "cipher block has no clear text sha256")
			}
			CipherError::ClearTextDigestMismatch => {
				write!(f, "clear text sha256 does not match decrypted data")
			}
			CipherError::UnknownEnumValue { field, value } => {
				write!(f, "unknown value {value} for enum field {field}")
			}
			CipherError::UnsupportedHashAlgorithm => {
				write!(f, "hash algorithm is not set")
			}
			CipherError::Decrypt(msg) => write!(f, "decryption failed: {msg}"),
		}
	}
}

impl std::error::Error for CipherError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			CipherError::Decode(e) => Some(e),
			_ => None,
		}
	}
}

impl From<prost::DecodeError> for CipherError {
	fn from(e: prost::DecodeError) -> Self {
		CipherError::Decode(e)
	}
}
