//! SHA-256 helpers for certificate hashes and clear text digests.

use prost::Message;
use sha2::Digest;

use crate::{CipherError, HashAlgorithm};

/// Length of a SHA-256 digest.
pub const SHA256_LEN: usize = 32;

/// Length of a SHA-256 digest truncated for `HASH_ALGORITHM_SHA256_16BYTES`.
pub const SHA256_TRUNCATED_LEN: usize = 16;

/// 256-bit hash.
pub type Hash256 = [u8; SHA256_LEN];

/// Create a SHA256 hash digest of `buf`.
#[must_use]
pub fn sha_256(buf: &[u8]) -> Hash256 {
	let mut hasher = sha2::Sha256::new();
	hasher.update(buf);
	hasher.finalize().into()
}

/// Canonical hash of a protobuf message: proto encode, then SHA-256.
///
/// This is the digest a `CipherBlock` carries in `clear_text_sha256` for the
/// `EncryptionBlock` it wraps.
pub trait ProtoHash: Message + Sized {
	/// Get the canonical hash.
	fn proto_hash(&self) -> Hash256 {
		sha_256(&self.encode_to_vec())
	}
}

impl<T: Message + Sized> ProtoHash for T {}

impl HashAlgorithm {
	/// Number of digest bytes kept by this algorithm, or `None` for
	/// [`HashAlgorithm::Invalid`].
	#[must_use]
	pub fn digest_len(self) -> Option<usize> {
		match self {
			HashAlgorithm::Invalid => None,
			HashAlgorithm::Sha25616bytes => Some(SHA256_TRUNCATED_LEN),
			HashAlgorithm::Sha25632bytes => Some(SHA256_LEN),
		}
	}

	/// Hash a DER or PEM encoded certificate the way a `CipherContext`
	/// records it in `device_cert_hash` / `controller_cert_hash`.
	pub fn cert_hash(self, cert: &[u8]) -> Result<Vec<u8>, CipherError> {
		let len = self.digest_len().ok_or(CipherError::UnsupportedHashAlgorithm)?;
		Ok(sha_256(cert)[..len].to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CipherContext;

	#[test]
	fn sha_256_works() {
		assert_eq!(
			eve_hex::encode(&sha_256(b"abc")),
			"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
		);
	}

	#[test]
	fn cert_hash_truncates_for_16_byte_scheme() {
		let cert = b"-----BEGIN CERTIFICATE-----";
		let full = HashAlgorithm::Sha25632bytes.cert_hash(cert).unwrap();
		let short = HashAlgorithm::Sha25616bytes.cert_hash(cert).unwrap();

		assert_eq!(full.len(), 32);
		assert_eq!(short.len(), 16);
		assert_eq!(&full[..16], &short[..]);
	}

	#[test]
	fn cert_hash_rejects_invalid_scheme() {
		assert_eq!(
			HashAlgorithm::Invalid.cert_hash(b"cert"),
			Err(CipherError::UnsupportedHashAlgorithm)
		);
	}

	#[test]
	fn proto_hash_is_deterministic() {
		let ctx = CipherContext {
			context_id: "ctx-1".to_string(),
			device_cert_hash: vec![1, 2, 3],
			..Default::default()
		};

		assert_eq!(ctx.proto_hash(), ctx.proto_hash());
		assert_eq!(ctx.proto_hash(), sha_256(&ctx.encode_to_vec()));
	}

	#[test]
	fn different_contexts_have_different_hashes() {
		let a = CipherContext {
			context_id: "a".to_string(),
			..Default::default()
		};
		let b = CipherContext {
			context_id: "b".to_string(),
			..Default::default()
		};

		assert_ne!(a.proto_hash(), b.proto_hash());
	}

	#[test]
	fn default_message_hashes_empty_input() {
		assert_eq!(CipherContext::default().proto_hash(), sha_256(&[]));
	}
}
