//! Wrapping an [`EncryptionBlock`] into a [`CipherBlock`] and back.
//!
//! The symmetric cipher itself (ECDH key agreement followed by AES-256-CFB)
//! lives outside this crate. Producers serialize an `EncryptionBlock` into a
//! [`ClearText`], hand the bytes to their cipher, and build the resulting
//! `CipherBlock` with [`ClearText::cipher_block`]. Consumers plug their cipher
//! in through [`Decrypter`] and open blocks with
//! [`CipherContextStore::open`](crate::CipherContextStore::open).

use prost::Message;
use zeroize::Zeroize;

use crate::{
	digest::{sha_256, Hash256},
	CipherBlock, CipherContext, CipherError, EncryptionBlock,
};

/// Decrypts the `cipher_data` of a [`CipherBlock`] under the parameters of its
/// [`CipherContext`].
pub trait Decrypter {
	/// Return the clear text bytes of `block`. Implementations only decrypt;
	/// digest verification is done by the caller.
	fn decrypt(
		&self,
		context: &CipherContext,
		block: &CipherBlock,
	) -> Result<Vec<u8>, CipherError>;
}

impl<F> Decrypter for F
where
	F: Fn(&CipherContext, &CipherBlock) -> Result<Vec<u8>, CipherError>,
{
	fn decrypt(
		&self,
		context: &CipherContext,
		block: &CipherBlock,
	) -> Result<Vec<u8>, CipherError> {
		self(context, block)
	}
}

/// Serialized [`EncryptionBlock`] bytes and their SHA-256.
///
/// The bytes are wiped when this is dropped.
pub struct ClearText {
	bytes: Vec<u8>,
	sha256: Hash256,
}

impl ClearText {
	/// Wrap already serialized clear text bytes.
	#[must_use]
	pub fn new(bytes: Vec<u8>) -> Self {
		let sha256 = sha_256(&bytes);
		Self { bytes, sha256 }
	}

	/// The bytes to encrypt.
	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// SHA-256 of [`Self::as_bytes`].
	#[must_use]
	pub fn sha256(&self) -> &Hash256 {
		&self.sha256
	}

	/// Build the [`CipherBlock`] for these bytes once they have been
	/// encrypted into `cipher_data` with `initial_value` under the context
	/// `cipher_context_id`.
	#[must_use]
	pub fn cipher_block(
		&self,
		cipher_context_id: impl Into<String>,
		initial_value: Vec<u8>,
		cipher_data: Vec<u8>,
	) -> CipherBlock {
		CipherBlock {
			cipher_context_id: cipher_context_id.into(),
			initial_value,
			cipher_data,
			clear_text_sha256: self.sha256.to_vec(),
		}
	}
}

impl std::fmt::Debug for ClearText {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClearText")
			.field("len", &self.bytes.len())
			.field("sha256", &eve_hex::encode(&self.sha256))
			.finish()
	}
}

impl Drop for ClearText {
	fn drop(&mut self) {
		self.bytes.zeroize();
	}
}

// Runs in time independent of where the digests first differ.
fn digest_eq(expected: &[u8], actual: &[u8]) -> bool {
	if expected.len() != actual.len() {
		return false;
	}
	expected.iter().zip(actual).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}

impl CipherBlock {
	/// Check that `clear_text` hashes to [`Self::clear_text_sha256`].
	pub fn verify_clear_text(&self, clear_text: &[u8]) -> Result<(), CipherError> {
		if self.clear_text_sha256.is_empty() {
			return Err(CipherError::MissingClearTextDigest);
		}
		if !digest_eq(&sha_256(clear_text), &self.clear_text_sha256) {
			return Err(CipherError::ClearTextDigestMismatch);
		}

		Ok(())
	}
}

impl EncryptionBlock {
	/// Serialize this block as the clear text of a [`CipherBlock`].
	#[must_use]
	pub fn to_clear_text(&self) -> ClearText {
		ClearText::new(self.encode_to_vec())
	}

	/// Decode the clear text of `block`, after checking it against the
	/// digest `block` carries.
	pub fn from_clear_text(
		block: &CipherBlock,
		clear_text: &[u8],
	) -> Result<Self, CipherError> {
		block.verify_clear_text(clear_text)?;
		Ok(Self::decode(clear_text)?)
	}
}
