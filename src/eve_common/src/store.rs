//! Registry of exchanged cipher contexts, keyed by context id.

use std::collections::HashMap;

use crate::{
	cipher::Decrypter, CipherBlock, CipherContext, CipherError, EncryptionBlock,
	EncryptionScheme, HashAlgorithm, KeyExchangeScheme,
};

impl CipherContext {
	/// [`HashAlgorithm`] of this context, or an error if the wire value is
	/// not one this build knows.
	pub fn try_hash_scheme(&self) -> Result<HashAlgorithm, CipherError> {
		HashAlgorithm::try_from(self.hash_scheme).map_err(|_| {
			CipherError::UnknownEnumValue {
				field: "hashScheme",
				value: self.hash_scheme,
			}
		})
	}

	/// [`KeyExchangeScheme`] of this context, or an error if the wire value
	/// is not one this build knows.
	pub fn try_key_exchange_scheme(
		&self,
	) -> Result<KeyExchangeScheme, CipherError> {
		KeyExchangeScheme::try_from(self.key_exchange_scheme).map_err(|_| {
			CipherError::UnknownEnumValue {
				field: "keyExchangeScheme",
				value: self.key_exchange_scheme,
			}
		})
	}

	/// [`EncryptionScheme`] of this context, or an error if the wire value is
	/// not one this build knows.
	pub fn try_encryption_scheme(&self) -> Result<EncryptionScheme, CipherError> {
		EncryptionScheme::try_from(self.encryption_scheme).map_err(|_| {
			CipherError::UnknownEnumValue {
				field: "encryptionScheme",
				value: self.encryption_scheme,
			}
		})
	}

	/// Whether `cert` hashes to [`Self::device_cert_hash`] under this
	/// context's hash scheme.
	pub fn matches_device_cert(&self, cert: &[u8]) -> Result<bool, CipherError> {
		Ok(self.try_hash_scheme()?.cert_hash(cert)? == self.device_cert_hash)
	}

	/// Whether `cert` hashes to [`Self::controller_cert_hash`] under this
	/// context's hash scheme.
	pub fn matches_controller_cert(
		&self,
		cert: &[u8],
	) -> Result<bool, CipherError> {
		Ok(self.try_hash_scheme()?.cert_hash(cert)? == self.controller_cert_hash)
	}
}

/// Cipher contexts received from a peer.
///
/// A [`CipherBlock`] can only be opened once the context named by its
/// `cipher_context_id` has been inserted here.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CipherContextStore {
	contexts: HashMap<String, CipherContext>,
}

impl CipherContextStore {
	/// Create an empty store.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert `context`, returning the context it replaced, if any.
	pub fn insert(
		&mut self,
		context: CipherContext,
	) -> Result<Option<CipherContext>, CipherError> {
		if context.context_id.is_empty() {
			return Err(CipherError::MissingContextId);
		}

		let id = context.context_id.clone();
		let replaced = self.contexts.insert(id.clone(), context);
		match &replaced {
			Some(_) => tracing::debug!(context_id = %id, "replaced cipher context"),
			None => tracing::debug!(
				context_id = %id,
				contexts = self.contexts.len(),
				"added cipher context"
			),
		}

		Ok(replaced)
	}

	/// Look up a context by id.
	#[must_use]
	pub fn get(&self, context_id: &str) -> Option<&CipherContext> {
		self.contexts.get(context_id)
	}

	/// Remove a context by id.
	pub fn remove(&mut self, context_id: &str) -> Option<CipherContext> {
		let removed = self.contexts.remove(context_id);
		if removed.is_some() {
			tracing::debug!(context_id, "removed cipher context");
		}
		removed
	}

	/// Number of contexts held.
	#[must_use]
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	/// Whether no contexts are held.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Ids of every held context, sorted.
	#[must_use]
	pub fn context_ids(&self) -> Vec<&str> {
		let mut ids: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
		ids.sort_unstable();
		ids
	}

	/// The context `block` was produced under.
	pub fn resolve(&self, block: &CipherBlock) -> Result<&CipherContext, CipherError> {
		if block.cipher_context_id.is_empty() {
			return Err(CipherError::MissingContextId);
		}

		self.contexts.get(&block.cipher_context_id).ok_or_else(|| {
			tracing::warn!(
				context_id = %block.cipher_context_id,
				"cipher block references unknown cipher context"
			);
			CipherError::UnknownCipherContext(block.cipher_context_id.clone())
		})
	}

	/// Decrypt `block` with `decrypter` and decode the [`EncryptionBlock`] it
	/// carries.
	///
	/// The context's enum fields must hold known values and the decrypted
	/// bytes must match `clear_text_sha256`.
	pub fn open<D: Decrypter + ?Sized>(
		&self,
		block: &CipherBlock,
		decrypter: &D,
	) -> Result<EncryptionBlock, CipherError> {
		let context = self.resolve(block)?;
		context.try_key_exchange_scheme()?;
		context.try_encryption_scheme()?;

		let clear_text = zeroize::Zeroizing::new(decrypter.decrypt(context, block)?);

		EncryptionBlock::from_clear_text(block, &clear_text).map_err(|e| {
			if e == CipherError::ClearTextDigestMismatch {
				tracing::warn!(
					context_id = %context.context_id,
					"decrypted cipher block failed digest verification"
				);
			}
			e
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::digest::sha_256;

	fn context(id: &str) -> CipherContext {
		let mut ctx = CipherContext {
			context_id: id.to_string(),
			device_cert_hash: sha_256(b"device-cert")[..16].to_vec(),
			controller_cert_hash: sha_256(b"controller-cert")[..16].to_vec(),
			..Default::default()
		};
		ctx.set_hash_scheme(HashAlgorithm::Sha25616bytes);
		ctx.set_key_exchange_scheme(KeyExchangeScheme::KeaEcdh);
		ctx.set_encryption_scheme(EncryptionScheme::SaAes256Cfb);
		ctx
	}

	// XOR with the first byte of the initial value, enough to show the seam.
	fn xor_decrypt(
		_: &CipherContext,
		block: &CipherBlock,
	) -> Result<Vec<u8>, CipherError> {
		let key = *block
			.initial_value
			.first()
			.ok_or_else(|| CipherError::Decrypt("missing initial value".into()))?;
		Ok(block.cipher_data.iter().map(|b| b ^ key).collect())
	}

	fn seal(eb: &EncryptionBlock, context_id: &str) -> CipherBlock {
		let clear = eb.to_clear_text();
		let cipher_data = clear.as_bytes().iter().map(|b| b ^ 0x5a).collect();
		clear.cipher_block(context_id, vec![0x5a], cipher_data)
	}

	#[test]
	fn insert_rejects_empty_context_id() {
		let mut store = CipherContextStore::new();

		assert_eq!(
			store.insert(CipherContext::default()),
			Err(CipherError::MissingContextId)
		);
		assert!(store.is_empty());
	}

	#[test]
	fn insert_returns_replaced_context() {
		let mut store = CipherContextStore::new();
		let first = context("ctx-1");
		let mut second = context("ctx-1");
		second.device_cert_hash = vec![0xaa];

		assert_eq!(store.insert(first.clone()), Ok(None));
		assert_eq!(store.insert(second.clone()), Ok(Some(first)));
		assert_eq!(store.get("ctx-1"), Some(&second));
		assert_eq!(store.len(), 1);
	}

	#[derive(Clone, Default)]
	struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

	impl std::io::Write for LogBuffer {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn insert_logs_context_id() {
		let logs = LogBuffer::default();
		let writer = logs.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_max_level(tracing::Level::DEBUG)
			.with_ansi(false)
			.without_time()
			.with_writer(move || writer.clone())
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			let mut store = CipherContextStore::new();
			store.insert(context("ctx-added")).unwrap();
			store.insert(context("ctx-added")).unwrap();
		});

		let out = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
		let added = out.lines().find(|l| l.contains("added cipher context")).unwrap();
		assert!(added.contains("context_id=ctx-added"));
		let replaced =
			out.lines().find(|l| l.contains("replaced cipher context")).unwrap();
		assert!(replaced.contains("context_id=ctx-added"));
	}

	#[test]
	fn context_ids_are_sorted() {
		let mut store = CipherContextStore::new();
		store.insert(context("b")).unwrap();
		store.insert(context("a")).unwrap();
		store.insert(context("c")).unwrap();

		assert_eq!(store.context_ids(), vec!["a", "b", "c"]);

		assert!(store.remove("b").is_some());
		assert!(store.remove("b").is_none());
		assert_eq!(store.context_ids(), vec!["a", "c"]);
	}

	#[test]
	fn resolve_finds_context_by_id() {
		let mut store = CipherContextStore::new();
		store.insert(context("ctx-1")).unwrap();

		let block = CipherBlock {
			cipher_context_id: "ctx-1".to_string(),
			..Default::default()
		};
		assert_eq!(store.resolve(&block).unwrap().context_id, "ctx-1");
	}

	#[test]
	fn resolve_reports_missing_and_unknown_ids() {
		let store = CipherContextStore::new();

		assert_eq!(
			store.resolve(&CipherBlock::default()),
			Err(CipherError::MissingContextId)
		);

		let block = CipherBlock {
			cipher_context_id: "nope".to_string(),
			..Default::default()
		};
		assert_eq!(
			store.resolve(&block),
			Err(CipherError::UnknownCipherContext("nope".to_string()))
		);
	}

	#[test]
	fn open_decrypts_and_verifies() {
		let mut store = CipherContextStore::new();
		store.insert(context("ctx-1")).unwrap();

		let eb = EncryptionBlock {
			ds_api_key: "key".to_string(),
			cluster_token: "token".to_string(),
			..Default::default()
		};
		let block = seal(&eb, "ctx-1");

		assert_eq!(store.open(&block, &xor_decrypt).unwrap(), eb);
	}

	#[test]
	fn open_rejects_digest_mismatch() {
		let mut store = CipherContextStore::new();
		store.insert(context("ctx-1")).unwrap();

		let eb = EncryptionBlock {
			ds_password: "pw".to_string(),
			..Default::default()
		};
		let mut block = seal(&eb, "ctx-1");
		block.clear_text_sha256 = sha_256(b"something else").to_vec();

		assert_eq!(
			store.open(&block, &xor_decrypt),
			Err(CipherError::ClearTextDigestMismatch)
		);
	}

	#[test]
	fn open_rejects_unknown_schemes() {
		let mut store = CipherContextStore::new();
		let mut ctx = context("ctx-1");
		ctx.encryption_scheme = 7;
		store.insert(ctx).unwrap();

		let block = seal(&EncryptionBlock::default(), "ctx-1");
		assert_eq!(
			store.open(&block, &xor_decrypt),
			Err(CipherError::UnknownEnumValue {
				field: "encryptionScheme",
				value: 7
			})
		);
	}

	#[test]
	fn open_surfaces_decrypter_errors() {
		let mut store = CipherContextStore::new();
		store.insert(context("ctx-1")).unwrap();

		let mut block = seal(&EncryptionBlock::default(), "ctx-1");
		block.initial_value.clear();

		assert_eq!(
			store.open(&block, &xor_decrypt),
			Err(CipherError::Decrypt("missing initial value".to_string()))
		);
	}

	#[test]
	fn cert_hashes_are_checked_with_context_scheme() {
		let ctx = context("ctx-1");

		assert_eq!(ctx.matches_device_cert(b"device-cert"), Ok(true));
		assert_eq!(ctx.matches_device_cert(b"controller-cert"), Ok(false));
		assert_eq!(ctx.matches_controller_cert(b"controller-cert"), Ok(true));
	}

	#[test]
	fn cert_matching_needs_known_hash_scheme() {
		let mut ctx = context("ctx-1");
		ctx.hash_scheme = 99;

		assert_eq!(
			ctx.matches_device_cert(b"device-cert"),
			Err(CipherError::UnknownEnumValue { field: "hashScheme", value: 99 })
		);

		ctx.set_hash_scheme(HashAlgorithm::Invalid);
		assert_eq!(
			ctx.matches_device_cert(b"device-cert"),
			Err(CipherError::UnsupportedHashAlgorithm)
		);
	}
}
