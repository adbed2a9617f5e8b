//! Forward compatible decoding.
//!
//! prost skips fields it has no declaration for. A peer running a newer
//! schema may send such fields, and a relay must pass them on untouched.
//! [`Preserved`] keeps the raw records of undeclared fields next to the
//! decoded message and writes them back out after it.

use prost::{
	bytes::Buf,
	encoding::{decode_key, skip_field, DecodeContext},
	Message,
};

use crate::{CipherBlock, CipherContext, CipherError, EncryptionBlock};

/// Field tags declared by a message in the current schema.
pub trait KnownFields {
	/// Declared tags.
	const TAGS: &'static [u32];
}

impl KnownFields for CipherContext {
	const TAGS: &'static [u32] = &[1, 2, 3, 4, 5, 6];
}

impl KnownFields for CipherBlock {
	const TAGS: &'static [u32] = &[1, 2, 3, 4];
}

impl KnownFields for EncryptionBlock {
	const TAGS: &'static [u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];
}

/// A decoded message plus the encoded records of any fields it does not
/// declare.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Preserved<M> {
	message: M,
	unknown: Vec<u8>,
}

impl<M: Message + Default + KnownFields> Preserved<M> {
	/// Decode `buf`, keeping the records of undeclared fields verbatim.
	pub fn decode(buf: &[u8]) -> Result<Self, CipherError> {
		let message = M::decode(buf)?;

		let mut unknown = Vec::new();
		let mut cursor = buf;
		while cursor.has_remaining() {
			let record = cursor;
			let (tag, wire_type) = decode_key(&mut cursor)?;
			skip_field(wire_type, tag, &mut cursor, DecodeContext::default())?;

			if !M::TAGS.contains(&tag) {
				let len = record.len() - cursor.len();
				unknown.extend_from_slice(&record[..len]);
			}
		}

		Ok(Self { message, unknown })
	}

	/// Encode the message followed by the preserved records.
	#[must_use]
	pub fn encode_to_vec(&self) -> Vec<u8> {
		let mut out = self.message.encode_to_vec();
		out.extend_from_slice(&self.unknown);
		out
	}
}

impl<M> Preserved<M> {
	/// The decoded message.
	pub fn message(&self) -> &M {
		&self.message
	}

	/// Mutable access to the decoded message. Preserved records are kept.
	pub fn message_mut(&mut self) -> &mut M {
		&mut self.message
	}

	/// Drop the preserved records and return the message.
	pub fn into_inner(self) -> M {
		self.message
	}

	/// Raw encoded records of the undeclared fields, in wire order.
	pub fn unknown_fields(&self) -> &[u8] {
		&self.unknown
	}

	/// Whether any undeclared fields were seen.
	pub fn has_unknown_fields(&self) -> bool {
		!self.unknown.is_empty()
	}
}

impl<M> From<M> for Preserved<M> {
	fn from(message: M) -> Self {
		Self { message, unknown: Vec::new() }
	}
}
