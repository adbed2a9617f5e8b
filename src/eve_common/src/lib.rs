//! Cipher metadata exchanged between an EVE device and its controller.
//!
//! This crate provides the protobuf-generated types of the
//! `org.lfedge.eve.common` cipher schema together with the helpers a device
//! or controller needs around them:
//!
//! - [`CipherContext`]: the negotiated algorithms and certificate hashes,
//!   keyed by `context_id`.
//! - [`CipherBlock`]: ciphertext plus the SHA-256 of its clear text.
//! - [`EncryptionBlock`]: the sensitive clear text payload.
//!
//! ## Wire compatibility
//!
//! Field tags and enum values are the wire contract. Enum fields are `i32`
//! so values unknown to this build round-trip unchanged. prost skips
//! undeclared fields on decode; use [`Preserved`] when they must be passed on.
//!
//! ## JSON
//!
//! Types implement serde with proto JSON field names and lowercase hex for
//! bytes fields.
//!
//! ## Sealing and opening
//!
//! ```ignore
//! use eve_common::{CipherContextStore, EncryptionBlock};
//!
//! let clear = block.to_clear_text();
//! let (iv, data) = my_cipher.encrypt(clear.as_bytes());
//! let cipher_block = clear.cipher_block(context.context_id.clone(), iv, data);
//!
//! let mut store = CipherContextStore::new();
//! store.insert(context)?;
//! let opened: EncryptionBlock = store.open(&cipher_block, &my_decrypter)?;
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod gen;

pub mod cipher;
pub mod digest;
mod error;
mod sensitive;
pub mod store;
pub mod unknown;

pub use cipher::{ClearText, Decrypter};
pub use digest::{sha_256, Hash256, ProtoHash};
pub use error::CipherError;
pub use gen::org::lfedge::eve::common::*;
pub use store::CipherContextStore;
pub use unknown::{KnownFields, Preserved};

// Re-export prost so users encode and decode against the same version.
pub use prost;
