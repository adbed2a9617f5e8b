//! Handling for the secrets an [`EncryptionBlock`] carries.
//!
//! Every populated field of an `EncryptionBlock` is treated as a secret: the
//! `Debug` output never contains field values, and the block can be wiped in
//! place with [`Zeroize`].

use std::fmt;

use zeroize::Zeroize;

use crate::{EncryptionBlock, EncryptionBlockUser};

const REDACTED: &str = "<redacted>";

struct Redacted<'a>(&'a str);

impl fmt::Debug for Redacted<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			f.write_str("\"\"")
		} else {
			f.write_str(REDACTED)
		}
	}
}

struct ByteCount(usize);

impl fmt::Debug for ByteCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{} bytes>", self.0)
	}
}

impl fmt::Debug for EncryptionBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let user = EncryptionBlockUser::try_from(self.user)
			.map_or_else(|_| self.user.to_string(), |u| u.as_str_name().to_string());

		f.debug_struct("EncryptionBlock")
			.field("ds_api_key", &Redacted(&self.ds_api_key))
			.field("ds_password", &Redacted(&self.ds_password))
			.field("wifi_user_name", &Redacted(&self.wifi_user_name))
			.field("wifi_password", &Redacted(&self.wifi_password))
			.field("protected_user_data", &Redacted(&self.protected_user_data))
			.field("cellular_net_username", &Redacted(&self.cellular_net_username))
			.field("cellular_net_password", &Redacted(&self.cellular_net_password))
			.field("cluster_token", &Redacted(&self.cluster_token))
			.field("user", &user)
			.field("encrypted_data", &Redacted(&self.encrypted_data))
			.field(
				"cellular_net_attach_username",
				&Redacted(&self.cellular_net_attach_username),
			)
			.field(
				"cellular_net_attach_password",
				&Redacted(&self.cellular_net_attach_password),
			)
			.field(
				"gzip_registration_manifest_yaml",
				&ByteCount(self.gzip_registration_manifest_yaml.len()),
			)
			.finish()
	}
}

impl Zeroize for EncryptionBlock {
	fn zeroize(&mut self) {
		self.ds_api_key.zeroize();
		self.ds_password.zeroize();
		self.wifi_user_name.zeroize();
		self.wifi_password.zeroize();
		self.protected_user_data.zeroize();
		self.cellular_net_username.zeroize();
		self.cellular_net_password.zeroize();
		self.cluster_token.zeroize();
		self.user.zeroize();
		self.encrypted_data.zeroize();
		self.cellular_net_attach_username.zeroize();
		self.cellular_net_attach_password.zeroize();
		self.gzip_registration_manifest_yaml.zeroize();
	}
}

impl EncryptionBlock {
	/// Proto names of the fields that hold a non-default value, in tag order.
	#[must_use]
	pub fn populated_fields(&self) -> Vec<&'static str> {
		[
			("dsAPIKey", !self.ds_api_key.is_empty()),
			("dsPassword", !self.ds_password.is_empty()),
			("wifiUserName", !self.wifi_user_name.is_empty()),
			("wifiPassword", !self.wifi_password.is_empty()),
			("protectedUserData", !self.protected_user_data.is_empty()),
			("cellular_net_username", !self.cellular_net_username.is_empty()),
			("cellular_net_password", !self.cellular_net_password.is_empty()),
			("cluster_token", !self.cluster_token.is_empty()),
			("user", self.user != 0),
			("encrypted_data", !self.encrypted_data.is_empty()),
			(
				"cellular_net_attach_username",
				!self.cellular_net_attach_username.is_empty(),
			),
			(
				"cellular_net_attach_password",
				!self.cellular_net_attach_password.is_empty(),
			),
			(
				"gzip_registration_manifest_yaml",
				!self.gzip_registration_manifest_yaml.is_empty(),
			),
		]
		.into_iter()
		.filter_map(|(name, set)| set.then_some(name))
		.collect()
	}

	/// Whether every field holds its default value.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.populated_fields().is_empty()
	}

	/// The `encrypted_data` payload together with the user it is meant for.
	///
	/// `None` unless `user` is a known, non-default value and
	/// `encrypted_data` is non-empty.
	#[must_use]
	pub fn user_payload(&self) -> Option<(EncryptionBlockUser, &str)> {
		match EncryptionBlockUser::try_from(self.user) {
			Ok(EncryptionBlockUser::Unspecified) | Err(_) => None,
			Ok(_) if self.encrypted_data.is_empty() => None,
			Ok(user) => Some((user, self.encrypted_data.as_str())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn block() -> EncryptionBlock {
		EncryptionBlock {
			ds_api_key: "AKIA-secret".to_string(),
			wifi_password: "wifi-secret".to_string(),
			cluster_token: "token-secret".to_string(),
			gzip_registration_manifest_yaml: vec![0x1f, 0x8b, 0x08],
			..Default::default()
		}
	}

	#[test]
	fn debug_never_prints_values() {
		let shown = format!("{:?}", block());

		assert!(!shown.contains("secret"));
		assert!(shown.contains("ds_api_key: <redacted>"));
		assert!(shown.contains("ds_password: \"\""));
		assert!(shown.contains("gzip_registration_manifest_yaml: <3 bytes>"));
		assert!(shown.contains("ENCRYPTION_BLOCK_USER_UNSPECIFIED"));
	}

	#[test]
	fn debug_shows_unknown_user_as_number() {
		let eb = EncryptionBlock { user: 42, ..Default::default() };

		assert!(format!("{eb:?}").contains("user: \"42\""));
	}

	#[test]
	fn populated_fields_lists_set_fields_in_tag_order() {
		assert_eq!(
			block().populated_fields(),
			vec![
				"dsAPIKey",
				"wifiPassword",
				"cluster_token",
				"gzip_registration_manifest_yaml"
			]
		);
		assert!(EncryptionBlock::default().is_empty());
		assert!(!block().is_empty());
	}

	#[test]
	fn zeroize_clears_every_field() {
		let mut eb = block();
		eb.set_user(EncryptionBlockUser::BinaryArtifactMetadata);
		eb.encrypted_data = "payload".to_string();

		eb.zeroize();

		assert!(eb.is_empty());
		assert_eq!(eb, EncryptionBlock::default());
	}

	#[test]
	fn user_payload_requires_known_user_and_data() {
		let mut eb = EncryptionBlock {
			encrypted_data: "{}".to_string(),
			..Default::default()
		};
		assert_eq!(eb.user_payload(), None);

		eb.set_user(EncryptionBlockUser::BinaryArtifactMetadata);
		assert_eq!(
			eb.user_payload(),
			Some((EncryptionBlockUser::BinaryArtifactMetadata, "{}"))
		);

		eb.encrypted_data.clear();
		assert_eq!(eb.user_payload(), None);

		eb.user = 9;
		eb.encrypted_data = "{}".to_string();
		assert_eq!(eb.user_payload(), None);
	}
}
