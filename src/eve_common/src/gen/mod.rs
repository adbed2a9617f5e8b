//! Generated bindings for the `org.lfedge.eve.common` protobuf package.
//!
//! Regenerate with `cd src/eve_common/proto_gen && cargo run`.

// We don't want to run clippy on generated code.
#![allow(clippy::all, clippy::pedantic, missing_docs)]

pub mod org {
	pub mod lfedge {
		pub mod eve {
			pub mod common {
				include!("org.lfedge.eve.common.rs");
			}
		}
	}
}
