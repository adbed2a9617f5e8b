//! Proto generation tool for the EVE cipher types.
//!
//! Usage:
//!   cd src/eve_common/proto_gen && cargo run

use std::path::PathBuf;

/// Serde attribute for hex encoding bytes fields in JSON.
const HEX_SERDE: &str = "#[serde(with = \"eve_hex::serde\")]";

/// Bytes fields in the proto definitions.
const BYTES_FIELDS: &[&str] = &[
    ".org.lfedge.eve.common.CipherContext.deviceCertHash",
    ".org.lfedge.eve.common.CipherContext.controllerCertHash",
    ".org.lfedge.eve.common.CipherBlock.initialValue",
    ".org.lfedge.eve.common.CipherBlock.cipherData",
    ".org.lfedge.eve.common.CipherBlock.clearTextSha256",
    ".org.lfedge.eve.common.EncryptionBlock.gzip_registration_manifest_yaml",
];

/// Fields whose proto JSON name is not the camelCase of the Rust field name.
const JSON_RENAMES: &[(&str, &str)] =
    &[(".org.lfedge.eve.common.EncryptionBlock.dsAPIKey", "dsAPIKey")];

/// Messages holding secrets. These get a hand written, redacting `Debug`.
const SKIP_DEBUG: &[&str] = &[".org.lfedge.eve.common.EncryptionBlock"];

fn main() {
    // Use protoc from protobuf-src for consistent versioning
    std::env::set_var("PROTOC", protobuf_src::protoc());

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let proto_dir = manifest_dir.join("../../../proto");
    let out_dir = manifest_dir.join("../src/gen");

    println!("Proto directory: {}", proto_dir.display());
    println!("Output directory: {}", out_dir.display());

    let mut prost_config = prost_build::Config::new();
    prost_config
        .message_attribute(".", "#[serde(default)]")
        .skip_debug(SKIP_DEBUG);

    let mut config = tonic_build::configure()
        .out_dir(&out_dir)
        .type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]")
        .type_attribute(".", "#[serde(rename_all = \"camelCase\")]")
        .build_server(false)
        .build_client(false);

    for field in BYTES_FIELDS {
        config = config.field_attribute(field, HEX_SERDE);
    }

    for (field, json_name) in JSON_RENAMES {
        config = config
            .field_attribute(field, format!("#[serde(rename = \"{json_name}\")]"));
    }

    config
        .compile_with_config(
            prost_config,
            &[
                proto_dir.join("evecommon/evecommon.proto"),
                proto_dir.join("evecommon/acipherinfo.proto"),
            ],
            &[&proto_dir],
        )
        .expect("Proto compilation failed");

    println!("Proto generation complete!");
    println!("Generated files in: {}", out_dir.display());
}
