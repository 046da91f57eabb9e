// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use version_info_shared_kernel::VersionIdentifier;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    version: VersionIdentifier,
}

#[test]
fn serializes_as_plain_string() {
    let original = Wrapper { version: VersionIdentifier::from("2.21.4.dev0") };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"version":"2.21.4.dev0"}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
