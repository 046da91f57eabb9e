// crates/shared-kernel/src/value_objects/mod.rs
pub mod version_identifier;

pub use version_identifier::VersionIdentifier;
