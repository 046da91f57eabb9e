// crates/domain/src/lib.rs
//! Release classification for version identifiers.

pub mod classification;
pub mod digits;
pub mod release;

pub use classification::{Classification, ReleaseComponents, VersionKind, classify};
pub use release::{ReleaseVersion, is_release_version};
