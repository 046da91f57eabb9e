// src/lib.rs
//! Version metadata for this build and the release check behind it.
//!
//! ```
//! assert!(!version_info::is_release_version());
//! assert!(version_info::domain::is_release_version("2.21.4"));
//! ```

pub mod version;

pub use version::{VERSION, is_release_version};
pub use version_info_domain as domain;
pub use version_info_domain::{Classification, ReleaseComponents, ReleaseVersion, VersionKind, classify};
pub use version_info_shared_kernel::{VersionIdentifier, VersionInfoError};

/// The built-in [`VERSION`] as a value object.
#[must_use]
pub fn current() -> VersionIdentifier {
    VersionIdentifier::from(VERSION)
}
