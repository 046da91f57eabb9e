// src/version.rs
//! The version identifier this build carries.
//!
//! Kept as a literal rather than `CARGO_PKG_VERSION`: Cargo only accepts
//! SemVer, while identifiers here follow the `MAJOR.MINOR.PATCH[.devN]` form.

use version_info_domain::is_release_version as matches_release;

/// Process-wide version identifier.
pub const VERSION: &str = "2.21.4.dev0";

/// Whether [`VERSION`] names a final release rather than a development build.
#[must_use]
pub fn is_release_version() -> bool {
    matches_release(VERSION)
}
