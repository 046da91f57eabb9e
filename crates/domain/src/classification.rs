// crates/domain/src/classification.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use version_info_shared_kernel::{DomainError, DomainResult, VersionIdentifier};

use crate::digits::parse_decimal;
use crate::release::{is_release_version, release_regex};

/// Whether an identifier is a final release or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionKind {
    Release,
    /// Development builds (`.devN`), release candidates and anything malformed.
    PreRelease,
}

impl VersionKind {
    #[must_use]
    pub fn of(value: &str) -> Self {
        if is_release_version(value) {
            Self::Release
        } else {
            Self::PreRelease
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::PreRelease => "pre-release",
        }
    }

    pub const fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric parts of a release version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReleaseComponents {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseComponents {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Extracts the components of a release version.
    ///
    /// # Errors
    /// `NotARelease` when `value` fails the release predicate, and
    /// `ComponentOverflow` when a component does not fit in a `u64`.
    /// Digits from any script count, so `١.٢.٣` parses to `1.2.3`.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let caps = release_regex()
            .captures(value)
            .ok_or_else(|| DomainError::NotARelease { value: value.to_string() })?;

        let component = |index: usize, name: &'static str| {
            parse_decimal(&caps[index]).ok_or_else(|| DomainError::ComponentOverflow {
                value: value.to_string(),
                component: name,
            })
        };

        Ok(Self {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }
}

impl fmt::Display for ReleaseComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Everything known about one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub version: VersionIdentifier,
    pub kind: VersionKind,
    pub components: Option<ReleaseComponents>,
}

impl Classification {
    pub const fn is_release(&self) -> bool {
        self.kind.is_release()
    }
}

/// Classifies `version`. Never fails: a release whose components overflow is
/// still a release, it just carries no components.
#[must_use]
pub fn classify(version: &VersionIdentifier) -> Classification {
    let kind = VersionKind::of(version.as_str());
    let components = match kind {
        VersionKind::Release => match ReleaseComponents::parse(version.as_str()) {
            Ok(parts) => Some(parts),
            Err(err) => {
                tracing::debug!(%version, error = %err, "release components unavailable");
                None
            }
        },
        VersionKind::PreRelease => None,
    };

    tracing::debug!(%version, %kind, "classified version");
    Classification { version: version.clone(), kind, components }
}
