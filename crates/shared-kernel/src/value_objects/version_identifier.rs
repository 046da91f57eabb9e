// crates/shared-kernel/src/value_objects/version_identifier.rs
use std::{borrow::Borrow, convert::Infallible, fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

/// A version identifier as written, e.g. `2.21.4.dev0`.
///
/// No shape is enforced: any string, including the empty one, is a valid
/// identifier. Whether it names a release is decided by the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct VersionIdentifier(String);

impl VersionIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VersionIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Deref for VersionIdentifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for VersionIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VersionIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}
