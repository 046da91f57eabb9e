// crates/domain/src/release.rs
use std::sync::OnceLock;

use regex::Regex;
use version_info_shared_kernel::VersionIdentifier;

/// `MAJOR.MINOR.PATCH`, nothing before or after. `\d` is any Unicode decimal digit.
const RELEASE_PATTERN: &str = r"^(\d+)\.(\d+)\.(\d+)$";

pub(crate) fn release_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RELEASE_PATTERN).expect("release pattern is a valid regex"))
}

/// Returns `true` when `value` is a final release version: exactly three
/// dot-separated numeric components with no prefix, suffix or whitespace.
///
/// Total over all inputs; the empty string and anything malformed yield `false`.
///
/// ```
/// use version_info_domain::is_release_version;
///
/// assert!(is_release_version("2.21.4"));
/// assert!(!is_release_version("2.21.4.dev0"));
/// ```
#[must_use]
pub fn is_release_version(value: &str) -> bool {
    release_regex().is_match(value)
}

/// Anything that can be asked whether it names a release.
pub trait ReleaseVersion {
    fn is_release(&self) -> bool;
}

impl ReleaseVersion for str {
    fn is_release(&self) -> bool {
        is_release_version(self)
    }
}

impl ReleaseVersion for VersionIdentifier {
    fn is_release(&self) -> bool {
        is_release_version(self.as_str())
    }
}
