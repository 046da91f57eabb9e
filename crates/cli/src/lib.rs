// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

pub use version_info::VERSION;

/// Environment variable that replaces the built-in version when no
/// identifiers are given on the command line.
pub const VERSION_ENV: &str = "VERSION_INFO_VERSION";
