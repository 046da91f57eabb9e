// crates/cli/src/config.rs
use version_info_shared_kernel::VersionIdentifier;

use crate::args::Args;
use crate::options::{OutputFormat, VersionSource};

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: Vec<VersionIdentifier>,
    pub source: VersionSource,
    pub format: OutputFormat,
    pub check: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    /// Builds a config from parsed arguments and the value of
    /// [`crate::VERSION_ENV`], if any. An empty override is ignored.
    pub fn from_args_and_env(args: Args, env_override: Option<String>) -> Self {
        let (inputs, source) = if !args.versions.is_empty() {
            (args.versions, VersionSource::Arguments)
        } else if let Some(value) = env_override.filter(|v| !v.is_empty()) {
            (vec![VersionIdentifier::from(value)], VersionSource::Environment)
        } else {
            (vec![VersionIdentifier::from(crate::VERSION)], VersionSource::BuiltIn)
        };

        Self {
            inputs,
            source,
            format: args.format,
            check: args.check,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let env_override = std::env::var(crate::VERSION_ENV).ok();
        Self::from_args_and_env(args, env_override)
    }
}
