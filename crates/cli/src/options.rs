// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<version>\t<kind>` per line
    #[default]
    Text,
    Json,
    Yaml,
}

/// Where the classified identifiers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Arguments,
    Environment,
    BuiltIn,
}

impl VersionSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arguments => "arguments",
            Self::Environment => "environment",
            Self::BuiltIn => "built-in",
        }
    }
}
