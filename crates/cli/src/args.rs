// crates/cli/src/args.rs
use clap::Parser;
use version_info_shared_kernel::VersionIdentifier;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "version_info",
    version = crate::VERSION,
    about = "Classify version identifiers as releases or development builds",
    long_about = "Classify version identifiers as final releases (MAJOR.MINOR.PATCH) \
                  or pre-release/development builds.\n\n\
                  Without VERSION arguments the built-in version is checked, \
                  unless VERSION_INFO_VERSION is set."
)]
pub struct Args {
    /// Identifiers to classify (default: the built-in version)
    #[arg(value_name = "VERSION")]
    pub versions: Vec<VersionIdentifier>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any identifier is not a release
    #[arg(long)]
    pub check: bool,

    /// Print nothing on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_positional_versions_and_flags() {
        let args = Args::try_parse_from(["version_info", "--check", "-q", "1.0.0", "2.0.0rc1"]).unwrap();
        assert!(args.check);
        assert!(args.quiet);
        assert!(!args.verbose);
        assert_eq!(args.versions, vec![VersionIdentifier::from("1.0.0"), VersionIdentifier::from("2.0.0rc1")]);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["version_info", "--format", "toml"]).is_err());
    }
}
