use clap::Parser;
use std::process::ExitCode;
use version_info_cli::args::Args;
use version_info_cli::config::Config;
use version_info_cli::{logging, presentation};
use version_info_domain::{Classification, classify};

const CHECK_FAILED: u8 = 1;
const RUN_FAILED: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::init(config.verbose) {
        eprintln!("Warning: {e}");
    }
    tracing::debug!(source = config.source.as_str(), count = config.inputs.len(), "resolved inputs");

    let classifications: Vec<Classification> = config.inputs.iter().map(classify).collect();

    if !config.quiet {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = presentation::write_report(&mut stdout, &classifications, config.format) {
            eprintln!("Error: {e}");
            return ExitCode::from(RUN_FAILED);
        }
    }

    if config.check {
        let pending: Vec<_> = classifications.iter().filter(|c| !c.is_release()).collect();
        if !pending.is_empty() {
            for c in &pending {
                tracing::warn!(version = %c.version, "not a release version");
            }
            return ExitCode::from(CHECK_FAILED);
        }
    }

    ExitCode::SUCCESS
}
