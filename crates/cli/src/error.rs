// crates/cli/src/error.rs
use thiserror::Error;
use version_info_shared_kernel::VersionInfoError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] VersionInfoError),
}

pub type Result<T> = std::result::Result<T, AppError>;
