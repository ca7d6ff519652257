use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal provisioning failures. Every variant aborts the remaining pipeline
/// and surfaces as a nonzero exit status; none is retried.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("can't read MAC prefix from {path}: {source}")]
    ConfigUnavailable { path: PathBuf, source: io::Error },

    #[error("can't write CID file {path}: {source}")]
    CidWrite { path: PathBuf, source: io::Error },

    #[error("can't set permissions on {path}: {source}")]
    Permission { path: PathBuf, source: io::Error },

    #[error("failed to find '{account}' user")]
    UnknownAccount { account: String },

    #[error("failed to change owner of {path}: {source}")]
    Ownership { path: PathBuf, source: nix::Error },

    #[error("NVRAM calibration file {path} is missing: {source}")]
    CalibrationUnavailable { path: PathBuf, source: io::Error },

    #[error("can't write to wifi driver config path {path}: {source}")]
    DriverWrite { path: PathBuf, source: io::Error },
}
