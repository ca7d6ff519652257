//! Boot-time provisioning pipeline. Reads the device MAC address half,
//! classifies it, persists the resolved vendor to the CID file, and asks
//! the wifi driver to switch to the vendor's NVRAM calibration.

mod cid;
mod nvram;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classifier::{self, Vendor};
use crate::config;
use crate::error::ProvisionError;

/// Paths and account a provisioning run operates on. The binary always
/// runs on `system_defaults`; tests construct configs over temp dirs.
pub struct ProvisionConfig {
    pub macaddr_path: PathBuf,
    pub cid_path: PathBuf,
    pub driver_ctrl_path: PathBuf,
    /// Base NVRAM calibration file; `None` skips the calibration switch.
    pub nvram_path: Option<PathBuf>,
    pub cid_owner: String,
}

impl ProvisionConfig {
    pub fn system_defaults() -> Self {
        let nvram_path = match config::WIFI_DRIVER_NVRAM_PATH {
            "" => None,
            path => Some(PathBuf::from(path)),
        };
        ProvisionConfig {
            macaddr_path: PathBuf::from(config::MACADDR_PATH),
            cid_path: PathBuf::from(config::CID_PATH),
            driver_ctrl_path: PathBuf::from(config::WIFI_DRIVER_NVRAM_PATH_PARAM),
            nvram_path,
            cid_owner: config::CID_OWNER.to_string(),
        }
    }
}

/// Result of a successful provisioning run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A vendor matched; the CID file was written and calibration requested.
    Provisioned(Vendor),
    /// No vendor matched; any stale CID file was removed.
    NoMatch,
}

/// Run the pipeline once. Strictly sequential; the first fatal error aborts
/// the remaining steps, and effects already committed (CID file content,
/// permissions, ownership) are not rolled back.
pub fn run(config: &ProvisionConfig) -> Result<Outcome, ProvisionError> {
    let prefix = read_mac_prefix(&config.macaddr_path)?;

    let Some(vendor) = classifier::classify(&prefix) else {
        cid::remove_cid_file(&config.cid_path);
        return Ok(Outcome::NoMatch);
    };

    info!(
        "Setting wifi type to {} in {}",
        vendor,
        config.cid_path.display()
    );

    let cidfile = cid::write_cid_file(&config.cid_path, vendor)?;
    cid::set_cid_permissions(&cidfile, &config.cid_path)?;
    cid::set_cid_ownership(&cidfile, &config.cid_path, &config.cid_owner)?;
    drop(cidfile);

    if let Some(nvram_path) = &config.nvram_path {
        nvram::request_calibration_switch(&config.driver_ctrl_path, nvram_path, vendor)?;
    }

    Ok(Outcome::Provisioned(vendor))
}

/// Read the MAC address half from the first line of the source file,
/// bounded to the maximum prefix length. An unreadable or empty source is
/// fatal before any file-system mutation happens.
fn read_mac_prefix(path: &Path) -> Result<String, ProvisionError> {
    let file = File::open(path).map_err(|source| ProvisionError::ConfigUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| ProvisionError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let prefix: String = line
        .trim_end_matches(['\r', '\n'])
        .chars()
        .take(config::MAX_PREFIX_LEN)
        .collect();

    if prefix.is_empty() {
        return Err(ProvisionError::ConfigUnavailable {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "empty MAC info file"),
        });
    }

    debug!("Read MAC address half '{}'", prefix);
    Ok(prefix)
}
