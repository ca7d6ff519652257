//! NVRAM calibration switching. Tells the wifi driver which calibration
//! file to load by writing file paths to its control parameter: first the
//! base calibration file, then the vendor-specific one when it exists.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::classifier::Vendor;
use crate::error::ProvisionError;

/// Point the driver at the base calibration file, then at the
/// vendor-specific `{base}_{vendor}` file when one is present. The base
/// write is fatal on failure; the vendor-specific write is best-effort,
/// since the driver already accepted the base calibration by then.
pub(crate) fn request_calibration_switch(
    ctrl_path: &Path,
    nvram_path: &Path,
    vendor: Vendor,
) -> Result<(), ProvisionError> {
    if let Err(source) = nvram_path.metadata() {
        return Err(ProvisionError::CalibrationUnavailable {
            path: nvram_path.to_path_buf(),
            source,
        });
    }

    debug!("Using NVRAM calibration file: {}", nvram_path.display());

    let mut ctrl = OpenOptions::new()
        .write(true)
        .open(ctrl_path)
        .map_err(|source| ProvisionError::DriverWrite {
            path: ctrl_path.to_path_buf(),
            source,
        })?;

    write_path_param(&mut ctrl, nvram_path).map_err(|source| ProvisionError::DriverWrite {
        path: ctrl_path.to_path_buf(),
        source,
    })?;

    let vendor_nvram = format!("{}_{}", nvram_path.display(), vendor);
    let vendor_nvram = Path::new(&vendor_nvram);

    debug!("Changing NVRAM calibration file for {} chipset", vendor);

    if !vendor_nvram.exists() {
        // Defined fallback: the base calibration was already accepted.
        warn!(
            "NVRAM calibration file '{}' doesn't exist",
            vendor_nvram.display()
        );
        return Ok(());
    }

    match write_path_param(&mut ctrl, vendor_nvram) {
        Ok(()) => debug!(
            "NVRAM calibration file set to '{}'",
            vendor_nvram.display()
        ),
        // Best-effort: the run still succeeds on the base calibration.
        Err(e) => warn!(
            "Failed to write to wifi config path {}: {}",
            ctrl_path.display(),
            e
        ),
    }

    Ok(())
}

/// The driver expects each path as a NUL-terminated string.
fn write_path_param(ctrl: &mut File, path: &Path) -> std::io::Result<()> {
    ctrl.write_all(path.as_os_str().as_encoded_bytes())?;
    ctrl.write_all(&[0])
}
