//! CID file management. Writes the resolved vendor name to the persisted
//! CID file with the ownership and permissions later boot stages expect,
//! and removes stale files when no vendor matches.

use std::fs::{self, File, Permissions};
use std::io::Write;
use std::os::fd::AsRawFd;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use nix::unistd::{User, fchown};
use tracing::{debug, warn};

use crate::classifier::Vendor;
use crate::error::ProvisionError;

/// Owner read/write, group read, other read.
const CID_FILE_MODE: u32 = 0o644;

/// Create or truncate the CID file and write the lowercase vendor name,
/// no trailing newline. Returns the open handle so permissions and
/// ownership apply to the file just written.
pub(crate) fn write_cid_file(path: &Path, vendor: Vendor) -> Result<File, ProvisionError> {
    let mut file = File::create(path).map_err(|source| ProvisionError::CidWrite {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(vendor.as_str().as_bytes())
        .map_err(|source| ProvisionError::CidWrite {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(file)
}

/// Set the CID file mode through the open handle.
pub(crate) fn set_cid_permissions(file: &File, path: &Path) -> Result<(), ProvisionError> {
    debug!("Changing permissions of {}", path.display());
    file.set_permissions(Permissions::from_mode(CID_FILE_MODE))
        .map_err(|source| ProvisionError::Permission {
            path: path.to_path_buf(),
            source,
        })
}

/// Resolve the owning account and apply its uid/gid through the open handle.
pub(crate) fn set_cid_ownership(
    file: &File,
    path: &Path,
    account: &str,
) -> Result<(), ProvisionError> {
    let user = User::from_name(account)
        .ok()
        .flatten()
        .ok_or_else(|| ProvisionError::UnknownAccount {
            account: account.to_string(),
        })?;

    fchown(file.as_raw_fd(), Some(user.uid), Some(user.gid)).map_err(|source| ProvisionError::Ownership {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove a stale CID file. A missing file is the expected case; any other
/// removal failure is logged and ignored, matching the tool's historical
/// behavior of treating cleanup as best-effort.
pub(crate) fn remove_cid_file(path: &Path) {
    debug!("Deleting file {}", path.display());
    if let Err(e) = fs::remove_file(path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        warn!("Can't delete {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::MetadataExt;

    fn current_user() -> User {
        User::from_uid(nix::unistd::getuid())
            .expect("passwd lookup failed")
            .expect("current uid has no passwd entry")
    }

    #[test]
    fn test_write_cid_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cid.info");

        write_cid_file(&path, Vendor::Wisol).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "wisol");

        // A second run truncates, never appends
        write_cid_file(&path, Vendor::Murata).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "murata");
    }

    #[test]
    fn test_write_cid_file_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join(".cid.info");

        let err = write_cid_file(&path, Vendor::Semco).unwrap_err();
        assert!(matches!(err, ProvisionError::CidWrite { .. }));
    }

    #[test]
    fn test_set_cid_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cid.info");

        let file = write_cid_file(&path, Vendor::Semco3rd).unwrap();
        set_cid_permissions(&file, &path).unwrap();

        let mode = fs::metadata(&path).unwrap().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_set_cid_ownership_to_current_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cid.info");
        let user = current_user();

        let file = write_cid_file(&path, Vendor::SemcoSh).unwrap();
        set_cid_ownership(&file, &path, &user.name).unwrap();

        let meta = fs::metadata(&path).unwrap();
        assert_eq!(meta.uid(), user.uid.as_raw());
        assert_eq!(meta.gid(), user.gid.as_raw());
    }

    #[test]
    fn test_set_cid_ownership_unknown_account() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cid.info");

        let file = write_cid_file(&path, Vendor::Murata).unwrap();
        let err = set_cid_ownership(&file, &path, "no-such-account-xyzzy").unwrap_err();
        assert!(matches!(err, ProvisionError::UnknownAccount { .. }));
    }

    #[test]
    fn test_remove_cid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cid.info");

        // Missing file is not an error
        remove_cid_file(&path);

        write_cid_file(&path, Vendor::Wisol).unwrap();
        remove_cid_file(&path);
        assert!(!path.exists());
    }
}
