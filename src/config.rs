//! Fixed system paths and provisioning constants. These match the boot
//! environment the tool runs in; nothing here is read from arguments or
//! the environment.

/// File whose first line holds the device MAC address half.
pub const MACADDR_PATH: &str = "/efs/wifi/.mac.info";

/// Persisted CID file consumed by later boot stages.
pub const CID_PATH: &str = "/data/.cid.info";

/// Write-only driver parameter accepting an NVRAM calibration file path.
pub const WIFI_DRIVER_NVRAM_PATH_PARAM: &str = "/sys/module/dhd/parameters/nvram_path";

/// Base NVRAM calibration file. Empty means no calibration switch is
/// requested after the CID file is written.
pub const WIFI_DRIVER_NVRAM_PATH: &str = "/system/etc/wifi/nvram_net.txt";

/// Account that owns the CID file.
pub const CID_OWNER: &str = "system";

/// MAC address halves are `xx:yy:zz`, 8 ASCII characters.
pub const MAX_PREFIX_LEN: usize = 8;
