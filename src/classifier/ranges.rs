//! Vendor MAC address ranges. Maps each WiFi module vendor to the MAC
//! address halves its modules ship with, in `xx:yy:zz` lowercase form.
//! Declaration order is the classification tie-break and must be preserved.

use super::types::Vendor;

pub(crate) const MURATA_RANGES: &[&str] = &[
    "00:37:6d",
    "10:a5:d0",
    "20:02:af",
    "40:f3:08",
    "5c:f6:dc",
    "60:21:c0",
    "78:4b:87",
    "88:30:8a",
    "98:f1:70",
    "a0:cc:2b",
    "f0:27:65",
    "fc:c7:34",
];

pub(crate) const SEMCOSH_RANGES: &[&str] = &[
    "34:23:ba",
    "38:aa:3c",
    "5c:0a:5b",
    "c0:bd:d1",
    "d0:22:be",
];

pub(crate) const SEMCO3RD_RANGES: &[&str] = &[
    "88:32:9b",
    "8c:f5:a3",
    "cc:3a:61",
    "ec:9b:f3",
    "f4:09:d8",
];

pub(crate) const SEMCO_RANGES: &[&str] = &[
    "18:67:b0",
    "50:b7:c3",
    "c8:14:79",
];

pub(crate) const WISOL_RANGES: &[&str] = &[
    "48:5a:3f",
    "88:ad:d2",
];

/// All vendor ranges in classification order.
pub(crate) const VENDOR_RANGES: &[(Vendor, &[&str])] = &[
    (Vendor::Murata, MURATA_RANGES),
    (Vendor::SemcoSh, SEMCOSH_RANGES),
    (Vendor::Semco3rd, SEMCO3RD_RANGES),
    (Vendor::Semco, SEMCO_RANGES),
    (Vendor::Wisol, WISOL_RANGES),
];
