//! WiFi module vendor classification by MAC address half. Looks up the
//! device's MAC prefix in the static vendor range tables.

mod ranges;
mod types;

pub use types::Vendor;

use ranges::VENDOR_RANGES;
use tracing::trace;

/// Classify a MAC address half against the compiled-in vendor ranges.
/// Comparison is ASCII case-insensitive. Returns `None` when no vendor
/// range contains the prefix.
pub fn classify(prefix: &str) -> Option<Vendor> {
    let vendor = classify_in(prefix, VENDOR_RANGES);
    if let Some(v) = vendor {
        trace!("Found CID type: {}", v);
    }
    vendor
}

/// Table-driven matcher. First match by (vendor order, prefix order) wins,
/// so a prefix duplicated across vendors resolves to the vendor declared
/// first, deterministically.
pub(crate) fn classify_in(prefix: &str, ranges: &[(Vendor, &[&str])]) -> Option<Vendor> {
    for (vendor, prefixes) in ranges {
        if prefixes.iter().any(|p| p.eq_ignore_ascii_case(prefix)) {
            return Some(*vendor);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(classify("88:30:8a"), Some(Vendor::Murata));
        assert_eq!(classify("5c:0a:5b"), Some(Vendor::SemcoSh));
        assert_eq!(classify("f4:09:d8"), Some(Vendor::Semco3rd));
        assert_eq!(classify("c8:14:79"), Some(Vendor::Semco));
        assert_eq!(classify("48:5a:3f"), Some(Vendor::Wisol));
    }

    #[test]
    fn test_classify_unknown_prefix() {
        assert_eq!(classify("de:ad:00"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("88:30"), None); // partial prefix, no match
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("88:30:8A"), Some(Vendor::Murata));
        assert_eq!(classify("48:5A:3F"), Some(Vendor::Wisol));
        assert_eq!(classify("48:5A:3f"), classify("48:5a:3f"));
    }

    #[test]
    fn test_duplicate_prefix_resolves_to_first_vendor() {
        // A malformed table listing the same prefix under two vendors must
        // resolve to the vendor declared first, every run.
        let table: &[(Vendor, &[&str])] = &[
            (Vendor::Murata, &["aa:bb:cc"]),
            (Vendor::Wisol, &["aa:bb:cc", "11:22:33"]),
        ];
        assert_eq!(classify_in("aa:bb:cc", table), Some(Vendor::Murata));
        assert_eq!(classify_in("11:22:33", table), Some(Vendor::Wisol));
    }

    #[test]
    fn test_vendor_lowercase_names() {
        assert_eq!(Vendor::Murata.as_str(), "murata");
        assert_eq!(Vendor::SemcoSh.as_str(), "semcosh");
        assert_eq!(Vendor::Semco3rd.as_str(), "semco3rd");
        assert_eq!(Vendor::Semco.as_str(), "semco");
        assert_eq!(Vendor::Wisol.to_string(), "wisol");
    }
}
