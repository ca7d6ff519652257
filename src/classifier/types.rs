/// WiFi module vendor resolved from a MAC address half.
/// The no-match case is `Option::None` at the call site, not a variant,
/// so every mapping over `Vendor` stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Murata,
    SemcoSh,
    Semco3rd,
    Semco,
    Wisol,
}

impl Vendor {
    /// Canonical lowercase name, written verbatim into the CID file and
    /// used as the NVRAM calibration file suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Murata => "murata",
            Vendor::SemcoSh => "semcosh",
            Vendor::Semco3rd => "semco3rd",
            Vendor::Semco => "semco",
            Vendor::Wisol => "wisol",
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
