//! Classified result of checking a single item

use crate::catalog::CatalogEntry;
use crate::host::InstalledItem;

/// Exactly one outcome is produced per counted item per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A newer version exists in the catalog; carries the remote entry
    Outdated {
        item: InstalledItem,
        latest: CatalogEntry,
    },
    /// The item has no catalog identifier; no lookup was attempted
    MissingIdentifier(InstalledItem),
    /// The catalog explicitly reported the resource as unavailable
    CatalogUnavailable(InstalledItem),
    /// The catalog record carries no usable version string
    DetailsUnavailable(InstalledItem),
    /// Installed version matches or exceeds the catalog version
    UpToDate(InstalledItem),
    /// The lookup itself failed (transport error or malformed body)
    TransportError(InstalledItem),
}

impl Outcome {
    pub fn item(&self) -> &InstalledItem {
        match self {
            Outcome::Outdated { item, .. } => item,
            Outcome::MissingIdentifier(item)
            | Outcome::CatalogUnavailable(item)
            | Outcome::DetailsUnavailable(item)
            | Outcome::UpToDate(item)
            | Outcome::TransportError(item) => item,
        }
    }
}
