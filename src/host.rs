//! Installed add-on enumeration
//!
//! The check engine only ever reads the installed set; ownership stays with
//! the host environment. The binary uses a JSON manifest file as its host,
//! but anything implementing [`ItemSource`] works.

use std::path::Path;

use semver::Version;
use serde::Deserialize;
use thiserror::Error;

/// One installed add-on as exposed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledItem {
    /// Machine name, used in failure listings
    pub name: String,
    /// Display title, used in outdated listings
    pub title: String,
    /// Installed version (major.minor.patch)
    pub version: Version,
    /// Remote catalog identifier; 0 means the item is not tracked remotely
    pub resource_id: u32,
    /// Core items are skipped entirely by update checks
    pub core: bool,
}

impl InstalledItem {
    /// Eligible items are non-core and tracked in the remote catalog.
    pub fn is_eligible(&self) -> bool {
        !self.core && self.resource_id != 0
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid version {version:?} for item {name}: {source}")]
    InvalidVersion {
        name: String,
        version: String,
        source: semver::Error,
    },
}

/// Read-only listing of installed items
pub trait ItemSource {
    fn installed_items(&self) -> Result<Vec<InstalledItem>, HostError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestItem {
    name: String,
    #[serde(default)]
    title: Option<String>,
    version: String,
    #[serde(default)]
    resource_id: u32,
    #[serde(default)]
    core: bool,
}

/// Item source backed by a JSON manifest file
///
/// The manifest is a JSON array of
/// `{"name", "title", "version", "resourceId", "core"}` objects; `title`
/// defaults to `name`, `resourceId` to 0 and `core` to false.
pub struct ManifestSource {
    path: std::path::PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ItemSource for ManifestSource {
    fn installed_items(&self) -> Result<Vec<InstalledItem>, HostError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let entries: Vec<ManifestItem> = serde_json::from_str(&raw)?;

        entries
            .into_iter()
            .map(|entry| {
                let version = Version::parse(&entry.version).map_err(|source| {
                    HostError::InvalidVersion {
                        name: entry.name.clone(),
                        version: entry.version.clone(),
                        source,
                    }
                })?;
                Ok(InstalledItem {
                    title: entry.title.unwrap_or_else(|| entry.name.clone()),
                    name: entry.name,
                    version,
                    resource_id: entry.resource_id,
                    core: entry.core,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_manifest(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn manifest_source_loads_items_with_defaults() {
        let file = write_manifest(
            r#"[
                {"name": "stats", "title": "Server Stats", "version": "1.2.0", "resourceId": 42},
                {"name": "core-admin", "version": "3.0.0", "core": true},
                {"name": "local-only", "version": "0.9.0"}
            ]"#,
        );

        let items = ManifestSource::new(file.path()).installed_items().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Server Stats");
        assert_eq!(items[0].version, Version::new(1, 2, 0));
        assert!(items[0].is_eligible());
        assert!(items[1].core);
        assert!(!items[1].is_eligible());
        assert_eq!(items[2].title, "local-only");
        assert_eq!(items[2].resource_id, 0);
        assert!(!items[2].is_eligible());
    }

    #[test]
    fn manifest_source_rejects_invalid_version() {
        let file = write_manifest(r#"[{"name": "broken", "version": "not-a-version"}]"#);

        let result = ManifestSource::new(file.path()).installed_items();

        assert!(matches!(
            result,
            Err(HostError::InvalidVersion { ref name, .. }) if name == "broken"
        ));
    }

    #[test]
    fn manifest_source_reports_missing_file() {
        let result = ManifestSource::new("/nonexistent/items.json").installed_items();
        assert!(matches!(result, Err(HostError::Io(_))));
    }
}
