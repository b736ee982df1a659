//! Localized message catalog for report and notification text
//!
//! Templates may contain emphasis tokens (`{bold}`, `{italic}`,
//! `{underline}`) that the report renderer maps per delivery target, plus
//! value placeholders (`{title}`, `{installed}`, `{latest}`, `{url}`) that
//! the report builder substitutes.

use std::collections::HashMap;

use serde::Deserialize;

/// Identifiers for every user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKey {
    Checking,
    OutdatedList,
    OutdatedEntryTitle,
    OutdatedEntryBody,
    AllUpToDate,
    FailureList,
    MissingResourceId,
    ResourceUnavailable,
    DetailsUnavailable,
    NoFailures,
}

fn default_messages() -> HashMap<MessageKey, String> {
    use MessageKey::*;

    [
        (
            Checking,
            "Checking for updates... This may take a few seconds. Please be patient.",
        ),
        (OutdatedList, "{bold}The following add-ons are outdated:{bold}"),
        (OutdatedEntryTitle, "# {bold}{title}{bold}"),
        (
            OutdatedEntryBody,
            "Installed: {bold}{installed}{bold} - Latest: {bold}{latest}{bold} | {url}",
        ),
        (AllUpToDate, "{bold}All checked add-ons are up to date.{bold}"),
        (
            FailureList,
            "{bold}The following add-ons could not be checked for the following reasons:{bold}",
        ),
        (MissingResourceId, "{bold}Missing resource id:{bold}"),
        (ResourceUnavailable, "{bold}Resource unavailable:{bold}"),
        (DetailsUnavailable, "{bold}Invalid version name:{bold}"),
        (NoFailures, "{bold}All add-ons checked successfully{bold}"),
    ]
    .into_iter()
    .map(|(key, text)| (key, text.to_string()))
    .collect()
}

/// Message lookup with per-locale overrides and an English fallback
#[derive(Debug)]
pub struct MessageCatalog {
    defaults: HashMap<MessageKey, String>,
    locales: HashMap<String, HashMap<MessageKey, String>>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            defaults: default_messages(),
            locales: HashMap::new(),
        }
    }
}

impl MessageCatalog {
    /// Build a catalog from a JSON override map of locale -> key -> template.
    /// Keys absent from a locale fall back to the built-in English text.
    pub fn from_overrides(raw: &str) -> Result<Self, serde_json::Error> {
        let locales: HashMap<String, HashMap<MessageKey, String>> = serde_json::from_str(raw)?;
        Ok(Self {
            defaults: default_messages(),
            locales,
        })
    }

    pub fn get(&self, key: MessageKey, locale: Option<&str>) -> &str {
        locale
            .and_then(|locale| self.locales.get(locale))
            .and_then(|messages| messages.get(&key))
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_default_text_without_locale() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.get(MessageKey::MissingResourceId, None),
            "{bold}Missing resource id:{bold}"
        );
    }

    #[test]
    fn get_prefers_locale_override_and_falls_back_per_key() {
        let catalog = MessageCatalog::from_overrides(
            r#"{"de": {"no-failures": "{bold}Alle Add-ons erfolgreich geprüft{bold}"}}"#,
        )
        .unwrap();

        assert_eq!(
            catalog.get(MessageKey::NoFailures, Some("de")),
            "{bold}Alle Add-ons erfolgreich geprüft{bold}"
        );
        // Key not overridden in "de" falls back to English.
        assert_eq!(
            catalog.get(MessageKey::Checking, Some("de")),
            catalog.get(MessageKey::Checking, None)
        );
        // Unknown locale falls back entirely.
        assert_eq!(
            catalog.get(MessageKey::NoFailures, Some("fr")),
            "{bold}All add-ons checked successfully{bold}"
        );
    }

    #[test]
    fn every_key_has_default_text() {
        use MessageKey::*;
        let catalog = MessageCatalog::default();
        for key in [
            Checking,
            OutdatedList,
            OutdatedEntryTitle,
            OutdatedEntryBody,
            AllUpToDate,
            FailureList,
            MissingResourceId,
            ResourceUnavailable,
            DetailsUnavailable,
            NoFailures,
        ] {
            assert!(!catalog.get(key, None).is_empty(), "{key:?} has no text");
        }
    }
}
