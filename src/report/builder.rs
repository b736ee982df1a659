//! Builds the two per-run reports from a collated outcome set

use crate::check::Outcome;
use crate::messages::{MessageCatalog, MessageKey};
use crate::report::payload::{ReportEntry, ReportPayload, Severity};

/// Join names in natural language: "A", "A and B", "A, B, and C".
fn to_sentence(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Turns outcome sets into report payloads using localized templates
pub struct ReportBuilder<'a> {
    messages: &'a MessageCatalog,
    locale: Option<&'a str>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(messages: &'a MessageCatalog, locale: Option<&'a str>) -> Self {
        Self { messages, locale }
    }

    fn msg(&self, key: MessageKey) -> &str {
        self.messages.get(key, self.locale)
    }

    /// Build both reports for one finished run.
    pub fn build(&self, outcomes: &[Outcome]) -> (ReportPayload, ReportPayload) {
        (
            self.outdated_report(outcomes),
            self.failures_report(outcomes),
        )
    }

    /// One entry per outdated item; collapses to a positive "all up to
    /// date" payload when nothing is outdated.
    pub fn outdated_report(&self, outcomes: &[Outcome]) -> ReportPayload {
        let entries: Vec<ReportEntry> = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                Outcome::Outdated { item, latest } => Some(ReportEntry {
                    heading: self
                        .msg(MessageKey::OutdatedEntryTitle)
                        .replace("{title}", &item.title),
                    body: self
                        .msg(MessageKey::OutdatedEntryBody)
                        .replace("{installed}", &item.version.to_string())
                        .replace("{latest}", &latest.version)
                        .replace("{url}", &latest.url),
                }),
                _ => None,
            })
            .collect();

        if entries.is_empty() {
            return ReportPayload::new(self.msg(MessageKey::AllUpToDate), Severity::Positive);
        }

        let mut payload = ReportPayload::new(self.msg(MessageKey::OutdatedList), Severity::Negative);
        payload.entries = entries;
        payload
    }

    /// One entry per non-empty failure bucket; collapses to a positive
    /// "no failures" payload when every bucket is empty. Transport errors
    /// are reported in the unavailable bucket.
    pub fn failures_report(&self, outcomes: &[Outcome]) -> ReportPayload {
        let mut missing_id = Vec::new();
        let mut unavailable = Vec::new();
        let mut no_details = Vec::new();

        for outcome in outcomes {
            match outcome {
                Outcome::MissingIdentifier(item) => missing_id.push(item.name.as_str()),
                Outcome::CatalogUnavailable(item) | Outcome::TransportError(item) => {
                    unavailable.push(item.name.as_str())
                }
                Outcome::DetailsUnavailable(item) => no_details.push(item.name.as_str()),
                Outcome::Outdated { .. } | Outcome::UpToDate(_) => {}
            }
        }

        let buckets = [
            (MessageKey::MissingResourceId, missing_id),
            (MessageKey::ResourceUnavailable, unavailable),
            (MessageKey::DetailsUnavailable, no_details),
        ];

        let entries: Vec<ReportEntry> = buckets
            .into_iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(key, names)| ReportEntry {
                heading: self.msg(key).to_string(),
                body: to_sentence(&names),
            })
            .collect();

        if entries.is_empty() {
            return ReportPayload::new(self.msg(MessageKey::NoFailures), Severity::Positive);
        }

        let mut payload = ReportPayload::new(self.msg(MessageKey::FailureList), Severity::Negative);
        payload.entries = entries;
        payload
    }
}
