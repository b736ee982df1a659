//! Report payload types

use crate::report::render::RenderTarget;

/// Embed colors matching the original notification scheme
const COLOR_POSITIVE: u32 = 3_329_330;
const COLOR_NEGATIVE: u32 = 13_447_730;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Positive,
    Negative,
}

impl Severity {
    /// Accent color used by rich channels (webhook embeds)
    pub fn embed_color(self) -> u32 {
        match self {
            Severity::Positive => COLOR_POSITIVE,
            Severity::Negative => COLOR_NEGATIVE,
        }
    }
}

/// One (heading, body) pair within a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub heading: String,
    pub body: String,
}

/// A complete report, built once per run and immutable afterwards.
/// Texts still carry emphasis tokens; rendering resolves them per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub title: String,
    pub entries: Vec<ReportEntry>,
    pub severity: Severity,
}

impl ReportPayload {
    pub fn new(title: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            severity,
        }
    }

    pub fn render_title(&self, target: RenderTarget) -> String {
        target.apply(&self.title)
    }

    /// Pre-rendered (heading, body) pairs for a channel
    pub fn render_entries(&self, target: RenderTarget) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (target.apply(&entry.heading), target.apply(&entry.body)))
            .collect()
    }

    /// Markup-free single-string form: title line plus one line per entry.
    /// Used for direct replies and the operational log.
    pub fn render_plain(&self) -> String {
        let mut text = format!("{}\n", self.render_title(RenderTarget::Plain));
        for (heading, body) in self.render_entries(RenderTarget::Plain) {
            text.push_str(&format!("{heading} {body}\n"));
        }
        text
    }
}
