//! Target-specific rendering of message templates
//!
//! Message templates carry emphasis tokens (`{bold}`, `{italic}`,
//! `{underline}`). Each [`RenderTarget`] maps them through its own marker
//! table; the plain target strips them entirely. Rendering is a pure
//! function of (template, target).

const TOKEN_BOLD: &str = "{bold}";
const TOKEN_ITALIC: &str = "{italic}";
const TOKEN_UNDERLINE: &str = "{underline}";

/// Delivery surfaces with distinct markup dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// No markup: direct replies, log lines, push and email bodies
    Plain,
    /// Markdown emphasis as understood by chat webhooks
    Webhook,
}

struct Emphasis {
    bold: &'static str,
    italic: &'static str,
    underline: &'static str,
}

impl RenderTarget {
    fn emphasis(self) -> Emphasis {
        match self {
            RenderTarget::Plain => Emphasis {
                bold: "",
                italic: "",
                underline: "",
            },
            RenderTarget::Webhook => Emphasis {
                bold: "**",
                italic: "_",
                underline: "__",
            },
        }
    }

    /// Replace every emphasis token in `text` with this target's markers.
    pub fn apply(self, text: &str) -> String {
        let markers = self.emphasis();
        text.replace(TOKEN_BOLD, markers.bold)
            .replace(TOKEN_ITALIC, markers.italic)
            .replace(TOKEN_UNDERLINE, markers.underline)
    }
}
