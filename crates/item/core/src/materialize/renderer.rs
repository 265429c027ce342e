//! Text dialect selection.

use crate::config::HostProfile;
use crate::env::MarkupOracle;
use crate::text::{ALT_COLOR_CHAR, DisplayText, translate_alternate_color_codes};

/// Text rendering capability, chosen once for the host at startup.
///
/// Legacy hosts translate `&` codes. Rich-capable hosts deserialize text that
/// uses markup tags and fall back to `&` codes for text that does not.
#[derive(Clone, Copy)]
pub enum TextRenderer<'a> {
    Legacy,
    Rich(&'a dyn MarkupOracle),
}

impl<'a> TextRenderer<'a> {
    /// Picks the renderer matching the host's rich-text capability.
    pub fn for_host(profile: &HostProfile, markup: &'a dyn MarkupOracle) -> Self {
        if profile.rich_text {
            Self::Rich(markup)
        } else {
            Self::Legacy
        }
    }

    pub fn render(&self, text: &str) -> DisplayText {
        match self {
            Self::Rich(markup) if markup.is_rich_markup(text) => {
                DisplayText::Rich(markup.deserialize(text))
            }
            _ => legacy(text),
        }
    }

    /// Renders lore. The dialect is decided once for the whole line set, so a
    /// single tagged line makes every line go through the markup parser.
    pub fn render_lines(&self, lines: &[String]) -> Vec<DisplayText> {
        match self {
            Self::Rich(markup) if markup.is_rich_markup_lines(lines) => lines
                .iter()
                .map(|line| DisplayText::Rich(markup.deserialize(line)))
                .collect(),
            _ => lines.iter().map(|line| legacy(line)).collect(),
        }
    }
}

fn legacy(text: &str) -> DisplayText {
    DisplayText::Legacy(translate_alternate_color_codes(ALT_COLOR_CHAR, text))
}

impl core::fmt::Debug for TextRenderer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Legacy => f.write_str("Legacy"),
            Self::Rich(_) => f.write_str("Rich"),
        }
    }
}
