use crate::text::RichText;

/// Rich markup detection and deserialization for rich-capable hosts.
pub trait MarkupOracle: Send + Sync {
    /// True if `text` uses rich markup tags rather than legacy codes.
    fn is_rich_markup(&self, text: &str) -> bool;

    /// Detection over a whole line set; true if any line is rich.
    fn is_rich_markup_lines(&self, lines: &[String]) -> bool {
        lines.iter().any(|line| self.is_rich_markup(line))
    }

    fn deserialize(&self, text: &str) -> RichText;
}
