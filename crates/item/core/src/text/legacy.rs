//! Legacy section-sign color codes.

use super::SECTION_SIGN;

/// Characters that may follow the alternate code character.
const CODE_CHARS: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replaces `alt` followed by a valid code character with the section sign
/// and the lowercased code. Everything else is left untouched.
pub fn translate_alternate_color_codes(alt: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == alt && CODE_CHARS.contains(chars[i + 1]) {
            chars[i] = SECTION_SIGN;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Removes every section-sign code pair.
pub fn strip_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_SIGN {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
