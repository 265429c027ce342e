//! Tag vocabulary of the markup dialect.

use item_core::text::{Decorations, TextColor};

/// A recognized markup tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupTag {
    Color(TextColor),
    Decoration(Decorations, bool),
    Reset,
}

impl MarkupTag {
    /// Key used to match closing tags: every color closes every color.
    pub fn close_key(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Decoration(flag, _) => decoration_name(*flag),
            Self::Reset => "reset",
        }
    }
}

/// Resolves the inside of `<...>` (without brackets) to a tag.
pub fn resolve(body: &str) -> Option<MarkupTag> {
    let body = body.trim();
    if let Some(name) = body.strip_prefix('!') {
        let flag = decoration(name)?;
        return Some(MarkupTag::Decoration(flag, false));
    }

    let mut parts = body.split(':');
    let name = parts.next()?.to_ascii_lowercase();
    let argument = parts.next();
    if parts.next().is_some() {
        return None;
    }

    match (name.as_str(), argument) {
        ("color" | "colour" | "c", Some(value)) => TextColor::parse(value).map(MarkupTag::Color),
        ("reset", None) => Some(MarkupTag::Reset),
        (name, None) if name.starts_with('#') => TextColor::parse(name).map(MarkupTag::Color),
        (name, argument) => {
            if let Some(flag) = decoration(name) {
                let enabled = match argument {
                    None | Some("true") => true,
                    Some("false") => false,
                    Some(_) => return None,
                };
                return Some(MarkupTag::Decoration(flag, enabled));
            }
            match argument {
                None => TextColor::parse(name).map(MarkupTag::Color),
                Some(_) => None,
            }
        }
    }
}

/// Resolves the name in a closing tag (`</name>`) to its close key.
pub fn close_key(name: &str) -> Option<&'static str> {
    let name = name.trim().to_ascii_lowercase();
    let name = name.split(':').next().unwrap_or_default();
    if matches!(name, "color" | "colour" | "c") {
        return Some("color");
    }
    if let Some(flag) = decoration(name) {
        return Some(decoration_name(flag));
    }
    resolve(name).map(|tag| tag.close_key())
}

fn decoration(name: &str) -> Option<Decorations> {
    match name.to_ascii_lowercase().as_str() {
        "bold" | "b" => Some(Decorations::BOLD),
        "italic" | "i" | "em" => Some(Decorations::ITALIC),
        "underlined" | "u" => Some(Decorations::UNDERLINED),
        "strikethrough" | "st" => Some(Decorations::STRIKETHROUGH),
        "obfuscated" | "obf" => Some(Decorations::OBFUSCATED),
        _ => None,
    }
}

fn decoration_name(flag: Decorations) -> &'static str {
    Decorations::NAMED
        .iter()
        .find(|(candidate, _)| *candidate == flag)
        .map_or("decoration", |(_, name)| name)
}
