//! Colors and decorations for rich text.

use bitflags::bitflags;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The sixteen colors addressable by legacy color codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// Lowercase name used by chat components and markup tags.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            // Accepted spellings besides the canonical names.
            "grey" => Some(Self::Gray),
            "dark_grey" => Some(Self::DarkGray),
            _ => name.parse().ok(),
        }
    }
}

/// Text color: a named legacy color or an arbitrary RGB value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextColor {
    Named(NamedColor),
    Hex(u32),
}

impl TextColor {
    /// Parses `red`, `dark_gray` or `#rrggbb`.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            return u32::from_str_radix(hex, 16).ok().map(Self::Hex);
        }
        NamedColor::from_name(&value.to_ascii_lowercase()).map(Self::Named)
    }

    /// Component representation (`red` or `#RRGGBB`).
    pub fn to_component_value(self) -> String {
        match self {
            Self::Named(color) => color.name().to_string(),
            Self::Hex(rgb) => format!("#{rgb:06X}"),
        }
    }
}

impl From<NamedColor> for TextColor {
    fn from(value: NamedColor) -> Self {
        Self::Named(value)
    }
}

bitflags! {
    /// Text decorations.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

impl Decorations {
    /// Decorations paired with their component field names.
    pub const NAMED: [(Decorations, &'static str); 5] = [
        (Decorations::OBFUSCATED, "obfuscated"),
        (Decorations::BOLD, "bold"),
        (Decorations::STRIKETHROUGH, "strikethrough"),
        (Decorations::UNDERLINED, "underlined"),
        (Decorations::ITALIC, "italic"),
    ];
}

/// Style applied to a run of text.
///
/// `disabled` records decorations explicitly turned off, which is distinct
/// from leaving them unset (the client renders item names italic by default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Option<TextColor>,
    pub decorations: Decorations,
    pub disabled: Decorations,
}

impl Style {
    pub const EMPTY: Self = Self {
        color: None,
        decorations: Decorations::empty(),
        disabled: Decorations::empty(),
    };

    pub fn colored(color: impl Into<TextColor>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::EMPTY
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Turns a decoration on, clearing any explicit negation.
    pub fn enable(&mut self, decoration: Decorations) {
        self.decorations.insert(decoration);
        self.disabled.remove(decoration);
    }

    /// Turns a decoration explicitly off.
    pub fn disable(&mut self, decoration: Decorations) {
        self.decorations.remove(decoration);
        self.disabled.insert(decoration);
    }
}
