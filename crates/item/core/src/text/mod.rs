//! Text model for display names and lore.
//!
//! Hosts render item text in one of two dialects:
//! - **Legacy**: strings carrying section-sign color codes (`§c`), usually
//!   written in configuration with the `&` alternate character
//! - **Rich**: structured components produced from a tag-based markup
//!
//! [`DisplayText`] holds the result of either dialect.

mod component;
mod legacy;
mod style;

pub use component::{DisplayText, RichText, TextParseError};
pub use legacy::{strip_codes, translate_alternate_color_codes};
pub use style::{Decorations, NamedColor, Style, TextColor};

/// The engine's native color-code character.
pub const SECTION_SIGN: char = '\u{00A7}';

/// Alternate color-code character used in configuration files.
pub const ALT_COLOR_CHAR: char = '&';
