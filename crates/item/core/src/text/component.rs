//! Rich text components and the display-text union.

use serde_json::{Map, Value};

use super::legacy;
use super::style::{Decorations, Style, TextColor};

/// Errors raised while reading a JSON chat component.
#[derive(Debug, thiserror::Error)]
pub enum TextParseError {
    #[error("invalid component JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported component shape: {0}")]
    Shape(&'static str),

    #[error("unknown color '{0}'")]
    Color(String),
}

/// Engine rich text: a styled run of text with styled children.
///
/// Children inherit any style field they leave unset when the engine renders
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichText {
    pub content: String,
    pub style: Style,
    pub children: Vec<RichText>,
}

impl RichText {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: RichText) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenated text without any styling.
    pub fn plain_text(&self) -> String {
        let mut out = self.content.clone();
        for child in &self.children {
            out.push_str(&child.plain_text());
        }
        out
    }

    /// Serializes to the JSON chat component format.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("text".into(), Value::String(self.content.clone()));
        if let Some(color) = self.style.color {
            object.insert("color".into(), Value::String(color.to_component_value()));
        }
        for (flag, field) in Decorations::NAMED {
            if self.style.decorations.contains(flag) {
                object.insert(field.into(), Value::Bool(true));
            } else if self.style.disabled.contains(flag) {
                object.insert(field.into(), Value::Bool(false));
            }
        }
        if !self.children.is_empty() {
            let extra = self.children.iter().map(RichText::to_json).collect();
            object.insert("extra".into(), Value::Array(extra));
        }
        Value::Object(object)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Reads a JSON chat component: a string, an array (first element is the
    /// parent of the rest) or an object.
    pub fn from_json(value: &Value) -> Result<Self, TextParseError> {
        match value {
            Value::String(text) => Ok(Self::text(text.clone())),
            Value::Number(number) => Ok(Self::text(number.to_string())),
            Value::Bool(flag) => Ok(Self::text(flag.to_string())),
            Value::Array(items) => {
                let (first, rest) = items
                    .split_first()
                    .ok_or(TextParseError::Shape("empty component array"))?;
                let mut root = Self::from_json(first)?;
                for item in rest {
                    root.children.push(Self::from_json(item)?);
                }
                Ok(root)
            }
            Value::Object(object) => Self::from_json_object(object),
            Value::Null => Err(TextParseError::Shape("null component")),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, TextParseError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    fn from_json_object(object: &Map<String, Value>) -> Result<Self, TextParseError> {
        let mut component = Self::text(
            object
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        );
        if let Some(color) = object.get("color").and_then(Value::as_str) {
            let parsed = TextColor::parse(color).ok_or_else(|| TextParseError::Color(color.into()))?;
            component.style.color = Some(parsed);
        }
        for (flag, field) in Decorations::NAMED {
            match object.get(field).and_then(Value::as_bool) {
                Some(true) => component.style.enable(flag),
                Some(false) => component.style.disable(flag),
                None => {}
            }
        }
        if let Some(extra) = object.get("extra") {
            let Value::Array(items) = extra else {
                return Err(TextParseError::Shape("'extra' must be an array"));
            };
            for item in items {
                component.children.push(Self::from_json(item)?);
            }
        }
        Ok(component)
    }
}

/// Text as stored on an item: either a legacy section-sign string or a rich
/// component, depending on which dialect produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayText {
    Legacy(String),
    Rich(RichText),
}

impl DisplayText {
    pub fn plain_text(&self) -> String {
        match self {
            Self::Legacy(text) => legacy::strip_codes(text),
            Self::Rich(text) => text.plain_text(),
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::NamedColor;

    #[test]
    fn json_object_with_extra() {
        let text = RichText::from_json_str(
            r#"{"text":"Hi ","color":"gold","bold":true,"extra":[{"text":"there","italic":false}]}"#,
        )
        .unwrap();
        assert_eq!(text.plain_text(), "Hi there");
        assert_eq!(text.style.color, Some(TextColor::Named(NamedColor::Gold)));
        assert!(text.style.decorations.contains(Decorations::BOLD));
        assert!(text.children[0].style.disabled.contains(Decorations::ITALIC));
    }

    #[test]
    fn json_round_trips_structure() {
        let text = RichText::styled("Blade", Style::colored(NamedColor::Aqua))
            .with_child(RichText::text(" of dawn"));
        let parsed = RichText::from_json(&text.to_json()).unwrap();
        assert_eq!(parsed, text);
    }

    #[test]
    fn json_rejects_bad_color_and_null() {
        assert!(matches!(
            RichText::from_json_str(r#"{"text":"x","color":"mauve"}"#),
            Err(TextParseError::Color(_))
        ));
        assert!(RichText::from_json_str("null").is_err());
        assert!(RichText::from_json_str("[]").is_err());
    }

    #[test]
    fn plain_text_flattens_children() {
        let text = RichText::styled("", Style::colored(NamedColor::Red))
            .with_child(RichText::text("Hot"));
        assert_eq!(DisplayText::Rich(text).plain_text(), "Hot");
    }

    #[test]
    fn legacy_display_text_strips_codes() {
        let text = DisplayText::Legacy("§c§lHello".into());
        assert_eq!(text.plain_text(), "Hello");
        assert!(!text.is_rich());
    }
}
