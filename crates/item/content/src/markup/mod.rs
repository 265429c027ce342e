//! Tag-based rich markup dialect.
//!
//! Supported tags:
//! - Colors: `<red>`, `<dark_gray>`, `<#ff8800>`, `<color:gold>`
//! - Decorations: `<bold>`/`<b>`, `<italic>`/`<i>`/`<em>`, `<underlined>`/`<u>`,
//!   `<strikethrough>`/`<st>`, `<obfuscated>`/`<obf>`, negated with `<!italic>`
//!   or `<italic:false>`
//! - `<reset>` and closing tags (`</red>`, `</b>`)
//!
//! Unknown tags are kept as literal text and `\<` escapes a bracket.

mod tags;

pub use tags::MarkupTag;

use item_core::text::{RichText, Style};
use item_core::MarkupOracle;

/// Markup dialect used by rich-capable hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct MiniMarkup;

impl MiniMarkup {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupOracle for MiniMarkup {
    fn is_rich_markup(&self, text: &str) -> bool {
        tokenize(text).iter().any(|token| !matches!(token, Token::Text(_)))
    }

    fn deserialize(&self, text: &str) -> RichText {
        let mut root = RichText::empty();
        let mut stack: Vec<(&'static str, Style)> = Vec::new();
        let mut run = String::new();

        for token in tokenize(text) {
            let current = stack.last().map_or(Style::EMPTY, |(_, style)| *style);
            let next = match token {
                Token::Text(text) => {
                    run.push_str(&text);
                    continue;
                }
                Token::Open(tag) => {
                    let mut style = current;
                    match tag {
                        MarkupTag::Color(color) => style.color = Some(color),
                        MarkupTag::Decoration(flag, true) => style.enable(flag),
                        MarkupTag::Decoration(flag, false) => style.disable(flag),
                        MarkupTag::Reset => {}
                    }
                    (tag != MarkupTag::Reset).then_some((tag.close_key(), style))
                }
                Token::Close(key) => {
                    if !stack.iter().any(|(open, _)| *open == key) {
                        continue;
                    }
                    flush(&mut root, &mut run, current);
                    while let Some((open, _)) = stack.pop() {
                        if open == key {
                            break;
                        }
                    }
                    continue;
                }
            };

            flush(&mut root, &mut run, current);
            match next {
                Some(entry) => stack.push(entry),
                None => stack.clear(),
            }
        }

        let current = stack.last().map_or(Style::EMPTY, |(_, style)| *style);
        flush(&mut root, &mut run, current);
        root
    }
}

fn flush(root: &mut RichText, run: &mut String, style: Style) {
    if !run.is_empty() {
        root.children.push(RichText::styled(std::mem::take(run), style));
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Text(String),
    Open(MarkupTag),
    Close(&'static str),
}

/// Splits markup into literal text and recognized tags.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(index) = rest.find(['<', '\\']) {
        literal.push_str(&rest[..index]);
        rest = &rest[index..];

        if let Some(escaped) = rest.strip_prefix("\\<") {
            literal.push('<');
            rest = escaped;
            continue;
        }
        if rest.starts_with('\\') {
            literal.push('\\');
            rest = &rest[1..];
            continue;
        }

        let Some(end) = rest.find('>') else {
            break;
        };
        let body = &rest[1..end];
        let token = match body.strip_prefix('/') {
            Some(name) => tags::close_key(name).map(Token::Close),
            None => tags::resolve(body).map(Token::Open),
        };
        match token {
            Some(token) => {
                if !literal.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut literal)));
                }
                tokens.push(token);
                rest = &rest[end + 1..];
            }
            None => {
                literal.push('<');
                rest = &rest[1..];
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(Token::Text(literal));
    }
    tokens
}
