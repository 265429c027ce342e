//! Stringified NBT parser.
//!
//! Parses the textual tag syntax used by item payloads:
//! - compounds `{key:value,...}` and lists `[a,b]`
//! - typed arrays `[B;1b,2b]`, `[I;1,2]`, `[L;1L]`
//! - quoted strings (`'...'` or `"..."`, backslash escapes) and bare strings
//! - numbers with `b s l f d` suffixes, `true`/`false` as bytes
//!
//! Component patches (`[minecraft:damage=3,!minecraft:food]`) reuse the same
//! value grammar through [`parse_components`].

use std::collections::BTreeMap;

use item_core::Tag;

/// Parse failure with the character offset it occurred at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct SnbtError {
    pub position: usize,
    pub message: String,
}

/// One entry of a component patch.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentPatch {
    Set(String, Tag),
    Remove(String),
}

/// Parses a complete SNBT value. Trailing input is an error.
pub fn parse(input: &str) -> Result<Tag, SnbtError> {
    let mut parser = Parser::new(input);
    let tag = parser.value()?;
    parser.finish()?;
    Ok(tag)
}

/// Parses a component patch list `[key=value,!key,...]`.
pub fn parse_components(input: &str) -> Result<Vec<ComponentPatch>, SnbtError> {
    let mut parser = Parser::new(input);
    parser.expect('[')?;
    let mut patches = Vec::new();
    parser.skip_ws();
    if parser.eat(']') {
        parser.finish()?;
        return Ok(patches);
    }
    loop {
        parser.skip_ws();
        if parser.eat('!') {
            patches.push(ComponentPatch::Remove(parser.component_key()?));
        } else {
            let key = parser.component_key()?;
            parser.skip_ws();
            parser.expect('=')?;
            parser.skip_ws();
            patches.push(ComponentPatch::Set(key, parser.value()?));
        }
        parser.skip_ws();
        if parser.eat(']') {
            break;
        }
        parser.expect(',')?;
    }
    parser.finish()?;
    Ok(patches)
}

/// Nesting limit for compounds and lists, matching the engine's own reader.
pub const MAX_DEPTH: usize = 512;

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> SnbtError {
        SnbtError {
            position: self.pos,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SnbtError> {
        if self.eat(expected) {
            Ok(())
        } else {
            match self.peek() {
                Some(found) => Err(self.error(format!("expected '{expected}', found '{found}'"))),
                None => Err(self.error(format!("expected '{expected}', found end of input"))),
            }
        }
    }

    fn finish(&mut self) -> Result<(), SnbtError> {
        self.skip_ws();
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!("trailing input starting with '{c}'"))),
        }
    }

    fn value(&mut self) -> Result<Tag, SnbtError> {
        self.skip_ws();
        match self.peek() {
            Some(open @ ('{' | '[')) => {
                if self.depth >= MAX_DEPTH {
                    return Err(self.error(format!("nesting deeper than {MAX_DEPTH} levels")));
                }
                self.depth += 1;
                let tag = if open == '{' { self.compound() } else { self.list() };
                self.depth -= 1;
                tag
            }
            Some(quote @ ('"' | '\'')) => Ok(Tag::String(self.quoted(quote)?)),
            Some(_) => {
                let token = self.bare()?;
                Ok(classify(&token))
            }
            None => Err(self.error("expected value, found end of input")),
        }
    }

    fn compound(&mut self) -> Result<Tag, SnbtError> {
        self.expect('{')?;
        let mut map = BTreeMap::new();
        self.skip_ws();
        if self.eat('}') {
            return Ok(Tag::Compound(map));
        }
        loop {
            self.skip_ws();
            let key = match self.peek() {
                Some(quote @ ('"' | '\'')) => self.quoted(quote)?,
                _ => self.bare()?,
            };
            self.skip_ws();
            self.expect(':')?;
            let value = self.value()?;
            map.insert(key, value);
            self.skip_ws();
            if self.eat('}') {
                return Ok(Tag::Compound(map));
            }
            self.expect(',')?;
        }
    }

    fn list(&mut self) -> Result<Tag, SnbtError> {
        self.expect('[')?;
        self.skip_ws();
        if let (Some(kind @ ('B' | 'I' | 'L')), Some(';')) =
            (self.peek(), self.chars.get(self.pos + 1).copied())
        {
            self.pos += 2;
            return self.typed_array(kind);
        }

        let mut items = Vec::new();
        if self.eat(']') {
            return Ok(Tag::List(items));
        }
        loop {
            let item = self.value()?;
            let mixed = items
                .first()
                .is_some_and(|first| core::mem::discriminant(first) != core::mem::discriminant(&item));
            if mixed {
                return Err(self.error("list elements must share one type"));
            }
            items.push(item);
            self.skip_ws();
            if self.eat(']') {
                return Ok(Tag::List(items));
            }
            self.expect(',')?;
        }
    }

    fn typed_array(&mut self, kind: char) -> Result<Tag, SnbtError> {
        let mut values = Vec::new();
        self.skip_ws();
        if !self.eat(']') {
            loop {
                let start = self.pos;
                let value = self.value()?.as_i64().ok_or_else(|| SnbtError {
                    position: start,
                    message: "typed array elements must be integers".into(),
                })?;
                values.push((start, value));
                self.skip_ws();
                if self.eat(']') {
                    break;
                }
                self.expect(',')?;
            }
        }

        let narrow = |position: usize| SnbtError {
            position,
            message: format!("value out of range for [{kind};] array"),
        };
        Ok(match kind {
            'B' => Tag::ByteArray(
                values
                    .into_iter()
                    .map(|(pos, v)| i8::try_from(v).map_err(|_| narrow(pos)))
                    .collect::<Result<_, _>>()?,
            ),
            'I' => Tag::IntArray(
                values
                    .into_iter()
                    .map(|(pos, v)| i32::try_from(v).map_err(|_| narrow(pos)))
                    .collect::<Result<_, _>>()?,
            ),
            _ => Tag::LongArray(values.into_iter().map(|(_, v)| v).collect()),
        })
    }

    fn quoted(&mut self, quote: char) -> Result<String, SnbtError> {
        let start = self.pos;
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(SnbtError {
                        position: start,
                        message: "unterminated string".into(),
                    });
                }
                Some('\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(c @ ('\\' | '"' | '\'')) => out.push(c),
                        Some('n') => out.push('\n'),
                        Some('t') => out.push('\t'),
                        Some(c) => return Err(self.error(format!("invalid escape '\\{c}'"))),
                        None => return Err(self.error("unterminated escape")),
                    }
                    self.pos += 1;
                }
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn bare(&mut self) -> Result<String, SnbtError> {
        let start = self.pos;
        while self.peek().is_some_and(is_bare_char) {
            self.pos += 1;
        }
        if start == self.pos {
            return match self.peek() {
                Some(c) => Err(self.error(format!("unexpected '{c}'"))),
                None => Err(self.error("unexpected end of input")),
            };
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// Component ids may carry a namespace (`minecraft:damage`).
    fn component_key(&mut self) -> Result<String, SnbtError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| is_bare_char(c) || c == ':' || c == '/')
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("expected component id"));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }
}

fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Turns a bare token into a typed number, a boolean byte or a string.
fn classify(token: &str) -> Tag {
    match token {
        "true" => return Tag::Byte(1),
        "false" => return Tag::Byte(0),
        _ => {}
    }

    let (body, suffix) = match token.char_indices().last() {
        Some((index, c)) if c.is_ascii_alphabetic() => (&token[..index], Some(c.to_ascii_lowercase())),
        _ => (token, None),
    };
    let numeric = !body.is_empty()
        && body
            .trim_start_matches(['-', '+'])
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '.');

    if numeric {
        let parsed = match suffix {
            Some('b') => body.parse().ok().map(Tag::Byte),
            Some('s') => body.parse().ok().map(Tag::Short),
            Some('l') => body.parse().ok().map(Tag::Long),
            Some('f') => body.parse().ok().map(Tag::Float),
            Some('d') => body.parse().ok().map(Tag::Double),
            None => body
                .parse()
                .ok()
                .map(Tag::Int)
                .or_else(|| body.parse().ok().map(Tag::Double)),
            Some(_) => None,
        };
        if let Some(tag) = parsed {
            return tag;
        }
    }
    Tag::String(token.to_string())
}
