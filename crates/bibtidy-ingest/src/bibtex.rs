//! BibTeX parsing.
//!
//! Accepts standard and nonstandard entry types, lowercases field names,
//! resolves `@string` macros and the built-in month macros, and collects
//! text outside entries (plus `@comment` bodies) as comment blocks. Duplicate
//! citation keys are fatal.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use bibtidy_model::{BibError, Record, RecordStore, Result};

/// Built-in month macros, the common strings every BibTeX style defines.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Parse a BibTeX file into a record store.
pub fn parse_file(path: &Path) -> Result<RecordStore> {
    let input = std::fs::read_to_string(path)?;
    let store = parse_str(&input)?;
    debug!(
        source = %path.display(),
        record_count = store.len(),
        comment_count = store.comments.len(),
        "bibtex parsed"
    );
    Ok(store)
}

/// Parse BibTeX source text into a record store.
pub fn parse_str(input: &str) -> Result<RecordStore> {
    Parser::new(input).parse()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    strings: BTreeMap<String, String>,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            strings: BTreeMap::new(),
        }
    }

    fn parse(mut self) -> Result<RecordStore> {
        let mut store = RecordStore::new();
        let mut free_text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '@' {
                flush_comment(&mut store, &mut free_text);
                self.bump();
                self.parse_block(&mut store)?;
            } else {
                free_text.push(ch);
                self.bump();
            }
        }
        flush_comment(&mut store, &mut free_text);
        Ok(store)
    }

    fn parse_block(&mut self, store: &mut RecordStore) -> Result<()> {
        let kind = self.identifier();
        if kind.is_empty() {
            return Err(self.error("expected entry type after `@`"));
        }
        let kind = kind.to_lowercase();
        self.skip_whitespace();
        match kind.as_str() {
            "comment" => {
                let body = self.delimited_block()?;
                let body = body.trim();
                if !body.is_empty() {
                    store.push_comment(body);
                }
            }
            "preamble" => {
                let body = self.delimited_block()?;
                store.push_comment(format!("@preamble{{{}}}", body.trim()));
            }
            "string" => self.parse_string_definition()?,
            _ => {
                let record = self.parse_entry(&kind)?;
                store.push(record)?;
            }
        }
        Ok(())
    }

    /// `@string{name = value}` definitions, usable by later entries.
    fn parse_string_definition(&mut self) -> Result<()> {
        let close = self.open_delimiter()?;
        self.skip_whitespace();
        let name = self.field_identifier();
        if name.is_empty() {
            return Err(self.error("expected string macro name"));
        }
        self.skip_whitespace();
        if self.bump() != Some('=') {
            return Err(self.error("expected `=` in string definition"));
        }
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.bump() != Some(close) {
            return Err(self.error("unterminated string definition"));
        }
        self.strings.insert(name.to_lowercase(), value);
        Ok(())
    }

    fn parse_entry(&mut self, entry_type: &str) -> Result<Record> {
        let close = self.open_delimiter()?;
        self.skip_whitespace();
        let key = self.take_while(|ch| ch != ',' && ch != close && !ch.is_whitespace());
        if key.is_empty() {
            return Err(self.error("missing citation key"));
        }
        let mut record = Record::new(key, entry_type);
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(ch) if ch == close => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unterminated entry")),
                Some(_) => {
                    let name = self.field_identifier();
                    if name.is_empty() {
                        return Err(self.error("expected field name"));
                    }
                    self.skip_whitespace();
                    if self.bump() != Some('=') {
                        return Err(self.error(format!("expected `=` after field `{name}`")));
                    }
                    let value = self.parse_value()?;
                    record.set(&name, value);
                }
            }
        }
        Ok(record)
    }

    /// A field value: `#`-concatenated braced, quoted, numeric, or macro
    /// parts. Whitespace runs inside the value collapse to single spaces.
    fn parse_value(&mut self) -> Result<String> {
        let mut value = String::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('{') => value.push_str(&self.braced()?),
                Some('"') => value.push_str(&self.quoted()?),
                Some(ch) if ch.is_ascii_digit() => {
                    value.push_str(&self.take_while(|ch| ch.is_ascii_alphanumeric()));
                }
                Some(ch) if ch.is_alphabetic() => {
                    let name = self.field_identifier().to_lowercase();
                    let resolved = lookup_month(&name)
                        .map(str::to_string)
                        .or_else(|| self.strings.get(&name).cloned());
                    match resolved {
                        Some(expansion) => value.push_str(&expansion),
                        None => {
                            return Err(self.error(format!("undefined string macro `{name}`")));
                        }
                    }
                }
                _ => return Err(self.error("expected field value")),
            }
            self.skip_whitespace();
            if self.peek() == Some('#') {
                self.bump();
            } else {
                break;
            }
        }
        Ok(collapse_whitespace(&value))
    }

    /// Braced value body with nested braces preserved.
    fn braced(&mut self) -> Result<String> {
        self.bump();
        let mut depth = 1usize;
        let mut body = String::new();
        loop {
            match self.bump() {
                Some('{') => {
                    depth += 1;
                    body.push('{');
                }
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                    body.push('}');
                }
                Some(ch) => body.push(ch),
                None => return Err(self.error("unbalanced braces in field value")),
            }
        }
    }

    /// Quoted value body; braces may nest and protect inner quotes.
    fn quoted(&mut self) -> Result<String> {
        self.bump();
        let mut depth = 0usize;
        let mut body = String::new();
        loop {
            match self.bump() {
                Some('"') if depth == 0 => return Ok(body),
                Some('{') => {
                    depth += 1;
                    body.push('{');
                }
                Some('}') => {
                    depth = depth.saturating_sub(1);
                    body.push('}');
                }
                Some(ch) => body.push(ch),
                None => return Err(self.error("unterminated quoted value")),
            }
        }
    }

    /// Raw body of a `@comment`/`@preamble` block.
    fn delimited_block(&mut self) -> Result<String> {
        let close = self.open_delimiter()?;
        let open = if close == '}' { '{' } else { '(' };
        let mut depth = 1usize;
        let mut body = String::new();
        loop {
            match self.bump() {
                Some(ch) if ch == open => {
                    depth += 1;
                    body.push(ch);
                }
                Some(ch) if ch == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                    body.push(ch);
                }
                Some(ch) => body.push(ch),
                None => Err(self.error("unterminated block"))?,
            }
        }
    }

    fn open_delimiter(&mut self) -> Result<char> {
        match self.bump() {
            Some('{') => Ok('}'),
            Some('(') => Ok(')'),
            _ => Err(self.error("expected `{` or `(`")),
        }
    }

    fn identifier(&mut self) -> String {
        self.take_while(char::is_alphabetic)
    }

    /// Field and macro names: letters, digits, and common punctuation.
    fn field_identifier(&mut self) -> String {
        self.take_while(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.' | ':' | '+'))
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(ch) = self.peek() {
            if !keep(ch) {
                break;
            }
            taken.push(ch);
            self.bump();
        }
        taken
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if let Some(ch) = ch {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
            }
        }
        ch
    }

    fn error(&self, message: impl Into<String>) -> BibError {
        BibError::parse(self.line, message)
    }
}

fn flush_comment(store: &mut RecordStore, free_text: &mut String) {
    let trimmed = free_text.trim();
    if !trimmed.is_empty() {
        store.push_comment(trimmed);
    }
    free_text.clear();
}

fn lookup_month(name: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(abbrev, _)| *abbrev == name)
        .map(|(_, full)| *full)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_expand_to_full_names() {
        assert_eq!(lookup_month("jan"), Some("January"));
        assert_eq!(lookup_month("dec"), Some("December"));
        assert_eq!(lookup_month("janx"), None);
    }

    #[test]
    fn whitespace_collapses_across_lines() {
        assert_eq!(collapse_whitespace("a\n   b\tc "), "a b c");
    }
}
