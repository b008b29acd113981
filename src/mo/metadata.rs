//! Catalog metadata stored in the translation of the empty message.
//!
//! The entry is a block of `Name: value` lines, for example:
//!
//! ```text
//! Project-Id-Version: demo 1.0
//! Content-Type: text/plain; charset=UTF-8
//! Plural-Forms: nplurals=2; plural=(n != 1);
//! ```

use regex::Regex;
use std::sync::OnceLock;

/// Matches the charset parameter of a `Content-Type` value.
static CHARSET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn charset_regex() -> &'static Regex {
    CHARSET_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)charset\s*=\s*([^\s;]+)").expect("Invalid charset regex pattern")
    })
}

/// A borrowed, read-only view of the catalog header fields.
#[derive(Debug, Clone, Default)]
pub struct Metadata<'a> {
    fields: Vec<(&'a str, &'a str)>,
}

impl<'a> Metadata<'a> {
    /// Parses `Name: value` lines. Lines without a colon are ignored.
    pub fn parse(text: &'a str) -> Self {
        let fields = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
            .filter(|(name, _)| !name.is_empty())
            .collect();
        Self { fields }
    }

    /// Returns the value of a field, matching the name case-insensitively.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    pub fn content_type(&self) -> Option<&'a str> {
        self.get("Content-Type")
    }

    /// The declared charset. Strings are never converted; this is informational.
    pub fn charset(&self) -> Option<&'a str> {
        let content_type = self.content_type()?;
        charset_regex()
            .captures(content_type)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Whether the declared charset is UTF-8, accepting `UTF-8`, `utf8` and
    /// similar spellings. `None` when no charset is declared.
    pub fn charset_is_utf8(&self) -> Option<bool> {
        let normalized: String = self
            .charset()?
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Some(normalized.eq_ignore_ascii_case("utf8"))
    }

    /// The raw `Plural-Forms` expression. It is not evaluated.
    pub fn plural_forms(&self) -> Option<&'a str> {
        self.get("Plural-Forms")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.fields.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
