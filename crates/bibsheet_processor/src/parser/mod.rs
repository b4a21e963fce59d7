/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Format parsers.
//!
//! Each parser turns the text of one reference file into [`RawEntry`] field
//! maps in file order. Parsers never fail as a whole: a malformed entry is
//! recorded as an [`EntryParseError`] and parsing resumes at the next entry.

pub mod bibtex;
pub mod csl_json;
pub mod endnote;
pub mod ris;

use bibsheet_core::{InputFormat, RawValue};
use indexmap::IndexMap;
use thiserror::Error;

pub use bibtex::BibtexParser;
pub use csl_json::CslJsonParser;
pub use endnote::EndnoteParser;
pub use ris::RisParser;

/// One entry as read from the file, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub format: InputFormat,
    /// 1-based position of the entry in the file, counting skipped ones.
    pub index: usize,
    /// The type tag exactly as the file spells it (`article`, `JOUR`, ...).
    pub entry_type: String,
    /// Citation key, when the format carries one.
    pub key: Option<String>,
    /// Field values keyed by lowercased field name or tag, in file order.
    pub fields: IndexMap<String, RawValue>,
    /// Field that received the latest value; continuation lines extend it.
    last_field: Option<String>,
}

impl RawEntry {
    pub fn new(format: InputFormat, index: usize, entry_type: impl Into<String>) -> Self {
        Self {
            format,
            index,
            entry_type: entry_type.into(),
            key: None,
            fields: IndexMap::new(),
            last_field: None,
        }
    }

    /// Add a field value. A repeated field accumulates into a list.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let name = name.into();
        self.last_field = Some(name.clone());
        match self.fields.entry(name) {
            indexmap::map::Entry::Occupied(mut slot) => slot.get_mut().push(value),
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(RawValue::Text(value));
            }
        }
    }

    /// Add a list-valued field, merging with any earlier values.
    pub fn insert_list(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        for value in values {
            self.insert(name.clone(), value);
        }
        if let Some(RawValue::Text(single)) = self.fields.get(&name) {
            let single = single.clone();
            self.fields.insert(name, RawValue::List(vec![single]));
        }
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Append text to the value inserted most recently (continuation lines).
    pub(crate) fn extend_last(&mut self, text: &str) -> bool {
        let Some(value) = self
            .last_field
            .as_deref()
            .and_then(|name| self.fields.get_mut(name))
        else {
            return false;
        };
        let target = match value {
            RawValue::Text(s) => s,
            RawValue::List(items) => match items.last_mut() {
                Some(s) => s,
                None => return false,
            },
        };
        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(text);
        true
    }
}

/// A malformed entry that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{format} entry {index}: {message}")]
pub struct EntryParseError {
    pub format: InputFormat,
    /// 1-based position of the entry in the file.
    pub index: usize,
    pub message: String,
}

/// Everything one parser run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub entries: Vec<RawEntry>,
    pub errors: Vec<EntryParseError>,
}

impl ParseOutcome {
    /// Number of entries that were skipped.
    pub fn skipped(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn skip(&mut self, format: InputFormat, index: usize, message: impl Into<String>) {
        let error = EntryParseError {
            format,
            index,
            message: message.into(),
        };
        tracing::warn!(
            format = %error.format,
            entry = error.index,
            reason = %error.message,
            "skipping malformed entry"
        );
        self.errors.push(error);
    }
}

/// A parser for one reference file format.
pub trait FormatParser {
    /// The format this parser reads.
    fn format(&self) -> InputFormat;

    /// Parse a whole file. Never fails; malformed entries land in
    /// [`ParseOutcome::errors`].
    fn parse(&self, input: &str) -> ParseOutcome;
}

/// Look up the parser for a concrete format. `Auto` has none.
pub fn parser_for(format: InputFormat) -> Option<&'static dyn FormatParser> {
    let parser: &'static dyn FormatParser = match format {
        InputFormat::Bibtex => &BibtexParser,
        InputFormat::Ris => &RisParser,
        InputFormat::CslJson => &CslJsonParser,
        InputFormat::Endnote => &EndnoteParser,
        InputFormat::Auto => return None,
    };
    Some(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_field_accumulates() {
        let mut entry = RawEntry::new(InputFormat::Ris, 1, "JOUR");
        entry.insert("AU", "Smith, Jane");
        entry.insert("TI", "Title");
        entry.insert("AU", "Doe, John");
        assert_eq!(
            entry.get("AU"),
            Some(&RawValue::List(vec![
                "Smith, Jane".to_string(),
                "Doe, John".to_string()
            ]))
        );
        assert_eq!(entry.fields.keys().collect::<Vec<_>>(), vec!["AU", "TI"]);
    }

    #[test]
    fn test_single_item_list_stays_a_list() {
        let mut entry = RawEntry::new(InputFormat::CslJson, 1, "book");
        entry.insert_list("author", vec!["Kuhn, Thomas".to_string()]);
        assert_eq!(
            entry.get("author"),
            Some(&RawValue::List(vec!["Kuhn, Thomas".to_string()]))
        );
    }

    #[test]
    fn test_extend_last_appends_to_latest_value() {
        let mut entry = RawEntry::new(InputFormat::Endnote, 1, "Book");
        entry.insert("%T", "A long");
        assert!(entry.extend_last("title"));
        assert_eq!(entry.get("%T").and_then(|v| v.first()), Some("A long title"));
    }

    #[test]
    fn test_extend_last_follows_insertion_not_key_order() {
        let mut entry = RawEntry::new(InputFormat::Ris, 1, "JOUR");
        entry.insert("AU", "Smith, Jane");
        entry.insert("TI", "Title");
        entry.insert("AU", "van der Berg,");
        assert!(entry.extend_last("Johannes"));
        assert_eq!(
            entry.get("AU"),
            Some(&RawValue::List(vec![
                "Smith, Jane".to_string(),
                "van der Berg, Johannes".to_string()
            ]))
        );
        assert_eq!(entry.get("TI").and_then(RawValue::first), Some("Title"));
    }

    #[test]
    fn test_extend_last_without_fields_is_rejected() {
        let mut entry = RawEntry::new(InputFormat::Ris, 1, "JOUR");
        assert!(!entry.extend_last("orphan"));
    }

    #[test]
    fn test_every_concrete_format_has_a_parser() {
        for format in InputFormat::ALL {
            let parser = parser_for(*format);
            assert_eq!(parser.is_some(), *format != InputFormat::Auto);
            if let Some(parser) = parser {
                assert_eq!(parser.format(), *format);
            }
        }
    }
}
