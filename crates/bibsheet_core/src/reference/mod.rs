/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The canonical, format-independent reference record.

mod person;

pub use person::Person;

use indexmap::IndexMap;
use serde::Serialize;

crate::str_enum! {
    /// Coarse category of a reference. Drives which template a style uses.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum EntryType {
        Article = "article",
        Book = "book",
        Chapter = "chapter",
        InProceedings = "inproceedings",
        Thesis = "thesis",
        Report = "report",
        #[default]
        Misc = "misc",
    }
}

/// A raw field value as produced by the format parsers.
///
/// Repeatable tags accumulate into `List`; everything else is `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    List(Vec<String>),
}

impl RawValue {
    /// The first (or only) string of the value.
    pub fn first(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            RawValue::List(items) => items.first().map(String::as_str),
        }
    }

    /// Every string of the value, in file order.
    pub fn items(&self) -> Vec<&str> {
        match self {
            RawValue::Text(s) => vec![s.as_str()],
            RawValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Append a value, promoting `Text` to `List` on the second occurrence.
    pub fn push(&mut self, value: String) {
        match self {
            RawValue::Text(first) => {
                let first = std::mem::take(first);
                *self = RawValue::List(vec![first, value]);
            }
            RawValue::List(items) => items.push(value),
        }
    }
}

/// A normalized bibliographic reference.
///
/// Immutable once the normalizer has built it; sorting produces new orderings
/// of borrowed references and never touches fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reference {
    /// Source citation key. Used for appearance order and update matching,
    /// never displayed.
    pub raw_id: String,
    pub entry_type: EntryType,
    /// Authors in citation order.
    pub authors: Vec<Person>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Date text kept for display when no year could be extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Fields the normalizer has no slot for, passed through untouched.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, RawValue>,
}

impl Reference {
    pub fn first_author(&self) -> Option<&Person> {
        self.authors.first()
    }

    /// Year as display text: the numeric year, else the raw date text.
    pub fn date_display(&self) -> Option<String> {
        self.year
            .map(|y| y.to_string())
            .or_else(|| self.date_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_promotes_to_list() {
        let mut value = RawValue::Text("Smith, Jane".to_string());
        value.push("Doe, John".to_string());
        assert_eq!(
            value,
            RawValue::List(vec!["Smith, Jane".to_string(), "Doe, John".to_string()])
        );
        assert_eq!(value.first(), Some("Smith, Jane"));
        assert_eq!(value.items().len(), 2);
    }

    #[test]
    fn test_entry_type_ids() {
        assert_eq!(EntryType::from_id("InProceedings"), Some(EntryType::InProceedings));
        assert_eq!(EntryType::from_id("unknown"), None);
        assert_eq!(EntryType::Article.to_string(), "article");
    }

    #[test]
    fn test_date_display_falls_back_to_text() {
        let reference = Reference {
            date_text: Some("in press".to_string()),
            ..Default::default()
        };
        assert_eq!(reference.date_display().as_deref(), Some("in press"));

        let dated = crate::ref_book!("k", "Kuhn", "Thomas", 1962, "Structure");
        assert_eq!(dated.date_display().as_deref(), Some("1962"));
    }
}
