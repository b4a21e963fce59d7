/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CSL-JSON parser.
//!
//! Items are deserialized into a typed shape first, then flattened into the
//! same string field map the other parsers produce. Names become
//! `Family, Given` strings so the shared author parser handles them like any
//! other format.

use bibsheet_core::InputFormat;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{FormatParser, ParseOutcome, RawEntry};

#[derive(Debug, Default, Clone, Copy)]
pub struct CslJsonParser;

/// Values CSL-JSON producers write as either strings or numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CslName {
    family: Option<String>,
    given: Option<String>,
    literal: Option<String>,
}

impl CslName {
    fn to_author_string(&self) -> Option<String> {
        if let Some(literal) = self.literal.as_deref().filter(|s| !s.trim().is_empty()) {
            return Some(format!("{{{}}}", literal.trim()));
        }
        let family = self.family.as_deref().map(str::trim).unwrap_or_default();
        let given = self.given.as_deref().map(str::trim).unwrap_or_default();
        match (family.is_empty(), given.is_empty()) {
            (true, true) => None,
            (false, true) => Some(format!("{{{family}}}")),
            (true, false) => Some(given.to_string()),
            (false, false) => Some(format!("{family}, {given}")),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CslDate {
    Structured {
        #[serde(rename = "date-parts")]
        date_parts: Option<Vec<Vec<StringOrNumber>>>,
        raw: Option<String>,
        literal: Option<String>,
    },
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CslItem {
    id: Option<StringOrNumber>,
    #[serde(rename = "type")]
    item_type: Option<String>,
    title: Option<String>,
    container_title: Option<String>,
    #[serde(default)]
    author: Vec<CslName>,
    #[serde(default)]
    editor: Vec<CslName>,
    issued: Option<CslDate>,
    volume: Option<StringOrNumber>,
    issue: Option<StringOrNumber>,
    page: Option<StringOrNumber>,
    page_range: Option<String>,
    publisher: Option<String>,
    #[serde(rename = "DOI")]
    doi: Option<String>,
    #[serde(flatten)]
    other: IndexMap<String, Value>,
}

impl CslItem {
    fn into_raw_entry(self, index: usize) -> RawEntry {
        let mut entry = RawEntry::new(
            InputFormat::CslJson,
            index,
            self.item_type.unwrap_or_default(),
        );
        entry.key = self.id.map(StringOrNumber::into_string);

        let mut put = |name: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                entry.insert(name, value);
            }
        };
        put("title", self.title);
        put("container-title", self.container_title);

        if let Some(issued) = self.issued {
            match issued {
                CslDate::Structured {
                    date_parts,
                    raw,
                    literal,
                } => {
                    let mut first = date_parts
                        .and_then(|parts| parts.into_iter().next())
                        .unwrap_or_default()
                        .into_iter();
                    put("year", first.next().map(StringOrNumber::into_string));
                    put("month", first.next().map(StringOrNumber::into_string));
                    put("date", raw.or(literal));
                }
                CslDate::Text(text) => put("date", Some(text)),
            }
        }

        put("volume", self.volume.map(StringOrNumber::into_string));
        put("issue", self.issue.map(StringOrNumber::into_string));
        put(
            "page",
            self.page.map(StringOrNumber::into_string).or(self.page_range),
        );
        put("publisher", self.publisher);
        put("doi", self.doi);

        for (name, names) in [("author", self.author), ("editor", self.editor)] {
            let names: Vec<String> = names.iter().filter_map(CslName::to_author_string).collect();
            if !names.is_empty() {
                entry.insert_list(name, names);
            }
        }

        for (name, value) in self.other {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            entry.insert(name, text);
        }

        entry
    }
}

impl FormatParser for CslJsonParser {
    fn format(&self) -> InputFormat {
        InputFormat::CslJson
    }

    fn parse(&self, input: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        let items = match serde_json::from_str::<Value>(input) {
            Ok(Value::Array(items)) => items,
            Ok(item @ Value::Object(_)) => vec![item],
            Ok(_) => {
                outcome.skip(
                    InputFormat::CslJson,
                    1,
                    "top level must be an array of items or a single item",
                );
                return outcome;
            }
            Err(e) => {
                outcome.skip(InputFormat::CslJson, 1, format!("invalid JSON: {e}"));
                return outcome;
            }
        };

        for (i, item) in items.into_iter().enumerate() {
            let index = i + 1;
            if !item.is_object() {
                outcome.skip(InputFormat::CslJson, index, "item is not a JSON object");
                continue;
            }
            match serde_json::from_value::<CslItem>(item) {
                Ok(item) => outcome.entries.push(item.into_raw_entry(index)),
                Err(e) => outcome.skip(InputFormat::CslJson, index, e.to_string()),
            }
        }

        tracing::debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped(),
            "parsed CSL-JSON"
        );
        outcome
    }
}
