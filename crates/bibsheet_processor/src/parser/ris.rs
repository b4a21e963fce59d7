/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! RIS parser.
//!
//! Entries run from a `TY` line to the next `ER` line. Every tag line is
//! `XX  - value`; lines that are not tag lines continue the previous value.

use std::sync::LazyLock;

use bibsheet_core::InputFormat;
use regex::Regex;

use super::{FormatParser, ParseOutcome, RawEntry};

/// Name tags; each line holds exactly one name.
const NAME_TAGS: [&str; 5] = ["AU", "A1", "A2", "A3", "A4"];

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9])  -(?: (.*))?$").expect("RIS tag pattern is valid")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct RisParser;

impl FormatParser for RisParser {
    fn format(&self) -> InputFormat {
        InputFormat::Ris
    }

    fn parse(&self, input: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut current: Option<RawEntry> = None;
        let mut index = 0;

        for line in input.lines() {
            let line = line.trim_end();
            let Some(caps) = TAG_LINE.captures(line) else {
                if let Some(entry) = current.as_mut() {
                    let text = line.trim();
                    if !text.is_empty() {
                        entry.extend_last(text);
                    }
                }
                continue;
            };

            let tag = caps.get(1).map_or("", |m| m.as_str());
            let value = caps.get(2).map_or("", |m| m.as_str()).trim();

            match tag {
                "TY" => {
                    if current.is_some() {
                        outcome.skip(InputFormat::Ris, index, "missing ER terminator");
                    }
                    index += 1;
                    current = Some(RawEntry::new(InputFormat::Ris, index, value));
                }
                "ER" => match current.take() {
                    Some(entry) => outcome.entries.push(entry),
                    None => tracing::debug!("ignoring ER line outside an entry"),
                },
                _ => {
                    if let Some(entry) = current.as_mut() {
                        if tag == "ID" && entry.key.is_none() && !value.is_empty() {
                            entry.key = Some(value.to_string());
                        }
                        if value.is_empty() {
                            continue;
                        }
                        if NAME_TAGS.contains(&tag) {
                            entry.insert_list(tag, vec![value.to_string()]);
                        } else {
                            entry.insert(tag, value);
                        }
                    }
                }
            }
        }

        if current.is_some() {
            outcome.skip(InputFormat::Ris, index, "missing ER terminator");
        }

        tracing::debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped(),
            "parsed RIS"
        );
        outcome
    }
}
