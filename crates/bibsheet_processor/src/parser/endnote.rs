/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! EndNote tagged-text (`.enw`) parser.
//!
//! Records are separated by blank lines. Each line is `%X value`, where `X`
//! is a single tag character; a line without a leading `%` continues the
//! previous value.

use bibsheet_core::InputFormat;

use super::{FormatParser, ParseOutcome, RawEntry};

#[derive(Debug, Default, Clone, Copy)]
pub struct EndnoteParser;

/// Split a tag line into `("%X", value)`.
fn tag_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('%')?;
    let tag_char = rest.chars().next().filter(|c| !c.is_whitespace())?;
    let tag_len = 1 + tag_char.len_utf8();
    let value = &line[tag_len..];
    // The tag must be followed by whitespace or end the line.
    if !value.is_empty() && !value.starts_with(char::is_whitespace) {
        return None;
    }
    Some((&line[..tag_len], value.trim()))
}

fn records(input: &str) -> Vec<Vec<&str>> {
    let mut records = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        records.push(current);
    }
    records
}

impl FormatParser for EndnoteParser {
    fn format(&self) -> InputFormat {
        InputFormat::Endnote
    }

    fn parse(&self, input: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for (i, lines) in records(input).into_iter().enumerate() {
            let index = i + 1;
            if tag_line(lines[0]).is_none() {
                outcome.skip(
                    InputFormat::Endnote,
                    index,
                    "record does not start with a %-tag line",
                );
                continue;
            }

            let mut entry = RawEntry::new(InputFormat::Endnote, index, "");
            for line in lines {
                match tag_line(line) {
                    Some(("%0", value)) => entry.entry_type = value.to_string(),
                    Some((tag, value)) => {
                        if tag == "%F" && entry.key.is_none() && !value.is_empty() {
                            entry.key = Some(value.to_string());
                        }
                        if !value.is_empty() {
                            entry.insert(tag, value);
                        }
                    }
                    None => {
                        entry.extend_last(line.trim());
                    }
                }
            }
            outcome.entries.push(entry);
        }

        tracing::debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped(),
            "parsed EndNote"
        );
        outcome
    }
}
