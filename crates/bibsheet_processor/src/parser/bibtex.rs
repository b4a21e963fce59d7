/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! BibTeX parser.
//!
//! The file is first cut into chunks at lines starting with `@`, and each
//! chunk is parsed on its own with a small winnow grammar. An entry with an
//! unbalanced brace therefore fails alone instead of swallowing the entries
//! after it. Text between entries is comment; further entries on the same
//! line are picked up from it.
//!
//! Values are returned raw, with inner braces and LaTeX escapes intact; the
//! normalizer cleans them up once authors have been split.

use std::collections::HashMap;

use bibsheet_core::InputFormat;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, opt};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::{FormatParser, ParseOutcome, RawEntry};

type PResult<T> = winnow::Result<T, ContextError>;

#[derive(Debug, Default, Clone, Copy)]
pub struct BibtexParser;

impl FormatParser for BibtexParser {
    fn format(&self) -> InputFormat {
        InputFormat::Bibtex
    }

    fn parse(&self, input: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut macros = Macros::default();
        let mut index = 0;

        for chunk in chunks(input) {
            let mut rest = chunk;
            while let Some(start) = next_block_start(rest) {
                let block_text = &rest[start..];
                rest = block_text;
                let parsed = block(&mut rest);
                let stray_close = matches!(
                    parsed,
                    Ok(Block::Entry { .. } | Block::StringDef { .. })
                ) && rest.trim_start().starts_with('}');
                if stray_close || matches!(parsed, Ok(Block::Entry { .. }) | Err(_)) {
                    index += 1;
                }
                match parsed {
                    Ok(Block::Ignored) => {}
                    Ok(_) if stray_close => {
                        outcome.skip(
                            InputFormat::Bibtex,
                            index,
                            "unbalanced braces after the end of the entry",
                        );
                    }
                    Ok(Block::StringDef { name, value }) => {
                        let value = macros.expand(&value);
                        macros.define(name, value);
                    }
                    Ok(Block::Entry { kind, key, fields }) => {
                        let mut entry = RawEntry::new(InputFormat::Bibtex, index, kind);
                        if !key.is_empty() {
                            entry.key = Some(key.to_string());
                        }
                        for (name, pieces) in fields {
                            entry.insert(name.to_ascii_lowercase(), macros.expand(&pieces));
                        }
                        outcome.entries.push(entry);
                    }
                    Err(_) => {
                        outcome.skip(
                            InputFormat::Bibtex,
                            index,
                            describe_failure(block_text, rest),
                        );
                        break;
                    }
                }
            }
        }

        tracing::debug!(
            entries = outcome.entries.len(),
            skipped = outcome.skipped(),
            "parsed BibTeX"
        );
        outcome
    }
}

/// Offset of the next `@type{` or `@type(` in `text`. Any other `@`, such
/// as one in an e-mail address inside a comment, is free text.
fn next_block_start(text: &str) -> Option<usize> {
    text.match_indices('@')
        .map(|(i, _)| i)
        .find(|&i| block_head(&mut &text[i..]).is_ok())
}

fn block_head(input: &mut &str) -> PResult<()> {
    expect_char(input, '@')?;
    ws(input)?;
    identifier(input)?;
    ws(input)?;
    opening(input)?;
    Ok(())
}

/// Split the input at lines whose first non-blank character is `@`.
/// Text before the first such line is free-form comment.
fn chunks(input: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with('@') {
            starts.push(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(input.len());
            &input[start..end]
        })
        .collect()
}

fn describe_failure(chunk: &str, remaining: &str) -> String {
    let opens = chunk.matches('{').count();
    let closes = chunk.matches('}').count();
    let remaining = remaining.trim();
    if opens != closes {
        format!("unbalanced braces ({opens} opening, {closes} closing)")
    } else if remaining.is_empty() {
        "entry is not terminated".to_string()
    } else {
        let snippet: String = remaining.chars().take(24).collect();
        format!("syntax error near '{snippet}'")
    }
}

/// `@string` definitions, keyed case-insensitively.
struct Macros(HashMap<String, String>);

impl Default for Macros {
    fn default() -> Self {
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
        Macros(
            MONTHS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl Macros {
    fn define(&mut self, name: &str, value: String) {
        self.0.insert(name.to_ascii_lowercase(), value);
    }

    fn expand(&self, pieces: &[Piece<'_>]) -> String {
        pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => (*text).to_string(),
                Piece::Macro(name) => match self.0.get(&name.to_ascii_lowercase()) {
                    Some(value) => value.clone(),
                    None => {
                        tracing::debug!(name = %name, "undefined BibTeX string macro");
                        (*name).to_string()
                    }
                },
            })
            .collect()
    }
}

#[derive(Debug, PartialEq)]
enum Piece<'a> {
    Literal(&'a str),
    Macro(&'a str),
}

#[derive(Debug, PartialEq)]
enum Block<'a> {
    Entry {
        kind: &'a str,
        key: &'a str,
        fields: Vec<(&'a str, Vec<Piece<'a>>)>,
    },
    StringDef {
        name: &'a str,
        value: Vec<Piece<'a>>,
    },
    /// `@comment` and `@preamble`.
    Ignored,
}

fn ws(input: &mut &str) -> PResult<()> {
    multispace0.void().parse_next(input)
}

fn expect_char(input: &mut &str, mut c: char) -> PResult<char> {
    c.parse_next(input)
}

fn comma(input: &mut &str) -> PResult<char> {
    ','.parse_next(input)
}

fn identifier<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.' | '+' | '/' | '\'')
    })
    .parse_next(input)
}

fn citation_key<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(0.., |c: char| {
        !c.is_whitespace() && !matches!(c, ',' | '{' | '}' | '(' | ')' | '=')
    })
    .parse_next(input)
}

fn opening(input: &mut &str) -> PResult<char> {
    one_of(['{', '(']).parse_next(input)
}

/// `{...}` with nested braces; returns the inside, braces intact.
fn braced<'a>(input: &mut &'a str) -> PResult<Piece<'a>> {
    let source = *input;
    if !source.starts_with('{') {
        return Err(ContextError::new());
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in source.char_indices() {
        match c {
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            '{' if !escaped => depth += 1,
            '}' if !escaped => {
                depth -= 1;
                if depth == 0 {
                    *input = &source[i + 1..];
                    return Ok(Piece::Literal(&source[1..i]));
                }
            }
            _ => {}
        }
        escaped = false;
    }
    Err(ContextError::new())
}

/// `"..."`; a quote inside braces does not end the value.
fn quoted<'a>(input: &mut &'a str) -> PResult<Piece<'a>> {
    let source = *input;
    if !source.starts_with('"') {
        return Err(ContextError::new());
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in source.char_indices().skip(1) {
        match c {
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            '{' if !escaped => depth += 1,
            '}' if !escaped => {
                if depth == 0 {
                    return Err(ContextError::new());
                }
                depth -= 1;
            }
            '"' if depth == 0 && !escaped => {
                *input = &source[i + 1..];
                return Ok(Piece::Literal(&source[1..i]));
            }
            _ => {}
        }
        escaped = false;
    }
    Err(ContextError::new())
}

fn number<'a>(input: &mut &'a str) -> PResult<Piece<'a>> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .map(Piece::Literal)
        .parse_next(input)
}

fn macro_ref<'a>(input: &mut &'a str) -> PResult<Piece<'a>> {
    identifier.map(Piece::Macro).parse_next(input)
}

fn piece<'a>(input: &mut &'a str) -> PResult<Piece<'a>> {
    alt((braced, quoted, number, macro_ref)).parse_next(input)
}

/// One or more pieces joined with `#`.
fn value<'a>(input: &mut &'a str) -> PResult<Vec<Piece<'a>>> {
    let mut pieces = vec![piece(input)?];
    loop {
        let checkpoint = *input;
        ws(input)?;
        if expect_char(input, '#').is_err() {
            *input = checkpoint;
            return Ok(pieces);
        }
        ws(input)?;
        pieces.push(piece(input)?);
    }
}

fn field<'a>(input: &mut &'a str) -> PResult<(&'a str, Vec<Piece<'a>>)> {
    let name = identifier(input)?;
    ws(input)?;
    expect_char(input, '=')?;
    ws(input)?;
    let value = value(input)?;
    Ok((name, value))
}

fn block<'a>(input: &mut &'a str) -> PResult<Block<'a>> {
    expect_char(input, '@')?;
    ws(input)?;
    let kind = identifier(input)?;
    if kind.eq_ignore_ascii_case("comment") || kind.eq_ignore_ascii_case("preamble") {
        ws(input)?;
        if braced(input).is_err() {
            *input = "";
        }
        return Ok(Block::Ignored);
    }
    ws(input)?;
    let close = match opening(input)? {
        '(' => ')',
        _ => '}',
    };
    ws(input)?;

    if kind.eq_ignore_ascii_case("string") {
        let (name, value) = field(input)?;
        ws(input)?;
        opt(comma).parse_next(input)?;
        ws(input)?;
        expect_char(input, close)?;
        return Ok(Block::StringDef { name, value });
    }

    let key = citation_key(input)?;
    let mut fields = Vec::new();
    loop {
        ws(input)?;
        if expect_char(input, close).is_ok() {
            break;
        }
        comma(input)?;
        ws(input)?;
        if expect_char(input, close).is_ok() {
            break;
        }
        fields.push(field(input)?);
    }

    Ok(Block::Entry { kind, key, fields })
}
