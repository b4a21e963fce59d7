/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain-text rendering of style templates.

pub mod case;
pub mod component;

use std::sync::LazyLock;

use bibsheet_core::template::TemplateComponent;
use bibsheet_core::Reference;
use regex::Regex;

pub use case::apply_text_case;
pub use component::render_component;

use crate::values::{ComponentValues, RenderOptions};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A doubled period that is not part of an ellipsis.
static DOUBLE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^.])\.\.(\s|$)").expect("period pattern is valid"));

/// A period cut off from the text before it by a component boundary:
/// whitespace (after an optional `,` `;` `:`) and a period that ends a word.
static SPACED_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;:]?\s+\.(\s|$)").expect("spaced period pattern is valid"));

/// Render one reference through a template into a finished entry.
pub fn render_template(
    template: &[TemplateComponent],
    reference: &Reference,
    options: &RenderOptions<'_>,
) -> String {
    let mut output = String::new();
    for component in template {
        if let Some(value) = component.values(reference, options) {
            output.push_str(&render_component(component, &value));
        }
    }
    finish_entry(&output)
}

/// Tidy the joined components and close the entry with a period.
///
/// No period is added after a trailing URL or DOI, or when the entry
/// already ends in terminal punctuation (inside closing quotes or not).
pub fn finish_entry(raw: &str) -> String {
    let mut output = WHITESPACE.replace_all(raw, " ").into_owned();
    cleanup_dangling_punctuation(&mut output);
    let output = output
        .trim_start_matches(is_dangling)
        .trim_end_matches(is_dangling);
    if output.is_empty() {
        return String::new();
    }

    let mut output = output.to_string();
    if !ends_with_url_or_doi(&output) && !ends_with_terminal(&output) {
        output.push('.');
    }
    output
}

fn is_dangling(c: char) -> bool {
    matches!(c, ',' | ';' | ':') || c.is_whitespace()
}

fn is_final_punctuation(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

fn ends_with_terminal(output: &str) -> bool {
    let mut chars = output.chars().rev();
    match chars.next() {
        Some(c) if is_final_punctuation(c) => true,
        Some('"' | '\'' | '\u{201D}') => chars.next().is_some_and(is_final_punctuation),
        _ => false,
    }
}

fn ends_with_url_or_doi(output: &str) -> bool {
    let last = output.rsplit(' ').next().unwrap_or(output);
    ["https://", "http://", "doi.org/", "doi:"]
        .iter()
        .any(|scheme| last.starts_with(scheme))
}

fn cleanup_dangling_punctuation(output: &mut String) {
    let patterns = [
        (", ,", ","),
        (" ,", ","),
        (" ;", ";"),
        (",.", "."),
        (";.", "."),
        (":.", "."),
        ("?.", "?"),
        ("!.", "!"),
        ("  ", " "),
    ];

    let mut changed = true;
    while changed {
        changed = false;
        for (pattern, replacement) in &patterns {
            if output.contains(pattern) {
                *output = output.replace(pattern, replacement);
                changed = true;
            }
        }
        if SPACED_PERIOD.is_match(output) {
            *output = SPACED_PERIOD.replace_all(output, ".$1").into_owned();
            changed = true;
        }
        if DOUBLE_PERIOD.is_match(output) {
            *output = DOUBLE_PERIOD.replace_all(output, "$1.$2").into_owned();
            changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_entry_adds_terminal_period() {
        assert_eq!(finish_entry("Smith, J. (2023). Title "), "Smith, J. (2023). Title.");
        assert_eq!(finish_entry("Nature 45, 1-9 (2023)"), "Nature 45, 1-9 (2023).");
        assert_eq!(finish_entry("Is it? "), "Is it?");
        assert_eq!(finish_entry("\"Quoted.\""), "\"Quoted.\"");
    }

    #[test]
    fn test_finish_entry_leaves_urls_alone() {
        assert_eq!(
            finish_entry("Title. https://doi.org/10.1000/xyz"),
            "Title. https://doi.org/10.1000/xyz"
        );
        assert_eq!(finish_entry("Title. doi:10.1000/xyz"), "Title. doi:10.1000/xyz");
    }

    #[test]
    fn test_cleanup_collapses_doubled_punctuation() {
        assert_eq!(finish_entry("Doe, J.. 2023.. Title"), "Doe, J. 2023. Title.");
        assert_eq!(finish_entry("\"Why?.\" Journal"), "\"Why?\" Journal.");
        assert_eq!(finish_entry("Wait... what"), "Wait... what.");
        assert_eq!(finish_entry(", , Title,  ."), "Title.");
        assert_eq!(finish_entry("Untitled Notes; "), "Untitled Notes.");
        assert_eq!(finish_entry("   "), "");
    }

    #[test]
    fn test_cleanup_keeps_leading_period_inside_words() {
        assert_eq!(
            finish_entry("Programming in .NET. Acme"),
            "Programming in .NET. Acme."
        );
        assert_eq!(finish_entry("Files, .bib and .ris"), "Files, .bib and .ris.");
        assert_eq!(finish_entry("Title , . Publisher"), "Title. Publisher.");
    }
}
