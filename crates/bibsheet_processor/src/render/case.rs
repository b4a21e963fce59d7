/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Title casing.

use bibsheet_core::template::TextCase;

const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "nor", "of", "on",
    "or", "so", "the", "to", "up", "via", "with", "yet",
];

pub fn apply_text_case(text: &str, case: TextCase) -> String {
    match case {
        TextCase::Sentence => sentence_case(text),
        TextCase::Title => title_case(text),
    }
}

/// Capitalise the first word and any word following `:`, `?` or `!`;
/// lowercase the rest. Acronyms, mixed-case words and words containing
/// digits are kept as written.
pub fn sentence_case(text: &str) -> String {
    let mut capitalize_next = true;
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            let at_start = capitalize_next;
            let out = word
                .split('-')
                .enumerate()
                .map(|(i, part)| {
                    if keeps_case(part) {
                        part.to_string()
                    } else if at_start && i == 0 {
                        capitalize(&part.to_lowercase())
                    } else {
                        part.to_lowercase()
                    }
                })
                .collect::<Vec<_>>()
                .join("-");
            if !word.is_empty() {
                capitalize_next = word.ends_with([':', '?', '!']);
            }
            out
        })
        .collect();
    words.join(" ")
}

/// Headline case: capitalise every word except minor words that are
/// neither first, last, nor after a colon. Existing capitals are kept.
pub fn title_case(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.iter().rposition(|w| !w.is_empty()).unwrap_or(0);
    let mut force_next = true;
    let mut out = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let bare: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let minor = MINOR_WORDS.contains(&bare.as_str());
        let titled = if minor && !force_next && i != last {
            word.to_lowercase()
        } else {
            word.split('-').map(capitalize).collect::<Vec<_>>().join("-")
        };
        out.push(titled);
        if !word.is_empty() {
            force_next = word.ends_with([':', '?', '!']);
        }
    }
    out.join(" ")
}

/// Words with capitals past their first letter, or with digits.
fn keeps_case(word: &str) -> bool {
    let mut letters = word.chars().skip_while(|c| !c.is_alphabetic());
    letters.next();
    word == "I" || letters.any(char::is_uppercase) || word.chars().any(|c| c.is_ascii_digit())
}

/// Uppercase the first letter, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    match word.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, c)) => {
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&word[i + c.len_utf8()..]);
            out
        }
        None => word.to_string(),
    }
}
