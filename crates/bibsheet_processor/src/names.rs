/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author parsing shared by every input format.
//!
//! A raw author value is either one delimiter-joined string (BibTeX,
//! EndNote) or a list with one name per item (RIS, CSL-JSON). Each name is
//! then split with the same heuristic: `Family, Given` when there is a
//! comma, otherwise the last word is the family name. Text inside braces is
//! never split, so `{World Health Organization}` stays one literal name.

use bibsheet_core::{Person, RawValue};

/// Parse a raw author field into people, in citation order.
pub fn parse_authors(value: &RawValue) -> Vec<Person> {
    let tokens: Vec<&str> = match value {
        RawValue::Text(text) => split_authors(text),
        RawValue::List(items) => items.iter().map(String::as_str).collect(),
    };
    tokens.into_iter().filter_map(parse_person).collect()
}

/// Split a joined author string on `and`, `&` and `;` outside braces.
pub fn split_authors(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'&' | b';' if depth == 0 => {
                tokens.push(&text[start..i]);
                start = i + 1;
            }
            b'a' | b'A' if depth == 0 && is_and_word(bytes, i) => {
                tokens.push(&text[start..i]);
                i += 3;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    tokens.push(&text[start..]);

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// A whitespace-bounded, case-insensitive `and` starting at `i`.
fn is_and_word(bytes: &[u8], i: usize) -> bool {
    i > 0
        && bytes[i - 1].is_ascii_whitespace()
        && bytes.len() > i + 3
        && bytes[i..i + 3].eq_ignore_ascii_case(b"and")
        && bytes[i + 3].is_ascii_whitespace()
}

/// Parse one name token. Returns `None` for blank tokens.
pub fn parse_person(token: &str) -> Option<Person> {
    let token = token.trim().trim_end_matches(',').trim();
    if token.is_empty() {
        return None;
    }

    if let Some(inner) = wholly_braced(token) {
        return Some(Person::literal(inner.trim()));
    }

    let parts = split_top_level(token, |c| c == ',');
    if parts.len() > 1 {
        let family = parts[0].trim();
        // `Family, Jr., Given`: the given name is the last part.
        let given = parts[parts.len() - 1].trim();
        return Some(match (family.is_empty(), given.is_empty()) {
            (false, _) => Person::new(family, given),
            (true, false) => Person::literal(given),
            (true, true) => return None,
        });
    }

    let words = split_top_level(token, char::is_whitespace);
    let words: Vec<&str> = words.into_iter().filter(|w| !w.is_empty()).collect();
    match words.split_last() {
        Some((family, [])) => Some(Person::literal(*family)),
        Some((family, given)) => Some(Person::new(*family, given.join(" "))),
        None => None,
    }
}

/// The inside of `{...}` when the opening brace closes at the very end.
fn wholly_braced(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('{')?.strip_suffix('}')?;
    let mut depth = 1usize;
    for c in inner.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    Some(inner)
}

/// Split on characters matching `is_sep` that sit outside braces.
fn split_top_level(text: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_sep(c) => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_family_order() {
        assert_eq!(
            parse_person("Jane A. Smith"),
            Some(Person::new("Smith", "Jane A."))
        );
    }

    #[test]
    fn test_family_comma_given() {
        assert_eq!(
            parse_person("Smith, Jane A."),
            Some(Person::new("Smith", "Jane A."))
        );
        assert_eq!(
            parse_person("King, Jr., Martin Luther"),
            Some(Person::new("King", "Martin Luther"))
        );
    }

    #[test]
    fn test_single_word_is_family() {
        assert_eq!(parse_person("Plato"), Some(Person::new("Plato", "")));
    }

    #[test]
    fn test_braced_literal() {
        assert_eq!(
            parse_person("{World Health Organization}"),
            Some(Person::literal("World Health Organization"))
        );
        // Braces around a part only protect that part.
        assert_eq!(
            parse_person("Ludwig {van Beethoven}"),
            Some(Person::new("{van Beethoven}", "Ludwig"))
        );
    }

    #[test]
    fn test_split_on_and_ampersand_semicolon() {
        assert_eq!(
            split_authors("Jane A. Smith and John B. Doe & Ann Lee; Bo Xu"),
            vec!["Jane A. Smith", "John B. Doe", "Ann Lee", "Bo Xu"]
        );
        assert_eq!(
            split_authors("Smith, J. AND Anderson, K."),
            vec!["Smith, J.", "Anderson, K."]
        );
    }

    #[test]
    fn test_list_items_are_never_resplit() {
        let value = RawValue::List(vec!["Procter & Gamble".to_string()]);
        assert_eq!(
            parse_authors(&value),
            vec![Person::new("Gamble", "Procter &")]
        );
        let text = RawValue::Text("Procter & Gamble".to_string());
        assert_eq!(parse_authors(&text).len(), 2);
    }

    #[test]
    fn test_no_split_inside_braces() {
        assert_eq!(
            split_authors("{Barnes and Noble} and Doe, J."),
            vec!["{Barnes and Noble}", "Doe, J."]
        );
    }

    #[test]
    fn test_list_values_are_not_resplit() {
        let value = RawValue::List(vec!["Smith, Jane".into(), "Doe, John".into()]);
        let people = parse_authors(&value);
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].family, "Doe");
    }

    #[test]
    fn test_blank_tokens_are_dropped() {
        let value = RawValue::Text(" and Smith, J. and ".into());
        assert_eq!(parse_authors(&value), vec![Person::new("Smith", "J.")]);
    }
}
