/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Cleanup of BibTeX field text: LaTeX escapes, accents and
//! case-protection braces.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ACCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{?\\([`'^"~=.])\s*\{?\\?([A-Za-z])\}?\}?"#).expect("accent pattern is valid")
});

static CEDILLA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{?\\c\s*\{?([cCsS])\}?\}?").expect("cedilla pattern is valid")
});

static FORMAT_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:emph|textit|textbf|textsc|textrm|texttt|textsf|mathrm|mbox|url)\s*")
        .expect("command pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turn raw BibTeX field text into display text.
pub fn clean_bibtex(raw: &str) -> String {
    let text = ACCENT.replace_all(raw, |caps: &Captures<'_>| {
        let mark = caps[1].chars().next().unwrap_or_default();
        let letter = caps[2].chars().next().unwrap_or_default();
        match accented(mark, letter) {
            Some(c) => c.to_string(),
            None => caps[2].to_string(),
        }
    });
    let text = CEDILLA.replace_all(&text, |caps: &Captures<'_>| match &caps[1] {
        "c" => "ç".to_string(),
        "C" => "Ç".to_string(),
        "s" => "ş".to_string(),
        _ => "Ş".to_string(),
    });
    let text = FORMAT_COMMAND.replace_all(&text, "");

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek().copied() {
                Some(next @ ('&' | '%' | '_' | '$' | '#' | '{' | '}')) => {
                    out.push(next);
                    chars.next();
                }
                Some('\\') => {
                    out.push(' ');
                    chars.next();
                }
                Some(next) if next.is_ascii_alphabetic() => {
                    let mut word = String::new();
                    while let Some(&c) = chars.peek().filter(|c| c.is_ascii_alphabetic()) {
                        word.push(c);
                        chars.next();
                    }
                    out.push_str(control_word(&word));
                }
                _ => {}
            },
            '{' | '}' => {}
            '~' => out.push('\u{a0}'),
            _ => out.push(c),
        }
    }
    collapse_whitespace(&out)
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Text for a control word: letter symbols map to their character, other
/// one-letter words are accent commands whose mark is dropped, and longer
/// words (`\LaTeX`) are kept as written.
fn control_word(word: &str) -> &str {
    match word {
        "i" => "i",
        "j" => "j",
        "o" => "ø",
        "O" => "Ø",
        "l" => "ł",
        "L" => "Ł",
        "ss" => "ß",
        "aa" => "å",
        "AA" => "Å",
        "ae" => "æ",
        "AE" => "Æ",
        "oe" => "œ",
        "OE" => "Œ",
        w if w.len() == 1 => "",
        w => w,
    }
}

fn accented(mark: char, letter: char) -> Option<char> {
    let table: &[(char, &str, &str)] = &[
        ('\'', "aeiouyAEIOUYcnsz", "áéíóúýÁÉÍÓÚÝćńśź"),
        ('`', "aeiouAEIOU", "àèìòùÀÈÌÒÙ"),
        ('^', "aeiouAEIOU", "âêîôûÂÊÎÔÛ"),
        ('"', "aeiouyAEIOU", "äëïöüÿÄËÏÖÜ"),
        ('~', "anoANO", "ãñõÃÑÕ"),
        ('=', "aeiouAEIOU", "āēīōūĀĒĪŌŪ"),
        ('.', "zZ", "żŻ"),
    ];
    let (_, plain, marked) = table.iter().find(|(m, _, _)| *m == mark)?;
    let position = plain.chars().position(|c| c == letter)?;
    marked.chars().nth(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_protection_braces_are_removed() {
        assert_eq!(clean_bibtex("The {DNA} of {Things}"), "The DNA of Things");
    }

    #[test]
    fn test_escapes_and_accents() {
        assert_eq!(clean_bibtex(r"Smith \& Sons"), "Smith & Sons");
        assert_eq!(clean_bibtex(r#"G{\"o}del"#), "Gödel");
        assert_eq!(clean_bibtex(r"Erd\H{o}s"), "Erdos");
        assert_eq!(clean_bibtex(r"Fran\c{c}ois"), "François");
        assert_eq!(clean_bibtex(r"Garc\'{\i}a"), "García");
        assert_eq!(clean_bibtex(r"Stra{\ss}e"), "Straße");
        assert_eq!(clean_bibtex(r"The {\LaTeX} Companion"), "The LaTeX Companion");
        assert_eq!(clean_bibtex(r"Caf\'e"), "Café");
    }

    #[test]
    fn test_formatting_commands_keep_text() {
        assert_eq!(
            clean_bibtex(r"On \emph{Homo sapiens} and \textbf{bold}"),
            "On Homo sapiens and bold"
        );
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(clean_bibtex("  A\n   multi-line\ttitle "), "A multi-line title");
    }
}
