/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::options::{ContributorConfig, DelimiterPrecedesLast, DisplayAsSort};
use bibsheet_core::template::TemplateContributor;
use bibsheet_core::{Person, Reference};

use crate::values::{ComponentValues, RenderOptions};

impl ComponentValues for TemplateContributor {
    fn values(&self, reference: &Reference, options: &RenderOptions<'_>) -> Option<String> {
        let names = format_names(&reference.authors, options.names);
        if !names.is_empty() {
            return Some(names);
        }
        let fallback = options.no_author_text.trim();
        (!fallback.is_empty()).then(|| fallback.to_string())
    }
}

/// Format an author list according to a style's name rules.
pub fn format_names(names: &[Person], config: &ContributorConfig) -> String {
    let names: Vec<&Person> = names.iter().filter(|p| !p.is_empty()).collect();
    if names.is_empty() {
        return String::new();
    }

    let (shown, use_et_al, last) = match &config.shorten {
        Some(opts) if names.len() >= opts.min && opts.use_first < names.len() => {
            let first = names[..opts.use_first.max(1)].to_vec();
            let last = if opts.use_last {
                names.last().copied()
            } else {
                None
            };
            (first, true, last)
        }
        _ => (names.clone(), false, None),
    };

    let formatted: Vec<String> = shown
        .iter()
        .enumerate()
        .map(|(i, name)| format_single_name(name, i, config))
        .collect();
    let delimiter = config.delimiter.as_str();

    let result = match (formatted.as_slice(), config.and.as_word()) {
        ([only], _) => only.clone(),
        (all, None) => all.join(delimiter),
        // Shortened lists never carry a conjunction.
        (all, Some(_)) if use_et_al => all.join(delimiter),
        ([rest @ .., last], Some(conjunction)) => {
            let use_delimiter = match config.delimiter_precedes_last {
                DelimiterPrecedesLast::Always => true,
                DelimiterPrecedesLast::Never => false,
                DelimiterPrecedesLast::Contextual => formatted.len() > 2,
                DelimiterPrecedesLast::AfterInvertedName => is_inverted(rest.len() - 1, config),
            };
            if use_delimiter {
                format!("{}{}{} {}", rest.join(delimiter), delimiter, conjunction, last)
            } else {
                format!("{} {} {}", rest.join(delimiter), conjunction, last)
            }
        }
        ([], _) => String::new(),
    };

    if !use_et_al {
        return result;
    }
    if let Some(last) = last {
        let last = format_single_name(last, names.len() - 1, config);
        return format!("{} … {}", result, last);
    }
    let use_delimiter = match config.delimiter_precedes_et_al {
        DelimiterPrecedesLast::Always => true,
        DelimiterPrecedesLast::Never => false,
        DelimiterPrecedesLast::Contextual => shown.len() > 1,
        DelimiterPrecedesLast::AfterInvertedName => is_inverted(shown.len() - 1, config),
    };
    if use_delimiter {
        format!("{}{}et al.", result, delimiter)
    } else {
        format!("{} et al.", result)
    }
}

fn is_inverted(index: usize, config: &ContributorConfig) -> bool {
    match config.display_as_sort {
        DisplayAsSort::All => true,
        DisplayAsSort::First => index == 0,
        DisplayAsSort::None => false,
    }
}

/// Format a single name at position `index` of the list.
pub fn format_single_name(name: &Person, index: usize, config: &ContributorConfig) -> String {
    let family = name.family.trim();
    let given = name.given.trim();
    if given.is_empty() {
        return family.to_string();
    }
    if family.is_empty() {
        return given.to_string();
    }

    let given = match &config.initialize_with {
        Some(with) => initialize(given, with),
        None => given.to_string(),
    };

    if is_inverted(index, config) {
        format!("{}{}{}", family, config.sort_separator, given)
    } else {
        format!("{} {}", given, family)
    }
}

/// Reduce given names to initials, each followed by `with`.
///
/// Hyphenated names keep their hyphen when the initials carry periods
/// ("Jean-Paul" becomes "J.-P."), and are run together otherwise ("JP").
pub fn initialize(given: &str, with: &str) -> String {
    let keep_hyphen = with.contains('.');
    let mut out = String::new();
    for word in given.split_whitespace() {
        for (i, part) in word.split('-').filter(|p| !p.is_empty()).enumerate() {
            let Some(initial) = part.chars().find(|c| c.is_alphabetic()) else {
                continue;
            };
            if i > 0 && keep_hyphen {
                out.truncate(out.trim_end().len());
                out.push('-');
            }
            out.extend(initial.to_uppercase());
            out.push_str(with);
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsheet_core::embedded;
    use bibsheet_core::options::ShortenListOptions;
    use bibsheet_core::StyleId;

    fn smith_doe() -> Vec<Person> {
        vec![Person::new("Smith", "Jane A."), Person::new("Doe", "John B.")]
    }

    fn many(n: usize) -> Vec<Person> {
        (1..=n)
            .map(|i| Person::new(format!("Author{i}"), "Alex"))
            .collect()
    }

    #[test]
    fn test_initialize() {
        assert_eq!(initialize("Jane A.", ". "), "J. A.");
        assert_eq!(initialize("Jane A.", "."), "J.A.");
        assert_eq!(initialize("Jane A.", ""), "JA");
        assert_eq!(initialize("Jean-Paul", ". "), "J.-P.");
        assert_eq!(initialize("Jean-Paul", ""), "JP");
        assert_eq!(initialize("élodie", ". "), "É.");
    }

    #[test]
    fn test_two_names_per_style() {
        let cases = [
            (StyleId::Apa, "Smith, J. A., & Doe, J. B."),
            (StyleId::Mla, "Smith, Jane A., and John B. Doe"),
            (StyleId::Chicago, "Smith, Jane A., and John B. Doe"),
            (StyleId::Harvard, "Smith, J.A. and Doe, J.B."),
            (StyleId::Ieee, "J. A. Smith and J. B. Doe"),
            (StyleId::Vancouver, "Smith JA, Doe JB"),
            (StyleId::Ama, "Smith JA, Doe JB"),
            (StyleId::Acs, "Smith, J. A.; Doe, J. B."),
            (StyleId::Nature, "Smith, J. A. & Doe, J. B."),
        ];
        for (style, expected) in cases {
            let config = embedded::contributors(style);
            assert_eq!(format_names(&smith_doe(), &config), expected, "{style}");
        }
    }

    #[test]
    fn test_three_names_contextual_delimiter() {
        let config = embedded::contributors(StyleId::Ieee);
        let names = vec![
            Person::new("Smith", "Jane"),
            Person::new("Doe", "John"),
            Person::new("Lee", "Kim"),
        ];
        assert_eq!(format_names(&names, &config), "J. Smith, J. Doe, and K. Lee");
    }

    #[test]
    fn test_et_al_thresholds() {
        let vancouver = embedded::contributors(StyleId::Vancouver);
        let six = format_names(&many(6), &vancouver);
        assert!(!six.contains("et al."));
        let seven = format_names(&many(7), &vancouver);
        assert!(seven.starts_with("Author1 A, "));
        assert!(seven.ends_with("Author6 A, et al."));

        let ieee = embedded::contributors(StyleId::Ieee);
        assert_eq!(format_names(&many(7), &ieee), "A. Author1 et al.");

        let mla = embedded::contributors(StyleId::Mla);
        assert_eq!(format_names(&many(3), &mla), "Author1, Alex, et al.");
    }

    #[test]
    fn test_use_last_shows_final_author() {
        let apa = embedded::contributors(StyleId::Apa);
        let listed = format_names(&many(20), &apa);
        assert!(listed.contains("& Author20, A."));

        let shortened = format_names(&many(21), &apa);
        assert!(shortened.contains("Author19, A. … Author21, A."));
        assert!(!shortened.contains("Author20"));
        assert!(!shortened.contains('&'));
    }

    #[test]
    fn test_literal_and_single_part_names() {
        let config = ContributorConfig {
            display_as_sort: DisplayAsSort::All,
            initialize_with: Some(". ".to_string()),
            shorten: Some(ShortenListOptions {
                min: 10,
                use_first: 1,
                use_last: false,
            }),
            ..Default::default()
        };
        let names = vec![Person::literal("World Health Organization")];
        assert_eq!(format_names(&names, &config), "World Health Organization");
        assert_eq!(format_names(&[], &config), "");
        assert_eq!(format_names(&[Person::default()], &config), "");
    }
}
