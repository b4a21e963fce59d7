/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Embedded template tables for the nine supported citation styles.
//!
//! Every style provides three templates (article, book, chapter), its
//! name-list options and an optional "no date" term. Entry types without a
//! template of their own use the book template.

pub mod acs;
pub mod ama;
pub mod apa;
pub mod chicago;
pub mod harvard;
pub mod ieee;
pub mod mla;
pub mod nature;
pub mod vancouver;

use crate::options::{ContributorConfig, StyleId};
use crate::reference::EntryType;
use crate::template::TemplateComponent;

type TemplateFn = fn() -> Vec<TemplateComponent>;

struct StyleTable {
    article: TemplateFn,
    book: TemplateFn,
    chapter: TemplateFn,
    contributors: fn() -> ContributorConfig,
    no_date: Option<&'static str>,
}

fn table(style: StyleId) -> StyleTable {
    macro_rules! table_for {
        ($module:ident) => {
            StyleTable {
                article: $module::article,
                book: $module::book,
                chapter: $module::chapter,
                contributors: $module::contributors,
                no_date: $module::NO_DATE,
            }
        };
    }

    match style {
        StyleId::Apa => table_for!(apa),
        StyleId::Mla => table_for!(mla),
        StyleId::Chicago => table_for!(chicago),
        StyleId::Harvard => table_for!(harvard),
        StyleId::Ieee => table_for!(ieee),
        StyleId::Vancouver => table_for!(vancouver),
        StyleId::Ama => table_for!(ama),
        StyleId::Acs => table_for!(acs),
        StyleId::Nature => table_for!(nature),
    }
}

/// The bibliography template a style uses for an entry type.
pub fn bibliography(style: StyleId, entry_type: EntryType) -> Vec<TemplateComponent> {
    let table = table(style);
    match entry_type {
        EntryType::Article => (table.article)(),
        EntryType::Chapter | EntryType::InProceedings => (table.chapter)(),
        EntryType::Book | EntryType::Thesis | EntryType::Report | EntryType::Misc => {
            (table.book)()
        }
    }
}

/// Name-list options for a style.
pub fn contributors(style: StyleId) -> ContributorConfig {
    (table(style).contributors)()
}

/// Text shown in place of a missing date, for styles that have one.
pub fn no_date_term(style: StyleId) -> Option<&'static str> {
    table(style).no_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateComponent;

    fn has_contributor(template: &[TemplateComponent]) -> bool {
        template
            .iter()
            .any(|c| matches!(c, TemplateComponent::Contributor(_)))
    }

    #[test]
    fn test_every_style_has_every_template() {
        for style in StyleId::ALL {
            for entry_type in EntryType::ALL {
                let template = bibliography(*style, *entry_type);
                assert!(!template.is_empty(), "{style}/{entry_type} is empty");
                assert!(
                    has_contributor(&template),
                    "{style}/{entry_type} has no author slot"
                );
            }
        }
    }

    #[test]
    fn test_no_date_term_only_for_author_date_styles() {
        let with_term: Vec<StyleId> = StyleId::ALL
            .iter()
            .copied()
            .filter(|s| no_date_term(*s).is_some())
            .collect();
        assert_eq!(
            with_term,
            vec![StyleId::Apa, StyleId::Chicago, StyleId::Harvard]
        );
    }

    #[test]
    fn test_style_name_options_differ() {
        assert_eq!(contributors(StyleId::Acs).delimiter, "; ");
        assert_eq!(contributors(StyleId::Vancouver).sort_separator, " ");
        assert!(contributors(StyleId::Acs).shorten.is_none());
        assert_eq!(
            contributors(StyleId::Vancouver).shorten.map(|s| s.use_first),
            Some(6)
        );
    }
}
