/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The nine citation styles.
//!
//! Every style is a [`Formatter`]: a name-list configuration plus one
//! template per entry type, both taken from the embedded style tables in
//! `bibsheet_core::embedded`. Formatting is pure and never fails; fields a
//! reference lacks are simply left out.

use bibsheet_core::embedded;
use bibsheet_core::options::ContributorConfig;
use bibsheet_core::{EntryType, Reference, StyleId, TemplateComponent};

use crate::render::{finish_entry, render_template};
use crate::values::RenderOptions;

/// A citation style that renders a reference as one line of text.
pub trait Formatter: Sync {
    fn id(&self) -> StyleId;

    /// Author-list rules.
    fn name_options(&self) -> ContributorConfig;

    /// The template for an entry type.
    fn template(&self, entry_type: EntryType) -> Vec<TemplateComponent>;

    /// Term printed in place of a missing date, if the style has one.
    fn no_date_term(&self) -> Option<&'static str>;

    fn format(&self, reference: &Reference) -> String {
        let names = self.name_options();
        let options = RenderOptions {
            names: &names,
            no_date_term: self.no_date_term(),
            no_author_text: "",
        };
        self.format_with(reference, &options)
    }

    /// Falls back to the citation key when the template renders nothing.
    fn format_with(&self, reference: &Reference, options: &RenderOptions<'_>) -> String {
        let text = render_template(&self.template(reference.entry_type), reference, options);
        if text.is_empty() {
            finish_entry(&reference.raw_id)
        } else {
            text
        }
    }
}

macro_rules! embedded_formatter {
    ($($name:ident => $id:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Formatter for $name {
                fn id(&self) -> StyleId {
                    StyleId::$id
                }

                fn name_options(&self) -> ContributorConfig {
                    embedded::contributors(StyleId::$id)
                }

                fn template(&self, entry_type: EntryType) -> Vec<TemplateComponent> {
                    embedded::bibliography(StyleId::$id, entry_type)
                }

                fn no_date_term(&self) -> Option<&'static str> {
                    embedded::no_date_term(StyleId::$id)
                }
            }
        )+
    };
}

embedded_formatter! {
    Apa => Apa,
    Mla => Mla,
    Chicago => Chicago,
    Harvard => Harvard,
    Ieee => Ieee,
    Vancouver => Vancouver,
    Ama => Ama,
    Acs => Acs,
    Nature => Nature,
}

/// Look up the formatter for a style.
pub fn formatter(style: StyleId) -> &'static dyn Formatter {
    match style {
        StyleId::Apa => &Apa,
        StyleId::Mla => &Mla,
        StyleId::Chicago => &Chicago,
        StyleId::Harvard => &Harvard,
        StyleId::Ieee => &Ieee,
        StyleId::Vancouver => &Vancouver,
        StyleId::Ama => &Ama,
        StyleId::Acs => &Acs,
        StyleId::Nature => &Nature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsheet_core::Person;

    fn smith_doe() -> Reference {
        Reference {
            raw_id: "smith2023machine".to_string(),
            entry_type: EntryType::Article,
            authors: vec![Person::new("Smith", "Jane A."), Person::new("Doe", "John B.")],
            title: "Machine Learning Methods".to_string(),
            container_title: Some("Journal of AI Research".to_string()),
            year: Some(2023),
            volume: Some("45".to_string()),
            issue: Some("2".to_string()),
            pages: Some("123--145".to_string()),
            ..Default::default()
        }
    }

    fn kuhn() -> Reference {
        Reference {
            raw_id: "kuhn1962".to_string(),
            entry_type: EntryType::Book,
            authors: vec![Person::new("Kuhn", "Thomas S.")],
            title: "The Structure of Scientific Revolutions".to_string(),
            year: Some(1962),
            publisher: Some("University of Chicago Press".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_matches_id() {
        for style in StyleId::ALL {
            assert_eq!(formatter(*style).id(), *style);
        }
    }

    #[test]
    fn test_article_in_every_style() {
        let cases = [
            (
                StyleId::Apa,
                "Smith, J. A., & Doe, J. B. (2023). Machine learning methods. Journal of AI Research, 45(2), 123-145.",
            ),
            (
                StyleId::Mla,
                "Smith, Jane A., and John B. Doe. \"Machine Learning Methods.\" Journal of AI Research, vol. 45, no. 2, 2023, pp. 123-145.",
            ),
            (
                StyleId::Chicago,
                "Smith, Jane A., and John B. Doe. 2023. \"Machine Learning Methods.\" Journal of AI Research 45, no. 2: 123-145.",
            ),
            (
                StyleId::Harvard,
                "Smith, J.A. and Doe, J.B. (2023) 'Machine learning methods', Journal of AI Research, 45(2), pp. 123-145.",
            ),
            (
                StyleId::Ieee,
                "J. A. Smith and J. B. Doe, \"Machine learning methods,\" Journal of AI Research, vol. 45, no. 2, pp. 123-145, 2023.",
            ),
            (
                StyleId::Vancouver,
                "Smith JA, Doe JB. Machine learning methods. Journal of AI Research. 2023;45(2):123-145.",
            ),
            (
                StyleId::Ama,
                "Smith JA, Doe JB. Machine learning methods. Journal of AI Research. 2023;45(2):123-145.",
            ),
            (
                StyleId::Acs,
                "Smith, J. A.; Doe, J. B. Machine Learning Methods. Journal of AI Research 2023, 45 (2), 123-145.",
            ),
            (
                StyleId::Nature,
                "Smith, J. A. & Doe, J. B. Machine learning methods. Journal of AI Research 45, 123-145 (2023).",
            ),
        ];
        let reference = smith_doe();
        for (style, expected) in cases {
            assert_eq!(formatter(style).format(&reference), expected, "{style}");
        }
    }

    #[test]
    fn test_vancouver_year_month() {
        let mut reference = smith_doe();
        reference.month = Some("Mar".to_string());
        assert_eq!(
            Vancouver.format(&reference),
            "Smith JA, Doe JB. Machine learning methods. Journal of AI Research. 2023 Mar;45(2):123-145."
        );
    }

    #[test]
    fn test_book_templates() {
        let reference = kuhn();
        assert_eq!(
            Apa.format(&reference),
            "Kuhn, T. S. (1962). The structure of scientific revolutions. University of Chicago Press."
        );
        assert_eq!(
            Mla.format(&reference),
            "Kuhn, Thomas S. The Structure of Scientific Revolutions. University of Chicago Press, 1962."
        );
        assert_eq!(
            Nature.format(&reference),
            "Kuhn, T. S. The structure of scientific revolutions (University of Chicago Press, 1962)."
        );
    }

    #[test]
    fn test_doi_ends_without_period() {
        let mut reference = smith_doe();
        reference.doi = Some("10.1000/xyz123".to_string());
        assert!(Apa.format(&reference).ends_with("123-145. https://doi.org/10.1000/xyz123"));
        assert!(Ama.format(&reference).ends_with("123-145. doi:10.1000/xyz123"));
    }

    #[test]
    fn test_missing_fields_degrade() {
        let bare = Reference {
            raw_id: "x".to_string(),
            title: "Untitled Notes".to_string(),
            ..Default::default()
        };
        assert_eq!(Apa.format(&bare), "(n.d.). Untitled notes.");
        assert_eq!(Ieee.format(&bare), "Untitled notes.");
        for style in StyleId::ALL {
            let text = formatter(*style).format(&bare);
            assert!(!text.is_empty(), "{style}");
            assert!(!text.contains("None") && !text.contains("null"), "{style}: {text}");
            assert!(!text.starts_with(['.', ',', ' ']), "{style}: {text}");
        }
    }

    #[test]
    fn test_key_only_reference_renders_its_key() {
        let keyed = Reference {
            raw_id: "smith2020".to_string(),
            ..Default::default()
        };
        assert_eq!(Mla.format(&keyed), "smith2020.");
        assert_eq!(Ieee.format(&keyed), "smith2020.");
        for style in StyleId::ALL {
            assert!(!formatter(*style).format(&keyed).is_empty(), "{style}");
        }
    }

    #[test]
    fn test_no_author_text_fills_the_author_slot() {
        let mut reference = kuhn();
        reference.authors.clear();
        let names = Chicago.name_options();
        let options = RenderOptions {
            names: &names,
            no_date_term: Chicago.no_date_term(),
            no_author_text: "Anonymous",
        };
        assert_eq!(
            Chicago.format_with(&reference, &options),
            "Anonymous. 1962. The Structure of Scientific Revolutions. University of Chicago Press."
        );
    }
}
