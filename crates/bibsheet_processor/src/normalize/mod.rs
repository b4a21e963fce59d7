/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Record normalization: raw field maps in, canonical [`Reference`]s out.

pub mod dates;
pub mod latex;
pub mod synonyms;

use std::collections::HashMap;

use bibsheet_core::{InputFormat, Person, RawValue, Reference};

use crate::names::parse_authors;
use crate::parser::{EntryParseError, RawEntry};
use synonyms::CanonicalField;

/// References that survived normalization, plus the entries dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOutcome {
    pub references: Vec<Reference>,
    pub dropped: Vec<EntryParseError>,
}

/// Normalize every entry, keeping file order.
pub fn normalize(entries: Vec<RawEntry>) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    for entry in entries {
        match normalize_entry(entry) {
            Ok(reference) => outcome.references.push(reference),
            Err(error) => {
                tracing::warn!(
                    format = %error.format,
                    entry = error.index,
                    reason = %error.message,
                    "dropping entry"
                );
                outcome.dropped.push(error);
            }
        }
    }
    outcome
}

/// Build one [`Reference`]. Fails only for entries with neither a title
/// nor a citation key.
pub fn normalize_entry(entry: RawEntry) -> Result<Reference, EntryParseError> {
    let RawEntry {
        format,
        index,
        entry_type,
        key,
        mut fields,
        ..
    } = entry;

    let clean = |raw: &str| match format {
        InputFormat::Bibtex => latex::clean_bibtex(raw),
        _ => latex::collapse_whitespace(raw),
    };

    let mut slots: HashMap<CanonicalField, RawValue> = HashMap::new();
    for (name, field) in synonyms::field_table(format) {
        if slots.contains_key(field) {
            continue;
        }
        if let Some(value) = fields.shift_remove(*name) {
            slots.insert(*field, value);
        }
    }
    let text = |field: CanonicalField| {
        slots
            .get(&field)
            .and_then(RawValue::first)
            .map(clean)
            .filter(|s| !s.is_empty())
    };

    let title = text(CanonicalField::Title).unwrap_or_default();
    let raw_id = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
    if title.is_empty() && raw_id.is_none() {
        return Err(EntryParseError {
            format,
            index,
            message: "entry has neither a title nor a citation key".to_string(),
        });
    }

    let authors = slots
        .get(&CanonicalField::Author)
        .map(parse_authors)
        .unwrap_or_default()
        .into_iter()
        .map(|p| Person::new(clean(&p.family), clean(&p.given)))
        .filter(|p| !p.is_empty())
        .collect();

    let date = text(CanonicalField::Date);
    let year_field = text(CanonicalField::Year);
    let year = dates::extract_year(date.as_deref(), year_field.as_deref());
    let month = dates::normalize_month(text(CanonicalField::Month).as_deref(), date.as_deref());

    let pages = text(CanonicalField::Pages).or_else(|| {
        match (
            text(CanonicalField::StartPage),
            text(CanonicalField::EndPage),
        ) {
            (Some(start), Some(end)) => Some(format!("{start}-{end}")),
            (Some(start), None) => Some(start),
            _ => None,
        }
    });

    Ok(Reference {
        raw_id: raw_id.unwrap_or_else(|| format!("entry-{index}")),
        entry_type: synonyms::entry_type(format, &entry_type),
        authors,
        title,
        container_title: text(CanonicalField::ContainerTitle),
        year: year.year,
        date_text: year.date_text,
        month,
        volume: text(CanonicalField::Volume),
        issue: text(CanonicalField::Issue),
        pages,
        publisher: text(CanonicalField::Publisher),
        doi: text(CanonicalField::Doi).map(|d| strip_doi_prefix(&d)),
        extra: fields,
    })
}

fn strip_doi_prefix(doi: &str) -> String {
    let lower = doi.to_ascii_lowercase();
    for prefix in ["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "doi:"] {
        if lower.starts_with(prefix) {
            return doi[prefix.len()..].trim().to_string();
        }
    }
    doi.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{BibtexParser, CslJsonParser, EndnoteParser, FormatParser, RisParser};
    use bibsheet_core::EntryType;

    fn one(parser: &dyn FormatParser, input: &str) -> Reference {
        let outcome = parser.parse(input);
        let mut refs = normalize(outcome.entries).references;
        assert_eq!(refs.len(), 1);
        refs.remove(0)
    }

    #[test]
    fn test_bibtex_article() {
        let r = one(
            &BibtexParser,
            "@article{smith2023machine, author={Jane A. Smith and John B. Doe}, title={Machine Learning Methods}, journal={Journal of AI Research}, year={2023}, volume={45}, number={2}, pages={123--145}}",
        );
        assert_eq!(r.raw_id, "smith2023machine");
        assert_eq!(r.entry_type, EntryType::Article);
        assert_eq!(
            r.authors,
            vec![Person::new("Smith", "Jane A."), Person::new("Doe", "John B.")]
        );
        assert_eq!(r.title, "Machine Learning Methods");
        assert_eq!(r.container_title.as_deref(), Some("Journal of AI Research"));
        assert_eq!(r.year, Some(2023));
        assert_eq!(r.volume.as_deref(), Some("45"));
        assert_eq!(r.issue.as_deref(), Some("2"));
        assert_eq!(r.pages.as_deref(), Some("123--145"));
    }

    #[test]
    fn test_ris_start_and_end_pages_combine() {
        let r = one(
            &RisParser,
            "TY  - JOUR\nAU  - Smith, Jane\nAU  - Doe, John\nTI  - T\nJO  - J\nPY  - 2019///\nSP  - 5\nEP  - 9\nDO  - https://doi.org/10.1/abc\nER  -\n",
        );
        assert_eq!(r.authors.len(), 2);
        assert_eq!(r.authors[0].family, "Smith");
        assert_eq!(r.pages.as_deref(), Some("5-9"));
        assert_eq!(r.year, Some(2019));
        assert_eq!(r.doi.as_deref(), Some("10.1/abc"));
        assert_eq!(r.raw_id, "entry-1");
    }

    #[test]
    fn test_csl_json_year_is_integer() {
        let r = one(
            &CslJsonParser,
            r#"[{"id": "a", "type": "book", "title": "T", "issued": {"date-parts": [[2023]]}}]"#,
        );
        assert_eq!(r.year, Some(2023));
        assert_eq!(r.entry_type, EntryType::Book);
    }

    #[test]
    fn test_endnote_record() {
        let r = one(
            &EndnoteParser,
            "%0 Book Section\n%A Kuhn, Thomas\n%T A Chapter\n%B The Book\n%D 1962\n%I Press\n%P 1-20\n",
        );
        assert_eq!(r.entry_type, EntryType::Chapter);
        assert_eq!(r.container_title.as_deref(), Some("The Book"));
        assert_eq!(r.publisher.as_deref(), Some("Press"));
    }

    #[test]
    fn test_entries_without_title_or_key_are_dropped() {
        let outcome = RisParser.parse("TY  - JOUR\nAU  - Smith, J.\nER  -\nTY  - JOUR\nTI  - Kept\nER  -\n");
        let normalized = normalize(outcome.entries);
        assert_eq!(normalized.references.len(), 1);
        assert_eq!(normalized.dropped.len(), 1);
        assert_eq!(normalized.dropped[0].index, 1);
    }

    #[test]
    fn test_unreadable_year_kept_as_text_and_extras_pass_through() {
        let r = one(
            &BibtexParser,
            "@misc{m, title={T}, year={in press}, note={Draft}, booktitle={Second container}, journal={First}}",
        );
        assert_eq!(r.year, None);
        assert_eq!(r.date_text.as_deref(), Some("in press"));
        assert_eq!(r.container_title.as_deref(), Some("First"));
        assert_eq!(r.extra.get("note").and_then(RawValue::first), Some("Draft"));
        assert!(r.extra.contains_key("booktitle"));
    }

    #[test]
    fn test_bibtex_cleanup_applies_to_names_and_titles() {
        let r = one(
            &BibtexParser,
            r#"@book{b, author={G{\"o}del, Kurt and {World Health Organization}}, title={On {DNA} \& {RNA}}, year=1931}"#,
        );
        assert_eq!(r.authors[0], Person::new("Gödel", "Kurt"));
        assert_eq!(r.authors[1], Person::literal("World Health Organization"));
        assert_eq!(r.title, "On DNA & RNA");
    }
}
