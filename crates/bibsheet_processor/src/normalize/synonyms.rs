/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-format field and type synonym tables.
//!
//! Each table is a finite, ordered mapping from the names a format uses to
//! the canonical slot they fill. When several synonyms for one slot are
//! present, the earliest table row wins and the rest pass through as extra
//! fields.

use bibsheet_core::{EntryType, InputFormat};

/// Canonical slots of a [`bibsheet_core::Reference`] fed from raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Title,
    ContainerTitle,
    Author,
    /// A field holding a bare year.
    Year,
    /// A free-form or structured date.
    Date,
    Month,
    Volume,
    Issue,
    Pages,
    StartPage,
    EndPage,
    Publisher,
    Doi,
}

use CanonicalField as F;

const BIBTEX_FIELDS: &[(&str, CanonicalField)] = &[
    ("title", F::Title),
    ("journal", F::ContainerTitle),
    ("journaltitle", F::ContainerTitle),
    ("booktitle", F::ContainerTitle),
    ("author", F::Author),
    ("date", F::Date),
    ("year", F::Year),
    ("month", F::Month),
    ("volume", F::Volume),
    ("number", F::Issue),
    ("issue", F::Issue),
    ("pages", F::Pages),
    ("publisher", F::Publisher),
    ("institution", F::Publisher),
    ("school", F::Publisher),
    ("organization", F::Publisher),
    ("doi", F::Doi),
];

const RIS_FIELDS: &[(&str, CanonicalField)] = &[
    ("TI", F::Title),
    ("T1", F::Title),
    ("JO", F::ContainerTitle),
    ("JF", F::ContainerTitle),
    ("T2", F::ContainerTitle),
    ("JA", F::ContainerTitle),
    ("BT", F::ContainerTitle),
    ("AU", F::Author),
    ("A1", F::Author),
    ("DA", F::Date),
    ("PY", F::Year),
    ("Y1", F::Year),
    ("VL", F::Volume),
    ("IS", F::Issue),
    ("SP", F::StartPage),
    ("EP", F::EndPage),
    ("PB", F::Publisher),
    ("DO", F::Doi),
];

const CSL_JSON_FIELDS: &[(&str, CanonicalField)] = &[
    ("title", F::Title),
    ("container-title", F::ContainerTitle),
    ("author", F::Author),
    ("date", F::Date),
    ("year", F::Year),
    ("month", F::Month),
    ("volume", F::Volume),
    ("issue", F::Issue),
    ("page", F::Pages),
    ("publisher", F::Publisher),
    ("doi", F::Doi),
];

const ENDNOTE_FIELDS: &[(&str, CanonicalField)] = &[
    ("%T", F::Title),
    ("%J", F::ContainerTitle),
    ("%B", F::ContainerTitle),
    ("%A", F::Author),
    ("%8", F::Date),
    ("%D", F::Year),
    ("%V", F::Volume),
    ("%N", F::Issue),
    ("%P", F::Pages),
    ("%I", F::Publisher),
    ("%R", F::Doi),
];

const BIBTEX_TYPES: &[(&str, EntryType)] = &[
    ("article", EntryType::Article),
    ("book", EntryType::Book),
    ("booklet", EntryType::Book),
    ("inproceedings", EntryType::InProceedings),
    ("conference", EntryType::InProceedings),
    ("incollection", EntryType::Chapter),
    ("inbook", EntryType::Chapter),
    ("phdthesis", EntryType::Thesis),
    ("mastersthesis", EntryType::Thesis),
    ("thesis", EntryType::Thesis),
    ("techreport", EntryType::Report),
    ("report", EntryType::Report),
];

const RIS_TYPES: &[(&str, EntryType)] = &[
    ("JOUR", EntryType::Article),
    ("JFULL", EntryType::Article),
    ("EJOUR", EntryType::Article),
    ("MGZN", EntryType::Article),
    ("NEWS", EntryType::Article),
    ("BOOK", EntryType::Book),
    ("EBOOK", EntryType::Book),
    ("EDBOOK", EntryType::Book),
    ("CONF", EntryType::InProceedings),
    ("CPAPER", EntryType::InProceedings),
    ("CHAP", EntryType::Chapter),
    ("ECHAP", EntryType::Chapter),
    ("THES", EntryType::Thesis),
    ("RPRT", EntryType::Report),
];

const CSL_JSON_TYPES: &[(&str, EntryType)] = &[
    ("article-journal", EntryType::Article),
    ("article", EntryType::Article),
    ("article-magazine", EntryType::Article),
    ("article-newspaper", EntryType::Article),
    ("book", EntryType::Book),
    ("paper-conference", EntryType::InProceedings),
    ("chapter", EntryType::Chapter),
    ("entry-encyclopedia", EntryType::Chapter),
    ("thesis", EntryType::Thesis),
    ("report", EntryType::Report),
];

const ENDNOTE_TYPES: &[(&str, EntryType)] = &[
    ("Journal Article", EntryType::Article),
    ("Magazine Article", EntryType::Article),
    ("Newspaper Article", EntryType::Article),
    ("Book", EntryType::Book),
    ("Edited Book", EntryType::Book),
    ("Conference Paper", EntryType::InProceedings),
    ("Conference Proceedings", EntryType::InProceedings),
    ("Book Section", EntryType::Chapter),
    ("Thesis", EntryType::Thesis),
    ("Report", EntryType::Report),
];

/// Field synonyms for a format, in priority order.
pub fn field_table(format: InputFormat) -> &'static [(&'static str, CanonicalField)] {
    match format {
        InputFormat::Bibtex => BIBTEX_FIELDS,
        InputFormat::Ris => RIS_FIELDS,
        InputFormat::CslJson => CSL_JSON_FIELDS,
        InputFormat::Endnote => ENDNOTE_FIELDS,
        InputFormat::Auto => &[],
    }
}

fn type_table(format: InputFormat) -> &'static [(&'static str, EntryType)] {
    match format {
        InputFormat::Bibtex => BIBTEX_TYPES,
        InputFormat::Ris => RIS_TYPES,
        InputFormat::CslJson => CSL_JSON_TYPES,
        InputFormat::Endnote => ENDNOTE_TYPES,
        InputFormat::Auto => &[],
    }
}

/// Map a format's type tag to an entry type; unknown tags become `Misc`.
pub fn entry_type(format: InputFormat, tag: &str) -> EntryType {
    let tag = tag.trim();
    type_table(format)
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, entry_type)| *entry_type)
        .unwrap_or_default()
}

/// Check that no table lists the same source name twice.
pub fn validate_tables() -> Result<(), String> {
    for format in InputFormat::ALL {
        let fields = field_table(*format).iter().map(|(name, _)| *name);
        let types = type_table(*format).iter().map(|(name, _)| *name);
        for (kind, names) in [("field", fields.collect::<Vec<_>>()), ("type", types.collect())] {
            for (i, name) in names.iter().enumerate() {
                if names[..i].iter().any(|n| n.eq_ignore_ascii_case(name)) {
                    return Err(format!("duplicate {format} {kind} synonym '{name}'"));
                }
            }
        }
    }
    Ok(())
}
