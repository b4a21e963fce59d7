/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::PathBuf;

use bibsheet_core::{
    FormattingConfig, NumberingStyle, Person, Reference, SortConfig, SortDirection, SortOrder,
    StyleId,
};
use bibsheet_processor::{ProcessedReferences, Processor};

pub const SMITH_DOE_BIB: &str = "@article{smith2023machine, author={Jane A. Smith and John B. Doe}, title={Machine Learning Methods}, journal={Journal of AI Research}, year={2023}, volume={45}, number={2}, pages={123--145}}";

/// Path of a file under the workspace `tests/fixtures` directory.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

pub fn config(style: StyleId, numbering: NumberingStyle, order: SortOrder) -> FormattingConfig {
    FormattingConfig {
        style,
        numbering_style: numbering,
        sort: SortConfig {
            order,
            year_order: SortDirection::Descending,
        },
        ..Default::default()
    }
}

/// Run the whole pipeline over a fixture file.
pub fn process_fixture(
    name: &str,
    style: StyleId,
    numbering: NumberingStyle,
    order: SortOrder,
) -> ProcessedReferences {
    let mut config = config(style, numbering, order);
    config.reference_file_path = fixture(name);
    Processor::new(config)
        .process_file()
        .expect("fixture should process")
}

pub fn texts(output: &ProcessedReferences) -> Vec<&str> {
    output.entries.iter().map(|e| e.text.as_str()).collect()
}

pub fn ids(output: &ProcessedReferences) -> Vec<&str> {
    output.entries.iter().map(|e| e.id.as_str()).collect()
}

/// Create an article with several authors.
pub fn make_article_multi_author(
    id: &str,
    authors: Vec<(&str, &str)>,
    year: i32,
    title: &str,
) -> Reference {
    let mut reference = bibsheet_core::ref_article!(id, "", "", year, title);
    reference.authors = authors
        .into_iter()
        .map(|(family, given)| Person::new(family, given))
        .collect();
    reference
}

/// A reference with nothing but a title.
pub fn make_bare(id: &str, title: &str) -> Reference {
    Reference {
        raw_id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}
