/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DisplayAsSort},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, WrapPunctuation},
};

pub const NO_DATE: Option<&str> = None;

/// ACS: every author listed, inverted, separated by semicolons.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::All,
        initialize_with: Some(". ".to_string()),
        delimiter: "; ".to_string(),
        and: AndOptions::None,
        ..Default::default()
    }
}

/// Titles are kept exactly as given.
///
/// Renders as:
/// Smith, J. A.; Doe, J. B. Machine Learning Methods. Journal of AI Research 2023, 45 (2), 123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, suffix = ". "),
        tc_list!(
            [
                tc_list!([tc_title!(Container), tc_date!(Year)], " "),
                tc_list!(
                    [
                        tc_number!(Volume),
                        tc_number!(Issue, wrap = WrapPunctuation::Parentheses),
                    ],
                    " "
                ),
                tc_number!(Pages),
            ],
            ", ",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, suffix = "; "),
        tc_list!([tc_variable!(Publisher), tc_date!(Year)], ": ", suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, suffix = ". "),
        tc_list!(
            [
                tc_title!(Container, prefix = "In "),
                tc_list!([tc_variable!(Publisher), tc_date!(Year)], ": "),
                tc_number!(Pages, prefix = "pp "),
            ],
            "; ",
            suffix = "."
        ),
    ]
}
