/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, TextCase, WrapPunctuation},
};

/// Term rendered in the date slot when a reference has no date.
pub const NO_DATE: Option<&str> = Some("n.d.");

/// APA 7 author lists: every name inverted, initials, ampersand, and an
/// ellipsis before the final author past twenty names.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::All,
        initialize_with: Some(". ".to_string()),
        and: AndOptions::Symbol,
        delimiter_precedes_last: DelimiterPrecedesLast::Always,
        shorten: Some(ShortenListOptions {
            min: 21,
            use_first: 19,
            use_last: true,
        }),
        ..Default::default()
    }
}

/// Journal article.
///
/// Renders as:
/// Smith, J. A., & Doe, J. B. (2023). Machine learning methods. Journal of AI Research, 45(2), 123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!(
            [
                tc_title!(Container),
                tc_list!(
                    [
                        tc_number!(Volume),
                        tc_number!(Issue, wrap = WrapPunctuation::Parentheses),
                    ],
                    ""
                ),
                tc_number!(Pages),
            ],
            ", ",
            suffix = ". "
        ),
        tc_variable!(Doi, prefix = "https://doi.org/"),
    ]
}

/// Book, thesis, report and anything without a more specific template.
pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_variable!(Publisher, suffix = ". "),
        tc_variable!(Doi, prefix = "https://doi.org/"),
    ]
}

/// Book chapter or conference paper.
pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!(
            [
                tc_title!(Container, prefix = "In "),
                tc_number!(
                    Pages,
                    inner_prefix = "pp. ",
                    wrap = WrapPunctuation::Parentheses
                ),
            ],
            " ",
            suffix = ". "
        ),
        tc_variable!(Publisher, suffix = ". "),
        tc_variable!(Doi, prefix = "https://doi.org/"),
    ]
}
