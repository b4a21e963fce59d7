/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, TextCase, WrapPunctuation},
};

pub const NO_DATE: Option<&str> = None;

/// Nature: inverted names with initials, ampersand, "et al." past five.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::All,
        initialize_with: Some(". ".to_string()),
        and: AndOptions::Symbol,
        delimiter_precedes_last: DelimiterPrecedesLast::Never,
        delimiter_precedes_et_al: DelimiterPrecedesLast::Never,
        shorten: Some(ShortenListOptions {
            min: 6,
            use_first: 1,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// Smith, J. A. & Doe, J. B. Machine learning methods. Journal of AI Research 45, 123-145 (2023).
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!(
            [
                tc_list!(
                    [
                        tc_list!([tc_title!(Container), tc_number!(Volume)], " "),
                        tc_number!(Pages),
                    ],
                    ", "
                ),
                tc_date!(Year, wrap = WrapPunctuation::Parentheses),
            ],
            " ",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = " "),
        tc_list!(
            [tc_variable!(Publisher), tc_date!(Year)],
            ", ",
            wrap = WrapPunctuation::Parentheses,
            suffix = "."
        ),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!(
            [
                tc_list!([tc_title!(Container, prefix = "in "), tc_number!(Pages)], " "),
                tc_list!(
                    [tc_variable!(Publisher), tc_date!(Year)],
                    ", ",
                    wrap = WrapPunctuation::Parentheses
                ),
            ],
            " ",
            suffix = "."
        ),
    ]
}
