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

/// Vancouver (ICMJE): "Smith JA", no conjunction, six names then "et al."
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::All,
        initialize_with: Some(String::new()),
        sort_separator: " ".to_string(),
        and: AndOptions::None,
        delimiter_precedes_et_al: DelimiterPrecedesLast::Always,
        shorten: Some(ShortenListOptions {
            min: 7,
            use_first: 6,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// Smith JA, Doe JB. Machine learning methods. Journal of AI Research. 2023 Mar;45(2):123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_title!(Container, suffix = ". "),
        tc_list!(
            [
                tc_list!(
                    [
                        tc_date!(YearMonth),
                        tc_list!(
                            [
                                tc_number!(Volume),
                                tc_number!(Issue, wrap = WrapPunctuation::Parentheses),
                            ],
                            ""
                        ),
                    ],
                    ";"
                ),
                tc_number!(Pages, prefix = ":"),
            ],
            "",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!([tc_variable!(Publisher), tc_date!(Year)], "; ", suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_title!(Container, prefix = "In: ", suffix = ". "),
        tc_list!(
            [
                tc_list!([tc_variable!(Publisher), tc_date!(Year)], "; "),
                tc_number!(Pages, prefix = "p. "),
            ],
            ". ",
            suffix = "."
        ),
    ]
}
