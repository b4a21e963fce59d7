/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, TextCase, WrapPunctuation},
};

pub const NO_DATE: Option<&str> = Some("n.d.");

/// Cite Them Right Harvard: inverted names with unspaced initials.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::All,
        initialize_with: Some(".".to_string()),
        and: AndOptions::Text,
        delimiter_precedes_last: DelimiterPrecedesLast::Never,
        delimiter_precedes_et_al: DelimiterPrecedesLast::Never,
        shorten: Some(ShortenListOptions {
            min: 4,
            use_first: 1,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// Smith, J.A. and Doe, J.B. (2023) 'Machine learning methods', Journal of AI Research, 45(2), pp. 123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = " "),
        tc_title!(
            Primary,
            text_case = TextCase::Sentence,
            wrap = WrapPunctuation::SingleQuotes,
            suffix = ", "
        ),
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
                tc_number!(Pages, prefix = "pp. "),
            ],
            ", ",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = " "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_variable!(Publisher, suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = " "),
        tc_date!(Year, wrap = WrapPunctuation::Parentheses, suffix = " "),
        tc_title!(
            Primary,
            text_case = TextCase::Sentence,
            wrap = WrapPunctuation::SingleQuotes,
            suffix = ", "
        ),
        tc_list!(
            [
                tc_title!(Container, prefix = "in "),
                tc_variable!(Publisher),
                tc_number!(Pages, prefix = "pp. "),
            ],
            ", ",
            suffix = "."
        ),
    ]
}
