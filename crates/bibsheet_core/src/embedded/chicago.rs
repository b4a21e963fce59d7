/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, TextCase},
};

pub const NO_DATE: Option<&str> = Some("n.d.");

/// Chicago author-date: first author inverted, full names, serial comma.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::First,
        and: AndOptions::Text,
        delimiter_precedes_last: DelimiterPrecedesLast::Always,
        shorten: Some(ShortenListOptions {
            min: 11,
            use_first: 7,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// Smith, Jane A., and John B. Doe. 2023. "Machine Learning Methods." Journal of AI Research 45, no. 2: 123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_date!(Year, suffix = ". "),
        tc_title!(
            Primary,
            text_case = TextCase::Title,
            inner_suffix = ".",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [
                tc_list!(
                    [
                        tc_list!([tc_title!(Container), tc_number!(Volume)], " "),
                        tc_number!(Issue, prefix = "no. "),
                    ],
                    ", "
                ),
                tc_number!(Pages, prefix = ": "),
            ],
            "",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_date!(Year, suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Title, suffix = ". "),
        tc_variable!(Publisher, suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_date!(Year, suffix = ". "),
        tc_title!(
            Primary,
            text_case = TextCase::Title,
            inner_suffix = ".",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [tc_title!(Container, prefix = "In "), tc_number!(Pages)],
            ", ",
            suffix = ". "
        ),
        tc_variable!(Publisher, suffix = "."),
    ]
}
