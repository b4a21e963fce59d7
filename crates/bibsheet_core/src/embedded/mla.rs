/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    options::{AndOptions, ContributorConfig, DelimiterPrecedesLast, DisplayAsSort, ShortenListOptions},
    tc_contributor, tc_date, tc_list, tc_number, tc_title, tc_variable,
    template::{TemplateComponent, TextCase},
};

pub const NO_DATE: Option<&str> = None;

/// MLA 9: first author inverted with full names; three or more authors
/// collapse to "et al.".
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::First,
        and: AndOptions::Text,
        delimiter_precedes_last: DelimiterPrecedesLast::AfterInvertedName,
        delimiter_precedes_et_al: DelimiterPrecedesLast::AfterInvertedName,
        shorten: Some(ShortenListOptions {
            min: 3,
            use_first: 1,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// Smith, Jane A., and John B. Doe. "Machine Learning Methods." Journal of AI Research, vol. 45, no. 2, 2023, pp. 123-145.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(
            Primary,
            text_case = TextCase::Title,
            inner_suffix = ".",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [
                tc_title!(Container),
                tc_number!(Volume, prefix = "vol. "),
                tc_number!(Issue, prefix = "no. "),
                tc_date!(Year),
                tc_number!(Pages, prefix = "pp. "),
            ],
            ", ",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(Primary, text_case = TextCase::Title, suffix = ". "),
        tc_list!([tc_variable!(Publisher), tc_date!(Year)], ", ", suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ". "),
        tc_title!(
            Primary,
            text_case = TextCase::Title,
            inner_suffix = ".",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [
                tc_title!(Container),
                tc_variable!(Publisher),
                tc_date!(Year),
                tc_number!(Pages, prefix = "pp. "),
            ],
            ", ",
            suffix = "."
        ),
    ]
}
