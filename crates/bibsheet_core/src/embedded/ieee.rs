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

/// IEEE: initials before the family name, "et al." past six authors.
pub fn contributors() -> ContributorConfig {
    ContributorConfig {
        display_as_sort: DisplayAsSort::None,
        initialize_with: Some(". ".to_string()),
        and: AndOptions::Text,
        delimiter_precedes_last: DelimiterPrecedesLast::Contextual,
        delimiter_precedes_et_al: DelimiterPrecedesLast::Never,
        shorten: Some(ShortenListOptions {
            min: 7,
            use_first: 1,
            use_last: false,
        }),
        ..Default::default()
    }
}

/// Renders as:
/// J. A. Smith and J. B. Doe, "Machine learning methods," Journal of AI Research, vol. 45, no. 2, pp. 123-145, 2023.
pub fn article() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ", "),
        tc_title!(
            Primary,
            text_case = TextCase::Sentence,
            inner_suffix = ",",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [
                tc_title!(Container),
                tc_number!(Volume, prefix = "vol. "),
                tc_number!(Issue, prefix = "no. "),
                tc_number!(Pages, prefix = "pp. "),
                tc_date!(Year),
            ],
            ", ",
            suffix = "."
        ),
    ]
}

pub fn book() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ", "),
        tc_title!(Primary, text_case = TextCase::Sentence, suffix = ". "),
        tc_list!([tc_variable!(Publisher), tc_date!(Year)], ", ", suffix = "."),
    ]
}

pub fn chapter() -> Vec<TemplateComponent> {
    vec![
        tc_contributor!(suffix = ", "),
        tc_title!(
            Primary,
            text_case = TextCase::Sentence,
            inner_suffix = ",",
            quote = true,
            suffix = " "
        ),
        tc_list!(
            [
                tc_title!(Container, prefix = "in "),
                tc_variable!(Publisher),
                tc_date!(Year),
                tc_number!(Pages, prefix = "pp. "),
            ],
            ", ",
            suffix = "."
        ),
    ]
}
