/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

/// Name-list formatting configuration for one style.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributorConfig {
    /// Which names are displayed family-first.
    pub display_as_sort: DisplayAsSort,
    /// String appended after each initial (e.g. ". " for "J. A.").
    /// If None, full given names are used.
    pub initialize_with: Option<String>,
    /// Delimiter between family and given name when inverted.
    pub sort_separator: String,
    /// The delimiter between names.
    pub delimiter: String,
    /// Conjunction between the last two names.
    pub and: AndOptions,
    /// When to include the delimiter before the last name.
    pub delimiter_precedes_last: DelimiterPrecedesLast,
    /// When to include the delimiter before "et al.".
    pub delimiter_precedes_et_al: DelimiterPrecedesLast,
    /// Et al. handling; None lists every name.
    pub shorten: Option<ShortenListOptions>,
}

impl Default for ContributorConfig {
    fn default() -> Self {
        Self {
            display_as_sort: DisplayAsSort::None,
            initialize_with: None,
            sort_separator: ", ".to_string(),
            delimiter: ", ".to_string(),
            and: AndOptions::Text,
            delimiter_precedes_last: DelimiterPrecedesLast::Contextual,
            delimiter_precedes_et_al: DelimiterPrecedesLast::Contextual,
            shorten: None,
        }
    }
}

/// When to display a name in sort order (family-first).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAsSort {
    All,
    First,
    #[default]
    None,
}

/// Conjunction options between names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AndOptions {
    /// "and"
    #[default]
    Text,
    /// "&"
    Symbol,
    /// Plain delimiter, no conjunction.
    None,
}

impl AndOptions {
    pub fn as_word(&self) -> Option<&'static str> {
        match self {
            AndOptions::Text => Some("and"),
            AndOptions::Symbol => Some("&"),
            AndOptions::None => None,
        }
    }
}

/// When to use the delimiter before the last name (or before "et al.").
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterPrecedesLast {
    /// Only when the preceding name is displayed inverted.
    AfterInvertedName,
    Always,
    Never,
    /// Only when three or more names are listed.
    #[default]
    Contextual,
}

/// Et al. / list shortening options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenListOptions {
    /// Minimum number of names to trigger shortening.
    pub min: usize,
    /// Number of names to show when shortened.
    pub use_first: usize,
    /// Show the final name after an ellipsis instead of "et al.".
    pub use_last: bool,
}
