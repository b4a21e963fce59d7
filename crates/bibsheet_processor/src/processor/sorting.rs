/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::cmp::Ordering;

use bibsheet_core::{Reference, SortConfig, SortDirection, SortOrder};

pub struct Sorter<'a> {
    config: &'a SortConfig,
}

impl<'a> Sorter<'a> {
    pub fn new(config: &'a SortConfig) -> Self {
        Self { config }
    }

    /// Order references for output. The sort is stable, so ties keep
    /// their file order; references are never modified.
    pub fn sort_references<'b>(&self, references: Vec<&'b Reference>) -> Vec<&'b Reference> {
        let mut refs = references;
        match self.config.order {
            SortOrder::Appearance => {}
            SortOrder::Author => {
                refs.sort_by(|a, b| missing_last(author_key(a), author_key(b), true));
            }
            SortOrder::Year => {
                let ascending = self.config.year_order == SortDirection::Ascending;
                refs.sort_by(|a, b| missing_last(a.year, b.year, ascending));
            }
            SortOrder::Title => {
                refs.sort_by(|a, b| missing_last(title_key(a), title_key(b), true));
            }
        }
        refs
    }
}

/// Compare two optional keys; `None` sorts after every value in either
/// direction.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if ascending => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn author_key(reference: &Reference) -> Option<String> {
    reference
        .first_author()
        .map(|p| p.family_or_given().to_lowercase())
        .filter(|k| !k.is_empty())
}

/// Lowercased title with a leading "a", "an" or "the" removed.
pub fn title_key(reference: &Reference) -> Option<String> {
    let title = reference.title.trim().to_lowercase();
    let stripped = ["a ", "an ", "the "]
        .iter()
        .find_map(|article| title.strip_prefix(article))
        .unwrap_or(&title)
        .trim_start()
        .to_string();
    Some(stripped).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsheet_core::{ref_article, ref_book};

    fn ids(refs: &[&Reference]) -> Vec<String> {
        refs.iter().map(|r| r.raw_id.clone()).collect()
    }

    fn config(order: SortOrder, year_order: SortDirection) -> SortConfig {
        SortConfig { order, year_order }
    }

    #[test]
    fn test_year_descending() {
        let refs = [
            ref_article!("a", "Smith", "J", 2020, "One"),
            ref_article!("b", "Doe", "J", 2023, "Two"),
            ref_article!("c", "Lee", "J", 2021, "Three"),
        ];
        let cfg = config(SortOrder::Year, SortDirection::Descending);
        let sorted = Sorter::new(&cfg).sort_references(refs.iter().collect());
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_year_ties_keep_file_order_and_missing_years_last() {
        let mut undated = ref_book!("u", "Zed", "A", 0, "Undated");
        undated.year = None;
        let refs = [
            undated,
            ref_article!("x", "Smith", "J", 2021, "X"),
            ref_article!("y", "Doe", "J", 2021, "Y"),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let cfg = config(SortOrder::Year, direction);
            let sorted = Sorter::new(&cfg).sort_references(refs.iter().collect());
            assert_eq!(ids(&sorted), vec!["x", "y", "u"]);
        }
    }

    #[test]
    fn test_author_is_case_insensitive_with_empty_last() {
        let mut anonymous = ref_article!("n", "", "", 2020, "Anonymous");
        anonymous.authors.clear();
        let refs = [
            anonymous,
            ref_article!("s", "smith", "J", 2020, "S"),
            ref_article!("b", "Brown", "J", 2020, "B"),
        ];
        let cfg = config(SortOrder::Author, SortDirection::Descending);
        let sorted = Sorter::new(&cfg).sort_references(refs.iter().collect());
        assert_eq!(ids(&sorted), vec!["b", "s", "n"]);
    }

    #[test]
    fn test_title_ignores_leading_articles_for_sorting_only() {
        let refs = [
            ref_book!("t", "X", "", 2000, "The Zebra"),
            ref_book!("a", "X", "", 2000, "An Apple"),
            ref_book!("m", "X", "", 2000, "Mango"),
        ];
        let cfg = config(SortOrder::Title, SortDirection::Descending);
        let sorted = Sorter::new(&cfg).sort_references(refs.iter().collect());
        assert_eq!(ids(&sorted), vec!["a", "m", "t"]);
        assert_eq!(sorted[2].title, "The Zebra");
    }

    #[test]
    fn test_appearance_is_identity_and_sorting_is_repeatable() {
        let refs = [
            ref_article!("a", "Smith", "J", 2020, "One"),
            ref_article!("b", "Doe", "J", 2023, "Two"),
        ];
        let cfg = config(SortOrder::Appearance, SortDirection::Descending);
        let sorted = Sorter::new(&cfg).sort_references(refs.iter().collect());
        assert_eq!(ids(&sorted), vec!["a", "b"]);

        let cfg = config(SortOrder::Author, SortDirection::Descending);
        let once = Sorter::new(&cfg).sort_references(refs.iter().collect());
        let twice = Sorter::new(&cfg).sort_references(once.clone());
        assert_eq!(ids(&once), ids(&twice));
    }
}
