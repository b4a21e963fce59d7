/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsheet_core::template::{DateForm, TemplateDate};
use bibsheet_core::Reference;

use crate::values::{non_empty, ComponentValues, RenderOptions};

impl ComponentValues for TemplateDate {
    fn values(&self, reference: &Reference, options: &RenderOptions<'_>) -> Option<String> {
        let year = reference.year.map(|y| y.to_string());
        let month = non_empty(reference.month.as_deref());

        let value = match (self.form, year, month) {
            (DateForm::YearMonth, Some(year), Some(month)) => Some(format!("{year} {month}")),
            (_, Some(year), _) => Some(year),
            _ => non_empty(reference.date_text.as_deref()),
        };
        value.or_else(|| options.no_date_term.map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibsheet_core::options::ContributorConfig;
    use bibsheet_core::tc_date;
    use bibsheet_core::template::TemplateComponent;

    fn options(no_date_term: Option<&str>) -> RenderOptions<'_> {
        static NAMES: std::sync::LazyLock<ContributorConfig> =
            std::sync::LazyLock::new(ContributorConfig::default);
        RenderOptions {
            names: &NAMES,
            no_date_term,
            no_author_text: "",
        }
    }

    #[test]
    fn test_year_and_year_month() {
        let mut reference = Reference {
            year: Some(2023),
            month: Some("Mar".to_string()),
            ..Default::default()
        };
        let year: TemplateComponent = tc_date!(Year);
        let year_month: TemplateComponent = tc_date!(YearMonth);
        assert_eq!(year.values(&reference, &options(None)).as_deref(), Some("2023"));
        assert_eq!(
            year_month.values(&reference, &options(None)).as_deref(),
            Some("2023 Mar")
        );

        reference.month = None;
        assert_eq!(
            year_month.values(&reference, &options(None)).as_deref(),
            Some("2023")
        );
    }

    #[test]
    fn test_missing_dates() {
        let date: TemplateComponent = tc_date!(Year);
        let in_press = Reference {
            date_text: Some("in press".to_string()),
            ..Default::default()
        };
        assert_eq!(
            date.values(&in_press, &options(Some("n.d."))).as_deref(),
            Some("in press")
        );

        let undated = Reference::default();
        assert_eq!(
            date.values(&undated, &options(Some("n.d."))).as_deref(),
            Some("n.d.")
        );
        assert_eq!(date.values(&undated, &options(None)), None);
    }
}
