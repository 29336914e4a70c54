//! Date parsing, month grouping and list filters
//!
//! Feature dates are free text, usually "Month Day" with an ordinal suffix
//! ("August 7th"). They are parsed into a [`NaiveDate`] in a caller-chosen
//! year for sorting; ISO dates are accepted as a fallback. Anything else has
//! no sort key and sorts before every dated feature.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Month, NaiveDate};
use featureboard_core::Feature;

use crate::view::FeatureView;

/// Parse a feature date for sorting.
pub fn parse_feature_date(date: &str, year: i32) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    month_day(date, year)
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}

fn month_day(date: &str, year: i32) -> Option<NaiveDate> {
    let mut words = date.split_whitespace();
    let month = Month::from_str(words.next()?).ok()?;
    let day: String = words.next()?.chars().take_while(char::is_ascii_digit).collect();
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day.parse().ok()?)
}

/// Month a feature date falls in, if it names one.
pub fn month_of(date: &str) -> Option<Month> {
    let date = date.trim();
    let first = date.split_whitespace().next()?;
    if let Ok(month) = Month::from_str(first) {
        return Some(month);
    }
    let parsed = parse_feature_date(date, 2000)?;
    Month::from_str(&parsed.format("%B").to_string()).ok()
}

/// Lower-case month name as used in filters ("august").
pub fn month_key(month: Month) -> String {
    month.name().to_ascii_lowercase()
}

/// Month selection: everything or one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// No month restriction
    #[default]
    All,
    /// Only features dated in this month
    Only(Month),
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        Month::from_str(s)
            .map(MonthFilter::Only)
            .map_err(|_| format!("unknown month '{}'", s))
    }
}

/// Active filters of the feature list.
///
/// Categories and tags match case-insensitively; a feature passes a set
/// filter if it matches any selected entry. Search looks at title,
/// description, tldr, category and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Month selection
    pub month: MonthFilter,
    /// Selected categories
    pub categories: Vec<String>,
    /// Selected tags
    pub tags: Vec<String>,
    /// Free-text search term
    pub search: String,
}

impl FilterState {
    /// True if any filter other than the month is set.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.categories.is_empty() || !self.tags.is_empty()
    }

    /// Clear search, categories and tags; the month is kept.
    pub fn clear(&mut self) {
        self.search.clear();
        self.categories.clear();
        self.tags.clear();
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    /// Check one feature against every filter.
    pub fn matches(&self, feature: &Feature) -> bool {
        if let MonthFilter::Only(month) = self.month {
            if month_of(&feature.date) != Some(month) {
                return false;
            }
        }
        if !self.categories.is_empty()
            && !self.categories.iter().any(|c| same(c, &feature.category))
        {
            return false;
        }
        if !self.tags.is_empty()
            && !self
                .tags
                .iter()
                .any(|t| feature.tags.iter().any(|ft| same(t, ft)))
        {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &feature.title,
            &feature.description,
            &feature.tldr,
            &feature.category,
        ]
        .into_iter()
        .chain(feature.tags.iter())
        .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Apply the filters and sort the survivors chronologically.
    pub fn apply(&self, features: &[FeatureView], year: i32) -> Vec<FeatureView> {
        let mut out: Vec<FeatureView> = features
            .iter()
            .filter(|v| self.matches(&v.feature))
            .cloned()
            .collect();
        sort_chronologically(&mut out, year);
        out
    }
}

/// Stable sort by parsed date; undated features first.
pub fn sort_chronologically(features: &mut [FeatureView], year: i32) {
    features.sort_by_cached_key(|v| parse_feature_date(&v.date, year));
}

/// Months that have at least one feature, in calendar order.
pub fn available_months(features: &[FeatureView]) -> Vec<Month> {
    let mut months: Vec<Month> = Vec::new();
    for month in features.iter().filter_map(|v| month_of(&v.date)) {
        if !months.contains(&month) {
            months.push(month);
        }
    }
    months.sort_by_key(|m| m.number_from_month());
    months
}

/// Distinct non-empty categories, sorted case-insensitively.
pub fn available_categories(features: &[FeatureView]) -> Vec<String> {
    distinct(features.iter().map(|v| v.category.as_str()))
}

/// Distinct non-empty tags, sorted case-insensitively.
pub fn available_tags(features: &[FeatureView]) -> Vec<String> {
    distinct(features.iter().flat_map(|v| v.tags.iter().map(String::as_str)))
}

/// First spelling of each value wins.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        seen.entry(value.to_lowercase())
            .or_insert_with(|| value.to_string());
    }
    seen.into_values().collect()
}

fn same(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn toggle(set: &mut Vec<String>, value: &str) {
    if let Some(pos) = set.iter().position(|v| same(v, value)) {
        set.remove(pos);
    } else {
        set.push(value.trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn view(id: &str, date: &str, category: &str, tags: &[&str]) -> FeatureView {
        let mut f = Feature::new(id.into(), format!("Feature {}", id), Utc::now());
        f.date = date.to_string();
        f.category = category.to_string();
        f.tags = tags.iter().map(|t| t.to_string()).collect();
        FeatureView::new(f, 0.0)
    }

    #[test]
    fn test_parse_month_day() {
        assert_eq!(
            parse_feature_date("August 7th", 2025),
            NaiveDate::from_ymd_opt(2025, 8, 7)
        );
        assert_eq!(
            parse_feature_date("september 15", 2025),
            NaiveDate::from_ymd_opt(2025, 9, 15)
        );
        assert_eq!(
            parse_feature_date("2024-02-29", 2025),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            parse_feature_date("2024-03-01T10:00:00Z", 2025),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(parse_feature_date("", 2025), None);
        assert_eq!(parse_feature_date("Soon", 2025), None);
        assert_eq!(parse_feature_date("February 30th", 2025), None);
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of("October 10th"), Some(Month::October));
        assert_eq!(month_of("2025-08-07"), Some(Month::August));
        assert_eq!(month_of("Q3"), None);
        assert_eq!(month_key(Month::September), "september");
    }

    #[test]
    fn test_month_filter_parse() {
        assert_eq!("all".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!(
            "August".parse::<MonthFilter>(),
            Ok(MonthFilter::Only(Month::August))
        );
        assert!("Augtober".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_chronological_sort_undated_first() {
        let mut list = vec![
            view("a", "October 10th", "", &[]),
            view("b", "August 7th", "", &[]),
            view("c", "TBD", "", &[]),
            view("d", "September 1st", "", &[]),
        ];
        sort_chronologically(&mut list, 2025);
        let ids: Vec<&str> = list.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_available_months_calendar_order() {
        let list = vec![
            view("a", "October 10th", "", &[]),
            view("b", "August 7th", "", &[]),
            view("c", "August 18th", "", &[]),
            view("d", "Later", "", &[]),
        ];
        assert_eq!(available_months(&list), vec![Month::August, Month::October]);
    }

    #[test]
    fn test_available_categories_and_tags() {
        let list = vec![
            view("a", "", "Copilot", &["AI", "excel"]),
            view("b", "", "copilot", &["Excel", ""]),
            view("c", "", "Models", &["ai"]),
            view("d", "", "", &[]),
        ];
        assert_eq!(available_categories(&list), vec!["Copilot", "Models"]);
        assert_eq!(available_tags(&list), vec!["AI", "excel"]);
    }

    #[test]
    fn test_filters_combine() {
        let list = vec![
            view("a", "August 7th", "Models", &["AI"]),
            view("b", "August 18th", "Copilot", &["Excel"]),
            view("c", "September 1st", "Copilot", &["Studio"]),
        ];
        let mut filters = FilterState {
            month: MonthFilter::Only(Month::August),
            ..FilterState::default()
        };
        assert_eq!(filters.apply(&list, 2025).len(), 2);

        filters.toggle_category("copilot");
        let ids: Vec<String> = filters
            .apply(&list, 2025)
            .iter()
            .map(|v| v.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b"]);

        filters.month = MonthFilter::All;
        filters.toggle_tag("studio");
        assert_eq!(filters.apply(&list, 2025).len(), 1);
        assert!(filters.is_active());

        filters.clear();
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&list, 2025).len(), 3);
    }

    #[test]
    fn test_toggle_is_case_insensitive() {
        let mut filters = FilterState::default();
        filters.toggle_tag("AI");
        filters.toggle_tag("ai");
        assert!(filters.tags.is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let mut f = view("a", "", "Copilot", &["Excel"]).feature;
        f.tldr = "Formulas powered by AI".into();
        let mut filters = FilterState {
            search: "  POWERED ".into(),
            ..FilterState::default()
        };
        assert!(filters.matches(&f));
        filters.search = "excel".into();
        assert!(filters.matches(&f));
        filters.search = "word".into();
        assert!(!filters.matches(&f));
    }
}
