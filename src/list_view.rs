//! List View Data Controller
//!
//! One parameterized filter → sort → paginate pipeline shared by every
//! list screen, instead of re-deriving it per page. Each screen supplies
//! a [`ListConfig`] describing its searchable fields, category extractor
//! and sort keys; the controller owns the transient criteria (search
//! term, category, sort, page) and derives the visible slice and
//! aggregate counts from the working set.
//!
//! The controller performs no I/O and never fails: malformed or
//! incomparable input degrades to an empty slice or an equal ordering,
//! never a panic.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// Sentinel category meaning "no category exclusion".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A record's value under some sort key.
///
/// `Missing` always sorts lowest; values of different kinds compare as
/// equal so a misconfigured key cannot panic a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Missing,
}

impl SortValue {
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::Missing, _) => Ordering::Less,
            (_, SortValue::Missing) => Ordering::Greater,
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Per-entity configuration: which fields are searchable, how to read
/// the categorical field, and what each sort key means.
pub struct ListConfig<T> {
    /// Stable record identity, for selection bookkeeping.
    pub record_id: fn(&T) -> String,
    /// Whitelisted text fields, array fields flattened to one entry each.
    pub search_text: fn(&T) -> Vec<String>,
    /// The categorical field the tabs filter on.
    pub category: fn(&T) -> String,
    /// Value of `record` under `key`; unknown keys return `Missing`.
    pub sort_value: fn(&T, &str) -> SortValue,
    /// Closed (value, label) category list for aggregate counts.
    pub categories: &'static [(&'static str, &'static str)],
    /// Initial sort key and direction.
    pub default_sort: (&'static str, SortDirection),
    /// Sort keys that open descending when first selected (dates, mostly).
    pub descending_by_default: &'static [&'static str],
    pub page_size: usize,
}

impl<T> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListConfig<T> {}

/// Transient view state. Reset on mount, mutated only through the
/// controller, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub search: String,
    pub category: String,
    pub sort_key: String,
    pub direction: SortDirection,
    pub page: usize,
}

/// Counts over the unfiltered working set, one per known category value
/// plus the grand total. Stays stable while the user searches/filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateCounts {
    pub total: usize,
    pub per_category: Vec<(String, usize)>,
}

impl AggregateCounts {
    pub fn count(&self, category: &str) -> usize {
        self.per_category
            .iter()
            .find(|(value, _)| value == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

pub struct ListController<T> {
    records: Vec<T>,
    criteria: Criteria,
    config: ListConfig<T>,
}

impl<T> Clone for ListController<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            criteria: self.criteria.clone(),
            config: self.config,
        }
    }
}

impl<T: Clone> ListController<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        let (key, direction) = config.default_sort;
        Self {
            records: Vec::new(),
            criteria: Criteria {
                search: String::new(),
                category: ALL_CATEGORIES.to_string(),
                sort_key: key.to_string(),
                direction,
                page: 1,
            },
            config,
        }
    }

    pub fn with_records(config: ListConfig<T>, records: Vec<T>) -> Self {
        let mut controller = Self::new(config);
        controller.replace_records(records);
        controller
    }

    /// Wholesale refresh after a fetch or mutation. Criteria survive the
    /// refresh; the page is re-clamped in case the set shrank.
    pub fn replace_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.criteria.page = self.criteria.page.clamp(1, self.total_pages());
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.criteria.search = term.to_string();
        self.criteria.page = 1;
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.criteria.category = value.to_string();
        self.criteria.page = 1;
    }

    /// Selecting the current key flips direction; a new key starts from
    /// its default direction.
    pub fn set_sort(&mut self, key: &str) {
        if self.criteria.sort_key == key {
            self.criteria.direction = self.criteria.direction.flipped();
        } else {
            self.criteria.sort_key = key.to_string();
            self.criteria.direction = if self.config.descending_by_default.contains(&key) {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        }
    }

    pub fn set_page(&mut self, n: usize) {
        self.criteria.page = n.clamp(1, self.total_pages());
    }

    fn matches(&self, record: &T) -> bool {
        if self.criteria.category != ALL_CATEGORIES
            && (self.config.category)(record) != self.criteria.category
        {
            return false;
        }
        if self.criteria.search.is_empty() {
            return true;
        }
        let needle = self.criteria.search.to_lowercase();
        (self.config.search_text)(record)
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn filtered_sorted(&self) -> Vec<&T> {
        let mut out: Vec<&T> = self.records.iter().filter(|r| self.matches(r)).collect();
        let key = self.criteria.sort_key.as_str();
        // sort_by is stable, so equal keys keep their fetch order.
        out.sort_by(|a, b| {
            let ord = (self.config.sort_value)(a, key).compare(&(self.config.sort_value)(b, key));
            match self.criteria.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        out
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.matches(r)).count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.config.page_size).max(1)
    }

    /// The page-sized window of the filtered, sorted working set.
    pub fn visible_slice(&self) -> Vec<T> {
        let ordered = self.filtered_sorted();
        let page = self.criteria.page.clamp(1, self.total_pages());
        let start = (page - 1) * self.config.page_size;
        ordered
            .into_iter()
            .skip(start)
            .take(self.config.page_size)
            .cloned()
            .collect()
    }

    /// Counts per known category over the **unfiltered** working set.
    pub fn aggregate_counts(&self) -> AggregateCounts {
        let per_category = self
            .config
            .categories
            .iter()
            .map(|(value, _)| {
                let n = self
                    .records
                    .iter()
                    .filter(|r| (self.config.category)(r) == *value)
                    .count();
                (value.to_string(), n)
            })
            .collect();
        AggregateCounts {
            total: self.records.len(),
            per_category,
        }
    }

    /// Detail-view contract: a selection whose record no longer exists
    /// in the working set maps to `None`.
    pub fn retain_selection(&self, selected: Option<String>) -> Option<String> {
        let selected = selected?;
        self.records
            .iter()
            .any(|r| (self.config.record_id)(r) == selected)
            .then_some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        category: String,
        tags: Vec<String>,
        date: Option<DateTime<Utc>>,
        seq: i32,
    }

    fn row(id: &str, name: &str, category: &str, date: &str, seq: i32) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            tags: Vec::new(),
            date: date
                .parse::<chrono::NaiveDate>()
                .ok()
                .map(|d| Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap())),
            seq,
        }
    }

    const CATEGORIES: &[(&str, &str)] = &[("a", "A"), ("b", "B")];

    fn config(page_size: usize) -> ListConfig<Row> {
        ListConfig {
            record_id: |r| r.id.clone(),
            search_text: |r| {
                let mut fields = vec![r.name.clone()];
                fields.extend(r.tags.iter().cloned());
                fields
            },
            category: |r| r.category.clone(),
            sort_value: |r, key| match key {
                "name" => SortValue::Text(r.name.clone()),
                "seq" => SortValue::Number(r.seq as f64),
                "date" => r.date.map(SortValue::Date).unwrap_or(SortValue::Missing),
                _ => SortValue::Missing,
            },
            categories: CATEGORIES,
            default_sort: ("name", SortDirection::Ascending),
            descending_by_default: &["date"],
            page_size,
        }
    }

    fn names(slice: &[Row]) -> Vec<&str> {
        slice.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row("1", "Bob", "a", "2024-03-01", 2),
            row("2", "Ann", "b", "2024-01-01", 1),
            row("3", "Cara", "a", "2024-02-01", 3),
        ]
    }

    #[test]
    fn slice_never_exceeds_page_size_and_is_contiguous() {
        let rows: Vec<Row> = (0..23)
            .map(|i| row(&i.to_string(), &format!("r{i:02}"), "a", "2024-01-01", i))
            .collect();
        let mut c = ListController::with_records(config(10), rows);
        c.set_sort("seq");
        assert_eq!(c.total_pages(), 3);

        let mut seen = Vec::new();
        for page in 1..=3 {
            c.set_page(page);
            let slice = c.visible_slice();
            assert!(slice.len() <= 10);
            seen.extend(slice.into_iter().map(|r| r.seq));
        }
        // Concatenating the pages reproduces the full ordered sequence.
        assert_eq!(seen, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn visible_slice_is_idempotent() {
        let mut c = ListController::with_records(config(2), sample());
        c.set_search_term("a");
        c.set_sort("date");
        assert_eq!(c.visible_slice(), c.visible_slice());
    }

    #[test]
    fn sort_toggle_has_cycle_length_two() {
        let mut c = ListController::with_records(config(10), sample());
        c.set_sort("name");
        // Already the default key, so the first call flips it.
        assert_eq!(c.criteria().direction, SortDirection::Descending);
        c.set_sort("name");
        assert_eq!(c.criteria().direction, SortDirection::Ascending);
        c.set_sort("name");
        assert_eq!(c.criteria().direction, SortDirection::Descending);
    }

    #[test]
    fn new_sort_key_starts_from_its_default_direction() {
        let mut c = ListController::with_records(config(10), sample());
        c.set_sort("date");
        assert_eq!(c.criteria().direction, SortDirection::Descending);
        c.set_sort("seq");
        assert_eq!(c.criteria().direction, SortDirection::Ascending);
    }

    #[test]
    fn search_and_category_filters_commute() {
        let rows = sample();
        let mut first = ListController::with_records(config(10), rows.clone());
        first.set_search_term("a");
        first.set_category_filter("a");

        let mut second = ListController::with_records(config(10), rows);
        second.set_category_filter("a");
        second.set_search_term("a");

        assert_eq!(first.visible_slice(), second.visible_slice());
    }

    #[test]
    fn search_matches_any_whitelisted_field_including_tags() {
        let mut rows = sample();
        rows[1].tags = vec!["cardiology".to_string()];
        let mut c = ListController::with_records(config(10), rows);
        c.set_search_term("CARDIO");
        assert_eq!(names(&c.visible_slice()), vec!["Ann"]);
    }

    #[test]
    fn aggregates_ignore_current_filters() {
        let mut c = ListController::with_records(config(10), sample());
        c.set_search_term("no such record");
        c.set_category_filter("b");
        let counts = c.aggregate_counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.count("a"), 2);
        assert_eq!(counts.count("b"), 1);
        assert_eq!(counts.count("stale"), 0);
        assert_eq!(c.filtered_count(), 0);
    }

    #[test]
    fn page_is_clamped_into_valid_range() {
        let rows: Vec<Row> = (0..25)
            .map(|i| row(&i.to_string(), &format!("r{i}"), "a", "2024-01-01", i))
            .collect();
        let mut c = ListController::with_records(config(10), rows);
        assert_eq!(c.total_pages(), 3);

        c.set_page(0);
        assert_eq!(c.criteria().page, 1);
        c.set_page(103);
        assert_eq!(c.criteria().page, 3);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let c = ListController::with_records(config(10), Vec::<Row>::new());
        assert_eq!(c.total_pages(), 1);
        assert!(c.visible_slice().is_empty());
    }

    #[test]
    fn category_filter_scenario_twelve_records() {
        // 12 records, page size 10, categories {a: 5, b: 7}.
        let rows: Vec<Row> = (0..12)
            .map(|i| {
                let cat = if i < 5 { "a" } else { "b" };
                row(&i.to_string(), &format!("r{i}"), cat, "2024-01-01", i)
            })
            .collect();
        let mut c = ListController::with_records(config(10), rows);
        c.set_category_filter("b");
        assert_eq!(c.filtered_count(), 7);
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.visible_slice().len(), 7);
    }

    #[test]
    fn clearing_the_search_term_restores_the_previous_set() {
        let mut c = ListController::with_records(config(10), sample());
        c.set_category_filter("a");
        let before = c.visible_slice();
        c.set_search_term("bob");
        assert_eq!(c.visible_slice().len(), 1);
        c.set_search_term("");
        assert_eq!(c.visible_slice(), before);
    }

    #[test]
    fn sort_by_name_and_by_date() {
        let rows = vec![
            row("1", "Bob", "a", "2024-03-01", 1),
            row("2", "Ann", "a", "2024-01-01", 2),
        ];
        let mut cfg = config(10);
        cfg.descending_by_default = &[];
        let mut c = ListController::with_records(cfg, rows);
        assert_eq!(names(&c.visible_slice()), vec!["Ann", "Bob"]);
        c.set_sort("date");
        assert_eq!(names(&c.visible_slice()), vec!["Ann", "Bob"]);
        c.set_sort("date");
        assert_eq!(names(&c.visible_slice()), vec!["Bob", "Ann"]);
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let rows = vec![
            row("1", "beta", "a", "2024-01-01", 1),
            row("2", "Alpha", "a", "2024-01-01", 2),
        ];
        let c = ListController::with_records(config(10), rows);
        assert_eq!(names(&c.visible_slice()), vec!["Alpha", "beta"]);
    }

    #[test]
    fn missing_sort_values_sort_lowest_without_error() {
        let rows = vec![
            row("1", "HasDate", "a", "2024-01-01", 1),
            row("2", "NoDate", "a", "not-a-date", 2),
        ];
        let mut c = ListController::with_records(config(10), rows);
        c.set_sort("date");
        c.set_sort("date"); // ascending
        assert_eq!(names(&c.visible_slice()), vec!["NoDate", "HasDate"]);
    }

    #[test]
    fn equal_sort_keys_keep_fetch_order() {
        let rows = vec![
            row("1", "Same", "a", "2024-01-01", 10),
            row("2", "Same", "a", "2024-01-01", 20),
            row("3", "Same", "a", "2024-01-01", 30),
        ];
        let c = ListController::with_records(config(10), rows);
        let seqs: Vec<i32> = c.visible_slice().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![10, 20, 30]);
    }

    #[test]
    fn stale_category_filter_yields_empty_set_not_error() {
        let mut c = ListController::with_records(config(10), sample());
        c.set_category_filter("deleted-category");
        assert_eq!(c.filtered_count(), 0);
        assert!(c.visible_slice().is_empty());
        assert_eq!(c.total_pages(), 1);
    }

    #[test]
    fn numeric_sort_compares_numerically() {
        let rows = vec![
            row("1", "Ten", "a", "2024-01-01", 10),
            row("2", "Two", "a", "2024-01-01", 2),
        ];
        let mut c = ListController::with_records(config(10), rows);
        c.set_sort("seq");
        assert_eq!(names(&c.visible_slice()), vec!["Two", "Ten"]);
    }

    #[test]
    fn replace_records_reclamps_the_page() {
        let rows: Vec<Row> = (0..25)
            .map(|i| row(&i.to_string(), &format!("r{i}"), "a", "2024-01-01", i))
            .collect();
        let mut c = ListController::with_records(config(10), rows);
        c.set_page(3);
        c.replace_records(vec![row("1", "Only", "a", "2024-01-01", 1)]);
        assert_eq!(c.criteria().page, 1);
        assert_eq!(names(&c.visible_slice()), vec!["Only"]);
    }

    #[test]
    fn deleted_selection_is_cleared() {
        let mut c = ListController::with_records(config(10), sample());
        let kept = c.retain_selection(Some("2".to_string()));
        assert_eq!(kept, Some("2".to_string()));

        c.replace_records(vec![row("1", "Bob", "a", "2024-03-01", 2)]);
        assert_eq!(c.retain_selection(Some("2".to_string())), None);
        assert_eq!(c.retain_selection(None), None);
    }
}
