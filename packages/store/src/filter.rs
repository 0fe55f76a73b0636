//! # Visible-list pipeline
//!
//! Turns a note collection (already scoped to active or archived notes) into the
//! list a page renders. Every recompute starts again from the authoritative source
//! collection, so changing one control never loses the effect of another:
//!
//! 1. sort the whole source by `created_at` in the chosen [`SortOrder`];
//! 2. keep notes whose title (and, for [`KeywordScope::TitleAndBody`], the
//!    body's text with markup removed) contains the keyword, case-insensitively;
//! 3. keep notes whose creation instant falls inside the inclusive [`DateRange`].
//!
//! Both filters preserve order, so the result is always sorted.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::Note;
use crate::text::plain_text;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }
}

/// Which note fields the keyword is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordScope {
    Title,
    #[default]
    TitleAndBody,
}

/// Inclusive calendar-day range; a missing bound is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parse the `YYYY-MM-DD` values of two date inputs. Empty or malformed
    /// inputs leave that bound open. Returns `None` when both are open, which
    /// clears the filter.
    pub fn from_inputs(start: &str, end: &str) -> Option<Self> {
        let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
        let range = Self::new(parse(start), parse(end));
        (!range.is_unbounded()).then_some(range)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// First instant of the start day.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        self.start.map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    /// Last millisecond of the end day.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
        self.end.map(|d| d.and_time(last_ms).and_utc())
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        let after_start = self.start_instant().map_or(true, |s| *at >= s);
        let before_end = self.end_instant().map_or(true, |e| *at <= e);
        after_start && before_end
    }
}

/// Sort notes by creation time in place. Stable, so equal timestamps keep
/// their incoming order.
pub fn sort_notes(notes: &mut [Note], order: SortOrder) {
    match order {
        SortOrder::Newest => notes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => notes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

pub fn matches_keyword(note: &Note, keyword: &str, scope: KeywordScope) -> bool {
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    if note.title.to_lowercase().contains(&needle) {
        return true;
    }
    scope == KeywordScope::TitleAndBody && plain_text(&note.body).to_lowercase().contains(&needle)
}

pub fn filter_by_keyword(notes: &[Note], keyword: &str, scope: KeywordScope) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| matches_keyword(n, keyword, scope))
        .cloned()
        .collect()
}

pub fn filter_by_date(notes: &[Note], range: Option<&DateRange>) -> Vec<Note> {
    match range {
        Some(range) => notes
            .iter()
            .filter(|n| range.contains(&n.created_at))
            .cloned()
            .collect(),
        None => notes.to_vec(),
    }
}

/// Per-page filter state. The keyword is mirrored into the URL by the caller;
/// the date range and sort order live only as long as the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub keyword: String,
    pub date_range: Option<DateRange>,
    pub sort: SortOrder,
    pub scope: KeywordScope,
}

impl NoteFilter {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn with_date_range(mut self, range: Option<DateRange>) -> Self {
        self.date_range = range.filter(|r| !r.is_unbounded());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_date_filtered(&self) -> bool {
        self.date_range.is_some()
    }

    /// Compute the visible list from the full source collection.
    pub fn apply(&self, source: &[Note]) -> Vec<Note> {
        let mut sorted = source.to_vec();
        sort_notes(&mut sorted, self.sort);
        let by_keyword = filter_by_keyword(&sorted, &self.keyword, self.scope);
        filter_by_date(&by_keyword, self.date_range.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(id: &str, title: &str, body: &str, y: i32, m: u32, d: u32, h: u32) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            archived: false,
        }
    }

    fn sample() -> Vec<Note> {
        vec![
            note("a", "Babel", "<p>transpiler</p>", 2022, 4, 14, 4),
            note("b", "Functional Component", "React <b>hooks</b>", 2022, 4, 15, 10),
            note("c", "Modularization", "split code into modules", 2022, 4, 16, 23),
            note("d", "Lifecycle", "react component lifecycle", 2022, 4, 18, 0),
        ]
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let visible = NoteFilter::default().apply(&sample());
        assert_eq!(ids(&visible), ["d", "c", "b", "a"]);
    }

    #[test]
    fn test_sort_toggle_is_an_involution() {
        let source = sample();
        let mut order = SortOrder::Newest;
        let first = NoteFilter::default().with_sort(order).apply(&source);

        order = order.toggled();
        let oldest = NoteFilter::default().with_sort(order).apply(&source);
        assert_eq!(ids(&oldest), ["a", "b", "c", "d"]);

        order = order.toggled();
        let again = NoteFilter::default().with_sort(order).apply(&source);
        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_keyword_keeps_everything() {
        let source = sample();
        assert_eq!(filter_by_keyword(&source, "", KeywordScope::Title), source);
    }

    #[test]
    fn test_keyword_is_case_insensitive_substring() {
        let source = sample();
        let hits = filter_by_keyword(&source, "COMPONENT", KeywordScope::Title);
        assert_eq!(ids(&hits), ["b"]);
    }

    #[test]
    fn test_keyword_scope_controls_body_matching() {
        let source = sample();
        let title_only = filter_by_keyword(&source, "react", KeywordScope::Title);
        assert!(title_only.is_empty());

        let with_body = filter_by_keyword(&source, "react", KeywordScope::TitleAndBody);
        assert_eq!(ids(&with_body), ["b", "d"]);
    }

    #[test]
    fn test_keyword_ignores_body_markup() {
        let source = vec![
            note("x", "Groceries", "<p>milk</p><br>eggs", 2022, 4, 14, 4),
            note("y", "Ideas", "plain text", 2022, 4, 15, 4),
        ];
        let find = |k: &str| ids(&filter_by_keyword(&source, k, KeywordScope::TitleAndBody)).join(",");
        assert_eq!(find("br"), "");
        assert_eq!(find("<p>"), "");
        assert_eq!(find("p"), "y");
        assert_eq!(find("milk eggs"), "x");
    }

    #[test]
    fn test_date_range_bounds_are_inclusive_days() {
        let source = sample();
        let day = NaiveDate::from_ymd_opt(2022, 4, 16);

        // 23:00 on the end day is still inside.
        let range = DateRange::new(day, day);
        assert_eq!(ids(&filter_by_date(&source, Some(&range))), ["c"]);

        let from = DateRange::new(day, None);
        assert_eq!(ids(&filter_by_date(&source, Some(&from))), ["c", "d"]);

        let until = DateRange::new(None, day);
        assert_eq!(ids(&filter_by_date(&source, Some(&until))), ["a", "b", "c"]);
    }

    #[test]
    fn test_date_membership_matches_bound_checks() {
        let start = NaiveDate::from_ymd_opt(2022, 4, 15);
        let end = NaiveDate::from_ymd_opt(2022, 4, 16);
        let range = DateRange::new(start, end);

        for n in sample() {
            let t = n.created_at;
            let expected = range.start_instant().map_or(true, |s| t >= s)
                && range.end_instant().map_or(true, |e| t <= e);
            assert_eq!(range.contains(&t), expected, "note {}", n.id);
        }
    }

    #[test]
    fn test_clearing_date_filter_keeps_keyword() {
        let source = sample();
        let day = NaiveDate::from_ymd_opt(2022, 4, 15);
        let filter = NoteFilter::new("o").with_date_range(Some(DateRange::new(day, day)));
        assert_eq!(ids(&filter.apply(&source)), ["b"]);

        let cleared = filter.with_date_range(None);
        assert_eq!(ids(&cleared.apply(&source)), ["d", "c", "b"]);
        assert_eq!(cleared.keyword, "o");
    }

    #[test]
    fn test_changing_keyword_keeps_date_filter() {
        let source = sample();
        let range = DateRange::new(NaiveDate::from_ymd_opt(2022, 4, 15), None);
        let mut filter = NoteFilter::new("babel").with_date_range(Some(range));
        assert!(filter.apply(&source).is_empty());

        filter.keyword.clear();
        assert_eq!(ids(&filter.apply(&source)), ["d", "c", "b"]);
        assert!(filter.is_date_filtered());
    }

    #[test]
    fn test_sorting_applies_to_filtered_view() {
        let source = sample();
        let filter = NoteFilter::new("on").with_sort(SortOrder::Oldest);
        // "Lifecycle" matches through its body ("component").
        assert_eq!(ids(&filter.apply(&source)), ["b", "c", "d"]);
    }

    #[test]
    fn test_range_from_inputs() {
        assert!(DateRange::from_inputs("", "").is_none());
        assert!(DateRange::from_inputs("garbage", " ").is_none());

        let range = DateRange::from_inputs("2022-04-15", "").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2022, 4, 15));
        assert!(range.end.is_none());
        assert_eq!(
            range.start_instant().unwrap(),
            Utc.with_ymd_and_hms(2022, 4, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_unbounded_range_is_dropped() {
        let filter = NoteFilter::default().with_date_range(Some(DateRange::default()));
        assert!(!filter.is_date_filtered());
    }
}
