//! Filter/paginate/detail-select state for the portfolio catalog.
//!
//! The state machine is kept free of reactive types so the transition
//! rules can be tested directly; the portfolio component wraps it in a
//! signal and drives [`CatalogState::commit`] from a timer.

use crate::content::{Category, ProjectRecord};

pub const PAGE_SIZE: usize = 6;

/// UI-feedback pause before a filter change lands. Purely cosmetic pacing,
/// not a timeout.
pub const FILTER_DELAY_MS: u64 = 800;
pub const PAGE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Fullstack),
        Filter::Only(Category::FrontEnd),
        Filter::Only(Category::BackEnd),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(only) => *only == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FilterTransition,
    PageTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Filter(Filter),
    Page(usize),
}

/// `max(ceil(len / PAGE_SIZE), 1)`: an empty filter result renders as one
/// empty page instead of a degenerate page index.
pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogState {
    filter: Filter,
    page: usize,
    selected: Option<u32>,
    pending: Option<Pending>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            filter: Filter::All,
            page: 1,
            selected: None,
            pending: None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            None => Phase::Idle,
            Some(Pending::Filter(_)) => Phase::FilterTransition,
            Some(Pending::Page(_)) => Phase::PageTransition,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn filtered<'a>(&self, all: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        all.iter()
            .filter(|project| self.filter.matches(project.category))
            .collect()
    }

    /// The slice of `all` shown on the current page of the current filter.
    pub fn visible<'a>(&self, all: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        self.filtered(all)
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn total_pages(&self, all: &[ProjectRecord]) -> usize {
        total_pages(self.filtered(all).len())
    }

    /// Begins a filter transition. Returns false (state untouched) while a
    /// transition is already in flight or when `filter` is already active;
    /// in-flight requests are dropped, never queued.
    pub fn request_filter(&mut self, filter: Filter) -> bool {
        if self.pending.is_some() || filter == self.filter {
            return false;
        }
        self.pending = Some(Pending::Filter(filter));
        true
    }

    /// Begins a page transition. Out-of-range and redundant requests are
    /// no-ops, not errors.
    pub fn request_page(&mut self, page: usize, all: &[ProjectRecord]) -> bool {
        if self.pending.is_some() || page == self.page {
            return false;
        }
        if page < 1 || page > self.total_pages(all) {
            return false;
        }
        self.pending = Some(Pending::Page(page));
        true
    }

    /// Applies the pending transition and returns to idle. A filter commit
    /// resets the page to 1.
    pub fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some(Pending::Filter(filter)) => {
                self.filter = filter;
                self.page = 1;
                true
            }
            Some(Pending::Page(page)) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// Opens the detail view. Orthogonal to the transition lock.
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: Category) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {id}"),
            subcategory: "Web App".to_string(),
            description: String::new(),
            category,
            country: None,
            duration: None,
            year: "2024".to_string(),
            image: None,
            technologies: Vec::new(),
            links: Vec::new(),
            client_testimonial: None,
        }
    }

    fn catalog_of(counts: &[(Category, u32)]) -> Vec<ProjectRecord> {
        let mut id = 0;
        let mut records = Vec::new();
        for &(category, n) in counts {
            for _ in 0..n {
                records.push(record(id, category));
                id += 1;
            }
        }
        records
    }

    fn apply_filter(state: &mut CatalogState, filter: Filter) {
        assert!(state.request_filter(filter));
        assert!(state.commit());
    }

    #[test]
    fn page_requests_outside_bounds_are_noops() {
        let all = catalog_of(&[(Category::Fullstack, 13)]);
        let mut state = CatalogState::new();
        assert_eq!(state.total_pages(&all), 3);

        assert!(!state.request_page(0, &all));
        assert!(!state.request_page(4, &all));
        assert!(!state.request_page(1, &all)); // already current
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn filter_commit_resets_page() {
        let all = catalog_of(&[(Category::Fullstack, 10), (Category::BackEnd, 4)]);
        let mut state = CatalogState::new();

        assert!(state.request_page(2, &all));
        assert!(state.commit());
        assert_eq!(state.page(), 2);

        apply_filter(&mut state, Filter::Only(Category::BackEnd));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn active_filter_is_idempotent() {
        let mut state = CatalogState::new();
        let before = state;

        assert!(!state.request_filter(Filter::All));
        assert_eq!(state, before);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn requests_while_transitioning_are_dropped() {
        let all = catalog_of(&[(Category::Fullstack, 24)]);
        let mut state = CatalogState::new();

        assert!(state.request_filter(Filter::Only(Category::Fullstack)));
        let mid_transition = state;

        // both kinds of request bounce off the lock without changing state
        assert!(!state.request_filter(Filter::Only(Category::BackEnd)));
        assert!(!state.request_page(2, &all));
        assert_eq!(state, mid_transition);

        // the transition that was in flight still lands
        assert!(state.commit());
        assert_eq!(state.filter(), Filter::Only(Category::Fullstack));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn commit_without_pending_is_a_noop() {
        let mut state = CatalogState::new();
        assert!(!state.commit());
        assert_eq!(state, CatalogState::new());
    }

    #[test]
    fn stale_commit_after_landing_changes_nothing() {
        let mut state = CatalogState::new();
        assert!(state.request_filter(Filter::Only(Category::FrontEnd)));
        assert!(state.commit());
        let landed = state;

        // a leftover timer firing a second commit must not move the state
        assert!(!state.commit());
        assert_eq!(state, landed);
    }

    #[test]
    fn filtering_thirteen_records_to_five_yields_one_page() {
        let all = catalog_of(&[(Category::Fullstack, 8), (Category::FrontEnd, 5)]);
        assert_eq!(all.len(), 13);
        let mut state = CatalogState::new();

        apply_filter(&mut state, Filter::Only(Category::FrontEnd));
        assert_eq!(state.total_pages(&all), 1);
        assert_eq!(state.visible(&all).len(), 5);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn last_page_of_twenty_four_records_holds_the_tail() {
        let all = catalog_of(&[(Category::Fullstack, 24)]);
        let mut state = CatalogState::new();
        assert_eq!(state.total_pages(&all), 4);

        assert!(state.request_page(4, &all));
        assert_eq!(state.phase(), Phase::PageTransition);
        assert!(state.commit());
        assert_eq!(state.page(), 4);

        let visible: Vec<u32> = state.visible(&all).iter().map(|p| p.id).collect();
        assert_eq!(visible, vec![18, 19, 20, 21, 22, 23]);

        assert!(!state.request_page(5, &all));
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn reselecting_after_close_leaves_no_residue() {
        let all = catalog_of(&[(Category::Fullstack, 10)]);
        let mut state = CatalogState::new();

        state.select(7);
        assert_eq!(state.selected(), Some(7));
        state.close_detail();
        assert_eq!(state.selected(), None);
        state.select(7);
        assert_eq!(state.selected(), Some(7));

        // detail selection never disturbs filter or pagination
        assert_eq!(state.filter(), Filter::All);
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible(&all).len(), 6);
    }

    #[test]
    fn selection_is_orthogonal_to_the_transition_lock() {
        let mut state = CatalogState::new();
        assert!(state.request_filter(Filter::Only(Category::BackEnd)));

        state.select(3);
        assert_eq!(state.selected(), Some(3));
        assert_eq!(state.phase(), Phase::FilterTransition);

        state.close_detail();
        assert!(state.commit());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn empty_filter_result_is_a_single_empty_page() {
        let all = catalog_of(&[(Category::Fullstack, 9)]);
        let mut state = CatalogState::new();

        apply_filter(&mut state, Filter::Only(Category::FrontEnd));
        assert_eq!(state.total_pages(&all), 1);
        assert!(state.visible(&all).is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(24), 4);
    }
}
