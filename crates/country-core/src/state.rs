//! Explorer controller state.
//!
//! [`ExplorerState`] owns the loaded records, the query, the favorites,
//! the selection, the favorites-view toggle, and the table's sort, column
//! filters, and page. It is mutated only through
//! [`ExplorerState::apply`] (or the matching methods), one [`Action`] at a
//! time, so derived data such as the visible subset never goes stale.

use crate::favorites::Favorites;
use crate::filter::filter;
use crate::models::{Country, CountryId};
use crate::table::{self, ColumnFilters, SortColumn, SortKey};

/// Progress of the one startup fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotStarted,
    InFlight,
    Loaded,
    /// Fetch or parse failed; holds the message shown to the user
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Discrete state mutation triggered by a user or I/O event.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    LoadStarted,
    Loaded(Vec<Country>),
    LoadFailed(String),
    SetQuery(String),
    ToggleFavorite(CountryId),
    Select(CountryId),
    CloseDetail,
    ToggleFavoritesView,
    SortBy(SortColumn),
    SetColumnFilter(SortColumn, String),
    /// Zero-based; clamped to the last page when read
    SetPage(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
    records: Vec<Country>,
    visible: Vec<Country>,
    query: String,
    favorites: Favorites,
    selected: Option<CountryId>,
    favorites_view_open: bool,
    load_state: LoadState,
    sort: Option<SortKey>,
    column_filters: ColumnFilters,
    page: usize,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStarted => self.load_state = LoadState::InFlight,
            Action::Loaded(records) => self.finish_load(records),
            Action::LoadFailed(message) => self.fail_load(message),
            Action::SetQuery(query) => self.set_query(query),
            Action::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Action::Select(id) => self.select(id),
            Action::CloseDetail => self.close_detail(),
            Action::ToggleFavoritesView => {
                self.toggle_favorites_view();
            }
            Action::SortBy(column) => self.sort_by(column),
            Action::SetColumnFilter(column, value) => self.set_column_filter(column, value),
            Action::SetPage(page) => self.page = page,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    fn finish_load(&mut self, records: Vec<Country>) {
        self.records = records;
        // The user may have typed while the request was in flight
        self.visible = filter(&self.records, &self.query);
        self.page = 0;
        self.load_state = LoadState::Loaded;
    }

    fn fail_load(&mut self, message: String) {
        self.records.clear();
        self.visible.clear();
        self.selected = None;
        self.load_state = LoadState::Failed(message);
    }

    pub fn set_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        self.visible = filter(&self.records, &query);
        self.query = query;
        self.page = 0;
    }

    /// Flip favorite membership; returns the new state.
    pub fn toggle_favorite(&mut self, id: CountryId) -> bool {
        self.favorites.toggle(id)
    }

    /// Select a country, replacing any previous selection.
    pub fn select(&mut self, id: CountryId) {
        self.selected = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Show or hide the favorites list; returns whether it is now open.
    pub fn toggle_favorites_view(&mut self) -> bool {
        self.favorites_view_open = !self.favorites_view_open;
        self.favorites_view_open
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = table::next_sort(self.sort, column);
        self.page = 0;
    }

    pub fn set_column_filter(&mut self, column: SortColumn, value: String) {
        self.column_filters.set(column, value);
        self.page = 0;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Every loaded record, in provider order.
    pub fn records(&self) -> &[Country] {
        &self.records
    }

    /// Records matching the current query, in provider order.
    pub fn visible(&self) -> &[Country] {
        &self.visible
    }

    /// Visible records narrowed by the column filters and ordered by the
    /// active table sort.
    pub fn rows(&self) -> Vec<Country> {
        table::sorted(&self.column_filters.apply(&self.visible), self.sort)
    }

    /// The rows on the current table page.
    pub fn page_rows(&self) -> Vec<Country> {
        table::page_slice(&self.rows(), self.page).to_vec()
    }

    /// Current zero-based page, clamped to the rows available.
    pub fn page(&self) -> usize {
        table::clamp_page(self.page, self.rows().len())
    }

    pub fn page_count(&self) -> usize {
        table::page_count(self.rows().len())
    }

    pub fn column_filters(&self) -> &ColumnFilters {
        &self.column_filters
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &CountryId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Favorite records, in provider order.
    pub fn favorite_records(&self) -> Vec<&Country> {
        self.favorites.resolve(&self.records)
    }

    pub fn selected_id(&self) -> Option<&CountryId> {
        self.selected.as_ref()
    }

    /// The selected record, if the selection resolves to a loaded country.
    pub fn selected(&self) -> Option<&Country> {
        let id = self.selected.as_ref()?;
        self.records.iter().find(|country| &country.id() == id)
    }

    pub fn favorites_view_open(&self) -> bool {
        self.favorites_view_open
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }
}
