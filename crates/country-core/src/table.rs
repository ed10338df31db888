//! Table widget behavior: column sorting, per-column filters, and paging.
//!
//! All of it is display-only. It reorders and narrows the visible subset
//! without touching what the search returns.

use std::cmp::Ordering;

use crate::models::Country;

/// Number of rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Sortable and filterable table columns. The flag column is neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Currencies,
    Languages,
    Population,
}

impl SortColumn {
    /// All sortable columns, in table order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Currencies,
        SortColumn::Languages,
        SortColumn::Population,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Currencies => "Currencies",
            SortColumn::Languages => "Languages",
            SortColumn::Population => "Population",
        }
    }

    /// Whether the column holds numbers (rendered right-aligned).
    pub fn is_numeric(self) -> bool {
        matches!(self, SortColumn::Population)
    }

    /// Text a column filter is matched against: the cell as displayed,
    /// except population, which is matched on its plain digits.
    pub fn cell_text(self, country: &Country) -> String {
        match self {
            SortColumn::Name => country.name.common.clone(),
            SortColumn::Currencies => country.currencies_label(),
            SortColumn::Languages => country.languages_label(),
            SortColumn::Population => country.population.to_string(),
        }
    }

    fn index(self) -> usize {
        match self {
            SortColumn::Name => 0,
            SortColumn::Currencies => 1,
            SortColumn::Languages => 2,
            SortColumn::Population => 3,
        }
    }

    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortColumn::Name => compare_text(&a.name.common, &b.name.common),
            SortColumn::Currencies => compare_text(&a.currencies_label(), &b.currencies_label()),
            SortColumn::Languages => compare_text(&a.languages_label(), &b.languages_label()),
            SortColumn::Population => a.population.cmp(&b.population),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: a column and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Advance the sort after a click on `column`.
///
/// Clicking a new column sorts it ascending; clicking the active column
/// cycles ascending -> descending -> unsorted.
pub fn next_sort(current: Option<SortKey>, column: SortColumn) -> Option<SortKey> {
    match current {
        Some(key) if key.column == column => match key.direction {
            SortDirection::Ascending => Some(SortKey::descending(column)),
            SortDirection::Descending => None,
        },
        _ => Some(SortKey::ascending(column)),
    }
}

/// Return `rows` ordered by `sort`. `None` keeps the input order.
///
/// The sort is stable, so ties keep their dataset order.
pub fn sorted(rows: &[Country], sort: Option<SortKey>) -> Vec<Country> {
    let mut out = rows.to_vec();
    if let Some(key) = sort {
        out.sort_by(|a, b| {
            let ord = key.column.compare(a, b);
            match key.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    out
}

// =============================================================================
// Column Filters
// =============================================================================

/// One free-text filter per column; empty means inactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    values: [String; 4],
}

impl ColumnFilters {
    pub fn get(&self, column: SortColumn) -> &str {
        &self.values[column.index()]
    }

    pub fn set(&mut self, column: SortColumn, value: String) {
        self.values[column.index()] = value;
    }

    pub fn is_active(&self) -> bool {
        self.values.iter().any(|v| !v.trim().is_empty())
    }

    /// Whether `country` passes every active column filter.
    ///
    /// Matching is a case-insensitive substring test on
    /// [`SortColumn::cell_text`]. Thousands separators typed into the
    /// population filter are ignored.
    pub fn matches(&self, country: &Country) -> bool {
        SortColumn::ALL.into_iter().all(|column| {
            let raw = self.get(column).trim();
            if raw.is_empty() {
                return true;
            }
            let needle = match column {
                SortColumn::Population => raw.replace([',', ' ', '_'], ""),
                _ => raw.to_lowercase(),
            };
            column.cell_text(country).to_lowercase().contains(&needle)
        })
    }

    /// Rows passing every active filter, in input order.
    pub fn apply(&self, rows: &[Country]) -> Vec<Country> {
        if !self.is_active() {
            return rows.to_vec();
        }
        rows.iter()
            .filter(|country| self.matches(country))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Paging
// =============================================================================

/// Number of pages for `total` rows; an empty table still has one page.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp `page` (zero-based) into range for `total` rows.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.min(page_count(total) - 1)
}

/// Rows on `page` (zero-based, clamped).
pub fn page_slice(rows: &[Country], page: usize) -> &[Country] {
    let start = clamp_page(page, rows.len()) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
