//! UI components built with Leptos.
//!
//! - [`Header`] - Title bar with the favorites toggle
//! - [`SearchBar`] - Free-text search field and result count
//! - [`LoadStatus`] - Loading and error line for the startup fetch
//! - [`CountryTable`] - Sortable country table
//! - [`FavoritesPanel`] - Side list of favorited countries
//! - [`DetailModal`] - Country detail dialog
//! - [`icons`] - Centralized icon definitions (change theme here)

mod detail;
mod favorites;
mod header;
pub mod icons;
mod search;
mod status;
mod table;

pub use detail::DetailModal;
pub use favorites::FavoritesPanel;
pub use header::Header;
pub use search::SearchBar;
pub use status::LoadStatus;
pub use table::CountryTable;
