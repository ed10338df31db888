//! Browser-free core of the country explorer.
//!
//! Everything here is plain Rust so it can be unit tested natively:
//! - [`Country`] and friends: the record shape served by REST Countries
//! - [`filter`]: the free-text search over name, languages, and currencies
//! - [`Favorites`]: the in-memory favorites registry
//! - [`table`]: column sorting, column filters, and paging for the table
//! - [`ExplorerState`]: the single controller that owns all UI state
//! - [`CountrySource`]: the seam for the one network read at startup

pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod source;
pub mod state;
pub mod table;

pub use error::FetchError;
pub use favorites::Favorites;
pub use filter::filter;
pub use models::{Country, CountryId, CountryName, Currency, Flags};
pub use source::{CountrySource, parse_countries};
pub use state::{Action, ExplorerState, LoadState};
pub use table::{ColumnFilters, PAGE_SIZE, SortColumn, SortDirection, SortKey};
