//! Data models for the country dataset.
//!
//! - [`Country`] - One normalized country record
//! - [`CountryId`] - Stable identity used by favorites and selection
//! - [`CountryName`], [`Currency`], [`Flags`] - Nested record parts

mod country;

pub use country::{
    Country, CountryId, CountryName, Currency, Flags, NO_BORDERS, NO_CAPITAL, NO_CURRENCIES,
    NO_LANGUAGES,
};
