//! Utility modules for browser I/O and display formatting.
//!
//! Provides:
//! - [`RestCountries`] - The browser [`CountrySource`](country_core::CountrySource)
//! - [`format`] - Population and area formatting
//! - [`log`] - Console logging

mod fetch;
pub mod format;
pub mod log;

pub use fetch::RestCountries;
