//! Application configuration.
//!
//! Centralizes the constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Page heading.
pub const APP_TITLE: &str = "Country Information";

/// Search field placeholder.
pub const SEARCH_PLACEHOLDER: &str = "Search by name, language, or currency";

// =============================================================================
// Network Configuration
// =============================================================================

/// Country dataset endpoint (REST Countries v3.1, full collection).
///
/// The live provider now answers a bare `/v3.1/all` with HTTP 400 and asks
/// for a `fields=` list (at most 10 fields). The app then shows the failed
/// load line. Point this at a mirror or add `?fields=...` when deploying.
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Filled stars, bolder strokes (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
