//! Data source seam for the startup fetch.
//!
//! The browser implementation lives in the app crate; this module holds the
//! trait, payload parsing, and the load step that turns a fetch result into
//! an [`Action`].

use crate::error::FetchError;
use crate::models::Country;
use crate::state::Action;

/// Anything that can produce the full country list in one read.
#[allow(async_fn_in_trait)]
pub trait CountrySource {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError>;
}

/// Parse a JSON array of countries, keeping provider order.
pub fn parse_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Run the one fetch against `source` and return the action to dispatch.
///
/// Errors never escape: a failed read becomes [`Action::LoadFailed`].
pub async fn load<S: CountrySource>(source: &S) -> Action {
    match source.fetch_all().await {
        Ok(countries) => Action::Loaded(countries),
        Err(e) => Action::LoadFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ExplorerState, LoadState};

    const PAYLOAD: &str = r#"[
        {
            "name": { "common": "France", "official": "French Republic" },
            "cca3": "FRA",
            "population": 67391582,
            "area": 551695.0,
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Paris"],
            "languages": { "fra": "French" },
            "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
            "flags": {
                "png": "https://flagcdn.com/w320/fr.png",
                "svg": "https://flagcdn.com/fr.svg"
            },
            "timezones": ["UTC-10:00", "UTC+01:00"],
            "borders": ["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"]
        },
        {
            "name": { "common": "Antarctica", "official": "Antarctica" },
            "cca3": "ATA",
            "population": 1000,
            "area": 14000000.0,
            "region": "Antarctic"
        }
    ]"#;

    struct StaticSource(Result<Vec<Country>, FetchError>);

    impl CountrySource for StaticSource {
        async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_parse_keeps_order() {
        let countries = parse_countries(PAYLOAD).unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["France", "Antarctica"]);
        assert_eq!(countries[1].capital_label(), "No Capital");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_countries(r#"{"status": 404, "message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_countries("<html>").is_err());
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = StaticSource(parse_countries(PAYLOAD));
        let action = load(&source).await;

        let mut state = ExplorerState::new();
        state.apply(Action::LoadStarted);
        state.apply(action);

        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty() {
        let source = StaticSource(Err(FetchError::HttpError(500)));
        let action = load(&source).await;
        assert_eq!(action, Action::LoadFailed("HTTP error: 500".to_string()));

        let mut state = ExplorerState::new();
        state.apply(Action::LoadStarted);
        state.apply(action);

        assert!(state.visible().is_empty());
        assert_eq!(state.load_state().error(), Some("HTTP error: 500"));
    }
}
