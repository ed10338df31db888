use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Placeholders
// =============================================================================

/// Shown when a country has no languages.
pub const NO_LANGUAGES: &str = "No Languages";
/// Shown when a country has no currencies.
pub const NO_CURRENCIES: &str = "No Currencies";
/// Shown when a country has no capital.
pub const NO_CAPITAL: &str = "No Capital";
/// Shown when a country has no land borders.
pub const NO_BORDERS: &str = "No Borders";

// =============================================================================
// Identity
// =============================================================================

/// Identity key for favorites and selection.
///
/// Built from the ISO 3166-1 alpha-3 code when the provider sends one,
/// otherwise from the common name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(String);

impl CountryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// Record Parts
// =============================================================================

/// Common and official country names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// A currency entry, keyed by ISO 4217 code in [`Country::currencies`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Flag image URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    /// Accessible description of the flag
    #[serde(default)]
    pub alt: Option<String>,
}

// =============================================================================
// Country
// =============================================================================

/// One country as returned by the REST Countries v3.1 API.
///
/// Every field other than `name` may be missing from the payload; missing
/// collections deserialize as empty and missing strings as `""`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// ISO 3166-1 alpha-3 code
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub population: u64,
    /// Area in km²
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub capital: Vec<String>,
    /// Language code -> display name
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Currency code -> currency
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub timezones: Vec<String>,
    /// alpha-3 codes of bordering countries
    #[serde(default)]
    pub borders: Vec<String>,
}

impl Country {
    /// Identity key: `cca3`, or the common name if the code is missing.
    pub fn id(&self) -> CountryId {
        if self.cca3.is_empty() {
            CountryId::new(self.name.common.as_str())
        } else {
            CountryId::new(self.cca3.as_str())
        }
    }

    /// Flag image URL, preferring SVG.
    pub fn flag_image_url(&self) -> &str {
        if self.flags.svg.is_empty() {
            &self.flags.png
        } else {
            &self.flags.svg
        }
    }

    /// Alt text for the flag image.
    pub fn flag_alt(&self) -> String {
        self.flags
            .alt
            .clone()
            .unwrap_or_else(|| format!("Flag of {}", self.name.common))
    }

    /// Language names joined with `", "`; empty when there are none.
    pub fn languages_joined(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Currencies as `"{name} ({symbol})"` joined with `", "`; empty when there are none.
    pub fn currencies_joined(&self) -> String {
        self.currencies
            .values()
            .map(Currency::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Languages for display, with a placeholder when empty.
    pub fn languages_label(&self) -> String {
        or_placeholder(self.languages_joined(), NO_LANGUAGES)
    }

    /// Currencies for display, with a placeholder when empty.
    pub fn currencies_label(&self) -> String {
        or_placeholder(self.currencies_joined(), NO_CURRENCIES)
    }

    pub fn capital_label(&self) -> String {
        or_placeholder(self.capital.join(", "), NO_CAPITAL)
    }

    pub fn borders_label(&self) -> String {
        or_placeholder(self.borders.join(", "), NO_BORDERS)
    }

    /// Region and subregion, e.g. `"Europe / Western Europe"`.
    pub fn region_label(&self) -> String {
        match (self.region.is_empty(), self.subregion.is_empty()) {
            (true, true) => "-".to_string(),
            (false, true) => self.region.clone(),
            (true, false) => self.subregion.clone(),
            (false, false) => format!("{} / {}", self.region, self.subregion),
        }
    }

    /// The three fields free-text search looks at.
    pub fn search_fields(&self) -> [String; 3] {
        [
            self.name.common.clone(),
            self.languages_joined(),
            self.currencies_joined(),
        ]
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWITZERLAND: &str = r#"{
        "name": { "common": "Switzerland", "official": "Swiss Confederation" },
        "cca3": "CHE",
        "population": 8654622,
        "area": 41284.0,
        "region": "Europe",
        "subregion": "Western Europe",
        "capital": ["Bern"],
        "languages": { "fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh" },
        "currencies": { "CHF": { "name": "Swiss franc", "symbol": "Fr." } },
        "flags": { "png": "https://flagcdn.com/w320/ch.png", "svg": "https://flagcdn.com/ch.svg" },
        "timezones": ["UTC+01:00"],
        "borders": ["AUT", "FRA", "ITA", "LIE", "DEU"]
    }"#;

    #[test]
    fn test_deserialize_full_record() {
        let country: Country = serde_json::from_str(SWITZERLAND).unwrap();
        assert_eq!(country.name.common, "Switzerland");
        assert_eq!(country.name.official, "Swiss Confederation");
        assert_eq!(country.population, 8_654_622);
        assert_eq!(country.capital, vec!["Bern"]);
        assert_eq!(country.languages.len(), 4);
        assert_eq!(country.borders.len(), 5);
        assert_eq!(country.id(), CountryId::from("CHE"));
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let country: Country =
            serde_json::from_str(r#"{ "name": { "common": "Antarctica" } }"#).unwrap();
        assert!(country.capital.is_empty());
        assert!(country.languages.is_empty());
        assert!(country.currencies.is_empty());
        assert!(country.borders.is_empty());
        assert_eq!(country.population, 0);
        assert_eq!(country.id(), CountryId::from("Antarctica"));
    }

    #[test]
    fn test_joined_fields() {
        let country: Country = serde_json::from_str(SWITZERLAND).unwrap();
        assert_eq!(
            country.languages_joined(),
            "French, Swiss German, Italian, Romansh"
        );
        assert_eq!(country.currencies_joined(), "Swiss franc (Fr.)");
    }

    #[test]
    fn test_placeholders() {
        let country = Country {
            name: CountryName {
                common: "Nowhere".into(),
                official: String::new(),
            },
            ..Default::default()
        };
        assert_eq!(country.languages_joined(), "");
        assert_eq!(country.currencies_joined(), "");
        assert_eq!(country.languages_label(), NO_LANGUAGES);
        assert_eq!(country.currencies_label(), NO_CURRENCIES);
        assert_eq!(country.capital_label(), NO_CAPITAL);
        assert_eq!(country.borders_label(), NO_BORDERS);
        assert_eq!(country.region_label(), "-");
    }

    #[test]
    fn test_flag_url_prefers_svg() {
        let mut country: Country = serde_json::from_str(SWITZERLAND).unwrap();
        assert_eq!(country.flag_image_url(), "https://flagcdn.com/ch.svg");
        country.flags.svg.clear();
        assert_eq!(country.flag_image_url(), "https://flagcdn.com/w320/ch.png");
        assert_eq!(country.flag_alt(), "Flag of Switzerland");
    }

    #[test]
    fn test_region_label() {
        let country: Country = serde_json::from_str(SWITZERLAND).unwrap();
        assert_eq!(country.region_label(), "Europe / Western Europe");
    }
}
