//! Free-text country search.
//!
//! A record matches when its common name, its joined language names, or its
//! joined `"{name} ({symbol})"` currency strings contain the query,
//! case-insensitively. Results keep input order and are never ranked.

use crate::models::Country;

/// Compute the visible subset of `records` for `query`.
///
/// An empty query returns every record. The input is never modified, and
/// `filter(&filter(r, q), q) == filter(r, q)`.
pub fn filter(records: &[Country], query: &str) -> Vec<Country> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|country| contains_lowered(country, &needle))
        .cloned()
        .collect()
}

/// Check whether a single record matches `query`.
pub fn matches(country: &Country, query: &str) -> bool {
    contains_lowered(country, &query.to_lowercase())
}

fn contains_lowered(country: &Country, needle: &str) -> bool {
    country
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{CountryName, Currency};

    fn country(
        name: &str,
        languages: &[(&str, &str)],
        currencies: &[(&str, &str, &str)],
    ) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: String::new(),
            },
            languages: languages
                .iter()
                .map(|(code, lang)| (code.to_string(), lang.to_string()))
                .collect(),
            currencies: currencies
                .iter()
                .map(|(code, name, symbol)| {
                    (
                        code.to_string(),
                        Currency {
                            name: name.to_string(),
                            symbol: symbol.to_string(),
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
            ..Default::default()
        }
    }

    fn dataset() -> Vec<Country> {
        vec![
            country("France", &[("fra", "French")], &[("EUR", "Euro", "€")]),
            country("Japan", &[("jpn", "Japanese")], &[("JPY", "Japanese yen", "¥")]),
            country(
                "Canada",
                &[("eng", "English"), ("fra", "French")],
                &[("CAD", "Canadian dollar", "$")],
            ),
            country("Antarctica", &[], &[]),
        ]
    }

    fn names(records: &[Country]) -> Vec<&str> {
        records.iter().map(|c| c.name.common.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let records = dataset();
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn test_match_on_currency_language_and_name() {
        let records = dataset();
        assert!(names(&filter(&records, "euro")).contains(&"France"));
        assert!(names(&filter(&records, "french")).contains(&"France"));
        assert!(names(&filter(&records, "franc")).contains(&"France"));
        assert!(!names(&filter(&records, "xyz")).contains(&"France"));
    }

    #[test]
    fn test_case_insensitive() {
        let records = dataset();
        assert_eq!(names(&filter(&records, "JAPAN")), vec!["Japan"]);
        assert_eq!(names(&filter(&records, "YeN")), vec!["Japan"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let records = dataset();
        assert_eq!(names(&filter(&records, "french")), vec!["France", "Canada"]);
    }

    #[test]
    fn test_matches_currency_symbol_format() {
        let records = dataset();
        assert_eq!(names(&filter(&records, "euro (€)")), vec!["France"]);
        assert_eq!(names(&filter(&records, "($)")), vec!["Canada"]);
    }

    #[test]
    fn test_placeholders_are_not_searchable() {
        let records = dataset();
        assert!(filter(&records, "no languages").is_empty());
        assert!(filter(&records, "no currencies").is_empty());
    }

    #[test]
    fn test_substring_not_token() {
        let records = dataset();
        // "nada" sits inside "Canada"
        assert_eq!(names(&filter(&records, "nada")), vec!["Canada"]);
    }

    #[test]
    fn test_idempotent() {
        let records = dataset();
        for query in ["", "a", "french", "dollar", "zzz"] {
            let once = filter(&records, query);
            assert_eq!(filter(&once, query), once);
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let records = dataset();
        let snapshot = records.clone();
        let _ = filter(&records, "an");
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_result_partitions_input() {
        let records = dataset();
        for query in ["an", "e", "yen", "dollar", "q", "EN", "(€"] {
            let needle = query.to_lowercase();
            let result = filter(&records, query);
            for record in &records {
                let included = result.iter().any(|r| r.name.common == record.name.common);
                let expected = record.name.common.to_lowercase().contains(&needle)
                    || record.languages_joined().to_lowercase().contains(&needle)
                    || record.currencies_joined().to_lowercase().contains(&needle);
                assert_eq!(included, expected, "query {query:?}, record {}", record.name.common);
            }
        }
    }
}
