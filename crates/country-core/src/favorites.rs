//! In-memory favorites registry.

use std::collections::BTreeSet;

use crate::models::{Country, CountryId};

/// Set of favorited country ids.
///
/// Lives only as long as the session. Every toggle is applied in the
/// order it is issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<CountryId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` and return the new state.
    pub fn toggle(&mut self, id: CountryId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: &CountryId) -> bool {
        self.ids.contains(id)
    }

    /// All favorited ids. No display order is promised.
    pub fn list(&self) -> impl Iterator<Item = &CountryId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite records, in dataset order.
    ///
    /// Ids with no matching record are skipped.
    pub fn resolve<'a>(&self, records: &'a [Country]) -> Vec<&'a Country> {
        records
            .iter()
            .filter(|country| self.ids.contains(&country.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryName;

    fn country(cca3: &str, name: &str) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: String::new(),
            },
            cca3: cca3.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favs = Favorites::new();
        let id = CountryId::from("FRA");

        assert!(favs.toggle(id.clone()));
        assert!(favs.is_favorite(&id));
        assert!(!favs.toggle(id.clone()));
        assert!(!favs.is_favorite(&id));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut favs = Favorites::new();
        favs.toggle(CountryId::from("JPN"));
        let before = favs.clone();

        favs.toggle(CountryId::from("JPN"));
        favs.toggle(CountryId::from("JPN"));
        assert_eq!(favs, before);

        favs.toggle(CountryId::from("CAN"));
        favs.toggle(CountryId::from("CAN"));
        assert_eq!(favs, before);
    }

    #[test]
    fn test_rapid_toggles_of_different_ids_are_kept() {
        let mut favs = Favorites::new();
        favs.toggle(CountryId::from("FRA"));
        favs.toggle(CountryId::from("DEU"));
        favs.toggle(CountryId::from("ITA"));

        assert_eq!(favs.len(), 3);
        let ids: Vec<&str> = favs.list().map(CountryId::as_str).collect();
        assert_eq!(ids, vec!["DEU", "FRA", "ITA"]);
    }

    #[test]
    fn test_resolve_follows_dataset_order() {
        let records = vec![
            country("FRA", "France"),
            country("JPN", "Japan"),
            country("CAN", "Canada"),
        ];
        let mut favs = Favorites::new();
        favs.toggle(CountryId::from("CAN"));
        favs.toggle(CountryId::from("FRA"));
        favs.toggle(CountryId::from("ZZZ"));

        let resolved: Vec<&str> = favs
            .resolve(&records)
            .iter()
            .map(|c| c.name.common.as_str())
            .collect();
        assert_eq!(resolved, vec!["France", "Canada"]);
    }
}
