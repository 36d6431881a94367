use anyhow::{Context, Result};

use crate::store::{PrefStore, KEY_RECENT_CITIES};

/// Cap on the number of remembered cities; oldest entries are evicted.
pub const MAX_RECENT: usize = 5;

/// Bounded, de-duplicated, most-recent-first list of searched city names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentCities {
    cities: Vec<String>,
}

impl RecentCities {
    /// Load from the store; a missing or unreadable entry yields an empty list.
    pub fn load(store: &dyn PrefStore) -> Self {
        let cities = store
            .get(KEY_RECENT_CITIES)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        Self { cities }
    }

    /// Record a successful city search. Trims the input; empty strings and
    /// exact (case-sensitive) duplicates are ignored. Returns whether the
    /// list changed, in which case it has already been persisted.
    pub fn record(&mut self, city: &str, store: &mut dyn PrefStore) -> Result<bool> {
        let city = city.trim();
        if city.is_empty() || self.cities.iter().any(|c| c == city) {
            return Ok(false);
        }

        self.cities.insert(0, city.to_string());
        self.cities.truncate(MAX_RECENT);

        let raw = serde_json::to_string(&self.cities)
            .context("Failed to serialize recent cities")?;
        store.set(KEY_RECENT_CITIES, &raw)?;

        Ok(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn recording_twice_keeps_one_entry_at_front() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        assert!(recent.record("Paris", &mut store).unwrap());
        assert!(!recent.record("Paris", &mut store).unwrap());

        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["Paris"]);
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        recent.record("paris", &mut store).unwrap();
        recent.record("Paris", &mut store).unwrap();

        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn six_cities_evict_the_oldest() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        for city in ["Oslo", "Lima", "Cairo", "Tokyo", "Quito", "Paris"] {
            recent.record(city, &mut store).unwrap();
        }

        assert_eq!(
            recent.iter().collect::<Vec<_>>(),
            vec!["Paris", "Quito", "Tokyo", "Cairo", "Lima"]
        );
    }

    #[test]
    fn empty_and_whitespace_input_is_ignored() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        assert!(!recent.record("", &mut store).unwrap());
        assert!(!recent.record("   ", &mut store).unwrap());
        assert!(recent.is_empty());
    }

    #[test]
    fn record_persists_and_load_restores() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        recent.record("Paris", &mut store).unwrap();
        recent.record("Oslo", &mut store).unwrap();

        let reloaded = RecentCities::load(&store);
        assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["Oslo", "Paris"]);
    }

    #[test]
    fn input_is_trimmed_before_recording() {
        let mut store = MemoryStore::new();
        let mut recent = RecentCities::default();

        recent.record("  Paris  ", &mut store).unwrap();
        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["Paris"]);
        assert!(!recent.record("Paris", &mut store).unwrap());
    }
}
