//! Mock station source for testing without network access.
//!
//! Serves a fixed, in-memory station list through the same interface as
//! the real client, and counts calls so tests can assert which queries
//! touch the "network".

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Station;
use crate::query::StationSource;

/// Mock [`StationSource`] backed by a fixed station list.
///
/// Clones share the underlying call counters.
#[derive(Debug, Clone)]
pub struct MockStationSource {
    stations: Vec<Station>,
    fetch_all_calls: Arc<AtomicUsize>,
    fetch_by_city_calls: Arc<AtomicUsize>,
}

impl MockStationSource {
    /// Create a mock serving the given stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            fetch_all_calls: Arc::new(AtomicUsize::new(0)),
            fetch_by_city_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `fetch_all` calls served so far.
    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_by_city` calls served so far.
    pub fn fetch_by_city_calls(&self) -> usize {
        self.fetch_by_city_calls.load(Ordering::SeqCst)
    }
}

impl StationSource for MockStationSource {
    async fn fetch_all(&self) -> Vec<Station> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.stations.clone()
    }

    async fn fetch_by_city(&self, city: &str) -> Vec<Station> {
        self.fetch_by_city_calls.fetch_add(1, Ordering::SeqCst);
        let needle = city.to_lowercase();
        self.stations
            .iter()
            .filter(|station| station.city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceFlags;

    fn station(id: &str, city: &str) -> Station {
        Station {
            id: id.into(),
            address: format!("1 rue de {city}"),
            city: city.into(),
            postal_code: "00000".into(),
            fuel_types: "Gazole".into(),
            price_gazole: Some(1.80),
            price_sp95: None,
            price_sp98: None,
            brand: "Total".into(),
            services: ServiceFlags::default(),
        }
    }

    #[tokio::test]
    async fn serves_all_stations_and_counts_calls() {
        let mock = MockStationSource::new(vec![station("1", "Lyon"), station("2", "Paris")]);

        let all = mock.fetch_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(mock.fetch_all_calls(), 1);
        assert_eq!(mock.fetch_by_city_calls(), 0);
    }

    #[tokio::test]
    async fn city_filter_is_case_insensitive_substring() {
        let mock = MockStationSource::new(vec![
            station("1", "Lyon"),
            station("2", "Villeurbanne"),
            station("3", "LYON 3E"),
        ]);

        let matched = mock.fetch_by_city("lyon").await;
        let ids: Vec<&str> = matched.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
