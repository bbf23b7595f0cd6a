//! Mock geocoder for testing without network access.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Coordinate;
use crate::query::CityLocator;

/// Mock [`CityLocator`] backed by a fixed city → coordinate table.
///
/// Lookups are case-insensitive. Unknown cities resolve to `None`, like
/// a real geocoding miss. Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockGeocoder {
    coords: HashMap<String, Coordinate>,
    calls: Arc<AtomicUsize>,
}

impl MockGeocoder {
    /// Create a mock from (city, coordinate) pairs.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Coordinate)>,
    {
        Self {
            coords: entries
                .into_iter()
                .map(|(city, coord)| (city.to_lowercase(), coord))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of locate calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CityLocator for MockGeocoder {
    async fn locate(&self, city: &str) -> Option<Coordinate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.coords.get(&city.to_lowercase()).copied()
    }
}
