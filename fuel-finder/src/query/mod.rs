//! Query facade over the station source and the geocoder.
//!
//! Exposes the three operations the UI collaborator calls: fetch all
//! stations, fetch by city, fetch by itinerary. Each returns a station
//! list plus an optional human-readable notice the UI surfaces verbatim.
//! Transport and parse failures never escape as errors; only invalid
//! input is a distinguishable [`QueryError`].

mod filter;


pub use filter::{BrandFilter, KNOWN_BRANDS, StationFilter};

use std::collections::HashMap;

use crate::domain::{BoundingBox, Coordinate, Station};

/// Provider of station records.
///
/// Abstracts the fuel-price API client so the facade can be exercised
/// against in-memory mocks.
#[allow(async_fn_in_trait)]
pub trait StationSource {
    /// Fetch every available station. Failures degrade to an empty or
    /// partial list.
    async fn fetch_all(&self) -> Vec<Station>;

    /// Fetch stations whose city matches `city`, already verified
    /// client side.
    async fn fetch_by_city(&self, city: &str) -> Vec<Station>;
}

/// Resolver of city names to coordinates.
#[allow(async_fn_in_trait)]
pub trait CityLocator {
    /// Resolve a city name; `None` on any failure.
    async fn locate(&self, city: &str) -> Option<Coordinate>;
}

/// Invalid caller input, surfaced as a distinguishable condition rather
/// than an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// City search with an empty city name
    #[error("Veuillez entrer une ville.")]
    EmptyCity,

    /// Itinerary search with an empty start or end city
    #[error("Veuillez entrer une ville de départ et une ville d'arrivée.")]
    EmptyItinerary,
}

/// Result of one query operation: the matched stations, in original
/// fetch order, plus an optional status message for the user.
///
/// An upstream outage and a genuine zero-match both yield an empty
/// station list; only the notice text tells them apart. Deliberate
/// trade-off, preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub stations: Vec<Station>,
    pub notice: Option<String>,
}

impl QueryOutcome {
    /// Wrap a station list, attaching `notice` when the list is empty.
    fn with_empty_notice(stations: Vec<Station>, notice: impl Into<String>) -> Self {
        let notice = stations.is_empty().then(|| notice.into());
        Self { stations, notice }
    }
}

/// Facade composing the station source, the geocoder, and the itinerary
/// filter.
///
/// Both collaborators are injected at construction; the facade holds no
/// other state and every operation recomputes from fresh fetches.
#[derive(Debug, Clone)]
pub struct StationFinder<S, G> {
    source: S,
    locator: G,
}

impl<S: StationSource, G: CityLocator> StationFinder<S, G> {
    /// Create a finder over the given collaborators.
    pub fn new(source: S, locator: G) -> Self {
        Self { source, locator }
    }

    /// Fetch every available station.
    pub async fn fetch_stations_online(&self) -> Result<QueryOutcome, QueryError> {
        let stations = self.source.fetch_all().await;
        Ok(QueryOutcome::with_empty_notice(
            stations,
            "Aucune station trouvée.",
        ))
    }

    /// Fetch the stations of one city.
    ///
    /// An empty or blank city name is a usage error and issues no
    /// network call.
    pub async fn fetch_stations_by_city(&self, city: &str) -> Result<QueryOutcome, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        let stations = self.source.fetch_by_city(city).await;
        Ok(QueryOutcome::with_empty_notice(
            stations,
            format!("Aucune station trouvée pour la ville '{city}'."),
        ))
    }

    /// Fetch the stations inside the bounding box spanned by two cities.
    ///
    /// Both endpoints are geocoded first; if either resolution fails the
    /// result is empty and the candidate fetch is not attempted. Each
    /// candidate station's own city is then geocoded (through a
    /// query-scoped cache, so repeated cities cost one call) and the
    /// station is kept iff its coordinate lies in the box. A station
    /// whose city cannot be geocoded is dropped.
    pub async fn fetch_stations_by_itinerary(
        &self,
        start_city: &str,
        end_city: &str,
    ) -> Result<QueryOutcome, QueryError> {
        let start_city = start_city.trim();
        let end_city = end_city.trim();
        if start_city.is_empty() || end_city.is_empty() {
            return Err(QueryError::EmptyItinerary);
        }

        // Same notice whether an endpoint failed to geocode or nothing
        // matched: the two conditions are deliberately indistinguishable.
        let no_results =
            format!("Aucune station trouvée entre '{start_city}' et '{end_city}'.");

        let Some(start) = self.locator.locate(start_city).await else {
            return Ok(QueryOutcome::with_empty_notice(Vec::new(), no_results));
        };
        let Some(end) = self.locator.locate(end_city).await else {
            return Ok(QueryOutcome::with_empty_notice(Vec::new(), no_results));
        };

        let bbox = BoundingBox::spanning(start, end);
        let candidates = self.source.fetch_all().await;

        // Query-scoped geocode cache; misses are cached too, so a city
        // that fails to resolve is asked once, not once per station.
        let mut resolved: HashMap<String, Option<Coordinate>> = HashMap::new();
        let mut kept = Vec::new();

        for station in candidates {
            let key = station.city.to_lowercase();
            let coord = match resolved.get(&key) {
                Some(coord) => *coord,
                None => {
                    let coord = self.locator.locate(&station.city).await;
                    resolved.insert(key, coord);
                    coord
                }
            };

            if let Some(point) = coord
                && bbox.contains(point)
            {
                kept.push(station);
            }
        }

        Ok(QueryOutcome::with_empty_notice(kept, no_results))
    }
}
