//! In-memory refinement filters over an already-fetched station list.
//!
//! These mirror the brand / fuel / city dropdown filters of the UI
//! collaborator: pure predicates, no network.

use crate::domain::Station;

/// Brands the UI offers as named choices; everything else is "Autres".
pub const KNOWN_BRANDS: [&str; 4] = ["Total", "Carrefour", "Intermarché", "Leclerc"];

/// Brand refinement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// Keep every brand.
    #[default]
    Any,
    /// Keep exactly this brand.
    Named(String),
    /// Keep brands outside [`KNOWN_BRANDS`].
    Other,
}

impl BrandFilter {
    /// Does a station brand pass this filter?
    pub fn matches(&self, brand: &str) -> bool {
        match self {
            BrandFilter::Any => true,
            BrandFilter::Named(wanted) => brand == wanted,
            BrandFilter::Other => !KNOWN_BRANDS.contains(&brand),
        }
    }
}

/// Composite station filter. Empty fields keep everything.
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    pub brand: BrandFilter,
    /// Fuel-type code matched case-insensitively against `fuel_types`.
    pub fuel: Option<String>,
    /// City substring matched case-insensitively.
    pub city: Option<String>,
}

impl StationFilter {
    /// Does a station pass every configured criterion?
    pub fn matches(&self, station: &Station) -> bool {
        let fuel_ok = self.fuel.as_deref().is_none_or(|fuel| {
            station
                .fuel_types
                .to_lowercase()
                .contains(&fuel.to_lowercase())
        });
        let city_ok = self.city.as_deref().is_none_or(|city| {
            station.city.to_lowercase().contains(&city.to_lowercase())
        });
        self.brand.matches(&station.brand) && fuel_ok && city_ok
    }

    /// Keep matching stations, preserving order.
    pub fn apply(&self, stations: &[Station]) -> Vec<Station> {
        stations
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}
