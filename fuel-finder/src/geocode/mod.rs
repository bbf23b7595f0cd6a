//! City-name geocoding client.
//!
//! Resolves a free-text city name to a [`crate::domain::Coordinate`] via
//! a Nominatim-style search endpoint. Resolution is best-effort: any
//! failure (transport, empty candidate list, missing or unparseable
//! lat/lon) logs and yields `None`. No retries and no cross-call caching;
//! every call is a fresh network round trip.

mod client;
mod error;
pub mod mock;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
