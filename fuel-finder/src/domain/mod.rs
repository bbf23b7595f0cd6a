//! Domain types for the fuel-station finder.
//!
//! A [`Station`] is always fully constructed: normalization substitutes a
//! documented sentinel for every missing or unparseable field instead of
//! rejecting the record. Code that receives these types never sees a
//! half-built station.

mod coordinate;
mod station;

pub use coordinate::{BoundingBox, Coordinate};
pub use station::{ServiceFlags, Station};
