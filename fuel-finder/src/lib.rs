//! French fuel-station price finder.
//!
//! Fetches station records from the public `prix-des-carburants-j-1`
//! open-data API, normalizes them into [`domain::Station`] values, and
//! answers three queries: all stations, stations in a city, and stations
//! along an itinerary (the bounding box spanned by two geocoded cities).

pub mod domain;
pub mod favorites;
pub mod geocode;
pub mod opendata;
pub mod query;
