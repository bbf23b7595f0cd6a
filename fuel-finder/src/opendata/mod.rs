//! Fuel-price open-data API client.
//!
//! Talks to the opendatasoft `prix-des-carburants-j-1` dataset. Key
//! characteristics of the API:
//! - records are paginated via `limit`/`offset`, with a `total_count`
//!   field in the envelope,
//! - every record field is optional in practice, and prices sometimes
//!   arrive as strings rather than numbers,
//! - city search is a server-side LIKE match that overmatches, so the
//!   results are re-verified client side.
//!
//! Failures degrade rather than propagate: a mistyped field falls back to
//! its sentinel, a malformed record is skipped, a failed page truncates
//! the sequence at that point.

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{OpendataClient, OpendataConfig};
pub use convert::{convert_results, normalize};
pub use error::OpendataError;
pub use types::{RawStation, RecordsPage};
