//! iRail API client.
//!
//! iRail (<https://api.irail.be>) is a community API over SNCB/NMBS data.
//! A few quirks shape this module:
//! - numbers and booleans usually arrive as strings ("300", "0")
//! - single-element lists are sometimes sent as a bare object
//! - unauthenticated clients must stay at or below 3 requests per second

mod client;
mod de;
mod error;
mod rate_limit;
mod request;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_REQUESTS_PER_SECOND, IrailClient, IrailConfig};
pub use error::IrailError;
pub use rate_limit::RateLimiter;
pub use request::{BoardKind, Endpoint, IrailRequest, TimeSelection};
pub use types::{
    Connection, Connections, Disturbance, DisturbanceKind, Disturbances, Liveboard, StationInfo,
    TimedStop, VehicleInfo, VehicleJourney, VehicleStop, Via, Vias,
};

pub(crate) use client::parse;
