//! Window-seat sun recommendations for flights.
//!
//! The engine lives in the member crates; this façade re-exports them so
//! front-ends (CLI, web adapters) depend on a single library.

pub use sunside_config as config;
pub use sunside_core as core;
pub use sunside_ephem as ephemeris;
pub use sunside_export as export;
pub use sunside_seat as seat;

pub use sunside_core::GeoPoint;
pub use sunside_seat::{
    FlightRequest, SeatError, SeatRecommendation, Side, SunEventKind, SunPreference, recommend,
};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
