//! Core units, constants, and shared primitives for the sunside workspace.

pub mod geo;

pub use geo::{CoordinateError, GeoPoint};

/// Physical and calendar constants (SI units unless stated otherwise).
pub mod constants {
    /// Mean Earth radius used for great-circle lengths (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;
    /// Milliseconds per day.
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
    /// Minutes per day.
    pub const MINUTES_PER_DAY: f64 = 1_440.0;
    /// Julian date of the Unix epoch (1970-01-01T00:00Z).
    pub const J1970: f64 = 2_440_588.0;
    /// Julian date of the J2000.0 epoch (2000-01-01T12:00Z).
    pub const J2000: f64 = 2_451_545.0;
}

/// Conversions between UTC instants and the day counts used by the solar formulas.
pub mod time {
    use chrono::{DateTime, Utc};

    use super::constants::{J1970, J2000, MILLIS_PER_DAY};

    /// Fractional Julian date of an instant.
    #[inline]
    pub fn to_julian(instant: &DateTime<Utc>) -> f64 {
        instant.timestamp_millis() as f64 / MILLIS_PER_DAY - 0.5 + J1970
    }

    /// Instant for a Julian date, or `None` when it is not finite or not representable.
    pub fn from_julian(julian: f64) -> Option<DateTime<Utc>> {
        if !julian.is_finite() {
            return None;
        }
        let millis = ((julian + 0.5 - J1970) * MILLIS_PER_DAY).round();
        if millis.abs() > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Days elapsed since 2000-01-01T12:00Z (negative before the epoch).
    #[inline]
    pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
        to_julian(instant) - J2000
    }
}
