//! Flight request model and its validation.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use sunside_core::{CoordinateError, GeoPoint};
use thiserror::Error;

/// The two horizon events a passenger may want to watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

impl SunEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SunEventKind::Sunrise => "sunrise",
            SunEventKind::Sunset => "sunset",
        }
    }
}

/// Which events the passenger cares about, and which wins when both occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunPreference {
    pub wants_sunrise: bool,
    pub wants_sunset: bool,
    #[serde(default)]
    pub priority: Option<SunEventKind>,
}

/// Everything the engine needs to know about one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    pub source: GeoPoint,
    pub destination: GeoPoint,
    pub departure_time_utc: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default)]
    pub sun_preference: SunPreference,
}

/// Input rejected before any sampling takes place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeatError {
    #[error("{field} coordinate is invalid: {source}")]
    InvalidCoordinate {
        field: &'static str,
        #[source]
        source: CoordinateError,
    },
    #[error("flight duration must not be negative (got {0} minutes)")]
    NegativeDuration(i64),
    #[error("sampling step must be positive (got {0} minutes)")]
    InvalidStep(i64),
    #[error("arrival time falls outside the supported date range")]
    TimeOutOfRange,
}

impl FlightRequest {
    /// Check coordinates, duration, and that the arrival instant is representable.
    pub fn validate(&self) -> Result<(), SeatError> {
        self.source
            .validate()
            .map_err(|source| SeatError::InvalidCoordinate {
                field: "source",
                source,
            })?;
        self.destination
            .validate()
            .map_err(|source| SeatError::InvalidCoordinate {
                field: "destination",
                source,
            })?;
        if self.duration_minutes < 0 {
            return Err(SeatError::NegativeDuration(self.duration_minutes));
        }
        self.arrival_time_utc()?;
        Ok(())
    }

    /// Departure plus the scheduled duration.
    pub fn arrival_time_utc(&self) -> Result<DateTime<Utc>, SeatError> {
        TimeDelta::try_minutes(self.duration_minutes)
            .and_then(|duration| self.departure_time_utc.checked_add_signed(duration))
            .ok_or(SeatError::TimeOutOfRange)
    }
}
