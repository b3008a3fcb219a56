//! Fixed-step walk along the great circle from origin to destination.

use std::iter::FusedIterator;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use sunside_core::GeoPoint;
use sunside_core::geo::{interpolate, path_length_km};

use crate::request::{FlightRequest, SeatError};

/// Aircraft position at one instant of the flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSample {
    pub elapsed_minutes: i64,
    pub coordinate: GeoPoint,
    pub time_utc: DateTime<Utc>,
    /// Distance flown along the great circle so far.
    pub distance_km: f64,
}

/// Samples at `0, step, 2*step, ...` minutes, always ending on the arrival minute.
///
/// When the duration is not a multiple of the step, the last two samples sit
/// closer together than `step`. A zero-duration flight yields exactly one
/// sample at the origin.
#[derive(Debug, Clone)]
pub struct PathSamples {
    source: GeoPoint,
    destination: GeoPoint,
    departure: DateTime<Utc>,
    duration_minutes: i64,
    step_minutes: i64,
    length_km: f64,
    next_elapsed: Option<i64>,
}

/// Validate the request and start sampling its path.
pub fn samples(request: &FlightRequest, step_minutes: i64) -> Result<PathSamples, SeatError> {
    request.validate()?;
    if step_minutes <= 0 {
        return Err(SeatError::InvalidStep(step_minutes));
    }

    Ok(PathSamples {
        source: request.source,
        destination: request.destination,
        departure: request.departure_time_utc,
        duration_minutes: request.duration_minutes,
        step_minutes,
        length_km: path_length_km(&request.source, &request.destination),
        next_elapsed: Some(0),
    })
}

impl PathSamples {
    /// Great-circle length of the whole route.
    pub fn path_length_km(&self) -> f64 {
        self.length_km
    }

    fn fraction(&self, elapsed: i64) -> f64 {
        if self.duration_minutes == 0 {
            0.0
        } else {
            elapsed as f64 / self.duration_minutes as f64
        }
    }
}

impl Iterator for PathSamples {
    type Item = PathSample;

    fn next(&mut self) -> Option<Self::Item> {
        let elapsed = self.next_elapsed?;
        self.next_elapsed = (elapsed < self.duration_minutes)
            .then(|| (elapsed + self.step_minutes).min(self.duration_minutes));

        let fraction = self.fraction(elapsed);
        // elapsed never exceeds the duration validated in `samples`
        let time_utc = self.departure + TimeDelta::minutes(elapsed);

        Some(PathSample {
            elapsed_minutes: elapsed,
            coordinate: interpolate(&self.source, &self.destination, fraction),
            time_utc,
            distance_km: fraction * self.length_km,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next_elapsed {
            None => 0,
            Some(elapsed) => {
                let left = (self.duration_minutes - elapsed) as usize;
                let step = self.step_minutes as usize;
                left.div_ceil(step) + 1
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSamples {}

impl FusedIterator for PathSamples {}
