//! Geographic points and spherical-earth path helpers.
//!
//! All angles crossing the public API are in degrees; distances are in
//! kilometres on a sphere of radius [`EARTH_RADIUS_KM`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::EARTH_RADIUS_KM;

/// Angular separation below which two points are treated as coincident (radians).
const COINCIDENT_EPSILON: f64 = 1e-12;

/// A latitude/longitude pair in degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `(-180, 180]`. Fields are
/// public for ergonomic construction in tests and adapters; anything crossing a
/// trust boundary goes through [`GeoPoint::new`] or [`GeoPoint::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Errors raised when a coordinate falls outside the accepted ranges.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

impl GeoPoint {
    /// Build a validated point. A longitude of exactly -180 is folded to 180.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        let point = GeoPoint { lat, lon };
        point.validate()?;
        Ok(GeoPoint {
            lat,
            lon: normalize_longitude(lon),
        })
    }

    /// Check the point against the latitude/longitude ranges.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::Latitude(self.lat));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoordinateError::Longitude(self.lon));
        }
        Ok(())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Wrap a longitude into `(-180, 180]`.
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Wrap a bearing into `[0, 360)`.
pub fn normalize_bearing(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Fold `bearing - reference` into `[-180, 180)`.
///
/// Exactly opposite bearings fold to -180, so callers that split on the sign
/// see both the 0 and the 180 case on the non-positive side.
pub fn signed_angle_difference(bearing: f64, reference: f64) -> f64 {
    (bearing - reference + 540.0).rem_euclid(360.0) - 180.0
}

/// Forward azimuth (degrees in `[0, 360)`) of the great circle from `from` to `to`.
///
/// Coincident points yield 0.
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Great-circle distance between two points (haversine).
pub fn path_length_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    central_angle(a, b) * EARTH_RADIUS_KM
}

fn central_angle(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// Point reached by travelling `distance_km` from `start` along the great circle
/// with initial bearing `bearing_deg`.
pub fn destination_point(start: &GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let phi1 = start.lat.to_radians();
    let lambda1 = start.lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let sin_phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    GeoPoint {
        lat: phi2.to_degrees(),
        lon: normalize_longitude(lambda2.to_degrees()),
    }
}

/// Point a `fraction` of the way from `a` to `b` along the great circle joining them.
///
/// The fraction is clamped to `[0, 1]`; the endpoints are returned verbatim.
/// Antipodal pairs have no unique great circle, so the path heads out along
/// the initial bearing from `a`.
pub fn interpolate(a: &GeoPoint, b: &GeoPoint, fraction: f64) -> GeoPoint {
    if fraction <= 0.0 {
        return *a;
    }
    if fraction >= 1.0 {
        return *b;
    }

    let delta = central_angle(a, b);
    if delta < COINCIDENT_EPSILON {
        return *a;
    }
    let sin_delta = delta.sin();
    if sin_delta.abs() < COINCIDENT_EPSILON {
        return destination_point(a, initial_bearing(a, b), fraction * delta * EARTH_RADIUS_KM);
    }

    let (phi1, lambda1) = (a.lat.to_radians(), a.lon.to_radians());
    let (phi2, lambda2) = (b.lat.to_radians(), b.lon.to_radians());
    let wa = ((1.0 - fraction) * delta).sin() / sin_delta;
    let wb = (fraction * delta).sin() / sin_delta;

    let x = wa * phi1.cos() * lambda1.cos() + wb * phi2.cos() * lambda2.cos();
    let y = wa * phi1.cos() * lambda1.sin() + wb * phi2.cos() * lambda2.sin();
    let z = wa * phi1.sin() + wb * phi2.sin();

    GeoPoint {
        lat: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        lon: normalize_longitude(y.atan2(x).to_degrees()),
    }
}
