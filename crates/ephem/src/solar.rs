//! Mean-element solar coordinates and the subsolar point.

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sunside_core::GeoPoint;
use sunside_core::geo::{normalize_bearing, normalize_longitude};
use sunside_core::time::days_since_j2000;

/// Longitude of perihelion of the Earth's orbit (degrees).
const PERIHELION_DEG: f64 = 102.9372;
/// Mean obliquity of the ecliptic at J2000 (degrees).
const STANDARD_OBLIQUITY_DEG: f64 = 23.4397;

/// Obliquity model used when rotating ecliptic coordinates onto the equator.
///
/// `Reference` treats the obliquity as zero, so the subsolar point stays on
/// the equator and its longitude tracks the ecliptic longitude. Side votes
/// use it unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obliquity {
    #[default]
    Reference,
    Standard,
}

impl Obliquity {
    /// Obliquity angle in radians.
    pub fn radians(self) -> f64 {
        match self {
            Obliquity::Reference => 0.0,
            Obliquity::Standard => STANDARD_OBLIQUITY_DEG.to_radians(),
        }
    }
}

/// Equatorial coordinates of the sun (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

/// Sun direction as seen by an observer on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub azimuth: f64,
    /// Degrees above the geometric horizon.
    pub altitude: f64,
}

/// Solar mean anomaly (radians) for `d` days since J2000.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).to_radians()
}

/// Ecliptic longitude of the sun (radians) from its mean anomaly.
pub fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    let center =
        (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    m + center + PERIHELION_DEG.to_radians() + PI
}

/// Declination (radians) for an ecliptic longitude.
pub fn declination(longitude: f64, obliquity: Obliquity) -> f64 {
    (longitude.sin() * obliquity.radians().sin()).asin()
}

/// Right ascension (radians) for an ecliptic longitude.
pub fn right_ascension(longitude: f64, obliquity: Obliquity) -> f64 {
    (longitude.sin() * obliquity.radians().cos()).atan2(longitude.cos())
}

/// Equatorial sun coordinates for `d` days since J2000.
pub fn sun_coordinates(d: f64, obliquity: Obliquity) -> SunCoordinates {
    let longitude = ecliptic_longitude(solar_mean_anomaly(d));
    SunCoordinates {
        declination: declination(longitude, obliquity),
        right_ascension: right_ascension(longitude, obliquity),
    }
}

/// Local sidereal angle (radians); `lw` is the west longitude in radians.
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    (280.16 + 360.985_623_5 * d).to_radians() - lw
}

/// Point on the Earth's surface with the sun at the zenith, using the
/// default [`Obliquity::Reference`] model.
pub fn subsolar_point(instant: &DateTime<Utc>) -> GeoPoint {
    subsolar_point_with(instant, Obliquity::default())
}

/// Subsolar point under an explicit obliquity model.
pub fn subsolar_point_with(instant: &DateTime<Utc>, obliquity: Obliquity) -> GeoPoint {
    let d = days_since_j2000(instant);
    let sun = sun_coordinates(d, obliquity);
    let gst = sidereal_time(d, 0.0);

    GeoPoint {
        lat: sun.declination.to_degrees(),
        lon: normalize_longitude((sun.right_ascension - gst).to_degrees()),
    }
}

/// Azimuth and altitude of the sun for an observer.
///
/// Always uses the standard obliquity.
pub fn solar_position(instant: &DateTime<Utc>, observer: &GeoPoint) -> SolarPosition {
    let lw = -observer.lon.to_radians();
    let phi = observer.lat.to_radians();
    let d = days_since_j2000(instant);
    let sun = sun_coordinates(d, Obliquity::Standard);
    let hour_angle = sidereal_time(d, lw) - sun.right_ascension;

    // south-based, increasing westward
    let azimuth = hour_angle
        .sin()
        .atan2(hour_angle.cos() * phi.sin() - sun.declination.tan() * phi.cos());
    let altitude = (phi.sin() * sun.declination.sin()
        + phi.cos() * sun.declination.cos() * hour_angle.cos())
    .clamp(-1.0, 1.0)
    .asin();

    SolarPosition {
        azimuth: normalize_bearing(azimuth.to_degrees() + 180.0),
        altitude: altitude.to_degrees(),
    }
}

/// Compass bearing of the sun from an observer (0 = north, clockwise).
pub fn solar_azimuth(instant: &DateTime<Utc>, observer: &GeoPoint) -> f64 {
    solar_position(instant, observer).azimuth
}
