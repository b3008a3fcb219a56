//! Per-position side vote: is the sun to the left or the right of the track?

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sunside_core::GeoPoint;
use sunside_core::geo::{initial_bearing, signed_angle_difference};
use sunside_ephem::{Obliquity, subsolar_point_with};

/// Side of the cabin, facing forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sun clockwise of the heading votes RIGHT; everything else, including a
    /// sun dead ahead (0) or dead astern (-180), votes LEFT.
    pub fn from_angle_difference(angle_difference: f64) -> Side {
        if angle_difference > 0.0 {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry behind a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideVote {
    pub subsolar: GeoPoint,
    pub bearing_to_destination: f64,
    pub bearing_to_sun: f64,
    /// Sun bearing relative to the destination bearing, in `[-180, 180)`.
    pub angle_difference: f64,
    pub side: Side,
}

/// Vote for the aircraft at `position` at `time_utc`, heading for `destination`.
pub fn cast_vote(
    position: &GeoPoint,
    time_utc: &DateTime<Utc>,
    destination: &GeoPoint,
    obliquity: Obliquity,
) -> SideVote {
    let subsolar = subsolar_point_with(time_utc, obliquity);
    let bearing_to_destination = initial_bearing(position, destination);
    let bearing_to_sun = initial_bearing(position, &subsolar);
    let angle_difference = signed_angle_difference(bearing_to_sun, bearing_to_destination);

    SideVote {
        subsolar,
        bearing_to_destination,
        bearing_to_sun,
        angle_difference,
        side: Side::from_angle_difference(angle_difference),
    }
}
