//! Sunrise and sunset windows for a calendar day and location.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use sunside_core::GeoPoint;
use sunside_core::constants::J2000;
use sunside_core::time::from_julian;

use crate::solar::{Obliquity, declination, ecliptic_longitude, solar_mean_anomaly};

/// Padding applied on both ends of a raw sunrise/sunset window.
pub const DEFAULT_EVENT_PADDING_MINUTES: i64 = 5;

/// Days from 0001-01-01 to 2000-01-01 in the proleptic Gregorian calendar.
const J2000_DAYS_FROM_CE: i32 = 730_120;
/// Small offset between the mean and the true transit (days).
const J0: f64 = 0.0009;
/// Sun altitude when the upper limb touches the horizon, refraction included (degrees).
const LIMB_ON_HORIZON_DEG: f64 = -0.833;
/// Sun altitude when the lower limb clears the horizon (degrees).
const LIMB_CLEARS_HORIZON_DEG: f64 = -0.3;

/// Raw onset/completion instants of sunrise and sunset.
///
/// A value is `None` when the sun never reaches the corresponding altitude
/// that day (polar day or polar night).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunTimes {
    pub solar_noon: Option<DateTime<Utc>>,
    pub sunrise_start: Option<DateTime<Utc>>,
    pub sunrise_end: Option<DateTime<Utc>>,
    pub sunset_start: Option<DateTime<Utc>>,
    pub sunset_end: Option<DateTime<Utc>>,
}

/// Closed interval between an event's onset and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SunTimes {
    pub fn sunrise_window(&self) -> Option<EventWindow> {
        Some(EventWindow {
            start: self.sunrise_start?,
            end: self.sunrise_end?,
        })
    }

    pub fn sunset_window(&self) -> Option<EventWindow> {
        Some(EventWindow {
            start: self.sunset_start?,
            end: self.sunset_end?,
        })
    }
}

impl EventWindow {
    /// True when `instant` lies in `[start - padding, end + padding]`.
    pub fn contains(&self, instant: &DateTime<Utc>, padding: TimeDelta) -> bool {
        let after_start = self
            .start
            .checked_sub_signed(padding)
            .is_none_or(|lower| lower <= *instant);
        let before_end = self
            .end
            .checked_add_signed(padding)
            .is_none_or(|upper| *instant <= upper);
        after_start && before_end
    }
}

/// Window test with the default five-minute padding.
pub fn is_within_event_window(instant: &DateTime<Utc>, window: &EventWindow) -> bool {
    window.contains(instant, TimeDelta::minutes(DEFAULT_EVENT_PADDING_MINUTES))
}

/// Calendar date of the local mean solar time at `location`.
///
/// Shifting by four minutes per degree of longitude keeps an overnight leg
/// on the day whose sunrise or sunset it is actually flying through.
pub fn local_solar_date(instant: &DateTime<Utc>, location: &GeoPoint) -> NaiveDate {
    let offset = TimeDelta::seconds((location.lon * 240.0).round() as i64);
    instant
        .checked_add_signed(offset)
        .unwrap_or(*instant)
        .date_naive()
}

/// Sunrise and sunset onset/completion for `date` at `location`, anchored at noon.
pub fn sun_times_utc(date: NaiveDate, location: &GeoPoint) -> SunTimes {
    let lw = -location.lon.to_radians();
    let phi = location.lat.to_radians();
    let d = f64::from(date.num_days_from_ce() - J2000_DAYS_FROM_CE);

    let cycle = (d - J0 - lw / TAU).round();
    let ds = approx_transit(0.0, lw, cycle);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, Obliquity::Standard);
    let noon = transit_julian(ds, m, l);

    let set_for = |altitude_deg: f64| -> Option<f64> {
        let w = hour_angle(altitude_deg.to_radians(), phi, dec)?;
        Some(transit_julian(approx_transit(w, lw, cycle), m, l))
    };
    let rise_for = |set: f64| noon - (set - noon);

    let limb_on = set_for(LIMB_ON_HORIZON_DEG);
    let limb_clear = set_for(LIMB_CLEARS_HORIZON_DEG);

    SunTimes {
        solar_noon: from_julian(noon),
        sunrise_start: limb_on.map(rise_for).and_then(from_julian),
        sunrise_end: limb_clear.map(rise_for).and_then(from_julian),
        sunset_start: limb_clear.and_then(from_julian),
        sunset_end: limb_on.and_then(from_julian),
    }
}

fn approx_transit(hour_angle: f64, lw: f64, cycle: f64) -> f64 {
    J0 + (hour_angle + lw) / TAU + cycle
}

fn transit_julian(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

fn hour_angle(altitude: f64, phi: f64, dec: f64) -> Option<f64> {
    let cos_w = (altitude.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_w).then(|| cos_w.acos())
}
