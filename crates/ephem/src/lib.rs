//! Solar ephemeris helpers: subsolar point, observer-relative solar position,
//! and sunrise/sunset windows.
//!
//! The formulas follow the compact mean-element model accurate to a few
//! arc-minutes. That is plenty for deciding which side of a cabin faces the
//! sun, and nowhere near observatory grade.

pub mod events;
pub mod solar;

pub use events::{
    DEFAULT_EVENT_PADDING_MINUTES, EventWindow, SunTimes, is_within_event_window,
    local_solar_date, sun_times_utc,
};
pub use solar::{
    Obliquity, SolarPosition, solar_azimuth, solar_position, subsolar_point, subsolar_point_with,
};
