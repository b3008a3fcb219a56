use chrono::{TimeDelta, TimeZone, Utc};
use sunside_core::GeoPoint;
use sunside_core::geo::signed_angle_difference;
use sunside_ephem::{
    Obliquity, solar_azimuth, solar_position, subsolar_point, subsolar_point_with,
};

#[test]
fn equinox_noon_subsolar_point_sits_on_the_equator_near_greenwich() {
    let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    for model in [Obliquity::Reference, Obliquity::Standard] {
        let point = subsolar_point_with(&noon, model);
        assert!(point.lat.abs() <= 1.0, "{model:?}: latitude {}", point.lat);
        assert!(point.lon.abs() <= 5.0, "{model:?}: longitude {}", point.lon);
    }
}

#[test]
fn reference_model_keeps_the_sun_on_the_equator() {
    let solstice = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    assert_eq!(subsolar_point(&solstice).lat, 0.0);
    assert_eq!(subsolar_point(&solstice), subsolar_point_with(&solstice, Obliquity::Reference));
}

#[test]
fn standard_model_reaches_the_tropics_at_the_solstices() {
    let june = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let december = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
    let north = subsolar_point_with(&june, Obliquity::Standard);
    let south = subsolar_point_with(&december, Obliquity::Standard);
    assert!((north.lat - 23.44).abs() < 1.0, "June latitude {}", north.lat);
    assert!((south.lat + 23.44).abs() < 1.0, "December latitude {}", south.lat);
}

#[test]
fn subsolar_point_moves_west_fifteen_degrees_an_hour() {
    let start = Utc.with_ymd_and_hms(2024, 9, 1, 6, 0, 0).unwrap();
    let later = start + TimeDelta::hours(6);
    let shift = signed_angle_difference(subsolar_point(&later).lon, subsolar_point(&start).lon);
    assert!((shift + 90.0).abs() < 0.5, "six hours should shift ~-90 deg (got {shift})");
}

#[test]
fn subsolar_point_is_a_pure_function_of_time() {
    let instant = Utc.with_ymd_and_hms(1987, 11, 3, 17, 42, 9).unwrap();
    assert_eq!(subsolar_point(&instant), subsolar_point(&instant));
    let point = subsolar_point(&instant);
    assert!(point.lon > -180.0 && point.lon <= 180.0);
}

#[test]
fn observer_at_the_subsolar_point_sees_the_sun_overhead() {
    let instant = Utc.with_ymd_and_hms(2024, 5, 5, 9, 30, 0).unwrap();
    let overhead = subsolar_point_with(&instant, Obliquity::Standard);
    let position = solar_position(&instant, &overhead);
    assert!(position.altitude > 89.0, "altitude {}", position.altitude);
}

#[test]
fn boston_solstice_morning_sun_is_low_in_the_east_north_east() {
    let boston = GeoPoint { lat: 42.3601, lon: -71.0589 };
    let instant = Utc.with_ymd_and_hms(2024, 6, 21, 10, 0, 0).unwrap();
    let position = solar_position(&instant, &boston);
    assert!((50.0..75.0).contains(&position.azimuth), "azimuth {}", position.azimuth);
    assert!((2.0..15.0).contains(&position.altitude), "altitude {}", position.altitude);
    assert_eq!(solar_azimuth(&instant, &boston), position.azimuth);
}
