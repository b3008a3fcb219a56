use std::f64::consts::PI;

use sunside_core::GeoPoint;
use sunside_core::constants::EARTH_RADIUS_KM;
use sunside_core::geo::{destination_point, initial_bearing, interpolate, path_length_km};

const BOS: GeoPoint = GeoPoint { lat: 42.3601, lon: -71.0589 };
const LHR: GeoPoint = GeoPoint { lat: 51.4700, lon: -0.4543 };

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn cardinal_bearings_from_the_origin() {
    let origin = GeoPoint { lat: 0.0, lon: 0.0 };
    let cases = [
        (GeoPoint { lat: 10.0, lon: 0.0 }, 0.0),
        (GeoPoint { lat: 0.0, lon: 10.0 }, 90.0),
        (GeoPoint { lat: -10.0, lon: 0.0 }, 180.0),
        (GeoPoint { lat: 0.0, lon: -10.0 }, 270.0),
    ];
    for (target, expected) in cases {
        let bearing = initial_bearing(&origin, &target);
        assert!(
            close(bearing, expected, 1e-9),
            "bearing to {target} should be {expected}, got {bearing}"
        );
    }
}

#[test]
fn transatlantic_bearing_and_length_are_plausible() {
    let bearing = initial_bearing(&BOS, &LHR);
    assert!((50.0..56.0).contains(&bearing), "BOS->LHR heads north-east (got {bearing})");

    let back = initial_bearing(&LHR, &BOS);
    assert!((280.0..295.0).contains(&back), "LHR->BOS heads west-north-west (got {back})");

    let km = path_length_km(&BOS, &LHR);
    assert!((5_150.0..5_350.0).contains(&km), "BOS-LHR is ~5,250 km (got {km})");
}

#[test]
fn quarter_meridian_length() {
    let km = path_length_km(&GeoPoint { lat: 0.0, lon: 0.0 }, &GeoPoint { lat: 90.0, lon: 0.0 });
    assert!(close(km, PI * EARTH_RADIUS_KM / 2.0, 1e-6));
}

#[test]
fn interpolation_returns_exact_endpoints() {
    assert_eq!(interpolate(&BOS, &LHR, 0.0), BOS);
    assert_eq!(interpolate(&BOS, &LHR, 1.0), LHR);
}

#[test]
fn interpolation_follows_the_great_circle() {
    let a = GeoPoint { lat: 0.0, lon: 0.0 };
    let b = GeoPoint { lat: 0.0, lon: 90.0 };
    let mid = interpolate(&a, &b, 0.5);
    assert!(close(mid.lat, 0.0, 1e-9) && close(mid.lon, 45.0, 1e-9), "got {mid}");

    let quarter = interpolate(&BOS, &LHR, 0.25);
    let total = path_length_km(&BOS, &LHR);
    assert!(close(path_length_km(&BOS, &quarter), total * 0.25, 1e-6));
    assert!(close(path_length_km(&quarter, &LHR), total * 0.75, 1e-6));
    // the great circle bows poleward of both endpoints' straight lat/lon line
    assert!(interpolate(&BOS, &LHR, 0.5).lat > (BOS.lat + LHR.lat) / 2.0);
}

#[test]
fn interpolation_crosses_the_antimeridian() {
    let a = GeoPoint { lat: 0.0, lon: 170.0 };
    let b = GeoPoint { lat: 0.0, lon: -170.0 };
    let mid = interpolate(&a, &b, 0.5);
    assert!(close(mid.lon.abs(), 180.0, 1e-9), "got {mid}");
    assert!(mid.lon > -180.0);
}

#[test]
fn antipodal_interpolation_stays_finite() {
    let a = GeoPoint { lat: 0.0, lon: 0.0 };
    let b = GeoPoint { lat: 0.0, lon: 180.0 };
    let mid = interpolate(&a, &b, 0.5);
    assert!(mid.lat.is_finite() && mid.lon.is_finite());
    assert!(close(path_length_km(&a, &mid), PI * EARTH_RADIUS_KM / 2.0, 1e-6));
}

#[test]
fn destination_point_walks_a_quarter_of_the_equator() {
    let start = GeoPoint { lat: 0.0, lon: 0.0 };
    let end = destination_point(&start, 90.0, PI * EARTH_RADIUS_KM / 2.0);
    assert!(close(end.lat, 0.0, 1e-9) && close(end.lon, 90.0, 1e-9), "got {end}");
}
