use std::fs;

use serde::Serialize;
use sunside_export::{json, track};

fn row(elapsed: i64, side: &'static str) -> track::Row {
    track::Row {
        elapsed_minutes: elapsed,
        time_utc: format!("2024-06-21T10:{elapsed:02}:00Z"),
        lat: 42.0,
        lon: -71.0,
        distance_km: elapsed as f64 * 14.0,
        subsolar_lat: 0.0,
        subsolar_lon: -30.0,
        bearing_to_destination: 55.0,
        bearing_to_sun: 120.0,
        angle_difference: 65.0,
        side,
    }
}

#[test]
fn track_csv_has_header_and_one_line_per_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/track.csv");

    track::write_rows(&path, &[row(0, "RIGHT"), row(1, "LEFT")]).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], track::HEADER.join(","));
    assert!(lines[1].starts_with("0,2024-06-21T10:00:00Z,"));
    assert!(lines[2].ends_with(",LEFT"));
}

#[test]
fn empty_track_still_writes_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");

    track::write_rows(&path, &[]).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read csv");
    assert_eq!(contents.trim_end(), track::HEADER.join(","));
}

#[test]
fn json_is_pretty_printed() {
    #[derive(Serialize)]
    struct Summary {
        side: &'static str,
        votes: usize,
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("summary.json");
    json::write_pretty(&path, &Summary { side: "LEFT", votes: 361 }).expect("write json");

    let contents = fs::read_to_string(&path).expect("read json");
    assert!(contents.contains("\n  \"side\": \"LEFT\""));
    let parsed: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(parsed["votes"], 361);
}
