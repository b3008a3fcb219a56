use sunside_config::AirportConfig;
use sunside_seat::{AirportDirectory, CatalogDirectory, DirectoryError};

fn record(iata: &str, icao: Option<&str>, lat: f64, lon: f64) -> AirportConfig {
    AirportConfig {
        iata: iata.to_string(),
        icao: icao.map(str::to_string),
        name: format!("{iata} International"),
        municipality: None,
        country: None,
        time_zone: None,
        elevation_ft: None,
        lat,
        lon,
    }
}

fn catalog() -> CatalogDirectory {
    CatalogDirectory::new(vec![
        record("BOS", Some("KBOS"), 42.3656, -71.0096),
        record("LHR", Some("EGLL"), 51.4700, -0.4543),
        record("BAD", None, 95.0, 0.0),
    ])
}

#[test]
fn resolves_iata_and_icao_case_insensitively() {
    let directory = catalog();
    assert_eq!(directory.len(), 3);

    let bos = directory.resolve("bos").unwrap();
    assert_eq!(bos.iata, "BOS");
    assert!((bos.location.lat - 42.3656).abs() < 1e-12);

    let lhr = directory.resolve(" egll ").unwrap();
    assert_eq!(lhr.iata, "LHR");
    assert_eq!(lhr.icao.as_deref(), Some("EGLL"));
}

#[test]
fn unknown_code_is_not_found() {
    match catalog().resolve("ZZZ").unwrap_err() {
        DirectoryError::NotFound(code) => assert_eq!(code, "ZZZ"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_catalog_is_reported() {
    let directory = CatalogDirectory::default();
    assert!(directory.is_empty());
    assert!(matches!(
        directory.resolve("BOS").unwrap_err(),
        DirectoryError::EmptyCatalog
    ));
}

#[test]
fn out_of_range_record_is_rejected_on_resolve() {
    match catalog().resolve("BAD").unwrap_err() {
        DirectoryError::InvalidLocation { code, .. } => assert_eq!(code, "BAD"),
        other => panic!("unexpected error: {other}"),
    }
}
