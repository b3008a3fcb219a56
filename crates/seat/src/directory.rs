//! Resolving airport codes to coordinates.

use std::path::Path;

use serde::Serialize;
use sunside_config::{AirportConfig, ConfigError, load_airports};
use sunside_core::{CoordinateError, GeoPoint};
use thiserror::Error;

/// Airport metadata with a validated location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub iata: String,
    pub icao: Option<String>,
    pub name: String,
    pub municipality: Option<String>,
    pub country: Option<String>,
    pub time_zone: Option<String>,
    pub elevation_ft: Option<f64>,
    pub location: GeoPoint,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("airport '{0}' not found in catalog")]
    NotFound(String),
    #[error("airport catalog is empty")]
    EmptyCatalog,
    #[error("airport '{code}' has an invalid location: {source}")]
    InvalidLocation {
        code: String,
        #[source]
        source: CoordinateError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Anything that can turn an IATA/ICAO code into an airport.
pub trait AirportDirectory {
    fn resolve(&self, code: &str) -> Result<Airport, DirectoryError>;
}

/// Directory backed by catalog records loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct CatalogDirectory {
    records: Vec<AirportConfig>,
}

impl CatalogDirectory {
    pub fn new(records: Vec<AirportConfig>) -> Self {
        Self { records }
    }

    /// Load a catalog file or directory (see [`sunside_config::load_airports`]).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        Ok(Self::new(load_airports(path)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AirportDirectory for CatalogDirectory {
    /// Case-insensitive match on IATA first, then ICAO.
    fn resolve(&self, code: &str) -> Result<Airport, DirectoryError> {
        if self.records.is_empty() {
            return Err(DirectoryError::EmptyCatalog);
        }

        let upper = code.trim().to_uppercase();
        let chosen = self
            .records
            .iter()
            .find(|cfg| cfg.iata.to_uppercase() == upper)
            .or_else(|| {
                self.records
                    .iter()
                    .find(|cfg| cfg.icao.as_deref().map(str::to_uppercase) == Some(upper.clone()))
            })
            .ok_or_else(|| DirectoryError::NotFound(code.to_string()))?;

        from_config(chosen)
    }
}

/// Convert a catalog record into a runtime [`Airport`].
pub fn from_config(config: &AirportConfig) -> Result<Airport, DirectoryError> {
    let location =
        GeoPoint::new(config.lat, config.lon).map_err(|source| DirectoryError::InvalidLocation {
            code: config.iata.clone(),
            source,
        })?;

    Ok(Airport {
        iata: config.iata.clone(),
        icao: config.icao.clone(),
        name: config.name.clone(),
        municipality: config.municipality.clone(),
        country: config.country.clone(),
        time_zone: config.time_zone.clone(),
        elevation_ft: config.elevation_ft,
        location,
    })
}
