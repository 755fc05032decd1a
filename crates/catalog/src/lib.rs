//! Read-only aircraft and airport catalog.
//!
//! A [`Catalog`] is validated once when it is built and never mutated afterwards.
//! [`CatalogHandle`] lets callers swap in a freshly loaded snapshot while calculations
//! already in flight keep the one they started with.

use std::collections::{HashMap, HashSet};

use perf_config::{CatalogFiles, CatalogPaths, ConfigError, load_catalog_files};
use perf_models::{AircraftPerformance, Airport, Intersection, Runway};
use thiserror::Error;

mod handle;
mod validate;

pub use handle::CatalogHandle;

/// Catalog data-integrity faults, raised at load time only.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load catalog files: {0}")]
    Config(#[from] ConfigError),
    #[error("aircraft '{key}' is invalid: {reason}")]
    InvalidAircraft { key: String, reason: String },
    #[error("airport '{icao}' is invalid: {reason}")]
    InvalidAirport { icao: String, reason: String },
    #[error("alias '{alias}' is invalid: {reason}")]
    InvalidAlias { alias: String, reason: String },
    /// Keys compare case-insensitively.
    #[error("aircraft '{0}' is defined more than once")]
    DuplicateAircraft(String),
    #[error("airport '{0}' is defined more than once")]
    DuplicateAirport(String),
}

/// Immutable snapshot of the aircraft, airport, and alias tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    aircraft: HashMap<String, AircraftPerformance>,
    airports: HashMap<String, Airport>,
    /// Lower-cased alias to canonical key. Every canonical key maps to itself.
    aliases: HashMap<String, String>,
}

impl Catalog {
    /// Load and validate the catalog sources named in `paths`.
    pub fn load(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let files = load_catalog_files(paths)?;
        Self::from_files(files)
    }

    /// Validate raw catalog records and build a snapshot.
    pub fn from_files(files: CatalogFiles) -> Result<Self, CatalogError> {
        let mut aircraft = HashMap::with_capacity(files.aircraft.len());
        let mut folded = HashSet::with_capacity(files.aircraft.len());
        for config in &files.aircraft {
            let record = validate::aircraft_from_config(config)?;
            if !folded.insert(record.key.to_lowercase()) {
                return Err(CatalogError::DuplicateAircraft(config.key.clone()));
            }
            aircraft.insert(record.key.clone(), record);
        }

        let mut airports = HashMap::with_capacity(files.airports.len());
        for config in &files.airports {
            let record = validate::airport_from_config(config)?;
            if airports.insert(record.icao.clone(), record).is_some() {
                return Err(CatalogError::DuplicateAirport(config.icao.clone()));
            }
        }

        let aliases = validate::alias_table(&files.aliases, &aircraft)?;

        tracing::info!(
            aircraft = aircraft.len(),
            airports = airports.len(),
            aliases = files.aliases.len(),
            "Built performance catalog"
        );

        Ok(Self {
            aircraft,
            airports,
            aliases,
        })
    }

    /// Aircraft record for an exact canonical key.
    pub fn aircraft(&self, key: &str) -> Option<&AircraftPerformance> {
        self.aircraft.get(key)
    }

    /// Airport record for an exact airport code.
    pub fn airport(&self, icao: &str) -> Option<&Airport> {
        self.airports.get(icao)
    }

    /// Runway of `airport` by exact name.
    pub fn runway<'a>(&self, airport: &'a Airport, name: &str) -> Option<&'a Runway> {
        airport.runway(name)
    }

    /// Canonical key for a case-insensitive alias (canonical keys included).
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Canonical aircraft keys, sorted.
    pub fn aircraft_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.aircraft.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Airport codes, sorted.
    pub fn airports(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.airports.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Runways of an airport in catalog order.
    pub fn runways<'a>(&self, airport: &'a Airport) -> &'a [Runway] {
        &airport.runways
    }

    /// Intersections of a runway in catalog order.
    pub fn intersections<'a>(&self, runway: &'a Runway) -> &'a [Intersection] {
        &runway.intersections
    }

    /// Flap settings available for an aircraft, ascending.
    pub fn flap_settings(&self, key: &str) -> Option<Vec<u8>> {
        self.aircraft(key)
            .map(|record| record.flaps.settings().collect())
    }
}
