//! Configuration models and loaders for the flight performance calculator.
//!
//! The catalog files are plain data: nothing here checks physical plausibility.
//! That happens once, when `perf_catalog` builds a snapshot from these records.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

mod calibration;

pub use calibration::Calibration;

/// Aircraft performance record parsed from catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    pub flaps: Vec<FlapConfig>,
    pub speeds: ReferenceSpeedsConfig,
    pub deceleration: DecelerationConfig,
    pub acceleration: AccelerationConfig,
    pub speed_model: SpeedModelConfig,
}

/// One row of an aircraft's flap table.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct FlapConfig {
    pub setting: u8,
    pub speed_reduction_kt: f64,
}

/// Reference speeds in knots.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ReferenceSpeedsConfig {
    pub rotate_kt: f64,
    pub stall_kt: f64,
    pub max_kt: f64,
}

/// Ground deceleration rates in knots per second.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct DecelerationConfig {
    pub no_reversers_kt_s: f64,
    #[serde(default)]
    pub idle_reversers_kt_s: Option<f64>,
    #[serde(default)]
    pub max_reversers_kt_s: Option<f64>,
}

/// Linear acceleration model coefficients (knots per second).
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct AccelerationConfig {
    pub base: f64,
    pub slope: f64,
}

/// Quadratic maximum-speed model coefficients (knots).
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SpeedModelConfig {
    pub base: f64,
    pub linear: f64,
    pub quadratic: f64,
}

/// Airport record with its runways.
#[derive(Debug, Deserialize, Clone)]
pub struct AirportConfig {
    pub icao: String,
    #[serde(default)]
    pub name: Option<String>,
    pub runways: Vec<RunwayConfig>,
}

/// Runway declared distances in feet.
#[derive(Debug, Deserialize, Clone)]
pub struct RunwayConfig {
    pub name: String,
    pub heading_deg: u16,
    pub lda_ft: u32,
    pub tora_ft: u32,
    pub asda_ft: u32,
    #[serde(default)]
    pub intersections: Vec<IntersectionConfig>,
}

/// Named intersection departure point.
#[derive(Debug, Deserialize, Clone)]
pub struct IntersectionConfig {
    pub name: String,
    pub shift_ft: u32,
}

/// Maps a simulator aircraft name onto a canonical catalog key.
#[derive(Debug, Deserialize, Clone)]
pub struct AliasConfig {
    pub alias: String,
    pub key: String,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("calibration constant `{name}` is invalid: {value}")]
    InvalidCalibration { name: &'static str, value: f64 },
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Locations of the three catalog sources.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub aircraft: PathBuf,
    pub airports: PathBuf,
    pub aliases: Option<PathBuf>,
}

impl CatalogPaths {
    /// Conventional layout below a catalog root: `aircraft.yaml`, `airports.yaml`,
    /// and an optional `aliases.yaml`. Directory variants (`aircraft/`, `airports/`)
    /// take precedence when present.
    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        let pick = |stem: &str| {
            let dir = root.join(stem);
            if dir.is_dir() {
                dir
            } else {
                root.join(format!("{stem}.yaml"))
            }
        };
        let aliases = root.join("aliases.yaml");
        Self {
            aircraft: pick("aircraft"),
            airports: pick("airports"),
            aliases: aliases.exists().then_some(aliases),
        }
    }
}

/// Raw, unvalidated catalog contents.
#[derive(Debug, Clone, Default)]
pub struct CatalogFiles {
    pub aircraft: Vec<AircraftConfig>,
    pub airports: Vec<AirportConfig>,
    pub aliases: Vec<AliasConfig>,
}

/// Load every catalog source named in `paths`.
pub fn load_catalog_files(paths: &CatalogPaths) -> Result<CatalogFiles, ConfigError> {
    let aircraft = load_aircraft(&paths.aircraft)?;
    let airports = load_airports(&paths.airports)?;
    let aliases = match &paths.aliases {
        Some(path) => load_aliases(path)?,
        None => Vec::new(),
    };
    tracing::debug!(
        aircraft = aircraft.len(),
        airports = airports.len(),
        aliases = aliases.len(),
        "Read catalog files"
    );
    Ok(CatalogFiles {
        aircraft,
        airports,
        aliases,
    })
}

/// Load aircraft performance records from a YAML list, a TOML file, or a TOML directory.
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Load airport records from a YAML list, a TOML file, or a TOML directory.
pub fn load_airports<P: AsRef<Path>>(path: P) -> Result<Vec<AirportConfig>, ConfigError> {
    load_records(path)
}

/// Load the alias table from a YAML list.
pub fn load_aliases<P: AsRef<Path>>(path: P) -> Result<Vec<AliasConfig>, ConfigError> {
    load_records(path)
}

/// Load calibration constants from a TOML file, falling back to defaults when `path` is `None`.
pub fn load_calibration(path: Option<&Path>) -> Result<Calibration, ConfigError> {
    let calibration = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
            toml::from_str(&contents)?
        }
        None => Calibration::default(),
    };
    calibration.validate()?;
    Ok(calibration)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path).map_err(|e| ConfigError::io(path, e))?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| ConfigError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
