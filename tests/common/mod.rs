#![allow(dead_code)]

use flight_performance_calculator::config::{
    AccelerationConfig, AircraftConfig, AirportConfig, AliasConfig, CatalogFiles,
    DecelerationConfig, FlapConfig, IntersectionConfig, ReferenceSpeedsConfig, RunwayConfig,
    SpeedModelConfig,
};
use flight_performance_calculator::{Calibration, Catalog, CatalogPaths, PerformanceEngine};

pub const CATALOG_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog");

pub fn sample_catalog() -> Catalog {
    Catalog::load(&CatalogPaths::under(CATALOG_ROOT)).expect("sample catalog")
}

pub fn sample_engine() -> PerformanceEngine {
    PerformanceEngine::new(sample_catalog(), Calibration::default())
}

/// Aircraft with stall 120 kt, rotate 130 kt, brakes-only 5 kt/s, flaps 0 and 10.
pub fn reference_aircraft(key: &str) -> AircraftConfig {
    AircraftConfig {
        key: key.to_string(),
        name: None,
        flaps: vec![
            FlapConfig {
                setting: 0,
                speed_reduction_kt: 0.0,
            },
            FlapConfig {
                setting: 10,
                speed_reduction_kt: 12.0,
            },
        ],
        speeds: ReferenceSpeedsConfig {
            rotate_kt: 130.0,
            stall_kt: 120.0,
            max_kt: 330.0,
        },
        deceleration: DecelerationConfig {
            no_reversers_kt_s: 5.0,
            idle_reversers_kt_s: None,
            max_reversers_kt_s: None,
        },
        acceleration: AccelerationConfig {
            base: 2.0,
            slope: 4.0,
        },
        speed_model: SpeedModelConfig {
            base: 120.0,
            linear: 150.0,
            quadratic: 80.0,
        },
    }
}

pub fn runway(name: &str, lda_ft: u32, tora_ft: u32, asda_ft: u32) -> RunwayConfig {
    RunwayConfig {
        name: name.to_string(),
        heading_deg: 90,
        lda_ft,
        tora_ft,
        asda_ft,
        intersections: Vec::new(),
    }
}

pub fn with_intersection(mut runway: RunwayConfig, name: &str, shift_ft: u32) -> RunwayConfig {
    runway.intersections.push(IntersectionConfig {
        name: name.to_string(),
        shift_ft,
    });
    runway
}

pub fn airport(icao: &str, runways: Vec<RunwayConfig>) -> AirportConfig {
    AirportConfig {
        icao: icao.to_string(),
        name: None,
        runways,
    }
}

pub fn alias(alias: &str, key: &str) -> AliasConfig {
    AliasConfig {
        alias: alias.to_string(),
        key: key.to_string(),
    }
}

pub fn catalog(
    aircraft: Vec<AircraftConfig>,
    airports: Vec<AirportConfig>,
    aliases: Vec<AliasConfig>,
) -> Catalog {
    Catalog::from_files(CatalogFiles {
        aircraft,
        airports,
        aliases,
    })
    .expect("test catalog")
}
