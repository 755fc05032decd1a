//! Conversion of raw catalog records into validated runtime records.

use std::collections::{HashMap, HashSet};

use perf_config::{AircraftConfig, AirportConfig, AliasConfig, RunwayConfig};
use perf_models::{
    AccelerationModel, AircraftPerformance, Airport, DecelerationRates, FlapEntry, FlapTable,
    Intersection, ReferenceSpeeds, Runway, SpeedModel,
};

use crate::CatalogError;

pub(crate) fn aircraft_from_config(
    config: &AircraftConfig,
) -> Result<AircraftPerformance, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidAircraft {
        key: config.key.clone(),
        reason,
    };

    if config.key.trim().is_empty() {
        return Err(invalid("key is empty".to_string()));
    }

    let speeds = config.speeds;
    for (name, value) in [
        ("rotate", speeds.rotate_kt),
        ("stall", speeds.stall_kt),
        ("max", speeds.max_kt),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(format!("{name} speed must be positive, got {value}")));
        }
    }
    if speeds.rotate_kt < speeds.stall_kt {
        return Err(invalid(format!(
            "rotate speed {} is below stall speed {}",
            speeds.rotate_kt, speeds.stall_kt
        )));
    }
    if speeds.max_kt < speeds.rotate_kt {
        return Err(invalid(format!(
            "max speed {} is below rotate speed {}",
            speeds.max_kt, speeds.rotate_kt
        )));
    }

    let mut seen = HashSet::new();
    for flap in &config.flaps {
        if !seen.insert(flap.setting) {
            return Err(invalid(format!("flap setting {} is listed twice", flap.setting)));
        }
        let reduction = flap.speed_reduction_kt;
        if !reduction.is_finite() || reduction < 0.0 {
            return Err(invalid(format!(
                "flap {} has a negative speed reduction",
                flap.setting
            )));
        }
        if reduction >= speeds.stall_kt {
            return Err(invalid(format!(
                "flap {} reduction {reduction} reaches the stall speed",
                flap.setting
            )));
        }
    }
    match config.flaps.iter().find(|flap| flap.setting == 0) {
        None => return Err(invalid("flap table has no setting 0".to_string())),
        Some(flap) if flap.speed_reduction_kt != 0.0 => {
            return Err(invalid("flap setting 0 must have zero reduction".to_string()));
        }
        Some(_) => {}
    }

    let decel = config.deceleration;
    for (name, value) in [
        ("no-reversers", Some(decel.no_reversers_kt_s)),
        ("idle-reversers", decel.idle_reversers_kt_s),
        ("max-reversers", decel.max_reversers_kt_s),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!(
                    "{name} deceleration must be positive, got {value}"
                )));
            }
        }
    }

    let acceleration = AccelerationModel {
        base: config.acceleration.base,
        slope: config.acceleration.slope,
    };
    if !acceleration.is_positive_over_range() {
        return Err(invalid(
            "acceleration model is not positive over thrust 1..=100".to_string(),
        ));
    }

    let speed_model = SpeedModel {
        base: config.speed_model.base,
        linear: config.speed_model.linear,
        quadratic: config.speed_model.quadratic,
    };
    if let Some(thrust) = speed_model.first_decrease() {
        return Err(invalid(format!(
            "speed model decreases at thrust {thrust}%"
        )));
    }

    Ok(AircraftPerformance {
        key: config.key.clone(),
        name: config.name.clone(),
        flaps: FlapTable::new(
            config
                .flaps
                .iter()
                .map(|flap| FlapEntry {
                    setting: flap.setting,
                    speed_reduction_kt: flap.speed_reduction_kt,
                })
                .collect(),
        ),
        speeds: ReferenceSpeeds {
            rotate_kt: speeds.rotate_kt,
            stall_kt: speeds.stall_kt,
            max_kt: speeds.max_kt,
        },
        deceleration: DecelerationRates {
            no_reversers_kt_s: decel.no_reversers_kt_s,
            idle_reversers_kt_s: decel.idle_reversers_kt_s,
            max_reversers_kt_s: decel.max_reversers_kt_s,
        },
        acceleration,
        speed_model,
    })
}

pub(crate) fn airport_from_config(config: &AirportConfig) -> Result<Airport, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidAirport {
        icao: config.icao.clone(),
        reason,
    };

    if config.icao.trim().is_empty() {
        return Err(invalid("airport code is empty".to_string()));
    }

    let mut names = HashSet::new();
    let mut runways = Vec::with_capacity(config.runways.len());
    for runway in &config.runways {
        if !names.insert(runway.name.as_str()) {
            return Err(invalid(format!("runway {} is listed twice", runway.name)));
        }
        runways.push(runway_from_config(runway).map_err(invalid)?);
    }

    Ok(Airport {
        icao: config.icao.clone(),
        name: config.name.clone(),
        runways,
    })
}

fn runway_from_config(config: &RunwayConfig) -> Result<Runway, String> {
    for (name, value) in [
        ("LDA", config.lda_ft),
        ("TORA", config.tora_ft),
        ("ASDA", config.asda_ft),
    ] {
        if value == 0 {
            return Err(format!("runway {} has zero {name}", config.name));
        }
    }

    let mut names = HashSet::new();
    let mut intersections = Vec::with_capacity(config.intersections.len());
    for intersection in &config.intersections {
        if !names.insert(intersection.name.as_str()) {
            return Err(format!(
                "runway {} lists intersection {} twice",
                config.name, intersection.name
            ));
        }
        if intersection.shift_ft >= config.tora_ft {
            return Err(format!(
                "intersection {} on runway {} shifts {} ft, beyond TORA {} ft",
                intersection.name, config.name, intersection.shift_ft, config.tora_ft
            ));
        }
        intersections.push(Intersection {
            name: intersection.name.clone(),
            shift_ft: intersection.shift_ft,
        });
    }

    Ok(Runway {
        name: config.name.clone(),
        heading_deg: config.heading_deg,
        lda_ft: config.lda_ft,
        tora_ft: config.tora_ft,
        asda_ft: config.asda_ft,
        intersections,
    })
}

pub(crate) fn alias_table(
    aliases: &[AliasConfig],
    aircraft: &HashMap<String, AircraftPerformance>,
) -> Result<HashMap<String, String>, CatalogError> {
    let mut table: HashMap<String, String> = aircraft
        .keys()
        .map(|key| (key.to_lowercase(), key.clone()))
        .collect();

    let mut explicit = HashSet::new();
    for entry in aliases {
        let invalid = |reason: String| CatalogError::InvalidAlias {
            alias: entry.alias.clone(),
            reason,
        };
        if !aircraft.contains_key(&entry.key) {
            return Err(invalid(format!("points at unknown aircraft '{}'", entry.key)));
        }
        let lowered = entry.alias.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(invalid("alias is empty".to_string()));
        }
        if !explicit.insert(lowered.clone()) {
            return Err(invalid("alias is listed twice".to_string()));
        }
        // explicit aliases are unique, so an existing slot belongs to a canonical key
        if let Some(existing) = table.get(&lowered) {
            if existing != &entry.key {
                return Err(invalid(format!("shadows aircraft key '{existing}'")));
            }
        }
        table.insert(lowered, entry.key.clone());
    }

    Ok(table)
}
