//! Landing performance: approach speeds, approach thrust, and landing distances.

use serde::Serialize;

use perf_catalog::Catalog;
use perf_config::Calibration;
use perf_core::constants::APPROACH_INCREMENT_KT;
use perf_core::rounding::{ceil_feet, ceil_knots};
use perf_core::units::knots_to_fps;
use perf_models::DecelMode;
use perf_models::kinematics::{flare_distance, stopping_distance};
use perf_models::search::closest_thrust_for_speed;

/// Identifiers for one landing calculation.
#[derive(Debug, Clone, Copy)]
pub struct LandingRequest<'a> {
    /// Canonical aircraft key (already resolved).
    pub aircraft: &'a str,
    pub airport: &'a str,
    pub runway: &'a str,
    pub flap_setting: u8,
    pub decel_mode: DecelMode,
}

/// Landing report. Distances are whole feet rounded up, speeds whole knots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingResult {
    pub aircraft: String,
    pub airport: String,
    pub runway: String,
    pub flap_setting: u8,
    pub flap_reduction_kt: f64,
    /// Deceleration mode as requested; unmodelled reverser modes are computed with brakes only.
    pub decel_mode: DecelMode,
    pub vref_kt: u32,
    pub vapp_kt: u32,
    pub actual_landing_distance_ft: u32,
    pub landing_distance_required_ft: u32,
    pub lda_ft: u32,
    pub margin_ft: i64,
    pub can_stop: bool,
    pub thrust_percent: u8,
}

/// Compute landing performance, or `None` when an identifier or the flap setting does not
/// resolve against `catalog`.
pub fn compute_landing_performance(
    catalog: &Catalog,
    calibration: &Calibration,
    request: &LandingRequest<'_>,
) -> Option<LandingResult> {
    let Some(aircraft) = catalog.aircraft(request.aircraft) else {
        tracing::debug!(aircraft = request.aircraft, "Unknown aircraft for landing");
        return None;
    };
    let Some(airport) = catalog.airport(request.airport) else {
        tracing::debug!(airport = request.airport, "Unknown airport for landing");
        return None;
    };
    let Some(runway) = catalog.runway(airport, request.runway) else {
        tracing::debug!(
            airport = request.airport,
            runway = request.runway,
            "Unknown runway for landing"
        );
        return None;
    };
    let Some(flap_reduction_kt) = aircraft.flaps.reduction_kt(request.flap_setting) else {
        tracing::debug!(
            aircraft = request.aircraft,
            flaps = request.flap_setting,
            "Unknown flap setting for landing"
        );
        return None;
    };

    let k = calibration.knots_to_fps;
    let vref_kt = ceil_knots(
        (aircraft.speeds.stall_kt - flap_reduction_kt) * calibration.approach_speed_factor,
    );
    let vapp_kt = vref_kt + APPROACH_INCREMENT_KT;

    let (decel_kt_s, applied) = aircraft.deceleration.rate_kt_s(request.decel_mode);
    if applied != request.decel_mode {
        tracing::debug!(
            aircraft = request.aircraft,
            requested = request.decel_mode.as_str(),
            "Deceleration mode not modelled, using brakes only"
        );
    }

    let vref_fps = knots_to_fps(f64::from(vref_kt), k);
    let actual_ft = flare_distance(vref_fps, calibration.flare_duration_s)
        + stopping_distance(vref_fps, knots_to_fps(decel_kt_s, k));
    let required_ft = ceil_feet(actual_ft * calibration.landing_safety_margin);
    let margin_ft = i64::from(runway.lda_ft) - i64::from(required_ft);

    let thrust_percent = closest_thrust_for_speed(
        &aircraft.speed_model,
        f64::from(vapp_kt) + flap_reduction_kt,
    );

    Some(LandingResult {
        aircraft: aircraft.key.clone(),
        airport: airport.icao.clone(),
        runway: runway.name.clone(),
        flap_setting: request.flap_setting,
        flap_reduction_kt,
        decel_mode: request.decel_mode,
        vref_kt,
        vapp_kt,
        actual_landing_distance_ft: ceil_feet(actual_ft),
        landing_distance_required_ft: required_ft,
        lda_ft: runway.lda_ft,
        margin_ft,
        can_stop: margin_ft > 0,
        thrust_percent,
    })
}
