//! Takeoff performance: V-speeds, thrust setting, and runway distances.
//!
//! Thrust is searched upward from the lowest setting that can sustain the climb-out
//! speed. More thrust always shortens the liftoff, but it also lengthens the reaction
//! phase of an abort, so V1 is searched again from scratch at every thrust setting.

use serde::Serialize;

use perf_catalog::Catalog;
use perf_config::Calibration;
use perf_core::constants::{CLIMBOUT_INCREMENT_KT, V2_INCREMENT_KT};
use perf_core::rounding::{ceil_feet, ceil_knots};
use perf_core::thrust;
use perf_core::units::knots_to_fps;
use perf_models::kinematics::{
    accelerate_distance, constant_speed_distance, rotate_manoeuvre_distance, stopping_distance,
};
use perf_models::search::minimum_thrust_for_speed;
use perf_models::{AircraftPerformance, DecelMode};

/// Identifiers for one takeoff calculation.
#[derive(Debug, Clone, Copy)]
pub struct TakeoffRequest<'a> {
    /// Canonical aircraft key (already resolved).
    pub aircraft: &'a str,
    pub airport: &'a str,
    pub runway: &'a str,
    /// Intersection departure point; `None` departs from the full length.
    pub intersection: Option<&'a str>,
    pub flap_setting: u8,
}

/// Takeoff report. Distances are whole feet rounded up, speeds whole knots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TakeoffResult {
    pub aircraft: String,
    pub airport: String,
    pub runway: String,
    pub intersection: Option<String>,
    pub flap_setting: u8,
    pub flap_reduction_kt: f64,
    pub thrust_percent: u8,
    pub v1_kt: u32,
    pub vr_kt: u32,
    pub v2_kt: u32,
    pub climbout_speed_kt: u32,
    /// Unfactored ground distance to liftoff, including rotation.
    pub takeoff_distance_ft: u32,
    /// Liftoff distance with the runway safety margin applied.
    pub takeoff_run_ft: u32,
    pub accelerate_stop_distance_ft: u32,
    /// Takeoff run available from the chosen departure point.
    pub tora_ft: i64,
    /// Accelerate-stop distance available from the chosen departure point.
    pub asda_ft: i64,
    /// Whether any thrust setting reaches the climb-out speed.
    pub climb_capable: bool,
    pub can_liftoff: bool,
    pub can_accel_stop: bool,
}

impl TakeoffResult {
    /// Both the liftoff and the abort fit on the runway.
    pub fn is_feasible(&self) -> bool {
        self.can_liftoff && self.can_accel_stop
    }
}

/// Compute takeoff performance, or `None` when an identifier or the flap setting does not
/// resolve against `catalog`.
pub fn compute_takeoff_performance(
    catalog: &Catalog,
    calibration: &Calibration,
    request: &TakeoffRequest<'_>,
) -> Option<TakeoffResult> {
    let Some(aircraft) = catalog.aircraft(request.aircraft) else {
        tracing::debug!(aircraft = request.aircraft, "Unknown aircraft for takeoff");
        return None;
    };
    let Some(airport) = catalog.airport(request.airport) else {
        tracing::debug!(airport = request.airport, "Unknown airport for takeoff");
        return None;
    };
    let Some(runway) = catalog.runway(airport, request.runway) else {
        tracing::debug!(
            airport = request.airport,
            runway = request.runway,
            "Unknown runway for takeoff"
        );
        return None;
    };
    let Some(shift_ft) = runway.shift_for(request.intersection) else {
        tracing::debug!(
            runway = request.runway,
            intersection = request.intersection,
            "Unknown intersection for takeoff"
        );
        return None;
    };
    let Some(flap_reduction_kt) = aircraft.flaps.reduction_kt(request.flap_setting) else {
        tracing::debug!(
            aircraft = request.aircraft,
            flaps = request.flap_setting,
            "Unknown flap setting for takeoff"
        );
        return None;
    };

    let vr_kt = ceil_knots(aircraft.speeds.rotate_kt - flap_reduction_kt);
    let v2_kt = vr_kt + V2_INCREMENT_KT;
    let climbout_kt = f64::from(v2_kt + CLIMBOUT_INCREMENT_KT) + calibration.climbout_loss_kt;

    let search = ThrustSearch {
        aircraft,
        calibration,
        vr_kt,
        tora_ft: runway.effective_tora(shift_ft),
        asda_ft: runway.effective_asda(shift_ft),
    };

    let minimum = minimum_thrust_for_speed(&aircraft.speed_model, climbout_kt + flap_reduction_kt);
    let (evaluation, climb_capable) = match minimum {
        Some(minimum) => (search.run_from(minimum), true),
        None => (search.evaluate(thrust::MAX_PERCENT), false),
    };

    tracing::debug!(
        aircraft = request.aircraft,
        thrust = evaluation.thrust_percent,
        v1 = evaluation.v1.v1_kt,
        climb_capable,
        "Takeoff thrust search finished"
    );

    Some(TakeoffResult {
        aircraft: aircraft.key.clone(),
        airport: airport.icao.clone(),
        runway: runway.name.clone(),
        intersection: request.intersection.map(str::to_string),
        flap_setting: request.flap_setting,
        flap_reduction_kt,
        thrust_percent: evaluation.thrust_percent,
        v1_kt: evaluation.v1.v1_kt,
        vr_kt,
        v2_kt,
        climbout_speed_kt: ceil_knots(climbout_kt),
        takeoff_distance_ft: evaluation.takeoff_distance_ft,
        takeoff_run_ft: evaluation.takeoff_run_ft,
        accelerate_stop_distance_ft: evaluation.v1.distance_ft,
        tora_ft: search.tora_ft,
        asda_ft: search.asda_ft,
        climb_capable,
        can_liftoff: climb_capable && evaluation.can_liftoff,
        can_accel_stop: climb_capable && evaluation.v1.feasible,
    })
}

struct ThrustSearch<'a> {
    aircraft: &'a AircraftPerformance,
    calibration: &'a Calibration,
    vr_kt: u32,
    tora_ft: i64,
    asda_ft: i64,
}

#[derive(Debug, Clone, Copy)]
struct ThrustEvaluation {
    thrust_percent: u8,
    takeoff_distance_ft: u32,
    takeoff_run_ft: u32,
    can_liftoff: bool,
    v1: V1Choice,
}

#[derive(Debug, Clone, Copy)]
struct V1Choice {
    v1_kt: u32,
    distance_ft: u32,
    feasible: bool,
}

impl ThrustSearch<'_> {
    /// Walk thrust up from `minimum` one percent at a time until both the liftoff and the
    /// abort fit, or until full thrust.
    fn run_from(&self, minimum: u8) -> ThrustEvaluation {
        let mut thrust_percent = minimum;
        loop {
            let evaluation = self.evaluate(thrust_percent);
            let satisfied = evaluation.can_liftoff && evaluation.v1.feasible;
            if satisfied || thrust_percent >= thrust::MAX_PERCENT {
                return evaluation;
            }
            thrust_percent += 1;
        }
    }

    fn evaluate(&self, thrust_percent: u8) -> ThrustEvaluation {
        let k = self.calibration.knots_to_fps;
        let accel_fps2 = self.aircraft.acceleration.acceleration_fps2(thrust_percent, k);
        let vr_fps = knots_to_fps(f64::from(self.vr_kt), k);
        let cap_fps = knots_to_fps(self.aircraft.speed_model.max_speed_kt(thrust_percent), k);

        let liftoff_ft = accelerate_distance(vr_fps, accel_fps2)
            + rotate_manoeuvre_distance(
                vr_fps,
                accel_fps2,
                self.calibration.rotation_duration_s,
                cap_fps,
            );
        let takeoff_run_ft = ceil_feet(liftoff_ft * self.calibration.runway_safety_margin);

        ThrustEvaluation {
            thrust_percent,
            takeoff_distance_ft: ceil_feet(liftoff_ft),
            takeoff_run_ft,
            can_liftoff: self.tora_ft > i64::from(takeoff_run_ft),
            v1: self.best_v1(thrust_percent, accel_fps2),
        }
    }

    /// Largest V1 between the minimum-control floor and VR whose accelerate-stop distance
    /// fits the ASDA. Falls back to the floor, flagged infeasible, when none fits.
    fn best_v1(&self, thrust_percent: u8, accel_fps2: f64) -> V1Choice {
        let k = self.calibration.knots_to_fps;
        let floor_kt =
            ceil_knots(f64::from(self.vr_kt) * self.calibration.min_control_speed_factor)
                .min(self.vr_kt);
        let reaction_s =
            f64::from(thrust_percent) * self.calibration.reaction_time_per_percent_s;
        let (decel_kt_s, _) = self.aircraft.deceleration.rate_kt_s(DecelMode::None);
        let decel_fps2 = knots_to_fps(decel_kt_s, k);

        let distance_at = |v1_kt: u32| {
            let v1_fps = knots_to_fps(f64::from(v1_kt), k);
            ceil_feet(
                accelerate_distance(v1_fps, accel_fps2)
                    + constant_speed_distance(v1_fps, reaction_s)
                    + stopping_distance(v1_fps, decel_fps2),
            )
        };

        for v1_kt in (floor_kt..=self.vr_kt).rev() {
            let distance_ft = distance_at(v1_kt);
            if i64::from(distance_ft) < self.asda_ft {
                return V1Choice {
                    v1_kt,
                    distance_ft,
                    feasible: true,
                };
            }
        }

        V1Choice {
            v1_kt: floor_kt,
            distance_ft: distance_at(floor_kt),
            feasible: false,
        }
    }
}
