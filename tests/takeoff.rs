mod common;

use common::{airport, catalog, reference_aircraft, runway, sample_catalog, with_intersection};
use flight_performance_calculator::config::SpeedModelConfig;
use flight_performance_calculator::models::AircraftPerformance;
use flight_performance_calculator::models::kinematics::{
    accelerate_distance, constant_speed_distance, rotate_manoeuvre_distance, stopping_distance,
};
use flight_performance_calculator::{Calibration, Catalog, DecelMode};
use flight_performance_calculator::takeoff::{
    TakeoffRequest, TakeoffResult, compute_takeoff_performance,
};

fn request<'a>(
    aircraft: &'a str,
    airport: &'a str,
    runway: &'a str,
    intersection: Option<&'a str>,
    flaps: u8,
) -> TakeoffRequest<'a> {
    TakeoffRequest {
        aircraft,
        airport,
        runway,
        intersection,
        flap_setting: flaps,
    }
}

fn assert_flag_identities(result: &TakeoffResult, calibration: &Calibration) {
    assert_eq!(
        result.can_liftoff,
        result.climb_capable && result.tora_ft > i64::from(result.takeoff_run_ft)
    );
    if result.can_accel_stop {
        assert!(i64::from(result.accelerate_stop_distance_ft) < result.asda_ft);
    }
    let floor = (f64::from(result.vr_kt) * calibration.min_control_speed_factor).ceil() as u32;
    assert!(result.v1_kt >= floor && result.v1_kt <= result.vr_kt);
    assert_eq!(result.v2_kt, result.vr_kt + 4);
    assert!(result.takeoff_run_ft >= result.takeoff_distance_ft);
}

/// Unrounded liftoff distance at the reported thrust and VR.
fn liftoff_ft(
    aircraft: &AircraftPerformance,
    calibration: &Calibration,
    result: &TakeoffResult,
) -> f64 {
    let k = calibration.knots_to_fps;
    let accel = aircraft.acceleration.acceleration_fps2(result.thrust_percent, k);
    let vr = f64::from(result.vr_kt) * k;
    let cap = aircraft.speed_model.max_speed_kt(result.thrust_percent) * k;
    accelerate_distance(vr, accel)
        + rotate_manoeuvre_distance(vr, accel, calibration.rotation_duration_s, cap)
}

/// Unrounded accelerate-stop distance for `v1_kt` at `thrust_percent`.
fn accelerate_stop_ft(
    aircraft: &AircraftPerformance,
    calibration: &Calibration,
    thrust_percent: u8,
    v1_kt: u32,
) -> f64 {
    let k = calibration.knots_to_fps;
    let accel = aircraft.acceleration.acceleration_fps2(thrust_percent, k);
    let (decel_kt_s, _) = aircraft.deceleration.rate_kt_s(DecelMode::None);
    let reaction_s = f64::from(thrust_percent) * calibration.reaction_time_per_percent_s;
    let v1 = f64::from(v1_kt) * k;
    accelerate_distance(v1, accel)
        + constant_speed_distance(v1, reaction_s)
        + stopping_distance(v1, decel_kt_s * k)
}

fn long_and_short_runways() -> Catalog {
    catalog(
        vec![reference_aircraft("REF")],
        vec![airport(
            "TEST",
            vec![runway("LONG", 12000, 12000, 12000), runway("SHORT", 5500, 5500, 5500)],
        )],
        Vec::new(),
    )
}

#[test]
fn a320_full_length_frankfurt_is_feasible_at_low_thrust() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();
    let result = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("A320", "EDDF", "25C", None, 1),
    )
    .expect("takeoff result");

    assert_eq!(result.vr_kt, 135);
    assert_eq!(result.v2_kt, 139);
    assert_eq!(result.climbout_speed_kt, 154);
    // smallest thrust whose speed model clears 154 kt + 10 kt of flap reduction
    assert_eq!(result.thrust_percent, 26);
    assert_eq!(result.v1_kt, result.vr_kt);
    assert_eq!(result.tora_ft, 13123);
    assert_eq!(result.asda_ft, 13123);
    assert!(result.climb_capable);
    assert!(result.is_feasible());
    assert_flag_identities(&result, &calibration);
}

#[test]
fn intersection_shift_reduces_available_distances() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();
    let full = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("A320", "EDDF", "25C", None, 1),
    )
    .expect("full length");
    let from_k = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("A320", "EDDF", "25C", Some("K"), 1),
    )
    .expect("from K");

    assert_eq!(from_k.tora_ft, full.tora_ft - 3000);
    assert_eq!(from_k.asda_ft, full.asda_ft - 3000);
    assert_eq!(from_k.intersection.as_deref(), Some("K"));
    assert!(from_k.thrust_percent >= full.thrust_percent);
    assert_flag_identities(&from_k, &calibration);
}

#[test]
fn shorter_runway_needs_more_thrust() {
    let calibration = Calibration::default();
    let catalog = long_and_short_runways();

    let long = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("REF", "TEST", "LONG", None, 0),
    )
    .expect("long");
    let short = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("REF", "TEST", "SHORT", None, 0),
    )
    .expect("short");

    assert!(long.is_feasible());
    assert!(short.thrust_percent > long.thrust_percent);
    assert!(short.v1_kt <= long.v1_kt);
    assert_flag_identities(&long, &calibration);
    assert_flag_identities(&short, &calibration);
}

#[test]
fn a320_at_london_city_cannot_abort_within_asda() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();
    let result = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("A320", "EGLC", "09", None, 1),
    )
    .expect("result is reported even when infeasible");

    assert_eq!(result.thrust_percent, 100);
    assert!(!result.can_accel_stop);
    // no V1 fits, so the lowest candidate is reported
    assert_eq!(result.v1_kt, 115);
    assert!(i64::from(result.accelerate_stop_distance_ft) >= result.asda_ft);
    assert_eq!(result.vr_kt, 135);
    assert_flag_identities(&result, &calibration);
}

#[test]
fn aircraft_that_cannot_reach_climbout_speed_is_infeasible() {
    let calibration = Calibration::default();
    let mut weak = reference_aircraft("WEAK");
    weak.speed_model = SpeedModelConfig {
        base: 100.0,
        linear: 30.0,
        quadratic: 0.0,
    };
    weak.speeds.max_kt = 130.0;
    let catalog = catalog(
        vec![weak],
        vec![airport("TEST", vec![runway("LONG", 15000, 15000, 15000)])],
        Vec::new(),
    );

    let result = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("WEAK", "TEST", "LONG", None, 0),
    )
    .expect("result");

    assert!(!result.climb_capable);
    assert!(!result.can_liftoff);
    assert!(!result.can_accel_stop);
    assert_eq!(result.thrust_percent, 100);
    assert!(result.takeoff_distance_ft > 0);
    assert_flag_identities(&result, &calibration);
}

#[test]
fn asda_consumed_by_intersection_is_reported_not_rejected() {
    let calibration = Calibration::default();
    let catalog = catalog(
        vec![reference_aircraft("REF")],
        vec![airport(
            "TEST",
            vec![with_intersection(runway("09", 9000, 9000, 1500), "A", 2000)],
        )],
        Vec::new(),
    );

    let result = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("REF", "TEST", "09", Some("A"), 0),
    )
    .expect("result");

    assert_eq!(result.tora_ft, 7000);
    assert_eq!(result.asda_ft, -500);
    assert!(!result.can_accel_stop);
    assert_flag_identities(&result, &calibration);
}

#[test]
fn more_flap_never_raises_takeoff_speeds() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();
    let settings = catalog.flap_settings("B738").expect("flaps");

    let mut previous: Option<(u32, u32)> = None;
    for flaps in settings {
        let result = compute_takeoff_performance(
            &catalog,
            &calibration,
            &request("B738", "KJFK", "04L", None, flaps),
        )
        .expect("takeoff");
        if let Some((vr, v2)) = previous {
            assert!(result.vr_kt <= vr, "flaps {flaps}");
            assert!(result.v2_kt <= v2, "flaps {flaps}");
        }
        previous = Some((result.vr_kt, result.v2_kt));
        assert_flag_identities(&result, &calibration);
    }
}

#[test]
fn reported_distances_cover_the_unrounded_formulas() {
    let calibration = Calibration::default();
    let cases = [
        (long_and_short_runways(), "REF", "TEST", "LONG", 0),
        (long_and_short_runways(), "REF", "TEST", "SHORT", 0),
        (sample_catalog(), "C172", "EGLC", "27", 10),
        (sample_catalog(), "A320", "EGLC", "09", 1),
    ];

    for (catalog, aircraft, airport, runway, flaps) in cases {
        let result = compute_takeoff_performance(
            &catalog,
            &calibration,
            &request(aircraft, airport, runway, None, flaps),
        )
        .expect("takeoff");
        let model = catalog.aircraft(aircraft).expect("aircraft");

        let liftoff = liftoff_ft(model, &calibration, &result);
        assert!(f64::from(result.takeoff_distance_ft) >= liftoff, "{aircraft} {runway}");
        assert!(f64::from(result.takeoff_distance_ft) - liftoff < 1.0, "{aircraft} {runway}");
        assert!(
            f64::from(result.takeoff_run_ft) >= liftoff * calibration.runway_safety_margin,
            "{aircraft} {runway}"
        );

        let abort = accelerate_stop_ft(model, &calibration, result.thrust_percent, result.v1_kt);
        assert!(f64::from(result.accelerate_stop_distance_ft) >= abort, "{aircraft} {runway}");
        assert!(f64::from(result.accelerate_stop_distance_ft) - abort < 1.0);
    }
}

#[test]
fn reported_v1_is_the_largest_that_fits() {
    let calibration = Calibration::default();
    let catalog = long_and_short_runways();
    let model = catalog.aircraft("REF").expect("REF");
    let result = compute_takeoff_performance(
        &catalog,
        &calibration,
        &request("REF", "TEST", "SHORT", None, 0),
    )
    .expect("short");

    assert!(result.can_accel_stop);
    assert!(result.v1_kt < result.vr_kt);
    assert!(i64::from(result.accelerate_stop_distance_ft) < result.asda_ft);

    let next = accelerate_stop_ft(model, &calibration, result.thrust_percent, result.v1_kt + 1);
    assert!(next.ceil() as i64 >= result.asda_ft);
}

#[test]
fn unresolvable_identifiers_return_none() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();

    for req in [
        request("ZZZZ", "EDDF", "25C", None, 1),
        request("A320", "XXXX", "25C", None, 1),
        request("A320", "EDDF", "01", None, 1),
        request("A320", "EDDF", "25C", Some("Z9"), 1),
        request("A320", "EDDF", "25C", None, 7),
    ] {
        assert!(
            compute_takeoff_performance(&catalog, &calibration, &req).is_none(),
            "{req:?}"
        );
    }
}

#[test]
fn takeoff_is_deterministic() {
    let catalog = sample_catalog();
    let calibration = Calibration::default();
    let req = request("B738", "EDDF", "07C", None, 5);
    let first = compute_takeoff_performance(&catalog, &calibration, &req);
    let second = compute_takeoff_performance(&catalog, &calibration, &req);
    assert!(first.is_some());
    assert_eq!(first, second);
}
