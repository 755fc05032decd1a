//! Thrust searches over the integer range `1..=100`.

use perf_core::thrust;

use crate::SpeedModel;

/// Smallest thrust whose maximum speed strictly exceeds `target_kt`.
pub fn minimum_thrust_for_speed(model: &SpeedModel, target_kt: f64) -> Option<u8> {
    thrust::search_range().find(|&t| model.max_speed_kt(t) > target_kt)
}

/// Thrust whose maximum speed lies closest to `target_kt`. Ties go to the lower thrust.
pub fn closest_thrust_for_speed(model: &SpeedModel, target_kt: f64) -> u8 {
    let mut best = thrust::MIN_PERCENT;
    let mut best_error = f64::INFINITY;
    for t in thrust::search_range() {
        let error = (model.max_speed_kt(t) - target_kt).abs();
        if error < best_error {
            best = t;
            best_error = error;
        }
    }
    best
}
