//! Constant-rate ground kinematics in feet and feet per second.

/// Distance to accelerate from rest to `speed_fps` at `accel_fps2`.
#[inline]
pub fn accelerate_distance(speed_fps: f64, accel_fps2: f64) -> f64 {
    speed_fps * speed_fps / (2.0 * accel_fps2)
}

/// Distance to brake from `speed_fps` to rest at `decel_fps2`.
#[inline]
pub fn stopping_distance(speed_fps: f64, decel_fps2: f64) -> f64 {
    speed_fps * speed_fps / (2.0 * decel_fps2)
}

/// Distance covered at constant speed for `seconds`.
#[inline]
pub fn constant_speed_distance(speed_fps: f64, seconds: f64) -> f64 {
    speed_fps * seconds
}

/// Distance covered during rotation.
///
/// Speed ramps up from `rotate_fps` at `accel_fps2` for `duration_s`, but never beyond
/// `cap_fps`; once the cap is reached the remainder of the manoeuvre runs at the cap.
pub fn rotate_manoeuvre_distance(
    rotate_fps: f64,
    accel_fps2: f64,
    duration_s: f64,
    cap_fps: f64,
) -> f64 {
    let cap = cap_fps.max(rotate_fps);
    let uncapped_end = rotate_fps + accel_fps2 * duration_s;
    if uncapped_end <= cap {
        return rotate_fps * duration_s + 0.5 * accel_fps2 * duration_s * duration_s;
    }
    let ramp_s = (cap - rotate_fps) / accel_fps2;
    let ramp = rotate_fps * ramp_s + 0.5 * accel_fps2 * ramp_s * ramp_s;
    ramp + cap * (duration_s - ramp_s)
}

/// Distance covered in the flare, held at `speed_fps` for `duration_s`.
#[inline]
pub fn flare_distance(speed_fps: f64, duration_s: f64) -> f64 {
    constant_speed_distance(speed_fps, duration_s)
}
