//! Calibration constants consumed by the takeoff and landing formulas.

use serde::Deserialize;

use crate::ConfigError;

/// Numeric calibration shared by every calculation.
///
/// Each field may be omitted from the TOML source; the pinned default is used instead.
/// Unknown keys are rejected.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Calibration {
    /// Feet per second in one knot.
    pub knots_to_fps: f64,
    /// Time spent in the flare before touchdown (seconds).
    pub flare_duration_s: f64,
    /// Factor applied to the actual landing distance.
    pub landing_safety_margin: f64,
    /// Factor applied to the liftoff distance.
    pub runway_safety_margin: f64,
    /// Duration of the rotation manoeuvre (seconds).
    pub rotation_duration_s: f64,
    /// Reaction time while reducing thrust, per percent of thrust set (seconds).
    pub reaction_time_per_percent_s: f64,
    /// V1 may not drop below `VR * min_control_speed_factor`.
    pub min_control_speed_factor: f64,
    /// Vref multiplier over the flap-adjusted stall speed.
    pub approach_speed_factor: f64,
    /// Speed lost during climb-out that the thrust setting has to cover (knots).
    pub climbout_loss_kt: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            knots_to_fps: 1.68781,
            flare_duration_s: 3.0,
            landing_safety_margin: 1.67,
            runway_safety_margin: 1.15,
            rotation_duration_s: 3.0,
            reaction_time_per_percent_s: 0.02,
            min_control_speed_factor: 0.85,
            approach_speed_factor: 1.3,
            climbout_loss_kt: 5.0,
        }
    }
}

impl Calibration {
    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("knots_to_fps", self.knots_to_fps),
            ("flare_duration_s", self.flare_duration_s),
            ("landing_safety_margin", self.landing_safety_margin),
            ("runway_safety_margin", self.runway_safety_margin),
            ("rotation_duration_s", self.rotation_duration_s),
            ("reaction_time_per_percent_s", self.reaction_time_per_percent_s),
            ("min_control_speed_factor", self.min_control_speed_factor),
            ("approach_speed_factor", self.approach_speed_factor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCalibration { name, value });
            }
        }
        if self.min_control_speed_factor > 1.0 {
            return Err(ConfigError::InvalidCalibration {
                name: "min_control_speed_factor",
                value: self.min_control_speed_factor,
            });
        }
        if !self.climbout_loss_kt.is_finite() || self.climbout_loss_kt < 0.0 {
            return Err(ConfigError::InvalidCalibration {
                name: "climbout_loss_kt",
                value: self.climbout_loss_kt,
            });
        }
        Ok(())
    }
}
