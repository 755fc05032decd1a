//! Per-aircraft performance record and the models it carries.

use serde::{Deserialize, Serialize};

use perf_core::thrust;

/// One row of a flap table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapEntry {
    pub setting: u8,
    pub speed_reduction_kt: f64,
}

/// Flap settings ordered by setting, each with the speed reduction it buys.
#[derive(Debug, Clone, PartialEq)]
pub struct FlapTable {
    entries: Vec<FlapEntry>,
}

impl FlapTable {
    /// Build a table, ordering entries by setting.
    pub fn new(mut entries: Vec<FlapEntry>) -> Self {
        entries.sort_by_key(|entry| entry.setting);
        Self { entries }
    }

    /// Speed reduction for `setting`, or `None` when the aircraft has no such setting.
    pub fn reduction_kt(&self, setting: u8) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.setting == setting)
            .map(|entry| entry.speed_reduction_kt)
    }

    /// Available settings, ascending.
    pub fn settings(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|entry| entry.setting)
    }

    pub fn entries(&self) -> &[FlapEntry] {
        &self.entries
    }
}

/// Reference speeds in knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSpeeds {
    pub rotate_kt: f64,
    pub stall_kt: f64,
    pub max_kt: f64,
}

/// Ground deceleration mode requested for the landing roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecelMode {
    /// Wheel brakes only.
    None,
    /// Brakes plus reversers at idle.
    Idle,
    /// Brakes plus maximum reverse thrust.
    Max,
}

impl DecelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DecelMode::None => "none",
            DecelMode::Idle => "idle",
            DecelMode::Max => "max",
        }
    }
}

/// Deceleration rates in knots per second. Reverser rates are optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecelerationRates {
    pub no_reversers_kt_s: f64,
    pub idle_reversers_kt_s: Option<f64>,
    pub max_reversers_kt_s: Option<f64>,
}

impl DecelerationRates {
    /// Rate for the requested mode. Unmodelled reverser modes fall back to the
    /// no-reversers rate; the second element is the mode actually applied.
    pub fn rate_kt_s(&self, mode: DecelMode) -> (f64, DecelMode) {
        let modelled = match mode {
            DecelMode::None => None,
            DecelMode::Idle => self.idle_reversers_kt_s,
            DecelMode::Max => self.max_reversers_kt_s,
        };
        match modelled {
            Some(rate) => (rate, mode),
            None => (self.no_reversers_kt_s, DecelMode::None),
        }
    }
}

/// Linear acceleration model: `unit_factor * (slope * T/100 + base)`.
///
/// Coefficients are in knots per second; [`AccelerationModel::acceleration_fps2`]
/// converts to feet per second squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelerationModel {
    pub base: f64,
    pub slope: f64,
}

impl AccelerationModel {
    /// Acceleration in knots per second at `thrust_percent`.
    #[inline]
    pub fn acceleration_kt_s(&self, thrust_percent: u8) -> f64 {
        self.slope * thrust::fraction(thrust_percent) + self.base
    }

    /// Acceleration in feet per second squared at `thrust_percent`.
    #[inline]
    pub fn acceleration_fps2(&self, thrust_percent: u8, knots_to_fps: f64) -> f64 {
        knots_to_fps * self.acceleration_kt_s(thrust_percent)
    }

    /// Whether the model stays strictly positive over the whole search range.
    pub fn is_positive_over_range(&self) -> bool {
        thrust::search_range().all(|t| self.acceleration_kt_s(t) > 0.0)
    }
}

/// Quadratic maximum-speed model: `quadratic * f^2 + linear * f + base`, `f = T/100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModel {
    pub base: f64,
    pub linear: f64,
    pub quadratic: f64,
}

impl SpeedModel {
    /// Maximum attainable speed in knots at `thrust_percent`.
    #[inline]
    pub fn max_speed_kt(&self, thrust_percent: u8) -> f64 {
        let f = thrust::fraction(thrust_percent);
        self.quadratic * f * f + self.linear * f + self.base
    }

    /// First integer thrust in `[0, 100]` at which the model drops below the previous
    /// setting, if any.
    pub fn first_decrease(&self) -> Option<u8> {
        (1..=thrust::MAX_PERCENT).find(|&t| self.max_speed_kt(t) < self.max_speed_kt(t - 1))
    }
}

/// Immutable performance record for one canonical aircraft type.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftPerformance {
    pub key: String,
    pub name: Option<String>,
    pub flaps: FlapTable,
    pub speeds: ReferenceSpeeds,
    pub deceleration: DecelerationRates,
    pub acceleration: AccelerationModel,
    pub speed_model: SpeedModel,
}
