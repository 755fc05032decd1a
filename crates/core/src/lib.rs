//! Core units, constants, and shared primitives for the flight performance workspace.

/// Fixed operational increments expressed in knots.
pub mod constants {
    /// V2 sits this many knots above VR.
    pub const V2_INCREMENT_KT: u32 = 4;
    /// Climb-out target sits this many knots above V2, before the climb-out loss.
    pub const CLIMBOUT_INCREMENT_KT: u32 = 10;
    /// Vapp sits this many knots above Vref.
    pub const APPROACH_INCREMENT_KT: u32 = 5;
}

/// Thrust settings are integer percentages of maximum thrust.
pub mod thrust {
    use std::ops::RangeInclusive;

    /// Lowest thrust setting the searches consider.
    pub const MIN_PERCENT: u8 = 1;
    /// Highest thrust setting the searches consider.
    pub const MAX_PERCENT: u8 = 100;

    /// The legal search range, `1..=100`.
    #[inline]
    pub fn search_range() -> RangeInclusive<u8> {
        MIN_PERCENT..=MAX_PERCENT
    }

    /// Thrust percentage as a fraction in `[0, 1]`.
    #[inline]
    pub fn fraction(percent: u8) -> f64 {
        f64::from(percent) / 100.0
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert knots to feet per second with the given conversion factor.
    #[inline]
    pub fn knots_to_fps(knots: f64, factor: f64) -> f64 {
        knots * factor
    }
}

/// Rounding rules for reported quantities.
///
/// Distances are always rounded up so a report never under-states the runway needed.
pub mod rounding {
    /// Round a distance in feet up to the next whole foot.
    ///
    /// Negative or non-finite inputs clamp to zero.
    #[inline]
    pub fn ceil_feet(feet: f64) -> u32 {
        if !feet.is_finite() || feet <= 0.0 {
            return 0;
        }
        let ceiled = feet.ceil();
        if ceiled >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            ceiled as u32
        }
    }

    /// Round a speed in knots up to the next whole knot, clamped to at least one.
    #[inline]
    pub fn ceil_knots(knots: f64) -> u32 {
        if !knots.is_finite() || knots <= 1.0 {
            return 1;
        }
        let ceiled = knots.ceil();
        if ceiled >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            ceiled as u32
        }
    }
}
