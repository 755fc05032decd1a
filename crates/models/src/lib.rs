//! Aircraft and runway performance models shared by the takeoff and landing calculators.
//!
//! Speeds are carried in knots and distances in feet. Conversions to feet per second
//! happen at the point of use with the calibration's knots-to-fps factor.

pub mod aircraft;
pub mod kinematics;
pub mod runway;
pub mod search;

pub use aircraft::{
    AccelerationModel, AircraftPerformance, DecelMode, DecelerationRates, FlapEntry, FlapTable,
    ReferenceSpeeds, SpeedModel,
};
pub use runway::{Airport, Intersection, Runway};
