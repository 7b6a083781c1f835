//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Mean synodic month in days (new moon to new moon)
pub const SYNODIC_MONTH: f64 = 29.530_588;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Degrees of right ascension per hour
pub const DEG_PER_HOUR: f64 = 15.0;

// Photometry
/// Apparent magnitude assigned to the Moon regardless of phase
pub const MOON_MAGNITUDE: f64 = -12.74;
/// Apparent magnitude of the Sun
pub const SUN_MAGNITUDE: f64 = -26.74;
