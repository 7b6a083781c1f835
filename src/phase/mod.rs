//! Lunar phase calculations
//!
//! The phase angle used here is the difference between the Moon's and the
//! Sun's right ascension. It is a cheap proxy for the true Sun-Moon
//! elongation and is what the illuminated fraction is derived from.

use crate::planetlib::{moon_position, sun_position};
use crate::time::normalize_degrees;
use serde::Serialize;
use std::fmt;

/// Named phases of the Moon, in order through a lunation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Name for a phase angle in degrees, [0, 360)
    ///
    /// Each principal phase owns a 45 degree sector centred on it.
    pub fn from_phase_angle(angle: f64) -> Self {
        const NAMES: [PhaseName; 8] = [
            PhaseName::New,
            PhaseName::WaxingCrescent,
            PhaseName::FirstQuarter,
            PhaseName::WaxingGibbous,
            PhaseName::Full,
            PhaseName::WaningGibbous,
            PhaseName::LastQuarter,
            PhaseName::WaningCrescent,
        ];
        let sector = (normalize_degrees(angle + 22.5) / 45.0).floor() as usize;
        NAMES[sector % NAMES.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhaseName::New => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::Full => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the Moon's phase at an instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Moon RA minus Sun RA in degrees, [0, 360)
    pub phase_angle: f64,
    /// Illuminated fraction, 0 = new, 1 = full
    pub illumination: f64,
    /// True while the illuminated fraction is increasing
    pub waxing: bool,
    pub name: PhaseName,
}

/// Moon RA minus Sun RA in degrees, normalized to [0, 360)
pub fn phase_angle(jd: f64) -> f64 {
    normalize_degrees(moon_position(jd).ra - sun_position(jd).ra)
}

/// Illuminated fraction for a phase angle in degrees
pub fn illumination_from_angle(angle: f64) -> f64 {
    ((1.0 - angle.to_radians().cos()) / 2.0).clamp(0.0, 1.0)
}

/// Illuminated fraction of the Moon at a Julian Date, in [0, 1]
pub fn illumination(jd: f64) -> f64 {
    illumination_from_angle(phase_angle(jd))
}

/// Full phase description of the Moon at a Julian Date
pub fn moon_phase(jd: f64) -> MoonPhase {
    let angle = phase_angle(jd);
    MoonPhase {
        phase_angle: angle,
        illumination: illumination_from_angle(angle),
        waxing: angle < 180.0,
        name: PhaseName::from_phase_angle(angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{J2000, SYNODIC_MONTH};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 0.5)]
    #[case(180.0, 1.0)]
    #[case(270.0, 0.5)]
    fn test_illumination_from_angle(#[case] angle: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(illumination_from_angle(angle), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0, PhaseName::New)]
    #[case(350.0, PhaseName::New)]
    #[case(30.0, PhaseName::WaxingCrescent)]
    #[case(95.0, PhaseName::FirstQuarter)]
    #[case(150.0, PhaseName::WaxingGibbous)]
    #[case(181.0, PhaseName::Full)]
    #[case(220.0, PhaseName::WaningGibbous)]
    #[case(268.0, PhaseName::LastQuarter)]
    #[case(300.0, PhaseName::WaningCrescent)]
    fn test_phase_names(#[case] angle: f64, #[case] expected: PhaseName) {
        assert_eq!(PhaseName::from_phase_angle(angle), expected);
    }

    #[test]
    fn test_illumination_range() {
        for step in 0..200 {
            let value = illumination(J2000 + step as f64 * 0.5);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_synodic_periodicity() {
        for step in 0..20 {
            let jd = J2000 + step as f64 * 3.3;
            let now = illumination(jd);
            let next = illumination(jd + SYNODIC_MONTH);
            assert_abs_diff_eq!(now, next, epsilon = 0.1);
        }
    }

    #[test]
    fn test_known_full_moon() {
        // Full moon of 2024-01-25 17:54 UTC
        let phase = moon_phase(2_460_335.246);
        assert!(phase.illumination > 0.95, "illumination {}", phase.illumination);
        assert_eq!(phase.name, PhaseName::Full);
    }

    #[test]
    fn test_known_new_moon() {
        // New moon of 2024-01-11 11:57 UTC
        let phase = moon_phase(2_460_320.998);
        assert!(phase.illumination < 0.05, "illumination {}", phase.illumination);
        assert_eq!(phase.name, PhaseName::New);
    }

    #[test]
    fn test_waxing_after_new_moon() {
        let phase = moon_phase(2_460_320.998 + 4.0);
        assert!(phase.waxing);
        assert_eq!(phase.name.to_string(), "Waxing Crescent");
    }
}
