//! Equatorial to horizontal (alt/az) transformation

use super::{Equatorial, GeoPosition, Horizontal};
use crate::constants::DEG2RAD;
use crate::time::{local_sidereal_time, normalize_degrees};

/// Below this, `cos(lat)·cos(alt)` is treated as zero and the azimuth is undefined
const DEGENERATE_AZIMUTH_EPS: f64 = 1e-6;

/// Azimuth reported when the observer is at a pole or the body is at the zenith
pub const DEGENERATE_AZIMUTH: f64 = 0.0;

/// Transform RA/Dec into altitude/azimuth for an observer at `lat`/`lon`
///
/// All angles are degrees. The hour angle is `LST - ra`; azimuth is measured
/// clockwise from north. Inverse-trig arguments are clamped to [-1, 1] so
/// floating-point drift never yields NaN. When the azimuth is undefined
/// (observer at a pole, or body at the zenith/nadir) [`DEGENERATE_AZIMUTH`]
/// is returned.
pub fn equatorial_to_horizontal(ra: f64, dec: f64, lat: f64, lon: f64, jd: f64) -> Horizontal {
    let hour_angle = (local_sidereal_time(jd, lon) - ra) * DEG2RAD;
    let (sin_dec, cos_dec) = (dec * DEG2RAD).sin_cos();
    let (sin_lat, cos_lat) = (lat * DEG2RAD).sin_cos();

    let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin();

    let denominator = cos_lat * altitude.cos();
    if denominator.abs() < DEGENERATE_AZIMUTH_EPS {
        log::trace!(
            "degenerate azimuth for ra={} dec={} at lat={}, using {}",
            ra,
            dec,
            lat,
            DEGENERATE_AZIMUTH
        );
        return Horizontal {
            altitude: altitude.to_degrees(),
            azimuth: DEGENERATE_AZIMUTH,
        };
    }

    let cos_az = ((sin_dec - sin_lat * altitude.sin()) / denominator).clamp(-1.0, 1.0);
    let az = cos_az.acos().to_degrees();
    let azimuth = if hour_angle.sin() <= 0.0 { az } else { 360.0 - az };

    Horizontal {
        altitude: altitude.to_degrees(),
        azimuth: normalize_degrees(azimuth),
    }
}

impl Equatorial {
    /// Horizontal position of this coordinate for an observer at a Julian Date
    pub fn to_horizontal(&self, observer: &GeoPosition, jd: f64) -> Horizontal {
        equatorial_to_horizontal(
            self.ra,
            self.dec,
            observer.latitude,
            observer.longitude,
            jd,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_abs_diff_eq;

    /// Julian Date near J2000 at which Greenwich sidereal time is zero
    fn jd_with_zero_lst() -> f64 {
        let lst = local_sidereal_time(J2000, 0.0);
        J2000 + (360.0 - lst) / 360.98564736629
    }

    #[test]
    fn test_zero_lst_helper() {
        let lst = local_sidereal_time(jd_with_zero_lst(), 0.0);
        assert!(lst < 1e-5 || lst > 360.0 - 1e-5, "lst = {}", lst);
    }

    #[test]
    fn test_body_at_zenith() {
        let jd = jd_with_zero_lst();
        let h = equatorial_to_horizontal(0.0, 0.0, 0.0, 0.0, jd);
        assert_abs_diff_eq!(h.altitude, 90.0, epsilon = 1e-3);
        assert!(h.azimuth.is_finite());
    }

    #[test]
    fn test_zenith_at_mid_latitude() {
        // Hour angle zero and dec == lat puts the body overhead
        let lat = 48.0;
        let lst = local_sidereal_time(J2000, 11.0);
        let h = equatorial_to_horizontal(lst, lat, lat, 11.0, J2000);
        assert_abs_diff_eq!(h.altitude, 90.0, epsilon = 1e-5);
        assert_eq!(h.azimuth, DEGENERATE_AZIMUTH);
    }

    #[test]
    fn test_observer_at_pole_has_fixed_azimuth() {
        let h = equatorial_to_horizontal(123.0, 40.0, 90.0, 0.0, J2000);
        assert_abs_diff_eq!(h.altitude, 40.0, epsilon = 1e-9);
        assert_eq!(h.azimuth, DEGENERATE_AZIMUTH);

        let h = equatorial_to_horizontal(10.0, -25.0, -90.0, 0.0, J2000);
        assert_abs_diff_eq!(h.altitude, 25.0, epsilon = 1e-9);
        assert_eq!(h.azimuth, DEGENERATE_AZIMUTH);
    }

    #[test]
    fn test_celestial_pole_is_due_north() {
        let lat = 40.0;
        let h = equatorial_to_horizontal(0.0, 90.0, lat, -74.0, J2000 + 123.4);
        assert_abs_diff_eq!(h.altitude, lat, epsilon = 1e-9);
        assert!(h.azimuth < 1e-4 || h.azimuth > 360.0 - 1e-4);
    }

    #[test]
    fn test_rising_and_setting_sides() {
        let lst = local_sidereal_time(J2000, 0.0);

        // Positive hour angle: body has crossed the meridian and is in the west
        let west = equatorial_to_horizontal(lst - 30.0, 0.0, 30.0, 0.0, J2000);
        assert!(west.azimuth > 180.0 && west.azimuth < 360.0);

        // Negative hour angle: body is still rising in the east
        let east = equatorial_to_horizontal(lst + 30.0, 0.0, 30.0, 0.0, J2000);
        assert!(east.azimuth > 0.0 && east.azimuth < 180.0);
        assert_abs_diff_eq!(east.altitude, west.altitude, epsilon = 1e-9);
        assert_abs_diff_eq!(east.azimuth, 360.0 - west.azimuth, epsilon = 1e-9);
    }

    #[test]
    fn test_output_ranges() {
        for step in 0..50 {
            let jd = J2000 + step as f64 * 0.37;
            for &(ra, dec) in &[(0.0, 0.0), (101.3, -16.7), (279.2, 38.8), (37.9, 89.3)] {
                let h = equatorial_to_horizontal(ra, dec, 51.5, -0.1, jd);
                assert!((-90.0..=90.0).contains(&h.altitude));
                assert!((0.0..360.0).contains(&h.azimuth));
            }
        }
    }
}
