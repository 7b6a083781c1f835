//! Coordinate types used by the sky engine
//!
//! All angles in this module are degrees. Equatorial and ecliptic positions
//! are geocentric and of date; horizontal positions are only meaningful for
//! the instant and observer that produced them.

pub mod horizontal;

pub use horizontal::equatorial_to_horizontal;

use crate::constants::DEG2RAD;
use crate::time::normalize_degrees;
use crate::{Result, SkyglassError};
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

/// Observer location on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    /// Geodetic latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east, normalized to [-180, 180)
    pub longitude: f64,
}

impl GeoPosition {
    /// Create a validated observer position
    ///
    /// Latitude must lie in [-90, 90]; it is never clamped. Longitude may be
    /// any finite value and is wrapped into [-180, 180).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SkyglassError::InvalidInput(format!(
                "latitude must be within [-90, 90], got {}",
                latitude
            )));
        }
        if !longitude.is_finite() {
            return Err(SkyglassError::InvalidInput(format!(
                "longitude must be finite, got {}",
                longitude
            )));
        }

        Ok(Self {
            latitude,
            longitude: normalize_degrees(longitude + 180.0) - 180.0,
        })
    }
}

/// Equatorial coordinates (RA/Dec) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360)
    pub ra: f64,
    /// Declination in degrees, [-90, 90]
    pub dec: f64,
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: normalize_degrees(ra),
            dec,
        }
    }

    /// Create from a right ascension in hours
    pub fn from_hours(ra_hours: f64, dec: f64) -> Self {
        Self::new(ra_hours * crate::constants::DEG_PER_HOUR, dec)
    }

    /// Unit vector in the equatorial frame
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        spherical_to_unit(self.ra, self.dec)
    }

    /// Build from a (not necessarily unit) vector in the equatorial frame
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        let (lon, lat) = unit_to_spherical(v);
        Equatorial::new(lon, lat)
    }
}

/// Ecliptic coordinates of date, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ecliptic {
    /// Ecliptic longitude in degrees
    pub lon: f64,
    /// Ecliptic latitude in degrees
    pub lat: f64,
}

impl Ecliptic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Ecliptic {
            lon: normalize_degrees(lon),
            lat,
        }
    }

    /// Rotate into equatorial coordinates for the given obliquity (degrees)
    pub fn to_equatorial(&self, obliquity: f64) -> Equatorial {
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), obliquity * DEG2RAD);
        let eq = rotation * spherical_to_unit(self.lon, self.lat);
        Equatorial::from_vector(&eq)
    }
}

/// Horizontal (alt/az) coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizontal {
    /// Altitude above the horizon, [-90, 90]
    pub altitude: f64,
    /// Azimuth clockwise from north, [0, 360)
    pub azimuth: f64,
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

impl Horizontal {
    /// Whether the position is above the horizon
    pub fn is_visible(&self) -> bool {
        self.altitude > 0.0
    }

    /// Nearest 16-wind compass label for the azimuth
    pub fn compass_point(&self) -> &'static str {
        let sector = ((self.azimuth + 11.25) / 22.5).floor() as usize % COMPASS_POINTS.len();
        COMPASS_POINTS[sector]
    }
}

fn spherical_to_unit(lon_deg: f64, lat_deg: f64) -> Vector3<f64> {
    let (sin_lon, cos_lon) = (lon_deg * DEG2RAD).sin_cos();
    let (sin_lat, cos_lat) = (lat_deg * DEG2RAD).sin_cos();
    Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

fn unit_to_spherical(v: &Vector3<f64>) -> (f64, f64) {
    let r_xy = (v.x * v.x + v.y * v.y).sqrt();
    (v.y.atan2(v.x).to_degrees(), v.z.atan2(r_xy).to_degrees())
}
