//! Time module for astronomical time calculations
//!
//! Converts civil UTC timestamps into Julian Dates and derives local sidereal
//! time from them. Everything here is UTC based; no time-zone or leap-second
//! handling is attempted.

use crate::constants::{DAY_MS, J2000, JULIAN_CENTURY, UNIX_EPOCH_JD};
use crate::{Result, SkyglassError};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::ops::Sub;

/// Convert a Unix timestamp in milliseconds to a Julian Date
pub fn julian_date(timestamp_ms: f64) -> f64 {
    timestamp_ms / DAY_MS + UNIX_EPOCH_JD
}

/// Local sidereal time in degrees, normalized to [0, 360)
///
/// Uses the IAU 1982 GMST polynomial in degrees. `longitude` is in degrees,
/// positive east.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    let t = (jd - J2000) / JULIAN_CENTURY;
    let theta0 = 280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t
        - t * t * t / 38710000.0;

    normalize_degrees(theta0 + longitude)
}

/// Wrap an angle in degrees into [0, 360)
pub(crate) fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// A point in time expressed as a UTC Julian Date
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd: f64,
}

impl Instant {
    /// Create an instant from a Unix timestamp in milliseconds
    ///
    /// Fails unless the timestamp is finite and within chrono's calendar range.
    pub fn from_unix_millis(timestamp_ms: f64) -> Result<Self> {
        if !timestamp_ms.is_finite() {
            return Err(SkyglassError::InvalidInput(format!(
                "timestamp must be finite, got {}",
                timestamp_ms
            )));
        }
        Self::checked(julian_date(timestamp_ms))
    }

    /// Create an instant directly from a Julian Date
    ///
    /// Fails unless the date is finite and within chrono's calendar range.
    pub fn from_julian_date(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(SkyglassError::InvalidInput(format!(
                "Julian date must be finite, got {}",
                jd
            )));
        }
        Self::checked(jd)
    }

    fn checked(jd: f64) -> Result<Self> {
        let instant = Self { jd };
        instant.to_datetime()?;
        Ok(instant)
    }

    /// Create an instant from a UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let millis =
            dt.timestamp() as f64 * 1000.0 + dt.timestamp_subsec_nanos() as f64 / 1_000_000.0;
        Self {
            jd: julian_date(millis),
        }
    }

    /// Parse an RFC 3339 timestamp such as `2024-03-20T21:00:00Z`
    pub fn parse_rfc3339(text: &str) -> Result<Self> {
        let dt = DateTime::parse_from_rfc3339(text.trim()).map_err(|e| {
            SkyglassError::InvalidInput(format!("malformed timestamp {:?}: {}", text, e))
        })?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// The current instant
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Julian Date of this instant
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since J2000.0
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000
    }

    /// Julian centuries elapsed since J2000.0
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / JULIAN_CENTURY
    }

    /// Milliseconds since the Unix epoch
    pub fn unix_millis(&self) -> f64 {
        (self.jd - UNIX_EPOCH_JD) * DAY_MS
    }

    /// Local sidereal time at this instant for an east longitude in degrees
    pub fn local_sidereal_time(&self, longitude: f64) -> f64 {
        local_sidereal_time(self.jd, longitude)
    }

    /// Shift by a number of days (negative to go back)
    pub fn checked_add_days(&self, days: f64) -> Result<Self> {
        Self::from_julian_date(self.jd + days)
    }

    /// Shift by a chrono duration
    pub fn checked_add(&self, duration: Duration) -> Result<Self> {
        self.checked_add_days(duration.num_milliseconds() as f64 / DAY_MS)
    }

    /// Convert back to a UTC datetime
    ///
    /// Fails when the instant lies outside chrono's representable range.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        // Saturating cast; chrono rejects the saturated extremes
        let millis = self.unix_millis().round() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            SkyglassError::InvalidInput(format!(
                "Julian date {} is outside the calendar range",
                self.jd
            ))
        })
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{} (JD {:.6})", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ"), self.jd),
            Err(_) => write!(f, "JD {:.6}", self.jd),
        }
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl Sub<Instant> for Instant {
    type Output = f64;

    /// Difference in days
    fn sub(self, other: Instant) -> Self::Output {
        self.jd - other.jd
    }
}
