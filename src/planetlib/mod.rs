//! Low-precision ephemerides for the Sun, Moon and naked-eye planets
//!
//! The Sun and Moon use short mean-element series good to a fraction of a
//! degree near the present epoch. The planets are a coarse placeholder: right
//! ascension is the mean longitude and declination a scaled sine of it. None
//! of these include perturbations, light time, nutation or parallax.

use crate::constants::J2000;
use crate::coordinates::{Ecliptic, Equatorial};
use crate::time::normalize_degrees;
use crate::{Result, SkyglassError};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Enum representing the bodies with an ephemeris in this module
///
/// The Sun is available to library callers (for twilight or phase work) but
/// is never listed by `SkyQuery`, which covers night-sky objects only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }

    /// Apparent equatorial position at a Julian Date
    pub fn position(&self, jd: f64) -> Equatorial {
        match self {
            Body::Sun => sun_position(jd),
            Body::Moon => moon_position(jd),
            Body::Mercury => planet_position(Planet::Mercury, jd),
            Body::Venus => planet_position(Planet::Venus, jd),
            Body::Mars => planet_position(Planet::Mars, jd),
            Body::Jupiter => planet_position(Planet::Jupiter, jd),
            Body::Saturn => planet_position(Planet::Saturn, jd),
        }
    }
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        match planet {
            Planet::Mercury => Body::Mercury,
            Planet::Venus => Body::Venus,
            Planet::Mars => Body::Mars,
            Planet::Jupiter => Body::Jupiter,
            Planet::Saturn => Body::Saturn,
        }
    }
}

/// The five naked-eye planets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Mean elements used by the coarse planet model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetElements {
    /// Mean longitude at J2000.0 in degrees
    pub mean_longitude: f64,
    /// Mean motion in degrees per day
    pub mean_motion: f64,
    /// Orbital inclination to the ecliptic in degrees
    pub inclination: f64,
    /// Fixed apparent visual magnitude
    pub magnitude: f64,
}

/// Element table in definition order (Mercury, Venus, Mars, Jupiter, Saturn)
const PLANET_ELEMENTS: [PlanetElements; 5] = [
    PlanetElements {
        mean_longitude: 252.250_906,
        mean_motion: 4.092_334_436_8,
        inclination: 7.004_986,
        magnitude: 0.0,
    },
    PlanetElements {
        mean_longitude: 181.979_801,
        mean_motion: 1.602_130_224_4,
        inclination: 3.394_662,
        magnitude: -4.0,
    },
    PlanetElements {
        mean_longitude: 355.433_000,
        mean_motion: 0.524_020_776_6,
        inclination: 1.849_726,
        magnitude: 0.5,
    },
    PlanetElements {
        mean_longitude: 34.351_519,
        mean_motion: 0.083_085_300_1,
        inclination: 1.303_267,
        magnitude: -2.5,
    },
    PlanetElements {
        mean_longitude: 50.077_444,
        mean_motion: 0.033_444_228_2,
        inclination: 2.488_879,
        magnitude: 0.5,
    },
];

lazy_static! {
    /// Map from lowercase planet names to planets
    static ref PLANET_NAMES: HashMap<String, Planet> = {
        let mut m = HashMap::new();
        for planet in Planet::ALL {
            m.insert(planet.name().to_lowercase(), planet);
        }
        m
    };
}

impl Planet {
    /// All planets in definition order
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        Body::from(*self).name()
    }

    /// Mean elements for this planet
    pub fn elements(&self) -> &'static PlanetElements {
        &PLANET_ELEMENTS[*self as usize]
    }

    /// Fixed apparent magnitude from the element table
    pub fn magnitude(&self) -> f64 {
        self.elements().magnitude
    }

    /// Look up a planet by name, case-insensitively
    pub fn by_name(name: &str) -> Result<Planet> {
        PLANET_NAMES
            .get(&name.trim().to_lowercase())
            .copied()
            .ok_or_else(|| SkyglassError::ObjectNotFound(format!("no such planet: {}", name)))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = SkyglassError;

    fn from_str(s: &str) -> Result<Self> {
        Planet::by_name(s)
    }
}

/// Magnitude of a planet looked up by name
pub fn planet_magnitude(name: &str) -> Result<f64> {
    Planet::by_name(name).map(|planet| planet.magnitude())
}

/// Mean obliquity of the ecliptic in degrees, `n` days from J2000.0
pub fn obliquity(n: f64) -> f64 {
    23.439 - 0.000_000_4 * n
}

/// Geocentric ecliptic longitude of the Sun (latitude is taken as zero)
pub fn sun_ecliptic(jd: f64) -> Ecliptic {
    let n = jd - J2000;
    let mean_longitude = 280.460 + 0.985_647_4 * n;
    let g = (357.528 + 0.985_600_3 * n).to_radians();

    let lambda = mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin();
    Ecliptic::new(lambda, 0.0)
}

/// Equatorial position of the Sun
pub fn sun_position(jd: f64) -> Equatorial {
    sun_ecliptic(jd).to_equatorial(obliquity(jd - J2000))
}

/// Geocentric ecliptic longitude and latitude of the Moon
pub fn moon_ecliptic(jd: f64) -> Ecliptic {
    let n = jd - J2000;
    let mean_longitude = 218.316 + 13.176_396 * n;
    let mean_anomaly = (134.963 + 13.064_993 * n).to_radians();
    let argument_of_latitude = (93.272 + 13.229_350 * n).to_radians();

    let lambda = mean_longitude + 6.289 * mean_anomaly.sin();
    let beta = 5.128 * argument_of_latitude.sin();
    Ecliptic::new(lambda, beta)
}

/// Equatorial position of the Moon
pub fn moon_position(jd: f64) -> Equatorial {
    moon_ecliptic(jd).to_equatorial(obliquity(jd - J2000))
}

/// Coarse equatorial position of a planet
///
/// RA is the mean longitude; declination is `sin(i)·sin(L)·10`, clamped to
/// [-90, 90]. This is a placeholder model, not a physical position.
pub fn planet_position(planet: Planet, jd: f64) -> Equatorial {
    let elements = planet.elements();
    let mean_longitude =
        normalize_degrees(elements.mean_longitude + elements.mean_motion * (jd - J2000));

    let dec = elements.inclination.to_radians().sin() * mean_longitude.to_radians().sin() * 10.0;
    Equatorial::new(mean_longitude, dec.clamp(-90.0, 90.0))
}
