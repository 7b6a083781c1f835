//! Celestial body definitions and calculations

use crate::catalogs::{StarEntry, StarRecord};
use crate::constants::{MOON_MAGNITUDE, SUN_MAGNITUDE};
use crate::coordinates::Equatorial;
use crate::phase::{moon_phase, MoonPhase};
use crate::planetlib::{Body, Planet};
use crate::time::Instant;
use serde::Serialize;

/// A trait for objects that have a position in the sky
pub trait CelestialObject {
    /// Display name of the object
    fn name(&self) -> &str;

    /// Apparent visual magnitude
    fn magnitude(&self) -> f64;

    /// Get the position of the object at a specific time
    fn position_at(&self, instant: &Instant) -> Equatorial;
}

impl CelestialObject for StarEntry {
    fn name(&self) -> &str {
        self.name
    }

    fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Catalog stars are fixed at their J2000 position
    fn position_at(&self, _instant: &Instant) -> Equatorial {
        self.position()
    }
}

impl CelestialObject for Planet {
    fn name(&self) -> &str {
        Planet::name(self)
    }

    fn magnitude(&self) -> f64 {
        Planet::magnitude(self)
    }

    fn position_at(&self, instant: &Instant) -> Equatorial {
        Body::from(*self).position(instant.jd())
    }
}

/// Includes the Sun, which `SkyQuery` never lists
impl CelestialObject for Body {
    fn name(&self) -> &str {
        Body::name(self)
    }

    fn magnitude(&self) -> f64 {
        match self {
            Body::Sun => SUN_MAGNITUDE,
            Body::Moon => MOON_MAGNITUDE,
            Body::Mercury => Planet::Mercury.magnitude(),
            Body::Venus => Planet::Venus.magnitude(),
            Body::Mars => Planet::Mars.magnitude(),
            Body::Jupiter => Planet::Jupiter.magnitude(),
            Body::Saturn => Planet::Saturn.magnitude(),
        }
    }

    fn position_at(&self, instant: &Instant) -> Equatorial {
        self.position(instant.jd())
    }
}

/// A star, planet or the Moon with its position at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CelestialBody {
    Star {
        /// Index into the bright star catalog
        index: usize,
        name: &'static str,
        magnitude: f64,
        spectral_class: &'static str,
        position: Equatorial,
    },
    Planet {
        planet: Planet,
        magnitude: f64,
        position: Equatorial,
    },
    Moon {
        phase: MoonPhase,
        position: Equatorial,
    },
}

impl CelestialBody {
    /// A catalog star at `instant`
    pub fn star(index: usize, entry: &'static StarEntry, instant: &Instant) -> Self {
        CelestialBody::Star {
            index,
            name: entry.name,
            magnitude: entry.magnitude,
            spectral_class: entry.spectral_class,
            position: entry.position_at(instant),
        }
    }

    /// A planet at `instant`
    pub fn planet(planet: Planet, instant: &Instant) -> Self {
        CelestialBody::Planet {
            planet,
            magnitude: planet.magnitude(),
            position: planet.position_at(instant),
        }
    }

    /// The Moon at `instant`
    pub fn moon(instant: &Instant) -> Self {
        CelestialBody::Moon {
            phase: moon_phase(instant.jd()),
            position: Body::Moon.position_at(instant),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CelestialBody::Star { name, .. } => name,
            CelestialBody::Planet { planet, .. } => planet.name(),
            CelestialBody::Moon { .. } => Body::Moon.name(),
        }
    }

    /// Apparent magnitude: catalog value, planet table value, or the fixed lunar value
    pub fn magnitude(&self) -> f64 {
        match self {
            CelestialBody::Star { magnitude, .. } => *magnitude,
            CelestialBody::Planet { magnitude, .. } => *magnitude,
            CelestialBody::Moon { .. } => MOON_MAGNITUDE,
        }
    }

    /// Equatorial position valid for the instant the body was built for
    pub fn position(&self) -> Equatorial {
        match self {
            CelestialBody::Star { position, .. }
            | CelestialBody::Planet { position, .. }
            | CelestialBody::Moon { position, .. } => *position,
        }
    }

    /// Bright star catalog index, for stars only
    pub fn catalog_index(&self) -> Option<usize> {
        match self {
            CelestialBody::Star { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::BrightStarCatalog;
    use crate::constants::J2000;

    fn j2000() -> Instant {
        Instant::from_julian_date(J2000).unwrap()
    }

    #[test]
    fn test_star_body() {
        let catalog = BrightStarCatalog::new();
        let index = catalog.index_of("Vega").unwrap();
        let body = CelestialBody::star(index, &catalog.as_slice()[index], &j2000());

        assert_eq!(body.name(), "Vega");
        assert_eq!(body.magnitude(), 0.03);
        assert_eq!(body.catalog_index(), Some(index));
        assert_eq!(body.position(), catalog.as_slice()[index].position());
    }

    #[test]
    fn test_planet_body() {
        let body = CelestialBody::planet(Planet::Venus, &j2000());
        assert_eq!(body.name(), "Venus");
        assert_eq!(body.magnitude(), -4.0);
        assert_eq!(body.catalog_index(), None);
    }

    #[test]
    fn test_moon_body() {
        let body = CelestialBody::moon(&j2000());
        assert_eq!(body.name(), "Moon");
        assert_eq!(body.magnitude(), -12.74);
        match body {
            CelestialBody::Moon { phase, .. } => {
                assert!((0.0..=1.0).contains(&phase.illumination));
            }
            other => panic!("expected the Moon, got {:?}", other),
        }
    }

    #[test]
    fn test_body_magnitudes() {
        assert_eq!(CelestialObject::magnitude(&Body::Moon), MOON_MAGNITUDE);
        assert_eq!(CelestialObject::magnitude(&Body::Jupiter), -2.5);
        assert!(CelestialObject::magnitude(&Body::Sun) < MOON_MAGNITUDE);
    }

    #[test]
    fn test_serialized_kind_tag() {
        let body = CelestialBody::planet(Planet::Mars, &j2000());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "planet");
        assert_eq!(json["planet"], "Mars");
    }
}
