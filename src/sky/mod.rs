//! Sky query facade
//!
//! Computes everything above the horizon for one instant and observer. The
//! Julian Date is computed once and shared by every body, and results are
//! ordered brightest first. Nothing is cached between queries.

use crate::catalogs::{BrightStarCatalog, StarCatalog};
use crate::celestial::CelestialBody;
use crate::coordinates::{GeoPosition, Horizontal};
use crate::planetlib::Planet;
use crate::time::Instant;
use serde::Serialize;

/// A body paired with where it appears to the observer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyObject {
    pub body: CelestialBody,
    pub horizontal: Horizontal,
}

impl SkyObject {
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn magnitude(&self) -> f64 {
        self.body.magnitude()
    }

    pub fn altitude(&self) -> f64 {
        self.horizontal.altitude
    }

    pub fn azimuth(&self) -> f64 {
        self.horizontal.azimuth
    }
}

/// Configurable query over the compiled-in catalogs
///
/// The defaults include every star, every planet and the Moon with no
/// magnitude limit. No option can admit bodies at or below the horizon.
#[derive(Debug, Clone)]
pub struct SkyQuery {
    catalog: BrightStarCatalog,
    magnitude_limit: Option<f64>,
    include_stars: bool,
    include_planets: bool,
    include_moon: bool,
}

impl Default for SkyQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyQuery {
    pub fn new() -> Self {
        Self {
            catalog: BrightStarCatalog::new(),
            magnitude_limit: None,
            include_stars: true,
            include_planets: true,
            include_moon: true,
        }
    }

    /// Drop objects fainter than `limit`
    pub fn with_magnitude_limit(mut self, limit: f64) -> Self {
        self.magnitude_limit = Some(limit);
        self
    }

    pub fn with_stars(mut self, include: bool) -> Self {
        self.include_stars = include;
        self
    }

    pub fn with_planets(mut self, include: bool) -> Self {
        self.include_planets = include;
        self
    }

    pub fn with_moon(mut self, include: bool) -> Self {
        self.include_moon = include;
        self
    }

    /// Every enabled body with its equatorial position, in definition order
    ///
    /// Definition order is catalog stars by index, then planets in table
    /// order, then the Moon.
    pub fn equatorial_positions(&self, instant: &Instant) -> Vec<CelestialBody> {
        let mut bodies = Vec::with_capacity(self.catalog.len() + Planet::ALL.len() + 1);

        if self.include_stars {
            bodies.extend(
                self.catalog
                    .as_slice()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| CelestialBody::star(index, entry, instant)),
            );
        }
        if self.include_planets {
            bodies.extend(
                Planet::ALL
                    .iter()
                    .map(|&planet| CelestialBody::planet(planet, instant)),
            );
        }
        if self.include_moon {
            bodies.push(CelestialBody::moon(instant));
        }

        bodies
    }

    /// Visible objects for an observer, sorted by ascending magnitude
    ///
    /// Ties keep definition order.
    pub fn query(&self, instant: &Instant, observer: &GeoPosition) -> Vec<SkyObject> {
        let jd = instant.jd();
        let limit = self.magnitude_limit.unwrap_or(f64::INFINITY);

        let mut visible: Vec<SkyObject> = self
            .equatorial_positions(instant)
            .into_iter()
            .filter(|body| body.magnitude() <= limit)
            .map(|body| {
                let horizontal = body.position().to_horizontal(observer, jd);
                SkyObject { body, horizontal }
            })
            .filter(|object| object.horizontal.is_visible())
            .collect();

        // Stable sort keeps definition order among equal magnitudes
        visible.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));

        log::debug!(
            "{} objects above the horizon at {} for lat={} lon={}",
            visible.len(),
            instant,
            observer.latitude,
            observer.longitude
        );
        visible
    }
}

/// Visible objects using the default query options
pub fn query(instant: &Instant, observer: &GeoPosition) -> Vec<SkyObject> {
    SkyQuery::new().query(instant, observer)
}
