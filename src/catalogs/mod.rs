//! Star catalogs module
//!
//! This module provides the compiled-in bright star catalog and the
//! constellation figures drawn between its stars.

use crate::coordinates::Equatorial;

pub mod bright_stars;
pub mod constellations;

pub use bright_stars::{BrightStarCatalog, StarEntry};
pub use constellations::Constellation;

/// Trait for accessing the data every catalog star provides
pub trait StarRecord {
    /// Get star right ascension in degrees
    fn ra(&self) -> f64;

    /// Get star declination in degrees
    fn dec(&self) -> f64;

    /// Apparent magnitude (lower is brighter)
    fn magnitude(&self) -> f64;

    /// Position as an equatorial coordinate
    fn position(&self) -> Equatorial {
        Equatorial::new(self.ra(), self.dec())
    }
}

/// Generic trait for all star catalogs
///
/// Stars are addressed by their index in the catalog, which is stable for the
/// lifetime of the process.
pub trait StarCatalog {
    /// Star entry type for this catalog
    type Star: StarRecord;

    /// Get a star by its catalog index
    fn get_star(&self, index: usize) -> Option<&Self::Star>;

    /// Get all stars in the catalog, in index order
    fn stars(&self) -> impl Iterator<Item = &Self::Star>;

    /// Get the number of stars in the catalog
    fn len(&self) -> usize;

    /// Check if the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filter stars based on a predicate
    fn filter<F>(&self, predicate: F) -> Vec<&Self::Star>
    where
        F: Fn(&Self::Star) -> bool,
    {
        self.stars().filter(|star| predicate(star)).collect()
    }

    /// Get stars at or brighter than a specified magnitude
    fn brighter_than(&self, magnitude: f64) -> Vec<&Self::Star> {
        self.filter(|star| star.magnitude() <= magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_defaults() {
        let catalog = BrightStarCatalog::new();
        assert!(!catalog.is_empty());

        let bright = catalog.brighter_than(0.5);
        assert!(bright.iter().all(|s| s.magnitude <= 0.5));
        assert!(bright.iter().any(|s| s.name == "Sirius"));

        // Verify the brightest star
        let brightest = catalog
            .stars()
            .min_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
            .unwrap();
        assert_eq!(brightest.name, "Sirius");

        let northern = catalog.filter(|s| s.dec > 60.0);
        assert!(northern.iter().any(|s| s.name == "Polaris"));
    }
}
