//! Compiled-in catalog of the brightest stars
//!
//! Positions are J2000 and loaded once into a process-wide table. The order
//! of the raw table is part of the public contract: constellation figures
//! refer to stars by index, so entries must only ever be appended.

use lazy_static::lazy_static;
use serde::Serialize;

use super::{StarCatalog, StarRecord};
use crate::constants::DEG_PER_HOUR;
use crate::{Result, SkyglassError};

/// A star from the bright star catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarEntry {
    /// Proper name
    pub name: &'static str,
    /// Right ascension in degrees (J2000)
    pub ra: f64,
    /// Declination in degrees (J2000)
    pub dec: f64,
    /// Apparent visual magnitude
    pub magnitude: f64,
    /// MK spectral classification
    pub spectral_class: &'static str,
}

impl StarRecord for StarEntry {
    fn ra(&self) -> f64 {
        self.ra
    }

    fn dec(&self) -> f64 {
        self.dec
    }

    fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// (name, RA hours, Dec degrees, magnitude, spectral class)
type RawStar = (&'static str, f64, f64, f64, &'static str);

const RAW_STARS: [RawStar; 60] = [
    ("Sirius", 6.7525, -16.7161, -1.46, "A1V"),
    ("Canopus", 6.3992, -52.6957, -0.74, "A9II"),
    ("Rigil Kentaurus", 14.6600, -60.8340, -0.27, "G2V"),
    ("Arcturus", 14.2610, 19.1824, -0.05, "K1.5III"),
    ("Vega", 18.6156, 38.7837, 0.03, "A0V"),
    ("Capella", 5.2782, 45.9980, 0.08, "G8III"),
    ("Rigel", 5.2423, -8.2016, 0.13, "B8Ia"),
    ("Procyon", 7.6550, 5.2250, 0.34, "F5IV"),
    ("Achernar", 1.6286, -57.2368, 0.46, "B6V"),
    ("Betelgeuse", 5.9195, 7.4071, 0.50, "M1Ia"),
    ("Hadar", 14.0637, -60.3730, 0.61, "B1III"),
    ("Altair", 19.8464, 8.8683, 0.77, "A7V"),
    ("Acrux", 12.4433, -63.0991, 0.77, "B0.5IV"),
    ("Aldebaran", 4.5987, 16.5093, 0.85, "K5III"),
    ("Antares", 16.4901, -26.4320, 0.96, "M1.5Iab"),
    ("Spica", 13.4199, -11.1613, 0.97, "B1V"),
    ("Pollux", 7.7553, 28.0262, 1.14, "K0III"),
    ("Fomalhaut", 22.9608, -29.6222, 1.16, "A3V"),
    ("Deneb", 20.6905, 45.2803, 1.25, "A2Ia"),
    ("Mimosa", 12.7953, -59.6888, 1.25, "B0.5III"),
    ("Regulus", 10.1395, 11.9672, 1.35, "B8IV"),
    ("Adhara", 6.9771, -28.9721, 1.50, "B2II"),
    ("Castor", 7.5767, 31.8883, 1.58, "A1V"),
    ("Gacrux", 12.5194, -57.1132, 1.63, "M3.5III"),
    ("Shaula", 17.5601, -37.1038, 1.62, "B2IV"),
    ("Bellatrix", 5.4189, 6.3497, 1.64, "B2III"),
    ("Elnath", 5.4382, 28.6075, 1.65, "B7III"),
    ("Miaplacidus", 9.2200, -69.7172, 1.67, "A1III"),
    ("Alnilam", 5.6036, -1.2019, 1.69, "B0Ia"),
    ("Alnair", 22.1372, -46.9610, 1.74, "B6V"),
    ("Alnitak", 5.6793, -1.9426, 1.77, "O9.5Ib"),
    ("Alioth", 12.9005, 55.9598, 1.77, "A1III"),
    ("Dubhe", 11.0621, 61.7510, 1.79, "K0III"),
    ("Mirfak", 3.4054, 49.8612, 1.79, "F5Ib"),
    ("Wezen", 7.1399, -26.3932, 1.84, "F8Ia"),
    ("Kaus Australis", 18.4029, -34.3846, 1.85, "B9.5III"),
    ("Alkaid", 13.7923, 49.3133, 1.86, "B3V"),
    ("Sargas", 17.6220, -42.9978, 1.87, "F1II"),
    ("Avior", 8.3752, -59.5095, 1.86, "K3III"),
    ("Menkalinan", 5.9921, 44.9474, 1.90, "A1IV"),
    ("Atria", 16.8111, -69.0277, 1.91, "K2IIb"),
    ("Alhena", 6.6285, 16.3993, 1.93, "A1IV"),
    ("Peacock", 20.4275, -56.7351, 1.94, "B2IV"),
    ("Polaris", 2.5303, 89.2641, 1.98, "F7Ib"),
    ("Mirzam", 6.3783, -17.9559, 1.98, "B1II"),
    ("Alphard", 9.4598, -8.6586, 1.99, "K3II"),
    ("Hamal", 2.1196, 23.4624, 2.00, "K2III"),
    ("Nunki", 18.9211, -26.2967, 2.05, "B2.5V"),
    ("Saiph", 5.7959, -9.6696, 2.09, "B0.5Ia"),
    ("Mintaka", 5.5334, -0.2991, 2.23, "O9.5II"),
    ("Merak", 11.0307, 56.3824, 2.37, "A1V"),
    ("Phecda", 11.8972, 53.6948, 2.44, "A0V"),
    ("Megrez", 12.2571, 57.0326, 3.31, "A3V"),
    ("Mizar", 13.3988, 54.9254, 2.23, "A1V"),
    ("Schedar", 0.6751, 56.5373, 2.24, "K0III"),
    ("Caph", 0.1530, 59.1498, 2.28, "F2III"),
    ("Gamma Cassiopeiae", 0.9451, 60.7167, 2.47, "B0.5IVe"),
    ("Ruchbah", 1.4303, 60.2353, 2.68, "A5III"),
    ("Segin", 1.9066, 63.6701, 3.37, "B3III"),
    ("Sadr", 20.3705, 40.2567, 2.23, "F8Ib"),
];

lazy_static! {
    /// Catalog records with RA converted to degrees, in raw table order
    static ref BRIGHT_STARS: Vec<StarEntry> = RAW_STARS
        .iter()
        .map(|&(name, ra_hours, dec, magnitude, spectral_class)| StarEntry {
            name,
            ra: ra_hours * DEG_PER_HOUR,
            dec,
            magnitude,
            spectral_class,
        })
        .collect();
}

/// Handle on the process-wide bright star table
#[derive(Debug, Clone, Copy)]
pub struct BrightStarCatalog {
    stars: &'static [StarEntry],
}

impl BrightStarCatalog {
    pub fn new() -> Self {
        Self {
            stars: BRIGHT_STARS.as_slice(),
        }
    }

    /// All records as a slice, in index order
    pub fn as_slice(&self) -> &'static [StarEntry] {
        self.stars
    }

    /// Index of a star by name, case-insensitively
    pub fn index_of(&self, name: &str) -> Result<usize> {
        let wanted = name.trim();
        self.stars
            .iter()
            .position(|star| star.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkyglassError::ObjectNotFound(format!("no such star: {}", name)))
    }

    /// Look up a star by name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Result<&'static StarEntry> {
        let index = self.index_of(name)?;
        Ok(&self.stars[index])
    }
}

impl Default for BrightStarCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StarCatalog for BrightStarCatalog {
    type Star = StarEntry;

    fn get_star(&self, index: usize) -> Option<&StarEntry> {
        self.stars.get(index)
    }

    fn stars(&self) -> impl Iterator<Item = &StarEntry> {
        self.stars.iter()
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_catalog_loads_in_table_order() {
        let catalog = BrightStarCatalog::new();
        assert_eq!(catalog.len(), RAW_STARS.len());

        for (index, raw) in RAW_STARS.iter().enumerate() {
            assert_eq!(catalog.get_star(index).unwrap().name, raw.0);
        }
        assert!(catalog.get_star(RAW_STARS.len()).is_none());
    }

    #[test]
    fn test_index_contract() {
        // Constellation figures depend on these indices
        let catalog = BrightStarCatalog::new();
        assert_eq!(catalog.index_of("Sirius").unwrap(), 0);
        assert_eq!(catalog.index_of("Betelgeuse").unwrap(), 9);
        assert_eq!(catalog.index_of("Polaris").unwrap(), 43);
        assert_eq!(catalog.index_of("Sadr").unwrap(), 59);
    }

    #[test]
    fn test_ra_converted_to_degrees() {
        let catalog = BrightStarCatalog::new();
        let sirius = catalog.find_by_name("sirius").unwrap();
        assert_abs_diff_eq!(sirius.ra, 101.2875, epsilon = 1e-9);
        assert_abs_diff_eq!(sirius.dec, -16.7161, epsilon = 1e-12);
        assert_eq!(sirius.spectral_class, "A1V");

        let vega = catalog.find_by_name("Vega").unwrap();
        assert_abs_diff_eq!(vega.position().ra, 279.234, epsilon = 1e-9);
    }

    #[test]
    fn test_records_are_well_formed() {
        let catalog = BrightStarCatalog::new();
        for star in catalog.stars() {
            assert!((0.0..360.0).contains(&star.ra), "{} ra", star.name);
            assert!((-90.0..=90.0).contains(&star.dec), "{} dec", star.name);
            assert!(star.magnitude < 4.0, "{} magnitude", star.name);
            assert!(!star.spectral_class.is_empty());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = BrightStarCatalog::new();
        for (i, star) in catalog.stars().enumerate() {
            assert_eq!(catalog.index_of(star.name).unwrap(), i);
        }
    }

    #[test]
    fn test_unknown_star() {
        let catalog = BrightStarCatalog::new();
        assert!(matches!(
            catalog.find_by_name("Krypton"),
            Err(SkyglassError::ObjectNotFound(_))
        ));
    }
}
