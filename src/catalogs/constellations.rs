//! Constellation and asterism line figures
//!
//! Each figure is a list of line segments between bright star catalog
//! indices. Indices are foreign keys into [`BrightStarCatalog`] and must be
//! kept in step with its table order.

use lazy_static::lazy_static;

use super::bright_stars::{BrightStarCatalog, StarEntry};
use super::StarCatalog;
use crate::{Result, SkyglassError};

/// A named stick figure over catalog stars
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    /// Name of the constellation or asterism
    pub name: &'static str,
    /// Line segments as pairs of catalog indices
    pub lines: &'static [(usize, usize)],
}

impl Constellation {
    /// Resolve the segments to pairs of catalog stars
    ///
    /// Fails if any index is out of range of `catalog`.
    pub fn segments<'a>(
        &self,
        catalog: &'a BrightStarCatalog,
    ) -> Result<Vec<(&'a StarEntry, &'a StarEntry)>> {
        self.lines
            .iter()
            .map(|&(from, to)| -> Result<(&'a StarEntry, &'a StarEntry)> {
                let lookup = |index: usize| {
                    catalog.get_star(index).ok_or_else(|| {
                        SkyglassError::ObjectNotFound(format!(
                            "{} references missing star index {}",
                            self.name, index
                        ))
                    })
                };
                Ok((lookup(from)?, lookup(to)?))
            })
            .collect()
    }

    /// Distinct star indices used by this figure, in first-use order
    pub fn star_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        for &(from, to) in self.lines {
            for index in [from, to] {
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }
        indices
    }
}

lazy_static! {
    static ref CONSTELLATIONS: Vec<Constellation> = vec![
        Constellation {
            name: "Orion",
            // Betelgeuse, Bellatrix, belt, Saiph, Rigel
            lines: &[(9, 25), (9, 30), (25, 49), (49, 28), (28, 30), (30, 48), (49, 6)],
        },
        Constellation {
            name: "Ursa Major",
            // Bowl of the Big Dipper, then the handle
            lines: &[(32, 50), (50, 51), (51, 52), (52, 32), (52, 31), (31, 53), (53, 36)],
        },
        Constellation {
            name: "Cassiopeia",
            lines: &[(55, 54), (54, 56), (56, 57), (57, 58)],
        },
        Constellation {
            name: "Canis Major",
            lines: &[(44, 0), (0, 34), (34, 21)],
        },
        Constellation {
            name: "Gemini",
            lines: &[(22, 16), (16, 41)],
        },
        Constellation {
            name: "Summer Triangle",
            lines: &[(4, 18), (18, 11), (11, 4)],
        },
        Constellation {
            name: "Winter Triangle",
            lines: &[(0, 7), (7, 9), (9, 0)],
        },
    ];
}

/// All constellation figures
pub fn all() -> &'static [Constellation] {
    CONSTELLATIONS.as_slice()
}

/// Look up a figure by name, case-insensitively
pub fn by_name(name: &str) -> Result<&'static Constellation> {
    let wanted = name.trim();
    CONSTELLATIONS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| SkyglassError::ObjectNotFound(format!("no such constellation: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indices_resolve() {
        let catalog = BrightStarCatalog::new();
        for constellation in all() {
            let segments = constellation.segments(&catalog).unwrap();
            assert_eq!(segments.len(), constellation.lines.len());
        }
    }

    #[test]
    fn test_orion_figure_stars() {
        let catalog = BrightStarCatalog::new();
        let orion = by_name("orion").unwrap();
        let mut names: Vec<&str> = orion
            .star_indices()
            .into_iter()
            .map(|i| catalog.get_star(i).unwrap().name)
            .collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["Alnilam", "Alnitak", "Bellatrix", "Betelgeuse", "Mintaka", "Rigel", "Saiph"]
        );
    }

    #[test]
    fn test_big_dipper_handle() {
        let catalog = BrightStarCatalog::new();
        let segments = by_name("Ursa Major").unwrap().segments(&catalog).unwrap();
        let (from, to) = segments.last().unwrap();
        assert_eq!(from.name, "Mizar");
        assert_eq!(to.name, "Alkaid");
    }

    #[test]
    fn test_summer_triangle_closes() {
        let catalog = BrightStarCatalog::new();
        let segments = by_name("Summer Triangle").unwrap().segments(&catalog).unwrap();
        let names: Vec<(&str, &str)> = segments.iter().map(|(a, b)| (a.name, b.name)).collect();
        assert_eq!(
            names,
            vec![("Vega", "Deneb"), ("Deneb", "Altair"), ("Altair", "Vega")]
        );
    }

    #[test]
    fn test_missing_index_is_reported() {
        let broken = Constellation {
            name: "Broken",
            lines: &[(0, 10_000)],
        };
        let catalog = BrightStarCatalog::new();
        assert!(matches!(
            broken.segments(&catalog),
            Err(SkyglassError::ObjectNotFound(_))
        ));
        assert!(by_name("Draco").is_err());
    }
}
