//! Skyglass: low-precision sky positions for naked-eye observing
//!
//! Given a moment in time and an observer's location, this crate computes
//! where the bright stars, the five naked-eye planets and the Moon appear in
//! the sky (altitude/azimuth), along with the Moon's illuminated fraction.
//! Every query is a pure function over compiled-in tables, cheap enough to
//! run once per rendered frame.
//!
//! ```rust
//! use skyglass::{GeoPosition, Instant};
//!
//! let instant = Instant::parse_rfc3339("2024-03-20T21:00:00Z").unwrap();
//! let observer = GeoPosition::new(51.48, 0.0).unwrap();
//!
//! for object in skyglass::sky::query(&instant, &observer) {
//!     assert!(object.altitude() > 0.0);
//! }
//! ```

use thiserror::Error;

pub mod catalogs;
pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod phase;
pub mod planetlib;
pub mod sky;
pub mod time;

// Re-export commonly used types
pub use catalogs::{BrightStarCatalog, StarCatalog};
pub use celestial::{CelestialBody, CelestialObject};
pub use coordinates::{Equatorial, GeoPosition, Horizontal};
pub use phase::MoonPhase;
pub use planetlib::Planet;
pub use sky::{SkyObject, SkyQuery};
pub use time::Instant;

/// Main error type for the skyglass library
#[derive(Debug, Error)]
pub enum SkyglassError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),
}

/// Result type for skyglass operations
pub type Result<T> = std::result::Result<T, SkyglassError>;
