//! Error types for planet assembly and elevation queries

use std::fmt;

/// Errors that can occur during planet assembly or elevation queries
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetError {
    /// Elevation raster was queried before a raster was installed
    NotReady,
    /// Face grid resolution is below the minimum of 2
    InvalidResolution(u32),
    /// Geodetic coordinate outside valid latitude/longitude bounds
    OutOfRange {
        /// Latitude of the rejected query, in degrees
        lat: f64,
        /// Longitude of the rejected query, in degrees
        lon: f64,
    },
    /// Raster construction failed validation
    InvalidRaster(String),
}

impl fmt::Display for PlanetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanetError::NotReady => write!(f, "elevation raster not ready"),
            PlanetError::InvalidResolution(n) => {
                write!(f, "face resolution must be >= 2 (got {})", n)
            }
            PlanetError::OutOfRange { lat, lon } => {
                write!(f, "geodetic coordinate out of range: lat {}, lon {}", lat, lon)
            }
            PlanetError::InvalidRaster(msg) => write!(f, "invalid raster: {}", msg),
        }
    }
}

impl std::error::Error for PlanetError {}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;
