//! Geodetic coordinate conversion for unit-sphere points
//!
//! Bidirectional mapping between a point on the unit sphere and a
//! latitude/longitude pair in degrees.

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// Latitude is in [-90, 90], longitude in (-180, 180]. Coordinates derived
/// from unit-sphere points always satisfy these bounds; directly constructed
/// query keys are validated by the raster before indexing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoord {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeodeticCoord {
    /// Create a coordinate from degree values
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that this coordinate lies within valid geodetic bounds
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && self.lon > -180.0 && self.lon <= 180.0
    }
}

/// Convert a point on the unit sphere to a geodetic coordinate
///
/// Latitude is `asin(p.y)` and longitude is `atan2(p.x, -p.z)`, both
/// converted to degrees. At the poles (`p.y = ±1`) every longitude maps to
/// the same point, so the returned longitude is well-defined but not unique;
/// callers must tolerate an arbitrary value there.
pub fn point_to_coordinate(p: DVec3) -> GeodeticCoord {
    let lat = p.y.clamp(-1.0, 1.0).asin().to_degrees();
    let mut lon = p.x.atan2(-p.z).to_degrees();
    // atan2 returns exactly -180 for signed-zero x; keep longitude in (-180, 180]
    if lon <= -180.0 {
        lon += 360.0;
    }
    GeodeticCoord { lat, lon }
}

/// Convert a geodetic coordinate back to a point on the unit sphere
///
/// Inverse of [`point_to_coordinate`]. Degrees are converted to radians
/// before the trigonometric functions are applied, so round-tripping a
/// non-pole unit vector reproduces it to within 1e-6.
pub fn coordinate_to_point(coord: GeodeticCoord) -> DVec3 {
    let lat = coord.lat.to_radians();
    let lon = coord.lon.to_radians();
    let r = lat.cos();
    DVec3::new(lon.sin() * r, lat.sin(), -lon.cos() * r)
}
