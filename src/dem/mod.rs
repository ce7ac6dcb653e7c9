//! Elevation sampling for sphere surfaces
//!
//! Provides the query seam between planet assembly and a preloaded elevation
//! raster. The raster itself is loaded and decoded by an external
//! collaborator; this module owns the query and indexing contract.

mod raster;

pub use raster::ElevationRaster;

use glam::DVec3;

use crate::coord::{point_to_coordinate, GeodeticCoord};
use crate::error::{PlanetError, Result};

/// Trait for sampling raw elevation values by geodetic coordinate
///
/// Implementations must be read-only once queryable: planet assembly samples
/// from multiple face-build tasks without synchronization.
pub trait ElevationSource {
    /// Sample the raw elevation value at a geodetic coordinate
    fn sample(&self, coord: GeodeticCoord) -> Result<f64>;

    /// Sample by a point on the unit sphere
    ///
    /// Converts the point to a geodetic coordinate and delegates to
    /// [`sample`](Self::sample).
    fn sample_point(&self, point: DVec3) -> Result<f64> {
        self.sample(point_to_coordinate(point))
    }
}

/// Load-once slot for an externally loaded elevation raster
///
/// The raster loader installs its result here exactly once; the handle is
/// then passed into planet assembly as an explicit owned resource rather
/// than ambient global state, so tests can inject fake rasters. Sampling an
/// empty handle is a programming error and fails with `NotReady`.
///
/// # Example
///
/// ```
/// use rust_dem_planet::*;
///
/// let mut handle = RasterHandle::empty();
/// assert!(handle.sample(GeodeticCoord::new(0.0, 0.0)).is_err());
///
/// handle.install(ElevationRaster::constant(4, 2, 7.0).unwrap());
/// assert_eq!(handle.sample(GeodeticCoord::new(0.0, 0.0)).unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RasterHandle {
    raster: Option<ElevationRaster>,
}

impl RasterHandle {
    /// Create a handle with no raster installed yet
    pub fn empty() -> Self {
        Self { raster: None }
    }

    /// Create a handle that is immediately queryable
    pub fn ready(raster: ElevationRaster) -> Self {
        Self { raster: Some(raster) }
    }

    /// Install the loaded raster, making the handle queryable
    pub fn install(&mut self, raster: ElevationRaster) {
        self.raster = Some(raster);
    }

    /// Whether a raster has been installed
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.raster.is_some()
    }

    /// Borrow the installed raster
    ///
    /// # Errors
    ///
    /// Returns `NotReady` if no raster has been installed.
    pub fn raster(&self) -> Result<&ElevationRaster> {
        self.raster.as_ref().ok_or(PlanetError::NotReady)
    }
}

impl ElevationSource for RasterHandle {
    fn sample(&self, coord: GeodeticCoord) -> Result<f64> {
        self.raster()?.sample(coord)
    }
}

impl ElevationSource for ElevationRaster {
    fn sample(&self, coord: GeodeticCoord) -> Result<f64> {
        ElevationRaster::sample(self, coord)
    }
}
