//! Planet main structure and six-face assembly

use log::debug;
use rayon::prelude::*;

use crate::config::PlanetConfig;
use crate::coord::point_to_coordinate;
use crate::dem::ElevationSource;
use crate::direction::Direction;
use crate::error::Result;
use crate::face::Face;

/// A terrain-displaced cube-sphere planet
///
/// Owns exactly six faces, one per [`Direction`], all sharing the configured
/// grid resolution, plus the global displacement range used by the rendering
/// collaborator for color normalization.
///
/// # Example
///
/// ```
/// use rust_dem_planet::*;
///
/// let raster = ElevationRaster::constant(32, 16, 100.0).unwrap();
/// let config = PlanetConfigBuilder::new().resolution(8).unwrap().build().unwrap();
///
/// let planet = Planet::assemble(config, &raster).unwrap();
/// assert_eq!(planet.faces().len(), 6);
/// println!("max height: {}", planet.max_height());
/// ```
#[derive(Debug, Clone)]
pub struct Planet {
    /// Configuration used to assemble this planet
    config: PlanetConfig,

    /// The six displaced faces, in `Direction::ALL` order
    faces: Vec<Face>,

    /// Minimum displacement across all faces
    min_height: f64,

    /// Maximum displacement across all faces
    max_height: f64,
}

impl Planet {
    /// Assemble a planet from a configuration and an elevation source
    ///
    /// The six faces build as independent parallel tasks: each face builds
    /// its grid mesh, converts every vertex to a geodetic coordinate,
    /// samples the elevation source there, and bakes the converted
    /// displacement into the face's height array. The only synchronization
    /// point is the join once all six faces complete.
    ///
    /// # Errors
    ///
    /// Any sampling error (`NotReady`, `OutOfRange`) or an invalid
    /// resolution aborts the whole assembly; no partial planet is returned.
    pub fn assemble<S>(config: PlanetConfig, source: &S) -> Result<Self>
    where
        S: ElevationSource + Sync,
    {
        let resolution = config.grid_size();

        let faces = Direction::ALL
            .into_par_iter()
            .map(|direction| build_displaced_face(direction, resolution, &config, source))
            .collect::<Result<Vec<Face>>>()?;

        let mut min_height = f64::MAX;
        let mut max_height = f64::MIN;
        for face in &faces {
            min_height = min_height.min(face.min_height());
            max_height = max_height.max(face.max_height());
        }

        debug!(
            "assembled planet: resolution {}, {} vertices, height range [{}, {}]",
            resolution,
            faces.iter().map(Face::vertex_count).sum::<usize>(),
            min_height,
            max_height
        );

        Ok(Self {
            config,
            faces,
            min_height,
            max_height,
        })
    }

    /// Get the configuration used to assemble this planet
    #[inline]
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Get all six faces, in `Direction::ALL` order
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get the face for a specific direction
    #[inline]
    pub fn face(&self, direction: Direction) -> &Face {
        &self.faces[direction.index()]
    }

    /// Grid side length shared by all faces
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.config.grid_size()
    }

    /// Total vertex count across all six faces
    pub fn vertex_count(&self) -> usize {
        self.faces.iter().map(Face::vertex_count).sum()
    }

    /// Maximum displacement observed across all faces
    #[inline]
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Minimum displacement observed across all faces
    #[inline]
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Global (min, max) displacement range across all faces
    #[inline]
    pub fn height_range(&self) -> (f64, f64) {
        (self.min_height, self.max_height)
    }
}

/// Build one face and bake displacement into its height array
fn build_displaced_face<S>(
    direction: Direction,
    resolution: u32,
    config: &PlanetConfig,
    source: &S,
) -> Result<Face>
where
    S: ElevationSource + Sync,
{
    let mut face = Face::build(direction, resolution)?;

    for (vertex, height) in face.vertices.iter().zip(face.heights.iter_mut()) {
        let coord = point_to_coordinate(*vertex);
        let sample = source.sample(coord)?;
        *height = config.displacement.convert(sample);
    }

    debug!(
        "assembled {:?} face: {} vertices, max height {}",
        direction,
        face.vertex_count(),
        face.max_height()
    );

    Ok(face)
}
