//! Cube face mesh structure and grid construction
//!
//! Builds a uniform N x N grid for one face of the cube, projects every grid
//! point onto the unit sphere, and connects the grid into a triangle mesh.

use glam::DVec3;

use crate::direction::Direction;
use crate::error::{PlanetError, Result};

/// A single face of the cube-sphere with its projected grid mesh
///
/// Built once per planet assembly and handed to the rendering collaborator;
/// not mutated afterwards.
///
/// # Invariants
///
/// - `vertices.len() == resolution²`
/// - `indices.len() == 3 · 2 · (resolution − 1)²`
/// - every index is in range for `vertices`
/// - `heights.len() == vertices.len()`
/// - every vertex has unit length
#[derive(Debug, Clone)]
pub struct Face {
    /// Outward normal identifying this face
    pub direction: Direction,
    /// Grid side length N; the face carries N x N vertices
    pub resolution: u32,
    /// Unit-sphere vertex positions, row-major by grid row (v, then u)
    pub vertices: Vec<DVec3>,
    /// Triangle indices into `vertices`, three per triangle
    pub indices: Vec<u32>,
    /// Per-vertex displacement as a fraction of the sphere radius
    ///
    /// Zero-filled at build time; populated during planet assembly.
    pub heights: Vec<f64>,
}

impl Face {
    /// Build the grid mesh for one face direction
    ///
    /// Each grid position `(i, j)` maps to planar coordinates
    /// `u = 2i/(N−1) − 1`, `v = 2j/(N−1) − 1`, giving the cube-surface point
    /// `normal + u·axis_u + v·axis_v`, which is normalized onto the unit
    /// sphere. Each 2x2 block of grid points becomes two triangles with a
    /// fixed winding so cross-product normals face outward on all six faces.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` if `resolution < 2`.
    pub fn build(direction: Direction, resolution: u32) -> Result<Face> {
        if resolution < 2 {
            return Err(PlanetError::InvalidResolution(resolution));
        }

        let n = resolution as usize;
        let normal = direction.normal();
        let axis_u = direction.axis_u();
        let axis_v = direction.axis_v();
        let step = 2.0 / (resolution - 1) as f64;

        let mut vertices = Vec::with_capacity(n * n);
        for j in 0..n {
            let v = j as f64 * step - 1.0;
            for i in 0..n {
                let u = i as f64 * step - 1.0;
                let cube_point = normal + u * axis_u + v * axis_v;
                vertices.push(cube_point.normalize());
            }
        }

        let mut indices = Vec::with_capacity(6 * (n - 1) * (n - 1));
        for j in 0..n - 1 {
            for i in 0..n - 1 {
                let a = (j * n + i) as u32;
                let b = a + 1;
                let c = a + resolution;
                let d = c + 1;
                // winding: counter-clockwise seen from outside the sphere
                indices.extend_from_slice(&[a, b, d]);
                indices.extend_from_slice(&[a, d, c]);
            }
        }

        Ok(Face {
            direction,
            resolution,
            vertices,
            indices,
            heights: vec![0.0; n * n],
        })
    }

    /// Number of vertices in this face
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in this face
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Maximum displacement value on this face
    pub fn max_height(&self) -> f64 {
        self.heights.iter().cloned().fold(f64::MIN, f64::max)
    }

    /// Minimum displacement value on this face
    pub fn min_height(&self) -> f64 {
        self.heights.iter().cloned().fold(f64::MAX, f64::min)
    }

    /// (min, max) displacement range for this face
    pub fn height_range(&self) -> (f64, f64) {
        (self.min_height(), self.max_height())
    }
}
