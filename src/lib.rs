//! DEM-displaced cube-sphere planet mesh generation
//!
//! A standalone library for generating terrain-displaced sphere meshes from
//! a six-face cube approximation and a lat/long-indexed elevation raster,
//! suitable for use with any game engine (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use rust_dem_planet::*;
//!
//! // A raster normally comes from an external DEM loader; a constant
//! // raster stands in here.
//! let raster = ElevationRaster::constant(64, 32, 100.0).unwrap();
//! let handle = RasterHandle::ready(raster);
//!
//! // Assemble a planet
//! let config = PlanetConfigBuilder::new()
//!     .resolution(16).unwrap()
//!     .displacement(DisplacementPolicy::Simple { scale: 4.0e-6 })
//!     .build().unwrap();
//!
//! let planet = Planet::assemble(config, &handle).unwrap();
//!
//! // Emit a renderable mesh per face
//! for face in planet.faces() {
//!     let mesh = generate_mesh(face);
//!     println!("{:?}: {} triangles", face.direction, mesh.triangle_count());
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and
//!   coordinate types

// Modules
pub mod error;
pub mod config;
pub mod coord;
pub mod direction;
pub mod face;
pub mod dem;
pub mod displacement;
pub mod planet;
pub mod mesh;

// Re-export core types for convenience
pub use error::{PlanetError, Result};
pub use config::{FaceResolution, PlanetConfig, PlanetConfigBuilder};
pub use coord::{coordinate_to_point, point_to_coordinate, GeodeticCoord};
pub use direction::Direction;
pub use face::Face;
pub use dem::{ElevationRaster, ElevationSource, RasterHandle};
pub use displacement::{DisplacementPolicy, DEFAULT_SIMPLE_SCALE};
pub use planet::Planet;
pub use mesh::{generate_displaced_mesh, generate_mesh, MeshData};

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
