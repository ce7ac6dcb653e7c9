//! Planet Configuration and Builder
//!
//! This module provides configuration types for deterministic planet
//! assembly from an elevation raster.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::displacement::DisplacementPolicy;
use crate::error::{PlanetError, Result};

/// Face grid resolution presets
///
/// Each preset maps to a grid side length N; every face carries N x N
/// vertices, so doubling the resolution quadruples the vertex count.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceResolution {
    /// 32 x 32 grid per face, fast enough for interactive preview
    Preview,
    /// 75 x 75 grid per face
    Low,
    /// 150 x 150 grid per face
    Medium,
    /// 300 x 300 grid per face (default)
    High,
    /// Custom grid side length
    Custom {
        /// Grid side length N (must be >= 2)
        resolution: u32,
    },
}

impl FaceResolution {
    /// Grid side length N for this preset
    pub fn grid_size(self) -> u32 {
        match self {
            FaceResolution::Preview => 32,
            FaceResolution::Low => 75,
            FaceResolution::Medium => 150,
            FaceResolution::High => 300,
            FaceResolution::Custom { resolution } => resolution,
        }
    }

    /// Human-readable name for this preset
    pub fn name(self) -> &'static str {
        match self {
            FaceResolution::Preview => "Preview",
            FaceResolution::Low => "Low",
            FaceResolution::Medium => "Medium",
            FaceResolution::High => "High",
            FaceResolution::Custom { .. } => "Custom",
        }
    }
}

impl Default for FaceResolution {
    fn default() -> Self {
        FaceResolution::High
    }
}

/// Configuration for deterministic planet assembly
///
/// The same configuration queried against the same raster always produces
/// the identical planet. Displacement tunables are baked into per-face
/// height arrays during assembly; when a tunable changes (e.g. from a
/// control panel), re-run assembly rather than patching faces.
///
/// # Example
///
/// ```rust
/// use rust_dem_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .face_resolution(FaceResolution::Medium)
///     .unwrap()
///     .displacement(DisplacementPolicy::Simple { scale: 4.0e-6 })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.grid_size(), 150);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Grid resolution applied to all six faces
    pub resolution: FaceResolution,

    /// Policy converting raw elevation samples into displacement values
    pub displacement: DisplacementPolicy,
}

impl PlanetConfig {
    /// Grid side length N for this configuration
    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.resolution.grid_size()
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            resolution: FaceResolution::default(),
            displacement: DisplacementPolicy::default(),
        }
    }
}

/// Builder for creating PlanetConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_dem_planet::*;
///
/// // Use defaults
/// let config = PlanetConfigBuilder::new().build().unwrap();
/// assert_eq!(config.grid_size(), 300);
///
/// // Customize
/// let config = PlanetConfigBuilder::new()
///     .resolution(64)
///     .unwrap()
///     .displacement(DisplacementPolicy::Physical {
///         meters_per_unit: 0.5,
///         body_radius_m: 1_737_400.0,
///     })
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PlanetConfigBuilder {
    resolution: FaceResolution,
    displacement: DisplacementPolicy,
}

impl PlanetConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - resolution: High (300 x 300 per face)
    /// - displacement: Simple with the illustrative default scale
    pub fn new() -> Self {
        Self {
            resolution: FaceResolution::default(),
            displacement: DisplacementPolicy::default(),
        }
    }

    /// Set the face resolution preset
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` if the preset's grid side length is
    /// below 2 (only possible through `Custom`).
    pub fn face_resolution(mut self, resolution: FaceResolution) -> Result<Self> {
        if resolution.grid_size() < 2 {
            return Err(PlanetError::InvalidResolution(resolution.grid_size()));
        }
        self.resolution = resolution;
        Ok(self)
    }

    /// Set a custom grid side length
    ///
    /// Shorthand for `face_resolution(FaceResolution::Custom { .. })`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` if `resolution < 2`.
    pub fn resolution(self, resolution: u32) -> Result<Self> {
        self.face_resolution(FaceResolution::Custom { resolution })
    }

    /// Set the displacement conversion policy
    pub fn displacement(mut self, displacement: DisplacementPolicy) -> Self {
        self.displacement = displacement;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PlanetConfig> {
        Ok(PlanetConfig {
            resolution: self.resolution,
            displacement: self.displacement,
        })
    }
}

impl Default for PlanetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_grid_sizes() {
        assert_eq!(FaceResolution::Preview.grid_size(), 32);
        assert_eq!(FaceResolution::Low.grid_size(), 75);
        assert_eq!(FaceResolution::Medium.grid_size(), 150);
        assert_eq!(FaceResolution::High.grid_size(), 300);
        assert_eq!(FaceResolution::Custom { resolution: 12 }.grid_size(), 12);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(FaceResolution::Preview.name(), "Preview");
        assert_eq!(FaceResolution::Custom { resolution: 9 }.name(), "Custom");
    }

    #[test]
    fn test_builder_defaults() {
        let config = PlanetConfigBuilder::new().build().unwrap();
        assert_eq!(config.resolution, FaceResolution::High);
        assert_eq!(config.displacement, DisplacementPolicy::default());
        assert_eq!(config.grid_size(), 300);
    }

    #[test]
    fn test_builder_custom() {
        let config = PlanetConfigBuilder::new()
            .resolution(16)
            .unwrap()
            .displacement(DisplacementPolicy::Simple { scale: 1.0e-3 })
            .build()
            .unwrap();

        assert_eq!(config.grid_size(), 16);
        assert_eq!(
            config.displacement,
            DisplacementPolicy::Simple { scale: 1.0e-3 }
        );
    }

    #[test]
    fn test_builder_rejects_degenerate_resolution() {
        assert!(PlanetConfigBuilder::new().resolution(0).is_err());
        assert!(PlanetConfigBuilder::new().resolution(1).is_err());
        assert!(PlanetConfigBuilder::new()
            .face_resolution(FaceResolution::Custom { resolution: 1 })
            .is_err());
        assert!(PlanetConfigBuilder::new().resolution(2).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = PlanetConfigBuilder::new()
            .face_resolution(FaceResolution::Medium)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: PlanetConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
