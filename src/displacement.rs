//! Elevation sample to displacement conversion
//!
//! Converts a raw raster sample into a displacement expressed as a fraction
//! of the unit sphere radius. Both policies are pure functions of the sample
//! so they stay trivially testable; tunables arrive through configuration
//! and changing them requires re-assembling the planet, since displacement
//! is baked into per-face height arrays.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default scale factor for the simple policy
pub const DEFAULT_SIMPLE_SCALE: f64 = 4.0e-6;

/// Policy for converting a raw elevation sample into a displacement value
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplacementPolicy {
    /// `displacement = sample * scale` for a fixed small constant
    ///
    /// Illustrative default mode, not physically calibrated.
    Simple {
        /// Scale factor applied to the raw sample
        scale: f64,
    },
    /// `displacement = sample * meters_per_unit / body_radius_m`
    ///
    /// Produces displacements directly comparable to the unit sphere radius
    /// of the modeled body (e.g. a moon).
    Physical {
        /// Meters represented by one raw sample unit
        meters_per_unit: f64,
        /// Radius of the modeled body in meters
        body_radius_m: f64,
    },
}

impl DisplacementPolicy {
    /// Convert a raw elevation sample into a displacement value
    ///
    /// Monotonic in the sample for any fixed policy, and zero for a zero
    /// sample.
    pub fn convert(&self, sample: f64) -> f64 {
        match self {
            DisplacementPolicy::Simple { scale } => sample * scale,
            DisplacementPolicy::Physical {
                meters_per_unit,
                body_radius_m,
            } => sample * meters_per_unit / body_radius_m,
        }
    }
}

impl Default for DisplacementPolicy {
    fn default() -> Self {
        DisplacementPolicy::Simple {
            scale: DEFAULT_SIMPLE_SCALE,
        }
    }
}
