//! The six cube face directions and their fixed axis bases

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one of the six cube faces by its outward normal axis
///
/// Each face carries a fixed right-handed basis (`axis_u`, `axis_v`,
/// `normal`). Invariant: `axis_u × axis_v == normal` for every face, which
/// keeps triangle winding consistent so cross-product normals face outward
/// on all six faces.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// +X face
    PosX = 0,
    /// -X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// -Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// -Z face
    NegZ = 5,
}

impl Direction {
    /// All six face directions in canonical order
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Face index (0-5) in canonical order
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face from a canonical index (0-5)
    pub const fn from_index(index: usize) -> Option<Direction> {
        match index {
            0 => Some(Direction::PosX),
            1 => Some(Direction::NegX),
            2 => Some(Direction::PosY),
            3 => Some(Direction::NegY),
            4 => Some(Direction::PosZ),
            5 => Some(Direction::NegZ),
            _ => None,
        }
    }

    /// The opposite face
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }

    /// Outward-pointing unit normal of this face
    pub fn normal(self) -> DVec3 {
        match self {
            Direction::PosX => DVec3::X,
            Direction::NegX => DVec3::NEG_X,
            Direction::PosY => DVec3::Y,
            Direction::NegY => DVec3::NEG_Y,
            Direction::PosZ => DVec3::Z,
            Direction::NegZ => DVec3::NEG_Z,
        }
    }

    /// Direction of increasing `u` across this face
    pub fn axis_u(self) -> DVec3 {
        match self {
            Direction::PosX => DVec3::NEG_Z,
            Direction::NegX => DVec3::Z,
            Direction::PosY => DVec3::X,
            Direction::NegY => DVec3::X,
            Direction::PosZ => DVec3::X,
            Direction::NegZ => DVec3::NEG_X,
        }
    }

    /// Direction of increasing `v` across this face
    pub fn axis_v(self) -> DVec3 {
        match self {
            Direction::PosX => DVec3::Y,
            Direction::NegX => DVec3::Y,
            Direction::PosY => DVec3::NEG_Z,
            Direction::NegY => DVec3::Z,
            Direction::PosZ => DVec3::Y,
            Direction::NegZ => DVec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces_in_index_order() {
        assert_eq!(Direction::ALL.len(), 6);
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_index(i), Some(*direction));
        }
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for direction in Direction::ALL {
            let n = direction.normal();
            let u = direction.axis_u();
            let v = direction.axis_v();

            assert!((n.length() - 1.0).abs() < 1e-12);
            assert!((u.length() - 1.0).abs() < 1e-12);
            assert!((v.length() - 1.0).abs() < 1e-12);

            assert!(u.dot(n).abs() < 1e-12, "axis_u not orthogonal to normal for {:?}", direction);
            assert!(v.dot(n).abs() < 1e-12, "axis_v not orthogonal to normal for {:?}", direction);
            assert!(u.dot(v).abs() < 1e-12, "axis_u not orthogonal to axis_v for {:?}", direction);
        }
    }

    #[test]
    fn test_basis_is_right_handed() {
        // axis_u x axis_v must equal the outward normal; triangle winding
        // across all six faces depends on this
        for direction in Direction::ALL {
            let cross = direction.axis_u().cross(direction.axis_v());
            assert!(
                (cross - direction.normal()).length() < 1e-12,
                "axis_u x axis_v != normal for {:?}",
                direction
            );
        }
    }

    #[test]
    fn test_opposite_faces() {
        for direction in Direction::ALL {
            let opp = direction.opposite();
            assert!((direction.normal() + opp.normal()).length() < 1e-12);
            assert_eq!(opp.opposite(), direction);
        }
    }
}
