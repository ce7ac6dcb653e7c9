//! Mesh emission for assembled planets
//!
//! Generates engine-agnostic mesh data from displaced cube faces.

use crate::face::Face;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
///
/// The `heights` array is a per-vertex attribute of the same length as
/// `positions`; renderers displace each vertex outward along its own radial
/// direction by the height and shade by it, normalized against the planet's
/// maximum height.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (normalized direction from sphere center)
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex displacement attribute
    pub heights: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate mesh data for one face with positions on the unit sphere
///
/// Displacement stays in the `heights` attribute for shader-side
/// application; positions are the undisplaced sphere-projected vertices.
pub fn generate_mesh(face: &Face) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.positions.reserve(face.vertex_count());
    mesh.normals.reserve(face.vertex_count());
    mesh.heights.reserve(face.vertex_count());

    for (vertex, &height) in face.vertices.iter().zip(face.heights.iter()) {
        let p = vertex.as_vec3();
        // unit sphere: the radial direction doubles as the normal
        mesh.positions.push(p.to_array());
        mesh.normals.push(p.to_array());
        mesh.heights.push(height as f32);
    }

    mesh.indices = face.indices.clone();
    mesh
}

/// Generate mesh data for one face with displacement baked into positions
///
/// Each vertex is pushed outward along its own radial direction to
/// `position * (1 + height)`, for consumers that want final geometry
/// instead of applying the height attribute in a shader.
pub fn generate_displaced_mesh(face: &Face) -> MeshData {
    let mut mesh = generate_mesh(face);

    for (position, &height) in mesh.positions.iter_mut().zip(face.heights.iter()) {
        let scale = (1.0 + height) as f32;
        position[0] *= scale;
        position[1] *= scale;
        position[2] *= scale;
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn face_with_heights(height: f64) -> Face {
        let mut face = Face::build(Direction::PosY, 4).unwrap();
        for h in face.heights.iter_mut() {
            *h = height;
        }
        face
    }

    #[test]
    fn test_generate_mesh() {
        let face = Face::build(Direction::PosX, 8).unwrap();
        let mesh = generate_mesh(&face);

        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), face.vertex_count());
        assert_eq!(mesh.triangle_count(), face.triangle_count());
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.positions.len(), mesh.heights.len());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_positions_equal_normals_on_unit_sphere() {
        let face = Face::build(Direction::NegZ, 5).unwrap();
        let mesh = generate_mesh(&face);

        for (position, normal) in mesh.positions.iter().zip(mesh.normals.iter()) {
            assert_eq!(position, normal);
            let len = (position[0] * position[0]
                + position[1] * position[1]
                + position[2] * position[2])
                .sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_height_attribute_carried_over() {
        let face = face_with_heights(0.0004);
        let mesh = generate_mesh(&face);

        for &height in &mesh.heights {
            assert!((height - 0.0004).abs() < 1e-9);
        }
    }

    #[test]
    fn test_displaced_positions_scale_by_height() {
        let face = face_with_heights(0.25);
        let mesh = generate_displaced_mesh(&face);

        for position in &mesh.positions {
            let len = (position[0] * position[0]
                + position[1] * position[1]
                + position[2] * position[2])
                .sqrt();
            assert!(
                (len - 1.25).abs() < 1e-5,
                "displaced vertex length {} should be 1 + height",
                len
            );
        }
    }

    #[test]
    fn test_mesh_consistency() {
        let face = Face::build(Direction::NegY, 6).unwrap();

        let mesh1 = generate_mesh(&face);
        let mesh2 = generate_mesh(&face);

        assert_eq!(mesh1.vertex_count(), mesh2.vertex_count());
        assert_eq!(mesh1.triangle_count(), mesh2.triangle_count());
        assert_eq!(mesh1.indices, mesh2.indices);
    }
}
