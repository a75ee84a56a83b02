//! Vertex-position statistics.

use nalgebra::Vector3;
use stl_types::Mesh;

/// Aggregate statistics over every vertex position in a mesh.
///
/// Positions are visited per face in face order, so shared corners are
/// counted once per face that uses them — the mesh model stores no
/// connectivity to deduplicate against.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshStats {
    /// Number of faces visited.
    pub face_count: usize,
    /// Number of positions visited (three per complete face).
    pub vertex_count: usize,
    /// Component-wise minimum position.
    pub min: Vector3<f32>,
    /// Component-wise maximum position.
    pub max: Vector3<f32>,
    /// Component-wise mean position.
    pub mean: Vector3<f32>,
}

impl Default for MeshStats {
    fn default() -> Self {
        Self {
            face_count: 0,
            vertex_count: 0,
            min: Vector3::zeros(),
            max: Vector3::zeros(),
            mean: Vector3::zeros(),
        }
    }
}

/// Fold a mesh's vertex positions into aggregate statistics.
///
/// Returns the zeroed default for meshes with no positions.
///
/// # Example
///
/// ```
/// use stl_types::{Face, Mesh, Vector3};
/// use stl_measure::mesh_stats;
///
/// let mut face = Face::new();
/// face.add_position(Vector3::new(-2.0, 0.0, 0.0));
/// face.add_position(Vector3::new(2.0, 0.0, 0.0));
/// face.add_position(Vector3::new(0.0, 3.0, 0.0));
/// let mut mesh = Mesh::new();
/// mesh.push_face(face);
///
/// let stats = mesh_stats(&mesh);
/// assert_eq!(stats.min.x, -2.0);
/// assert_eq!(stats.max.y, 3.0);
/// assert_eq!(stats.mean.y, 1.0);
/// ```
#[must_use]
pub fn mesh_stats(mesh: &Mesh) -> MeshStats {
    let seed = (
        0_usize,
        Vector3::repeat(f32::INFINITY),
        Vector3::repeat(f32::NEG_INFINITY),
        Vector3::zeros(),
    );

    let (count, min, max, sum) = mesh
        .faces()
        .flat_map(|face| face.positions().iter().copied())
        .fold(seed, |(count, min, max, sum), p| {
            (
                count + 1,
                Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
                sum + p,
            )
        });

    if count == 0 {
        return MeshStats::default();
    }

    #[allow(clippy::cast_precision_loss)]
    // Vertex counts far exceed f32's exact-integer range only for meshes
    // the codec cannot represent anyway
    let mean = sum / count as f32;

    MeshStats {
        face_count: mesh.face_count(),
        vertex_count: count,
        min,
        max,
        mean,
    }
}
