//! Triangular face with optional supplied normals.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-vertex normals for a face.
///
/// STL sources may supply a facet normal or leave it implicit. This tag
/// keeps the two cases explicit instead of overloading an empty array:
/// supplied normals came from the file, absent normals mean the face
/// derives its normal from vertex geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceNormals {
    /// No normals supplied; derive from vertex positions.
    #[default]
    None,
    /// One normal per vertex, as supplied by the source file.
    Supplied([Vector3<f32>; 3]),
}

/// One triangle: up to three vertex positions plus optional normals.
///
/// A face is built incrementally by the ASCII decoder (position appends)
/// or in one shot by the binary decoder. It holds at most three positions;
/// appends beyond the third are silently ignored. A face is *complete*
/// when it holds exactly three positions — only complete faces are
/// encodable.
///
/// Supplied normals are honored only when all three have strictly positive
/// magnitude. A face carrying any zero-magnitude supplied normal behaves
/// exactly as if no normals were supplied.
///
/// # Example
///
/// ```
/// use stl_types::{Face, Vector3};
///
/// let mut face = Face::new();
/// face.add_position(Vector3::new(0.0, 0.0, 0.0));
/// face.add_position(Vector3::new(1.0, 0.0, 0.0));
/// face.add_position(Vector3::new(0.0, 1.0, 0.0));
///
/// // Unnormalized cross product of the two edges
/// let n = face.derived_normal();
/// assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    positions: [Vector3<f32>; 3],
    len: u8,
    normals: FaceNormals,
}

impl Face {
    /// Create an empty face with no positions and no normals.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: [Vector3::zeros(); 3],
            len: 0,
            normals: FaceNormals::None,
        }
    }

    /// Create an empty face pre-seeded with supplied per-vertex normals.
    ///
    /// Used by the ASCII decoder when a `facet normal` line carries a
    /// usable normal: positions are appended afterwards.
    #[inline]
    #[must_use]
    pub fn with_normals(normals: [Vector3<f32>; 3]) -> Self {
        Self {
            positions: [Vector3::zeros(); 3],
            len: 0,
            normals: FaceNormals::Supplied(normals),
        }
    }

    /// Create a complete face from three positions and a normals tag.
    ///
    /// Used by the binary decoder, which reads all of a record at once.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: [Vector3<f32>; 3], normals: FaceNormals) -> Self {
        Self {
            positions,
            len: 3,
            normals,
        }
    }

    /// Append a vertex position.
    ///
    /// A face holds at most three positions; appends beyond the third are
    /// silently ignored rather than treated as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::{Face, Vector3};
    ///
    /// let mut face = Face::new();
    /// face.add_position(Vector3::new(0.0, 0.0, 0.0));
    /// face.add_position(Vector3::new(1.0, 0.0, 0.0));
    /// face.add_position(Vector3::new(0.0, 1.0, 0.0));
    /// face.add_position(Vector3::new(9.0, 9.0, 9.0)); // no-op
    ///
    /// assert!(face.is_complete());
    /// assert_eq!(face.positions().len(), 3);
    /// ```
    #[inline]
    pub fn add_position(&mut self, position: Vector3<f32>) {
        if self.len < 3 {
            self.positions[usize::from(self.len)] = position;
            self.len += 1;
        }
    }

    /// Check whether the face holds exactly three positions.
    ///
    /// Incomplete faces are not encodable.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.len == 3
    }

    /// The positions appended so far, in append order.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vector3<f32>] {
        &self.positions[..usize::from(self.len)]
    }

    /// Supplied normals, if present and usable.
    ///
    /// Returns `None` unless the source supplied a normal triple whose
    /// members all have strictly positive magnitude. A triple with any
    /// zero-magnitude member is treated as absent.
    #[must_use]
    pub fn supplied_normals(&self) -> Option<[Vector3<f32>; 3]> {
        match self.normals {
            FaceNormals::Supplied(normals) if normals.iter().all(|n| n.norm() > 0.0) => {
                Some(normals)
            }
            _ => None,
        }
    }

    /// Compute the unnormalized face normal from vertex geometry.
    ///
    /// With positions `(a, b, c)` this is `(b - a) × (c - a)`. The
    /// magnitude equals twice the triangle's area, so degenerate
    /// (zero-area) faces yield the zero vector, as do incomplete faces.
    #[must_use]
    pub fn derived_normal(&self) -> Vector3<f32> {
        if !self.is_complete() {
            return Vector3::zeros();
        }
        let e1 = self.positions[1] - self.positions[0];
        let e2 = self.positions[2] - self.positions[0];
        e1.cross(&e2)
    }

    /// The per-vertex normal triple to use for output.
    ///
    /// Usable supplied normals are returned unchanged; otherwise the
    /// derived normal is replicated three times, unnormalized.
    #[must_use]
    pub fn effective_normals(&self) -> [Vector3<f32>; 3] {
        if let Some(normals) = self.supplied_normals() {
            return normals;
        }
        let n = self.derived_normal();
        [n, n, n]
    }

    /// The single unit facet normal written to binary output.
    ///
    /// Averages the effective normal triple and normalizes. Returns `None`
    /// when the average has zero magnitude (degenerate face); the binary
    /// encoder falls back to a zero vector in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::{Face, Vector3};
    ///
    /// let mut face = Face::new();
    /// face.add_position(Vector3::new(0.0, 0.0, 0.0));
    /// face.add_position(Vector3::new(2.0, 0.0, 0.0));
    /// face.add_position(Vector3::new(0.0, 2.0, 0.0));
    ///
    /// // Derived normal is (0, 0, 4); single_normal normalizes it.
    /// assert_eq!(face.single_normal(), Some(Vector3::new(0.0, 0.0, 1.0)));
    /// ```
    #[must_use]
    pub fn single_normal(&self) -> Option<Vector3<f32>> {
        let [n0, n1, n2] = self.effective_normals();
        ((n0 + n1 + n2) / 3.0).try_normalize(0.0)
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}
