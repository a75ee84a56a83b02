//! Ordered face sequence.

use crate::Face;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh as an ordered sequence of faces.
///
/// Faces keep the order they were encountered in the source file (binary:
/// record order; ASCII: `endfacet` order). There is no deduplication and no
/// connectivity information; the mesh owns its faces exclusively.
///
/// # Example
///
/// ```
/// use stl_types::{Face, Mesh, Vector3};
///
/// let mut face = Face::new();
/// face.add_position(Vector3::new(0.0, 0.0, 0.0));
/// face.add_position(Vector3::new(1.0, 0.0, 0.0));
/// face.add_position(Vector3::new(0.0, 1.0, 0.0));
///
/// let mut mesh = Mesh::new();
/// mesh.push_face(face);
///
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.faces().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Create a mesh with pre-allocated face capacity.
    ///
    /// Decoders that know the face count up front (binary STL declares it)
    /// use this to avoid reallocation.
    #[inline]
    #[must_use]
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Append a face, taking ownership.
    #[inline]
    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Get a face by index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// Iterate over all faces in insertion order.
    ///
    /// The iterator is lazy, finite and restartable; aggregate consumers
    /// (statistics, exporters) fold over it rather than receiving
    /// callbacks.
    #[inline]
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
