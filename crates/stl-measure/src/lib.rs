//! Aggregate measurements over STL meshes.
//!
//! This crate sits outside the codec core: it consumes the read-only face
//! iterator of an [`stl_types::Mesh`] and folds vertex positions into
//! aggregate statistics. It never touches file formats.
//!
//! # Example
//!
//! ```
//! use stl_types::{Face, Mesh, Vector3};
//! use stl_measure::mesh_stats;
//!
//! let mut face = Face::new();
//! face.add_position(Vector3::new(0.0, 0.0, 0.0));
//! face.add_position(Vector3::new(10.0, 0.0, 0.0));
//! face.add_position(Vector3::new(5.0, 6.0, 0.0));
//! let mut mesh = Mesh::new();
//! mesh.push_face(face);
//!
//! let stats = mesh_stats(&mesh);
//! assert_eq!(stats.max.x, 10.0);
//! assert_eq!(stats.mean.x, 5.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod stats;

pub use stats::{mesh_stats, MeshStats};

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
