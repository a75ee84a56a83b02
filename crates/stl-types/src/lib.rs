//! Core value types for the STL codec.
//!
//! This crate provides the in-memory representation that both STL decoders
//! produce and the binary encoder consumes:
//!
//! - [`Face`] - One triangle: three vertex positions plus optional
//!   per-vertex normals
//! - [`FaceNormals`] - Explicit tag for supplied-vs-absent normals
//! - [`Mesh`] - An ordered sequence of faces in source-file order
//!
//! # Precision
//!
//! All coordinates are `f32`. Binary STL stores single-precision floats on
//! the wire, so storing `f32` keeps a decode → encode → decode round-trip
//! bit-exact after the first pass.
//!
//! # Coordinate System
//!
//! Right-handed, with counter-clockwise winding when viewed from outside.
//! Derived face normals follow the right-hand rule.
//!
//! # Example
//!
//! ```
//! use stl_types::{Face, Mesh, Vector3};
//!
//! let mut face = Face::new();
//! face.add_position(Vector3::new(0.0, 0.0, 0.0));
//! face.add_position(Vector3::new(1.0, 0.0, 0.0));
//! face.add_position(Vector3::new(0.0, 1.0, 0.0));
//! assert!(face.is_complete());
//!
//! let mut mesh = Mesh::new();
//! mesh.push_face(face);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod mesh;

pub use face::{Face, FaceNormals};
pub use mesh::Mesh;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
