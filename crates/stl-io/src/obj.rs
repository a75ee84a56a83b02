//! OBJ (Wavefront) export.

use stl_types::Mesh;

/// Serialize a mesh as Wavefront OBJ.
///
/// Not implemented in this scope: always returns an empty buffer, which
/// export collaborators treat as "no output".
#[must_use]
pub fn encode_obj(_mesh: &Mesh) -> Vec<u8> {
    Vec::new()
}
