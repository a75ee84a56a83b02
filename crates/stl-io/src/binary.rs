//! Binary STL decoding and encoding.
//!
//! Layout (all little-endian):
//!
//! ```text
//! offset 0      80 bytes   header/comment (ignored on read)
//! offset 80     4 bytes    u32 triangle count N
//! offset 84     N x 50 byte records:
//!     +0   12 bytes   facet normal (3 x f32)
//!     +12  36 bytes   vertex positions (3 x 3 x f32)
//!     +48  2  bytes   attribute byte count (ignored)
//! ```

use std::io::Read;

use stl_types::{Face, FaceNormals, Mesh, Vector3};

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
pub(crate) const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub(crate) const TRIANGLE_SIZE: usize = 50;

/// Comment written into the 80-byte header on encode.
const HEADER_COMMENT: &[u8] = b"Binary STL written by stl-io";

/// Decode a binary STL stream positioned at file start.
///
/// The 80-byte header is consumed and ignored. Each record becomes one
/// complete [`Face`] with the record's normal replicated as the supplied
/// per-vertex triple. The declared count is trusted except where the
/// stream runs out: a shortfall fails with [`StlError::TruncatedInput`]
/// rather than producing partial faces.
pub(crate) fn decode<R: Read>(mut reader: R) -> StlResult<Mesh> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let mut count = [0u8; 4];
    reader.read_exact(&mut count)?;
    let expected = u32::from_le_bytes(count);

    let mut mesh = Mesh::with_capacity(expected as usize);
    let mut record = [0u8; TRIANGLE_SIZE];
    for got in 0..expected {
        if let Err(e) = reader.read_exact(&mut record) {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                return Err(StlError::TruncatedInput { expected, got });
            }
            return Err(StlError::Io(e));
        }

        let normal = read_vector(&record[0..12]);
        let positions = [
            read_vector(&record[12..24]),
            read_vector(&record[24..36]),
            read_vector(&record[36..48]),
        ];
        // Trailing 2 attribute bytes are ignored.

        mesh.push_face(Face::from_parts(
            positions,
            FaceNormals::Supplied([normal; 3]),
        ));
    }

    Ok(mesh)
}

/// Read a vector from 12 bytes (3 f32s, little-endian).
fn read_vector(buf: &[u8]) -> Vector3<f32> {
    Vector3::new(
        f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
    )
}

/// Serialize a mesh to the binary STL layout.
///
/// The header carries a fixed identifying comment, null-padded to 80
/// bytes. The declared count covers complete faces only; incomplete faces
/// are skipped with a warning so the record stream always matches the
/// count. Faces whose normal comes out degenerate get a zero normal.
///
/// # Example
///
/// ```
/// use stl_types::{Face, Mesh, Vector3};
/// use stl_io::encode_stl_binary;
///
/// let mut face = Face::new();
/// face.add_position(Vector3::new(0.0, 0.0, 0.0));
/// face.add_position(Vector3::new(1.0, 0.0, 0.0));
/// face.add_position(Vector3::new(0.0, 1.0, 0.0));
/// let mut mesh = Mesh::new();
/// mesh.push_face(face);
///
/// let bytes = encode_stl_binary(&mesh);
/// assert_eq!(bytes.len(), 80 + 4 + 50);
/// ```
#[must_use]
pub fn encode_stl_binary(mesh: &Mesh) -> Vec<u8> {
    let complete = mesh.faces().filter(|f| f.is_complete()).count();
    let mut out = Vec::with_capacity(HEADER_SIZE + 4 + complete * TRIANGLE_SIZE);

    let mut header = [0u8; HEADER_SIZE];
    let comment = &HEADER_COMMENT[..HEADER_COMMENT.len().min(HEADER_SIZE)];
    header[..comment.len()].copy_from_slice(comment);
    out.extend_from_slice(&header);

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: the format itself caps the count at u32
    out.extend_from_slice(&(complete as u32).to_le_bytes());

    for (index, face) in mesh.faces().enumerate() {
        encode_face(&mut out, face, index);
    }

    out
}

/// Append one 50-byte record. No-op for incomplete faces: those are
/// rejected before reaching the encoder, so hitting one here is a
/// decoder-contract violation worth a warning, not a panic.
fn encode_face(out: &mut Vec<u8>, face: &Face, index: usize) {
    if !face.is_complete() {
        tracing::warn!(face = index, "skipping incomplete face in binary encode");
        return;
    }

    let normal = face.single_normal().unwrap_or_else(|| {
        tracing::warn!(face = index, "degenerate face normal, writing zero vector");
        Vector3::zeros()
    });

    write_vector(out, &normal);
    for position in face.positions() {
        write_vector(out, position);
    }
    out.extend_from_slice(&0u16.to_le_bytes());
}

/// Write a vector as 3 f32s in little-endian.
fn write_vector(out: &mut Vec<u8>, v: &Vector3<f32>) {
    out.extend_from_slice(&v.x.to_le_bytes());
    out.extend_from_slice(&v.y.to_le_bytes());
    out.extend_from_slice(&v.z.to_le_bytes());
}
