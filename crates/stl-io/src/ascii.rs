//! ASCII STL decoding.
//!
//! The grammar is line-oriented:
//!
//! ```text
//! solid name
//!   facet normal nx ny nz
//!     outer loop
//!       vertex x y z     (exactly 3 per facet)
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! The decoder is a small state machine keyed on the first token of each
//! trimmed line. `solid`, `outer loop`, `endloop`, `endsolid`, blank lines
//! and anything unrecognized are ignored; only `facet`, `vertex` and
//! `endfacet` drive the pending face. Keyword matching is case-sensitive
//! prefix matching, mirroring how permissive real-world STL writers are
//! about everything else on the line.

use std::io::BufRead;
use std::path::Path;

use stl_types::{Face, Mesh, Vector3};

use crate::error::{StlError, StlResult};

/// Decode an ASCII STL stream into a mesh.
///
/// `origin` names the byte source for error reporting. Fails with
/// [`StlError::IncompleteFacet`] when an `endfacet` arrives before three
/// vertices have accumulated; that error is fatal for the whole parse.
pub(crate) fn decode<R: BufRead>(reader: R, origin: &Path) -> StlResult<Mesh> {
    let mut mesh = Mesh::new();
    let mut pending: Option<Face> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.starts_with("facet") {
            pending = Some(begin_facet(trimmed, index + 1));
        } else if trimmed.starts_with("vertex") {
            if let Some(face) = pending.as_mut() {
                if let Some(position) = parse_vertex(trimmed) {
                    face.add_position(position);
                }
            }
        } else if trimmed.starts_with("endfacet") {
            match pending.take() {
                Some(face) if face.is_complete() => mesh.push_face(face),
                _ => {
                    return Err(StlError::IncompleteFacet {
                        path: origin.to_path_buf(),
                        line: index + 1,
                    })
                }
            }
        }
        // solid / outer loop / endloop / endsolid / anything else: ignored
    }

    Ok(mesh)
}

/// Start a pending face from a `facet` line.
///
/// A well-formed `facet normal nx ny nz` line with a strictly positive
/// normal magnitude seeds the face with that normal, normalized and
/// replicated per vertex. Anything else (wrong token count, unparseable
/// scalars, zero magnitude) demotes the face to no normals; the geometry
/// supplies one later.
fn begin_facet(line: &str, line_number: usize) -> Face {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() == 5 && tokens[1].eq_ignore_ascii_case("normal") {
        if let Some(normal) = parse_triple(&tokens[2..5]) {
            if let Some(unit) = normal.try_normalize(0.0) {
                return Face::with_normals([unit; 3]);
            }
            tracing::warn!(
                line = line_number,
                "zero-magnitude facet normal, deriving from vertex geometry"
            );
        }
    }
    Face::new()
}

/// Parse a `vertex x y z` line. Malformed lines yield `None` and are
/// skipped by the caller.
fn parse_vertex(line: &str) -> Option<Vector3<f32>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }
    parse_triple(&tokens[1..4])
}

/// Parse three whitespace-split tokens as f32 scalars.
fn parse_triple(tokens: &[&str]) -> Option<Vector3<f32>> {
    let x = tokens[0].parse().ok()?;
    let y = tokens[1].parse().ok()?;
    let z = tokens[2].parse().ok()?;
    Some(Vector3::new(x, y, z))
}

/// Serialize a mesh as ASCII STL.
///
/// Not implemented in this scope: always returns an empty buffer, which
/// export collaborators treat as "no output". Binary is the only encode
/// target; see [`crate::encode_stl_binary`].
// TODO: emit facet/vertex blocks once an exporter needs real ASCII output.
#[must_use]
pub fn encode_stl_ascii(_mesh: &Mesh) -> Vec<u8> {
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode_str(input: &str) -> StlResult<Mesh> {
        decode(Cursor::new(input), Path::new("test.stl"))
    }

    const CANONICAL: &str = "solid test\n\
        facet normal 0 0 1\n\
        outer loop\n\
        vertex 0 0 0\n\
        vertex 1 0 0\n\
        vertex 0 1 0\n\
        endloop\n\
        endfacet\n\
        endsolid test\n";

    #[test]
    fn canonical_sample_decodes_to_one_face() {
        let mesh = decode_str(CANONICAL).unwrap();
        assert_eq!(mesh.face_count(), 1);

        let face = mesh.face(0).unwrap();
        assert!(face.is_complete());
        assert_eq!(
            face.positions(),
            &[
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(
            face.supplied_normals(),
            Some([Vector3::new(0.0, 0.0, 1.0); 3])
        );
    }

    #[test]
    fn supplied_normal_is_normalized() {
        let input = "facet normal 0 0 8\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(
            mesh.face(0).unwrap().supplied_normals(),
            Some([Vector3::new(0.0, 0.0, 1.0); 3])
        );
    }

    #[test]
    fn two_vertex_facet_is_incomplete() {
        let input = "solid test\n\
            facet normal 0 0 1\n\
            outer loop\n\
            vertex 0 0 0\n\
            vertex 1 0 0\n\
            endloop\n\
            endfacet\n\
            endsolid test\n";
        let err = decode_str(input).unwrap_err();

        match err {
            StlError::IncompleteFacet { path, line } => {
                assert_eq!(path, Path::new("test.stl"));
                assert_eq!(line, 7); // the endfacet line
            }
            other => panic!("expected IncompleteFacet, got {other:?}"),
        }
    }

    #[test]
    fn endfacet_without_pending_fails() {
        let err = decode_str("solid test\nendfacet\n").unwrap_err();
        assert!(matches!(err, StlError::IncompleteFacet { line: 2, .. }));
    }

    #[test]
    fn zero_magnitude_normal_is_dropped() {
        let input = "facet normal 0 0 0\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();

        let face = mesh.face(0).unwrap();
        assert_eq!(face.supplied_normals(), None);
        // Derivation path: geometry gives (0, 0, 1).
        assert_eq!(face.derived_normal(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn malformed_facet_line_starts_plain_face() {
        // 4 tokens instead of 5: no normal is taken.
        let input = "facet normal 0 0\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(mesh.face(0).unwrap().supplied_normals(), None);
    }

    #[test]
    fn normal_keyword_is_case_insensitive() {
        let input = "facet NORMAL 0 0 1\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(
            mesh.face(0).unwrap().supplied_normals(),
            Some([Vector3::new(0.0, 0.0, 1.0); 3])
        );
    }

    #[test]
    fn facet_keyword_is_case_sensitive() {
        // "FACET" is not recognized, so no pending face exists and the
        // endfacet fails.
        let input = "FACET normal 0 0 1\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        assert!(matches!(
            decode_str(input),
            Err(StlError::IncompleteFacet { line: 5, .. })
        ));
    }

    #[test]
    fn vertex_before_facet_is_ignored() {
        let input = "solid test\n\
            vertex 9 9 9\n\
            facet normal 0 0 1\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0).unwrap().positions()[0], Vector3::zeros());
    }

    #[test]
    fn extra_vertices_are_capped_at_three() {
        let input = "facet normal 0 0 1\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nvertex 9 9 9\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();

        let face = mesh.face(0).unwrap();
        assert_eq!(face.positions().len(), 3);
        assert_eq!(face.positions()[2], Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn malformed_vertex_line_is_skipped() {
        let input = "facet normal 0 0 1\n\
            vertex bogus 0 0\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(mesh.face(0).unwrap().positions()[0], Vector3::zeros());
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let input = "solid test\n\
            \n\
            some garbage line\n\
            facet normal 0 0 1\n\
            outer loop\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endloop\n\
            endfacet\n\
            endsolid test\n\
            trailing noise\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn multiple_facets_keep_file_order() {
        let input = "solid test\n\
            facet normal 0 0 1\n\
            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n\
            facet normal 0 0 1\n\
            vertex 5 0 0\nvertex 6 0 0\nvertex 5 1 0\n\
            endfacet\n\
            endsolid test\n";
        let mesh = decode_str(input).unwrap();

        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.face(0).unwrap().positions()[0].x, 0.0);
        assert_eq!(mesh.face(1).unwrap().positions()[0].x, 5.0);
    }

    #[test]
    fn scientific_notation_scalars_parse() {
        let input = "facet normal 0.0e0 0.0e0 1.0e0\n\
            vertex 1.5e-1 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
            endfacet\n";
        let mesh = decode_str(input).unwrap();
        assert_eq!(mesh.face(0).unwrap().positions()[0].x, 0.15);
    }

    #[test]
    fn ascii_encode_stub_is_empty() {
        let mesh = decode_str(CANONICAL).unwrap();
        assert!(encode_stl_ascii(&mesh).is_empty());
    }
}
