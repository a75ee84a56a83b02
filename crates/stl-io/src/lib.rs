//! STL file I/O.
//!
//! This crate decodes STL (Stereolithography) files — binary or ASCII,
//! autodetected — into an [`stl_types::Mesh`], and re-serializes meshes to
//! the binary STL layout.
//!
//! # Format Detection
//!
//! Files whose first bytes are the literal `"solid "` are decoded as
//! ASCII; everything else as binary. The probe does not consume input:
//! the binary decoder re-reads the same 80-byte header region.
//!
//! # Example
//!
//! ```no_run
//! use stl_io::{load_stl, save_stl};
//!
//! let mesh = load_stl("model.stl").unwrap();
//! println!("loaded {} faces", mesh.face_count());
//!
//! // Re-encode as binary STL.
//! save_stl(&mesh, "out.stl").unwrap();
//! ```
//!
//! Decoding from bytes already in memory:
//!
//! ```
//! use stl_io::load_stl_bytes;
//!
//! let ascii = b"solid t\n\
//!     facet normal 0 0 1\n\
//!     vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
//!     endfacet\n\
//!     endsolid t\n";
//! let mesh = load_stl_bytes(ascii).unwrap();
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod ascii;
mod binary;
mod detect;
mod error;
mod obj;

pub use ascii::encode_stl_ascii;
pub use binary::encode_stl_binary;
pub use detect::StlFormat;
pub use error::{StlError, StlResult};
pub use obj::encode_obj;

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use stl_types::Mesh;

/// Load a mesh from an STL file, autodetecting binary vs ASCII.
///
/// The file handle is scoped to this call and closed on every exit path,
/// including parse failure.
///
/// # Errors
///
/// Returns [`StlError::FileNotFound`] when the path does not exist,
/// [`StlError::TruncatedInput`] / [`StlError::IncompleteFacet`] on
/// malformed content, and [`StlError::Io`] for other read failures.
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e)
        }
    })?;

    let mut reader = BufReader::new(file);

    // Probe the header region, then restore the stream position so the
    // binary decoder sees the 80-byte header itself.
    let mut probe = [0u8; 80];
    let probed = read_up_to(&mut reader, &mut probe)?;
    reader.rewind()?;

    match StlFormat::detect(&probe[..probed]) {
        StlFormat::Ascii => ascii::decode(reader, path),
        StlFormat::Binary => binary::decode(reader),
    }
}

/// Decode an STL byte buffer, autodetecting binary vs ASCII.
///
/// # Errors
///
/// Same parse errors as [`load_stl`]; errors that would name a path use
/// `<memory>`.
pub fn load_stl_bytes(bytes: &[u8]) -> StlResult<Mesh> {
    match StlFormat::detect(bytes) {
        StlFormat::Ascii => ascii::decode(Cursor::new(bytes), Path::new("<memory>")),
        StlFormat::Binary => binary::decode(Cursor::new(bytes)),
    }
}

/// Save a mesh to a binary STL file.
///
/// # Errors
///
/// Returns [`StlError::Io`] when the file cannot be created or written.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> StlResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode_stl_binary(mesh))?;
    writer.flush()?;
    Ok(())
}

/// Fill as much of `buf` as the reader can supply before EOF.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
