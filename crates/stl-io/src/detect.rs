//! Binary-vs-ASCII format detection.

use crate::binary::HEADER_SIZE;

/// Prefix that marks an ASCII STL file. The trailing space is part of the
/// token: `solid` followed by anything else is treated as binary.
const ASCII_MAGIC: &[u8] = b"solid ";

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// Fixed-layout binary STL (80-byte header, u32 count, 50-byte records).
    Binary,
    /// Line-oriented ASCII STL (`solid` / `facet` / `vertex` grammar).
    Ascii,
}

impl StlFormat {
    /// Classify a file from its leading bytes.
    ///
    /// Inspects at most the first 80 bytes: files beginning with the
    /// case-sensitive literal `"solid "` are classified as ASCII,
    /// everything else as binary. Callers must not consume the probed
    /// bytes — the binary decoder re-reads the same region as its fixed
    /// header.
    ///
    /// This is a heuristic, not a guarantee: an ASCII file whose header
    /// omits `"solid "`, or a binary file whose 80-byte comment happens to
    /// start with it, is misclassified. That is accepted behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_io::StlFormat;
    ///
    /// assert_eq!(StlFormat::detect(b"solid wrench\n"), StlFormat::Ascii);
    /// assert_eq!(StlFormat::detect(b"solidmodel\n"), StlFormat::Binary);
    /// ```
    #[must_use]
    pub fn detect(header: &[u8]) -> Self {
        let probe = &header[..header.len().min(HEADER_SIZE)];
        if probe.starts_with(ASCII_MAGIC) {
            Self::Ascii
        } else {
            Self::Binary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_with_space_is_ascii() {
        assert_eq!(StlFormat::detect(b"solid test\nfacet..."), StlFormat::Ascii);
    }

    #[test]
    fn solid_without_space_is_binary() {
        assert_eq!(StlFormat::detect(b"solid\n"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b"solidpart"), StlFormat::Binary);
    }

    #[test]
    fn detection_is_case_sensitive() {
        assert_eq!(StlFormat::detect(b"SOLID test"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b"Solid test"), StlFormat::Binary);
    }

    #[test]
    fn binary_comment_header_is_binary() {
        let mut header = [0u8; 84];
        header[..12].copy_from_slice(b"made by CAD\0");
        assert_eq!(StlFormat::detect(&header), StlFormat::Binary);
    }

    #[test]
    fn binary_header_starting_with_solid_is_misclassified() {
        // Known heuristic limitation, accepted behavior.
        let mut header = [0u8; 84];
        header[..6].copy_from_slice(b"solid ");
        assert_eq!(StlFormat::detect(&header), StlFormat::Ascii);
    }

    #[test]
    fn short_input_is_binary() {
        assert_eq!(StlFormat::detect(b"sol"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b""), StlFormat::Binary);
    }
}
