//! The ZIP container behind a package.

use super::error::Result;
use super::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Streams members into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Add one member. Compressed media is stored as is, everything else is
    /// deflated.
    pub fn add(&mut self, uri: &PackURI, data: &[u8], compressed: bool) -> Result<()> {
        let method = if compressed {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        };
        self.archive.start_file(
            uri.membername(),
            SimpleFileOptions::default().compression_method(method),
        )?;
        self.archive.write_all(data)?;
        Ok(())
    }

    /// Close the archive and hand back its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
