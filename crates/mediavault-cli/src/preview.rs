//! Local file preview
//!
//! Before an upload, a selected 3D model can be previewed from a staged
//! local copy. The staged copy is a scoped resource: acquired when the file
//! is selected, removed when the guard drops (replacement or teardown), so
//! no stray copies accumulate.
//!
//! Preview failures are isolated by design. A malformed model produces a
//! [`PreviewError`] that callers render as a fallback message; it must never
//! abort the surrounding operation.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// A local preview/inspection failure. Always recoverable.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is too short to contain a glTF header")]
    TooShort,

    #[error("not a binary glTF file (bad magic bytes)")]
    BadMagic,
}

/// Header summary of a binary glTF (`.glb`) file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbSummary {
    /// Container format version
    pub version: u32,

    /// Total length declared in the header, in bytes
    pub declared_length: u32,
}

/// Read the 12-byte GLB header: magic `glTF`, version, total length.
/// No geometry is parsed; this only checks that the file looks like a
/// renderable model.
pub fn inspect_glb(path: &Path) -> std::result::Result<GlbSummary, PreviewError> {
    let mut header = [0u8; 12];
    let mut file = File::open(path)?;
    file.read_exact(&mut header)
        .map_err(|_| PreviewError::TooShort)?;

    if &header[0..4] != b"glTF" {
        return Err(PreviewError::BadMagic);
    }

    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    let declared_length = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);

    Ok(GlbSummary {
        version,
        declared_length,
    })
}

/// A staged local copy of a file selected for preview.
///
/// The copy lives in a temp location and is deleted when this guard drops.
pub struct StagedPreview {
    file: NamedTempFile,
    size_bytes: u64,
}

impl StagedPreview {
    /// Copy `source` into a scoped temp location
    pub fn stage(source: &Path) -> std::result::Result<Self, PreviewError> {
        let file = NamedTempFile::new()?;
        let size_bytes = std::fs::copy(source, file.path())?;
        Ok(Self { file, size_bytes })
    }

    /// Path of the staged copy
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Size of the staged copy in bytes
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn glb_fixture(version: u32, length: u32) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"glTF").unwrap();
        file.write_all(&version.to_le_bytes()).unwrap();
        file.write_all(&length.to_le_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_inspect_valid_glb_header() {
        let file = glb_fixture(2, 1234);
        let summary = inspect_glb(file.path()).unwrap();
        assert_eq!(summary.version, 2);
        assert_eq!(summary.declared_length, 1234);
    }

    #[test]
    fn test_inspect_rejects_bad_magic() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"JPEGJPEGJPEG").unwrap();
        assert!(matches!(
            inspect_glb(file.path()),
            Err(PreviewError::BadMagic)
        ));
    }

    #[test]
    fn test_inspect_rejects_truncated_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"glT").unwrap();
        assert!(matches!(
            inspect_glb(file.path()),
            Err(PreviewError::TooShort)
        ));
    }

    #[test]
    fn test_inspect_missing_file_is_io_error() {
        assert!(matches!(
            inspect_glb(Path::new("/nonexistent/model.glb")),
            Err(PreviewError::Io(_))
        ));
    }

    #[test]
    fn test_staged_preview_released_on_drop() {
        let source = glb_fixture(2, 12);
        let staged_path;
        {
            let staged = StagedPreview::stage(source.path()).unwrap();
            staged_path = staged.path().to_path_buf();
            assert!(staged_path.exists());
            assert_eq!(staged.size_bytes(), 12);
        }
        assert!(!staged_path.exists());
    }
}
