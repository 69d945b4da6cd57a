//! Error types for the conversion core.

use std::path::PathBuf;

/// Errors that can occur while obtaining or rendering a source raster.
///
/// Decode failures are caught at the point of decode and displayed as a
/// textual message in the output panel; they never propagate past the
/// presentation shell.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// No source has been selected yet (neither file nor drawing).
    #[error("no image loaded")]
    NoSource,

    /// The source file is missing, corrupt, or in an unsupported format.
    #[error("unable to open image file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: image::ImageError,
    },
}
