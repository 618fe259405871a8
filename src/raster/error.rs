use thiserror::Error;

///
/// All errors emitted from the raster module.
///
/// - `InvalidDimensions`: When a canvas is requested with a zero width or height, or one larger
///   than `MAX_SIDE`
///     Parameters:
///     - `width`: The requested width, in pixels
///     - `height`: The requested height, in pixels
/// - `SnapshotFailed`: When the canvas could not be written to disk
///     Parameters:
///     - `path`: The path the snapshot was written to
///     - `err`: The underlying image error
///
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Invalid canvas dimensions {}x{}, both must be between 1 and {}.", .width, .height, super::canvas::MAX_SIDE)]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Could not save the canvas snapshot to {}: {}", .path, .err)]
    SnapshotFailed { path: String, err: image::ImageError },
}
