//!
//! Raster canvas and polyline stroking
//!

pub mod canvas;
pub mod error;

pub use canvas::RasterCanvas;

use image::Rgb;

/// The stroke colour used when none is configured.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// The fill of a freshly allocated canvas.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
