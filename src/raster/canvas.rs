use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use log::debug;

use crate::config::CanvasConfig;
use crate::geometry::Polyline;
use super::error::RasterError;

/// The largest width or height a canvas may have, in pixels.
pub const MAX_SIDE: u32 = 16384;

///
/// An RGB pixel buffer to stroke polylines on.
///
/// # Fields:
/// - `width`: The width of the buffer, in pixels
/// - `height`: The height of the buffer, in pixels
/// - `buffer`: The pixel data, three 8-bit channels per pixel
///
pub struct RasterCanvas {
    pub width: u32,
    pub height: u32,

    pub buffer: RgbImage,
}

impl RasterCanvas {
    ///
    /// Creates a new canvas with every channel of every pixel set to zero (black).
    ///
    /// # Parameters:
    /// - `width`: The width of the canvas, in pixels
    /// - `height`: The height of the canvas, in pixels
    ///
    /// # Returns:
    /// - A new, black `RasterCanvas` instance
    /// - `RasterError::InvalidDimensions` if either dimension is zero or above `MAX_SIDE`
    ///
    pub fn new(width: u32, height: u32) -> Result<RasterCanvas, RasterError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::InvalidDimensions { width, height })?;

        let buffer = RgbImage::from_raw(width, height, vec![0; len])
            .ok_or(RasterError::InvalidDimensions { width, height })?;

        Ok(RasterCanvas { width, height, buffer })
    }

    pub fn from_config(config: &CanvasConfig) -> Result<RasterCanvas, RasterError> {
        RasterCanvas::new(*config.width(), *config.height())
    }

    ///
    /// Strokes every segment of a polyline with a one pixel wide, 8-connected line. Segments
    /// are clipped to the canvas first, and segments entirely off the canvas are skipped.
    ///
    /// # Parameters:
    /// - `polyline`: The polyline to draw
    /// - `colour`: The stroke colour
    ///
    pub fn polyline(&mut self, polyline: &Polyline, colour: Rgb<u8>) {
        let segments = polyline.segments();
        debug!("Stroking {} segments (closed: {})", segments.len(), polyline.closed());

        let bounds = ((self.width - 1) as f64, (self.height - 1) as f64);
        for (start, end) in segments {
            if let Some((a, b)) = clip_segment(start.as_f64(), end.as_f64(), bounds) {
                draw_line_segment_mut(&mut self.buffer, pixel_centre(a), pixel_centre(b), colour);
            }
        }
    }

    ///
    /// Saves the canvas to a PNG file on the disk.
    ///
    /// # Parameters:
    /// - `path`: The path to save the image file to
    ///
    pub fn save(&self, path: &str) -> Result<(), RasterError> {
        self.buffer
            .save_with_format(path, ImageFormat::Png)
            .map_err(|err| RasterError::SnapshotFailed { path: path.to_owned(), err })
    }

    ///
    /// Packs the canvas into one `0x00RRGGBB` word per pixel, row-major, as framebuffer windows
    /// expect it.
    ///
    pub fn to_argb(&self) -> Vec<u32> {
        self.buffer.pixels()
            .map(|p| u32::from_be_bytes([0, p[0], p[1], p[2]]))
            .collect()
    }
}

///
/// Clips a segment to the rectangle `[0, max_x] x [0, max_y]` (Liang-Barsky).
///
/// # Parameters:
/// - `start`: The first endpoint
/// - `end`: The second endpoint
/// - `(max_x, max_y)`: The inclusive upper bounds of the rectangle
///
/// # Returns:
/// - The clipped endpoints, in the original direction
/// - `None` if no part of the segment lies inside the rectangle
///
fn clip_segment(start: (f64, f64), end: (f64, f64), (max_x, max_y): (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let mut t0: f64 = 0.;
    let mut t1: f64 = 1.;

    // (p, q) per edge: left, right, top, bottom
    let edges = [
        (-dx, start.0),
        (dx, max_x - start.0),
        (-dy, start.1),
        (dy, max_y - start.1),
    ];

    for (p, q) in edges {
        if p == 0. {
            if q < 0. {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0. {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        (start.0 + t0 * dx, start.1 + t0 * dy),
        (start.0 + t1 * dx, start.1 + t1 * dy),
    ))
}

/// Rounds a clipped point to its pixel. The point is on the canvas, so it fits `f32` exactly.
fn pixel_centre((x, y): (f64, f64)) -> (f32, f32) {
    (x.round() as f32, y.round() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{DEMO_POINTS, Polyline};
    use crate::raster::{BLACK, WHITE};

    #[test]
    fn new_canvas_is_black() {
        let canvas = RasterCanvas::new(1024, 768).unwrap();
        assert_eq!(canvas.buffer.dimensions(), (1024, 768));
        assert!(canvas.buffer.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(RasterCanvas::new(0, 768).is_err());
        assert!(RasterCanvas::new(1024, 0).is_err());
    }

    #[test]
    fn demo_vertices_are_stroked() {
        let mut canvas = RasterCanvas::new(1024, 768).unwrap();
        canvas.polyline(&Polyline::demo(), WHITE);

        for [x, y] in DEMO_POINTS {
            assert_eq!(*canvas.buffer.get_pixel(x as u32, y as u32), WHITE);
        }
        assert_eq!(*canvas.buffer.get_pixel(0, 0), BLACK);
        assert_eq!(*canvas.buffer.get_pixel(1023, 767), BLACK);
    }

    #[test]
    fn closing_segment_only_when_closed() {
        // (10, 250) lies only on the closing (10, 485) -> (10, 10) segment
        let points = [(10, 10), (458, 10), (458, 485), (10, 485)];

        let mut open = RasterCanvas::new(500, 500).unwrap();
        open.polyline(&Polyline::new(points, false), WHITE);
        assert_eq!(*open.buffer.get_pixel(10, 250), BLACK);

        let mut closed = RasterCanvas::new(500, 500).unwrap();
        closed.polyline(&Polyline::new(points, true), WHITE);
        assert_eq!(*closed.buffer.get_pixel(10, 250), WHITE);
    }

    #[test]
    fn out_of_bounds_segments_are_clipped() {
        let mut canvas = RasterCanvas::new(100, 100).unwrap();
        canvas.polyline(&Polyline::new([(-50, 50), (150, 50)], false), WHITE);

        assert_eq!(*canvas.buffer.get_pixel(0, 50), WHITE);
        assert_eq!(*canvas.buffer.get_pixel(99, 50), WHITE);
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert!(matches!(
            RasterCanvas::new(u32::MAX, u32::MAX),
            Err(RasterError::InvalidDimensions { .. })
        ));
        assert!(RasterCanvas::new(MAX_SIDE + 1, 1).is_err());
        assert!(RasterCanvas::new(MAX_SIDE, 1).is_ok());
    }

    #[test]
    fn extreme_vertices_are_clipped() {
        let mut canvas = RasterCanvas::new(10, 10).unwrap();
        canvas.polyline(&Polyline::new([(i32::MIN, 0), (i32::MAX, 0)], false), WHITE);

        for x in 0..10 {
            assert_eq!(*canvas.buffer.get_pixel(x, 0), WHITE);
        }
        assert_eq!(*canvas.buffer.get_pixel(0, 1), BLACK);
    }

    #[test]
    fn extreme_diagonal_is_clipped() {
        let mut canvas = RasterCanvas::new(10, 10).unwrap();
        canvas.polyline(&Polyline::new([(i32::MIN, i32::MIN), (i32::MAX, i32::MAX)], true), WHITE);

        assert_eq!(*canvas.buffer.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.buffer.get_pixel(9, 9), WHITE);
        assert_eq!(*canvas.buffer.get_pixel(9, 0), BLACK);
    }

    #[test]
    fn segments_off_the_canvas_are_skipped() {
        let mut canvas = RasterCanvas::new(10, 10).unwrap();
        canvas.polyline(&Polyline::new([(-5, -5), (i32::MIN, 3), (-1, i32::MAX)], true), WHITE);
        assert!(canvas.buffer.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn clip_keeps_inner_segments() {
        assert_eq!(
            clip_segment((1., 2.), (8., 5.), (9., 9.)),
            Some(((1., 2.), (8., 5.)))
        );
        assert_eq!(clip_segment((-10., 5.), (-1., 5.), (9., 9.)), None);

        let ((x0, y0), (x1, y1)) = clip_segment((-10., 5.), (20., 5.), (9., 9.)).unwrap();
        assert!(x0.abs() < 1e-9 && (x1 - 9.).abs() < 1e-9);
        assert_eq!((y0, y1), (5., 5.));
    }

    #[test]
    fn argb_packing() {
        let mut canvas = RasterCanvas::new(2, 1).unwrap();
        canvas.buffer.put_pixel(1, 0, Rgb([0x12, 0x34, 0x56]));
        assert_eq!(canvas.to_argb(), vec![0, 0x0012_3456]);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut canvas = RasterCanvas::new(64, 48).unwrap();
        canvas.polyline(&Polyline::new([(1, 1), (60, 40)], false), WHITE);

        let path = std::env::temp_dir().join("polyview_snapshot_test.png");
        let path = path.to_string_lossy().into_owned();
        canvas.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded, canvas.buffer);
        let _ = std::fs::remove_file(&path);
    }
}
