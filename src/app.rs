//!
//! The demo pipeline: allocate, draw, show, print
//!

use std::io::Write;

use log::{info, warn};

use crate::config::DemoConfig;
use crate::display::WindowSurface;
use crate::error::PolyviewError;
use crate::geometry::format_points;
use crate::raster::RasterCanvas;

///
/// Runs the demo once. Draws the configured polyline onto a fresh black canvas, saves a snapshot
/// if one is configured, presents the canvas on `surface` and, once the surface returns, writes the
/// vertex list to `out`.
///
/// # Parameters:
/// - `config`: The demo configuration
/// - `surface`: Where to present the canvas, blocking until the viewer is done
/// - `out`: Where to print the vertex list
///
/// # Returns:
/// - The drawn canvas
/// - A `PolyviewError` from whichever step failed. Nothing is printed if a step fails.
///
pub fn run<S, W>(config: &DemoConfig, surface: &mut S, out: &mut W) -> Result<RasterCanvas, PolyviewError>
where
    S: WindowSurface + ?Sized,
    W: Write,
{
    let mut canvas = RasterCanvas::from_config(config.canvas())?;
    info!("Allocated {}x{} canvas", canvas.width, canvas.height);

    let polyline = config.polyline();
    if polyline.points().len() < 2 {
        warn!("Polyline has {} vertices, nothing will be drawn", polyline.points().len());
    }
    canvas.polyline(&polyline, config.stroke_colour());

    if let Some(path) = config.snapshot() {
        canvas.save(path)?;
        info!("Saved snapshot to {}", path);
    }

    surface.present(config.window_title(), &canvas)?;

    writeln!(out, "{}", format_points(polyline.points()))?;
    Ok(canvas)
}
