//!
//! Draws a polyline onto a black RGB raster, shows it in a window until a key is pressed, and
//! prints the polyline's vertices.
//!

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod raster;

pub use app::run;
pub use error::PolyviewError;
