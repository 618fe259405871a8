//!
//! Presenting a canvas on screen and waiting for the user
//!

pub mod error;

use error::DisplayError;
use log::{debug, info};
use minifb::{KeyRepeat, Window, WindowOptions};

use crate::raster::RasterCanvas;

/// Refresh rate while waiting for a keypress.
const WAIT_FPS: usize = 30;

///
/// A surface which can show a canvas, blocking until the viewer is done with it.
///
pub trait WindowSurface {
    fn present(&mut self, title: &str, canvas: &RasterCanvas) -> Result<(), DisplayError>;
}

///
/// A native window, opened per presentation and closed as soon as a key is pressed.
///
pub struct NativeWindow;

impl WindowSurface for NativeWindow {
    fn present(&mut self, title: &str, canvas: &RasterCanvas) -> Result<(), DisplayError> {
        show_until_keypress(title, canvas)
    }
}

///
/// A surface without a display. Presenting returns immediately.
///
pub struct Headless;

impl WindowSurface for Headless {
    fn present(&mut self, title: &str, _canvas: &RasterCanvas) -> Result<(), DisplayError> {
        debug!("Headless run, not opening window \"{}\"", title);
        Ok(())
    }
}

///
/// Opens a window the size of the canvas, shows the canvas in it, and blocks until any key is
/// pressed or the window is closed. There is no timeout. The window is closed before returning.
///
/// # Parameters:
/// - `title`: The window title
/// - `canvas`: The canvas to show
///
/// # Returns:
/// - `DisplayError` if the window could not be opened or drawn to
///
pub fn show_until_keypress(title: &str, canvas: &RasterCanvas) -> Result<(), DisplayError> {
    let (width, height) = (canvas.width as usize, canvas.height as usize);
    let frame = canvas.to_argb();

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|err| DisplayError::WindowUnavailable { title: title.to_owned(), reason: err.to_string() })?;
    window.set_target_fps(WAIT_FPS);

    info!("Showing \"{}\", press any key to continue", title);
    while window.is_open() {
        window.update_with_buffer(&frame, width, height)
            .map_err(|err| DisplayError::PresentFailed { reason: err.to_string() })?;

        if !window.get_keys_pressed(KeyRepeat::No).is_empty() {
            break;
        }
    }

    // dropping the window closes it
    drop(window);
    debug!("Closed \"{}\"", title);
    Ok(())
}
